//! Attest command implementation.

use std::path::Path;

use zkoracle_canonical::EncodingScheme;
use zkoracle_core::{attest, Oracle};

use super::{build_encoder, install_signer};
use crate::input::resolve_record;
use crate::output::format_json;
use crate::source::FileSource;

/// Where the record to attest comes from.
pub struct RecordInput {
    pub input: Option<String>,
    pub id: Option<String>,
    pub text: Option<String>,
    pub source: Option<String>,
}

pub fn run(
    record_input: RecordInput,
    encoding: EncodingScheme,
    max_chars: Option<usize>,
    require_key: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let signer = install_signer(require_key)?;
    let encoder = build_encoder(encoding, max_chars);

    let attestation = match (record_input.source, record_input.id) {
        (Some(path), Some(id)) => {
            let source = FileSource::open(Path::new(&path))?;
            Oracle::new(source, encoder, signer).attest_id(&id)?
        }
        (Some(_), None) => return Err("--source requires --id".into()),
        (None, id) => {
            let record = resolve_record(record_input.input, id, record_input.text)?;
            attest(&record, &encoder, signer)?
        }
    };

    println!("{}", format_json(&attestation)?);
    Ok(())
}
