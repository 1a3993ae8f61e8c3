//! Encode command implementation.

use serde_json::json;
use zkoracle_canonical::{field, sequence_digest, EncodingScheme};

use super::build_encoder;
use crate::input::resolve_record;
use crate::output::{format_element_row, print_table_header};

pub fn run(
    input: Option<String>,
    id: Option<String>,
    text: Option<String>,
    encoding: EncodingScheme,
    max_chars: Option<usize>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = resolve_record(input, id, text)?;
    let encoder = build_encoder(encoding, max_chars);
    let sequence = encoder
        .encode_record(&record.fields())
        .map_err(|e| format!("Encoding failed: {}", e))?;
    let digest = sequence_digest(&sequence);

    if json_output {
        let elements: Vec<String> = sequence.iter().map(field::to_hex).collect();
        let value = json!({
            "encoding": encoding,
            "elements": elements,
            "digest": digest,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print_table_header();
        for (index, element) in sequence.iter().enumerate() {
            println!("{}", format_element_row(index, element));
        }
        println!();
        println!("encoding: {}", encoding);
        println!("digest:   {}", digest);
    }
    Ok(())
}
