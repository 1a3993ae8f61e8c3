//! Command implementations.

pub mod attest;
pub mod encode;
pub mod keygen;
pub mod pubkey;
pub mod verify;

use zkoracle_canonical::{Encoder, EncodingScheme};
use zkoracle_core::{global, AttestationSigner, KeyConfig};

pub(crate) fn build_encoder(encoding: EncodingScheme, max_chars: Option<usize>) -> Encoder {
    let encoder = Encoder::new(encoding);
    match max_chars {
        Some(max) => encoder.with_max_chars(max),
        None => encoder,
    }
}

/// Loads the process signer from the environment, once.
pub(crate) fn install_signer(
    require_key: bool,
) -> Result<&'static AttestationSigner, Box<dyn std::error::Error>> {
    let config = KeyConfig::from_env().require_key(require_key);
    let signer = global::install(&config)
        .map_err(|e| format!("Failed to load signing key: {}", e))?;
    Ok(signer)
}
