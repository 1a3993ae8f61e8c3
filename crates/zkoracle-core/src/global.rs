//! Process-wide signer, initialized once at startup.

use std::sync::OnceLock;

use tracing::debug;

use crate::config::KeyConfig;
use crate::errors::{AttestError, KeyError};
use crate::signer::AttestationSigner;

static SIGNER: OnceLock<AttestationSigner> = OnceLock::new();

/// Installs the process signer from `config`.
///
/// Fails if the key cannot be loaded. Once a signer is installed it is never
/// replaced; later calls return the installed signer and ignore `config`.
pub fn install(config: &KeyConfig) -> Result<&'static AttestationSigner, KeyError> {
    if let Some(signer) = SIGNER.get() {
        debug!("attestation signer already installed");
        return Ok(signer);
    }
    let signer = AttestationSigner::from_config(config)?;
    Ok(SIGNER.get_or_init(|| signer))
}

/// Returns the installed signer.
pub fn installed() -> Result<&'static AttestationSigner, AttestError> {
    SIGNER.get().ok_or(AttestError::KeyUninitialized)
}
