//! Signature envelope for attestations.

use serde::{Deserialize, Serialize};

/// Algorithm identifier for Schnorr signatures over Pallas with a Poseidon challenge.
pub const SIGNATURE_ALG: &str = "schnorr-pallas-poseidon-v1";

/// Signature in an attestation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Signature algorithm (currently always [`SIGNATURE_ALG`]).
    pub alg: String,
    /// Signature bytes `r || s`, 32 bytes little-endian each (base64url-no-pad).
    pub sig: String,
}
