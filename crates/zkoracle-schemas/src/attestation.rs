//! Attestation bundle type.

use serde::{Deserialize, Serialize};
use zkoracle_canonical::EncodingScheme;

use crate::record::RawRecord;
use crate::signature::Signature;

/// Attestation: the unmodified record, a signature over its encoding, and the
/// key to check it against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attestation {
    /// Record exactly as it was encoded.
    pub data: RawRecord,
    /// Signature over `encode([data.id, data.text])`.
    pub signature: Signature,
    /// Signer public key (base58check).
    pub public_key: String,
    /// Scheme the verifier must use to re-derive the signed sequence.
    #[serde(default)]
    pub encoding: EncodingScheme,
}
