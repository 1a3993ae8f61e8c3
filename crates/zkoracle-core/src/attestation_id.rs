use zkoracle_canonical::Digest;
use zkoracle_schemas::Attestation;

use crate::errors::AttestationIdError;

/// Domain separator for attestation ids: `b"zkoracle:attestation:v1\0"`.
const ATTESTATION_DOMAIN_SEPARATOR: &[u8] = b"zkoracle:attestation:v1\0";

/// Computes a content identifier for an attestation.
///
/// Formula: `sha256(domain_separator || canonical_json(attestation))`, with
/// RFC 8785 canonical JSON so the id does not depend on key order or
/// whitespace of a particular serialization.
pub fn compute_attestation_id(attestation: &Attestation) -> Result<Digest, AttestationIdError> {
    let value = serde_json::to_value(attestation)?;
    let canonical = canonical_json::to_string(&value)
        .map_err(|err| AttestationIdError::Canonicalization(err.to_string()))?;
    Ok(Digest::sha256(
        ATTESTATION_DOMAIN_SEPARATOR,
        canonical.as_bytes(),
    ))
}
