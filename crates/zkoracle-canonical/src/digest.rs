use std::sync::OnceLock;

use base64::Engine;
use ff::PrimeField;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};

use crate::field::FieldElement;
use crate::validation::ValidationError;

/// Domain separator for sequence digests: `b"zkoracle:sequence:v1\0"`.
const SEQUENCE_DOMAIN_SEPARATOR: &[u8] = b"zkoracle:sequence:v1\0";

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestAlg {
    /// SHA-256.
    #[serde(rename = "sha-256")]
    Sha256,
}

/// Algorithm + bytes digest, encoded as base64url without padding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest {
    /// Digest algorithm (currently always `sha-256`).
    pub alg: DigestAlg,
    /// Base64URL (no padding) digest bytes.
    #[serde(rename = "b64")]
    pub b64: String,
}

fn b64_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]{43,44}$").expect("invalid regex"))
}

impl Digest {
    /// Constructs a validated digest.
    pub fn new(alg: DigestAlg, b64: impl Into<String>) -> Result<Self, ValidationError> {
        let b64 = b64.into();
        if !b64_pattern().is_match(&b64) {
            return Err(ValidationError::PatternMismatch {
                field: "digest",
                value: b64,
            });
        }
        Ok(Digest { alg, b64 })
    }

    /// Hashes `domain || payload` with SHA-256.
    pub fn sha256(domain: &[u8], payload: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        hasher.update(payload);
        Self::from_sha256_bytes(&hasher.finalize())
    }

    fn from_sha256_bytes(bytes: &[u8]) -> Self {
        // 32 bytes always encode to 43 base64url characters.
        Digest {
            alg: DigestAlg::Sha256,
            b64: base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes),
        }
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha-256:{}", self.b64)
    }
}

/// Digest of an encoded sequence.
///
/// Formula: `sha256(domain_separator || repr(f0) || repr(f1) || ...)`, where
/// `repr` is the 32-byte little-endian canonical form of each element.
///
/// Used to refer to an encoding in logs and tooling without echoing the
/// record content.
pub fn sequence_digest(sequence: &[FieldElement]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(SEQUENCE_DOMAIN_SEPARATOR);
    for element in sequence {
        hasher.update(element.to_repr());
    }
    Digest::from_sha256_bytes(&hasher.finalize())
}
