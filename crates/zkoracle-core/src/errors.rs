use thiserror::Error;
use zkoracle_canonical::EncodingError;

/// Key initialization or parsing failed.
///
/// For the process signing key this is fatal: no attestation is served
/// without a valid key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// No key was configured and the insecure default was not allowed.
    #[error("private key is not configured")]
    Missing,
    /// Text is not valid base58check.
    #[error("key is not valid base58check: {0}")]
    Encoding(String),
    /// Decoded payload has the wrong size.
    #[error("key payload is {actual} bytes, expected {expected}")]
    InvalidLength {
        /// Decoded length.
        actual: usize,
        /// Required length.
        expected: usize,
    },
    /// Version prefix does not match the key kind.
    #[error("key has unexpected version prefix {0}")]
    InvalidVersion(String),
    /// Encoded value is not a canonical field element.
    #[error("key value is out of range")]
    OutOfRange,
    /// Secret scalar is zero.
    #[error("secret key scalar is zero")]
    Zero,
    /// Public key does not describe a point on the curve.
    #[error("public key is not a valid curve point")]
    InvalidPoint,
}

/// Producing an attestation failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttestError {
    /// Record cannot be encoded; the record is rejected.
    #[error("encoding failed: {0}")]
    Encoding(#[from] EncodingError),
    /// The process-wide signer was read before it was installed.
    #[error("attestation signer is not initialized")]
    KeyUninitialized,
}

/// Fetch-then-attest failed.
#[derive(Error, Debug)]
pub enum OracleError<E: std::error::Error + 'static> {
    /// Data source failure, passed through unchanged.
    #[error(transparent)]
    Upstream(E),
    /// Attestation failure for a fetched record.
    #[error(transparent)]
    Attest(#[from] AttestError),
}

/// An attestation could not be checked.
///
/// A well-formed attestation with a wrong signature is not an error; it
/// verifies as `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// Public key text is malformed.
    #[error("invalid public key: {0}")]
    PublicKey(#[source] KeyError),
    /// Signature text is malformed.
    #[error("invalid signature: {0}")]
    MalformedSignature(String),
    /// Signature algorithm is not supported.
    #[error("unsupported signature algorithm: {0}")]
    UnsupportedAlgorithm(String),
    /// Record cannot be re-encoded.
    #[error("encoding failed: {0}")]
    Encoding(#[from] EncodingError),
}

/// Error during attestation id computation.
#[derive(Error, Debug)]
pub enum AttestationIdError {
    /// Serialization failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Canonicalization failed.
    #[error("canonicalization failed: {0}")]
    Canonicalization(String),
}
