//! Canonical encoding of external text into Pallas base field elements.
//!
//! Oracles and verifiers both depend on this crate: an attestation is only
//! checkable if the verifier derives the exact same element sequence from the
//! attested strings. Schemes are versioned and documented in [`scheme`].
//!
#![deny(missing_docs)]

/// Digest primitives and sequence fingerprints.
pub mod digest;
/// String-to-field encoder.
pub mod encoder;
/// Field element representation helpers.
pub mod field;
/// Versioned encoding scheme identifiers and constants.
pub mod scheme;
/// Validation helpers used by canonical types.
pub mod validation;

pub use digest::{sequence_digest, Digest, DigestAlg};
pub use encoder::{Encoder, EncodingError};
pub use field::FieldElement;
pub use scheme::EncodingScheme;
pub use validation::ValidationError;
