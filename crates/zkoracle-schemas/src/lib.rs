//! Wire types for zkoracle records and attestations.
//!
//! These are the shapes exchanged with callers and verifiers. They carry no
//! cryptography; signing and verification live in `zkoracle-core`.

#![deny(missing_docs)]

pub mod attestation;
pub mod record;
pub mod signature;

pub use attestation::Attestation;
pub use record::RawRecord;
pub use signature::{Signature, SIGNATURE_ALG};
