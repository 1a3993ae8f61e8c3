//! Attestation core for zkoracle.
//!
//! This crate provides:
//! - Pallas keypairs with base58check text forms
//! - Schnorr signatures with a Poseidon challenge over encoded sequences
//! - The process-wide signer and its key configuration
//! - Attestation assembly, verification and content ids
//!
//! Core invariants:
//! - The signed sequence is exactly `encode([id, text])` of the returned record
//! - Records that cannot be encoded are rejected, never partially signed
//! - The signing key is loaded once and never mutated or logged
//!
#![deny(missing_docs)]

/// Attestation assembly, verification and the fetch seam.
pub mod attest;
/// Attestation content ids.
pub mod attestation_id;
/// Signing key configuration.
pub mod config;
/// Error types for core operations.
pub mod errors;
/// Process-wide signer.
pub mod global;
/// Poseidon hashing helpers.
pub mod hash;
/// Keypairs and key text forms.
pub mod keys;
/// Schnorr signature scheme.
pub mod schnorr;
/// Attestation signer.
pub mod signer;

pub use attest::{attest, verify_attestation, Oracle, RecordSource};
pub use attestation_id::compute_attestation_id;
pub use config::{KeyConfig, KeySource};
pub use errors::{AttestError, AttestationIdError, KeyError, OracleError, VerifyError};
pub use keys::{Keypair, PublicKey, INSECURE_DEFAULT_SECRET_KEY};
pub use schnorr::SchnorrSignature;
pub use signer::AttestationSigner;
