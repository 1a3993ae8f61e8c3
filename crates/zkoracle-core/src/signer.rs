//! Attestation signer holding the process keypair.

use tracing::info;
use zkoracle_canonical::FieldElement;

use crate::config::{KeyConfig, KeySource};
use crate::errors::KeyError;
use crate::keys::{Keypair, PublicKey};
use crate::schnorr::{self, SchnorrSignature};

/// Signs encoded sequences with a fixed keypair.
///
/// Immutable after construction, so a single instance can be shared across
/// threads without locking.
#[derive(Debug)]
pub struct AttestationSigner {
    keypair: Keypair,
    public_key_b58: String,
    source: KeySource,
}

impl AttestationSigner {
    /// Wraps an explicitly provided keypair.
    pub fn new(keypair: Keypair) -> Self {
        Self::with_source(keypair, KeySource::Configured)
    }

    /// Loads the keypair described by `config`.
    pub fn from_config(config: &KeyConfig) -> Result<Self, KeyError> {
        let (keypair, source) = config.load()?;
        Ok(Self::with_source(keypair, source))
    }

    fn with_source(keypair: Keypair, source: KeySource) -> Self {
        let public_key_b58 = keypair.public_key().to_base58();
        info!(
            public_key = %public_key_b58,
            insecure_default = source == KeySource::InsecureDefault,
            "attestation signer initialized"
        );
        Self {
            keypair,
            public_key_b58,
            source,
        }
    }

    /// Public key derived from the held secret.
    pub fn public_key(&self) -> &PublicKey {
        self.keypair.public_key()
    }

    /// Cached base58check form of [`Self::public_key`].
    pub fn public_key_base58(&self) -> &str {
        &self.public_key_b58
    }

    /// True when signing with the public fallback key.
    pub fn is_insecure_default(&self) -> bool {
        self.source == KeySource::InsecureDefault
    }

    /// Signs the full ordered sequence.
    pub fn sign(&self, sequence: &[FieldElement]) -> SchnorrSignature {
        schnorr::sign(&self.keypair, sequence)
    }
}
