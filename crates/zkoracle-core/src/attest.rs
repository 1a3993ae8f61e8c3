//! Attestation assembly and verification.

use tracing::{debug, info};
use zkoracle_canonical::{sequence_digest, Encoder};
use zkoracle_schemas::{Attestation, RawRecord};

use crate::errors::{AttestError, OracleError, VerifyError};
use crate::keys::PublicKey;
use crate::schnorr::{self, SchnorrSignature};
use crate::signer::AttestationSigner;

/// Encodes `record` as `[id, text]`, signs exactly that sequence and bundles
/// the unmodified record with the signature and public key.
pub fn attest(
    record: &RawRecord,
    encoder: &Encoder,
    signer: &AttestationSigner,
) -> Result<Attestation, AttestError> {
    let sequence = encoder.encode_record(&record.fields())?;
    debug!(
        elements = sequence.len(),
        digest = %sequence_digest(&sequence),
        encoding = %encoder.scheme(),
        "encoded record"
    );

    let signature = signer.sign(&sequence);
    info!(
        insecure_default = signer.is_insecure_default(),
        "attestation produced"
    );

    Ok(Attestation {
        data: record.clone(),
        signature: signature.to_envelope(),
        public_key: signer.public_key_base58().to_string(),
        encoding: encoder.scheme(),
    })
}

/// Re-derives the encoding named in `attestation` and checks its signature.
///
/// Returns `Ok(false)` for a well-formed attestation whose signature does not
/// match.
pub fn verify_attestation(attestation: &Attestation) -> Result<bool, VerifyError> {
    let public = PublicKey::from_base58(&attestation.public_key).map_err(VerifyError::PublicKey)?;
    let signature = SchnorrSignature::from_envelope(&attestation.signature)?;
    let sequence = Encoder::new(attestation.encoding).encode_record(&attestation.data.fields())?;
    Ok(schnorr::verify(&signature, &sequence, &public))
}

/// External data source that resolves a request id into a record.
pub trait RecordSource {
    /// Fetch failure type, propagated unchanged.
    type Error: std::error::Error + 'static;

    /// Fetches the record for `id`.
    fn fetch(&self, id: &str) -> Result<RawRecord, Self::Error>;
}

/// Fetch-then-attest pipeline.
#[derive(Debug)]
pub struct Oracle<'a, S> {
    source: S,
    encoder: Encoder,
    signer: &'a AttestationSigner,
}

impl<'a, S: RecordSource> Oracle<'a, S> {
    /// Creates a pipeline over `source`.
    pub fn new(source: S, encoder: Encoder, signer: &'a AttestationSigner) -> Self {
        Self {
            source,
            encoder,
            signer,
        }
    }

    /// Fetches `id` and attests the result. A fetch failure is returned
    /// as-is and no encoding or signing happens.
    pub fn attest_id(&self, id: &str) -> Result<Attestation, OracleError<S::Error>> {
        let record = self.source.fetch(id).map_err(OracleError::Upstream)?;
        Ok(attest(&record, &self.encoder, self.signer)?)
    }
}
