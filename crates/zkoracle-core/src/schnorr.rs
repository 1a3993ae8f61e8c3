//! Schnorr signatures over Pallas with a Poseidon challenge.
//!
//! Signing, for secret `sk`, public `pk` and message `m` (field elements):
//!
//! 1. `k` is derived deterministically from `sk`, `pk` and `m`.
//! 2. `R = k·G`; if `R.y` is odd, `k` is negated so `R.y` is even.
//! 3. `e = Poseidon(m || pk.x || pk.y || R.x)`, lifted into the scalar field.
//! 4. `s = k + e·sk`. The signature is `(R.x, s)`.
//!
//! Verification recomputes `R = s·G - e·pk` and accepts iff `R` is not the
//! identity, `R.y` is even and `R.x == r`.

use base64::Engine;
use ff::{Field, FromUniformBytes, PrimeField};
use group::Group;
use pasta_curves::pallas;
use sha2::{Digest as Sha2Digest, Sha512};
use zkoracle_canonical::FieldElement;
use zkoracle_schemas::{Signature, SIGNATURE_ALG};

use crate::errors::VerifyError;
use crate::hash::{domain_tag, hash_fields};
use crate::keys::{affine_xy, Keypair, PublicKey};

/// Domain separator for nonce derivation: `b"zkoracle:nonce:v1\0"`.
const NONCE_DOMAIN_SEPARATOR: &[u8] = b"zkoracle:nonce:v1\0";
/// Poseidon domain label for the challenge hash.
const CHALLENGE_LABEL: &[u8] = b"zkoracle:sig:v1";

/// Schnorr signature `(r, s)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchnorrSignature {
    /// x coordinate of the commitment point.
    pub r: FieldElement,
    /// Response scalar.
    pub s: pallas::Scalar,
}

impl SchnorrSignature {
    /// `r_le || s_le`.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.r.to_repr());
        out[32..].copy_from_slice(&self.s.to_repr());
        out
    }

    /// Parses `r_le || s_le`, rejecting non-canonical components.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VerifyError> {
        if bytes.len() != 64 {
            return Err(VerifyError::MalformedSignature(format!(
                "expected 64 bytes, got {}",
                bytes.len()
            )));
        }
        let mut r_repr = [0u8; 32];
        let mut s_repr = [0u8; 32];
        r_repr.copy_from_slice(&bytes[..32]);
        s_repr.copy_from_slice(&bytes[32..]);
        let r = Option::from(FieldElement::from_repr(r_repr))
            .ok_or_else(|| VerifyError::MalformedSignature("r is out of range".into()))?;
        let s = Option::from(pallas::Scalar::from_repr(s_repr))
            .ok_or_else(|| VerifyError::MalformedSignature("s is out of range".into()))?;
        Ok(Self { r, s })
    }

    /// Wire envelope with base64url-no-pad bytes.
    pub fn to_envelope(&self) -> Signature {
        Signature {
            alg: SIGNATURE_ALG.to_string(),
            sig: base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(self.to_bytes()),
        }
    }

    /// Parses a wire envelope.
    pub fn from_envelope(envelope: &Signature) -> Result<Self, VerifyError> {
        if envelope.alg != SIGNATURE_ALG {
            return Err(VerifyError::UnsupportedAlgorithm(envelope.alg.clone()));
        }
        let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(&envelope.sig)
            .map_err(|e| VerifyError::MalformedSignature(e.to_string()))?;
        Self::from_bytes(&bytes)
    }
}

/// Lifts a base field element into the scalar field.
///
/// The Pallas base modulus is below the scalar modulus, so this is the
/// identity on the integer value.
fn to_scalar(element: FieldElement) -> pallas::Scalar {
    let mut wide = [0u8; 64];
    wide[..32].copy_from_slice(&element.to_repr());
    pallas::Scalar::from_uniform_bytes(&wide)
}

fn challenge(message: &[FieldElement], public: &PublicKey, r: FieldElement) -> pallas::Scalar {
    let input = message
        .iter()
        .copied()
        .chain([public.x(), public.y(), r]);
    to_scalar(hash_fields(domain_tag(CHALLENGE_LABEL), input))
}

fn derive_nonce(keypair: &Keypair, message: &[FieldElement], counter: u32) -> pallas::Scalar {
    let mut hasher = Sha512::new();
    hasher.update(NONCE_DOMAIN_SEPARATOR);
    hasher.update(keypair.secret().to_repr());
    hasher.update(keypair.public_key().x().to_repr());
    hasher.update(keypair.public_key().y().to_repr());
    for element in message {
        hasher.update(element.to_repr());
    }
    hasher.update(counter.to_le_bytes());
    let mut wide = [0u8; 64];
    wide.copy_from_slice(&hasher.finalize());
    pallas::Scalar::from_uniform_bytes(&wide)
}

/// Signs an encoded sequence. Deterministic for a given key and message.
pub fn sign(keypair: &Keypair, message: &[FieldElement]) -> SchnorrSignature {
    let mut counter = 0u32;
    loop {
        let k = derive_nonce(keypair, message, counter);
        counter = counter.wrapping_add(1);
        if bool::from(k.is_zero()) {
            continue;
        }
        let Some((rx, ry)) = affine_xy(&(pallas::Point::generator() * k)) else {
            continue;
        };
        let k = if bool::from(ry.is_odd()) { -k } else { k };
        let e = challenge(message, keypair.public_key(), rx);
        return SchnorrSignature {
            r: rx,
            s: k + e * keypair.secret(),
        };
    }
}

/// Checks `signature` over `message` against `public`.
pub fn verify(signature: &SchnorrSignature, message: &[FieldElement], public: &PublicKey) -> bool {
    let e = challenge(message, public, signature.r);
    let commitment = pallas::Point::generator() * signature.s - *public.point() * e;
    match affine_xy(&commitment) {
        Some((x, y)) => x == signature.r && !bool::from(y.is_odd()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::INSECURE_DEFAULT_SECRET_KEY;

    fn keypair() -> Keypair {
        Keypair::from_base58(INSECURE_DEFAULT_SECRET_KEY).unwrap()
    }

    fn message() -> Vec<FieldElement> {
        (1u64..=4).map(FieldElement::from).collect()
    }

    #[test]
    fn sign_then_verify() {
        let keypair = keypair();
        let signature = sign(&keypair, &message());
        assert!(verify(&signature, &message(), keypair.public_key()));
    }

    #[test]
    fn signing_is_deterministic() {
        let keypair = keypair();
        assert_eq!(sign(&keypair, &message()), sign(&keypair, &message()));
    }

    #[test]
    fn tampered_components_fail() {
        let keypair = keypair();
        let signature = sign(&keypair, &message());

        let mut bad_r = signature;
        bad_r.r += FieldElement::ONE;
        assert!(!verify(&bad_r, &message(), keypair.public_key()));

        let mut bad_s = signature;
        bad_s.s += pallas::Scalar::ONE;
        assert!(!verify(&bad_s, &message(), keypair.public_key()));
    }

    #[test]
    fn other_key_fails() {
        let signature = sign(&keypair(), &message());
        let other = Keypair::generate(rand::rngs::OsRng);
        assert!(!verify(&signature, &message(), other.public_key()));
    }

    #[test]
    fn envelope_rejects_wrong_alg_and_length() {
        let signature = sign(&keypair(), &message());
        let mut envelope = signature.to_envelope();
        assert_eq!(SchnorrSignature::from_envelope(&envelope).unwrap(), signature);

        envelope.alg = "ed25519".into();
        assert!(matches!(
            SchnorrSignature::from_envelope(&envelope),
            Err(VerifyError::UnsupportedAlgorithm(_))
        ));

        assert!(SchnorrSignature::from_bytes(&[0u8; 63]).is_err());
        assert!(SchnorrSignature::from_bytes(&[0xffu8; 64]).is_err());
    }
}
