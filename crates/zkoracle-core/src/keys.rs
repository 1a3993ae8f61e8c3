//! Pallas keypairs and their base58check text forms.
//!
//! Secret keys are `[0x5a, 0x01] || scalar_le(32)`; public keys are
//! `[0xcb, 0x01, 0x01] || x_le(32) || is_odd(y)`. Both carry a
//! double-SHA-256 checksum.

use std::fmt;

use ff::{Field, PrimeField};
use group::{Curve, Group};
use pasta_curves::arithmetic::{Coordinates, CurveAffine};
use pasta_curves::pallas;
use rand::RngCore;
use zeroize::Zeroizing;
use zkoracle_canonical::FieldElement;

use crate::errors::KeyError;

/// Version prefix of secret key payloads.
pub const SECRET_KEY_VERSION: [u8; 2] = [0x5a, 0x01];
/// Version prefix of public key payloads.
pub const PUBLIC_KEY_VERSION: [u8; 3] = [0xcb, 0x01, 0x01];

/// Hardcoded fallback key for local runs.
///
/// This value is public. Anything signed with it can be forged by anyone, so
/// attestations made with it must never be trusted.
pub const INSECURE_DEFAULT_SECRET_KEY: &str =
    "EKF65JKw9Q1XWLDZyZNGysBbYG21QbJf3a4xnEoZPZ28LKYGMw53";

const SECRET_KEY_LEN: usize = SECRET_KEY_VERSION.len() + 32;
const PUBLIC_KEY_LEN: usize = PUBLIC_KEY_VERSION.len() + 32 + 1;

/// Returns the affine coordinates of `point`, or `None` for the identity.
pub(crate) fn affine_xy(point: &pallas::Point) -> Option<(FieldElement, FieldElement)> {
    let coords: Option<Coordinates<pallas::Affine>> = point.to_affine().coordinates().into();
    coords.map(|c| (*c.x(), *c.y()))
}

fn decode_check(text: &str) -> Result<Zeroizing<Vec<u8>>, KeyError> {
    bs58::decode(text)
        .with_check(None)
        .into_vec()
        .map(Zeroizing::new)
        .map_err(|e| KeyError::Encoding(e.to_string()))
}

fn check_version(payload: &[u8], version: &[u8], expected_len: usize) -> Result<(), KeyError> {
    if payload.len() != expected_len {
        return Err(KeyError::InvalidLength {
            actual: payload.len(),
            expected: expected_len,
        });
    }
    if &payload[..version.len()] != version {
        return Err(KeyError::InvalidVersion(format!(
            "{:02x?}",
            &payload[..version.len()]
        )));
    }
    Ok(())
}

/// Public key: a non-identity Pallas point.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey {
    point: pallas::Point,
    x: FieldElement,
    y: FieldElement,
}

impl PublicKey {
    fn from_point(point: pallas::Point) -> Option<Self> {
        affine_xy(&point).map(|(x, y)| Self { point, x, y })
    }

    /// Affine x coordinate.
    pub fn x(&self) -> FieldElement {
        self.x
    }

    /// Affine y coordinate.
    pub fn y(&self) -> FieldElement {
        self.y
    }

    pub(crate) fn point(&self) -> &pallas::Point {
        &self.point
    }

    /// Encodes the compressed point as base58check.
    pub fn to_base58(&self) -> String {
        let mut payload = Vec::with_capacity(PUBLIC_KEY_LEN);
        payload.extend_from_slice(&PUBLIC_KEY_VERSION);
        payload.extend_from_slice(&self.x.to_repr());
        payload.push(u8::from(bool::from(self.y.is_odd())));
        bs58::encode(payload).with_check().into_string()
    }

    /// Parses and decompresses a base58check public key.
    pub fn from_base58(text: &str) -> Result<Self, KeyError> {
        let payload = decode_check(text)?;
        check_version(&payload, &PUBLIC_KEY_VERSION, PUBLIC_KEY_LEN)?;

        let mut repr = [0u8; 32];
        repr.copy_from_slice(&payload[PUBLIC_KEY_VERSION.len()..PUBLIC_KEY_LEN - 1]);
        let x: FieldElement = Option::from(FieldElement::from_repr(repr)).ok_or(KeyError::OutOfRange)?;
        let is_odd = match payload[PUBLIC_KEY_LEN - 1] {
            0 => false,
            1 => true,
            _ => return Err(KeyError::InvalidPoint),
        };

        // Pallas: y^2 = x^3 + 5
        let rhs = x.square() * x + FieldElement::from(5u64);
        let mut y: FieldElement = Option::from(rhs.sqrt()).ok_or(KeyError::InvalidPoint)?;
        if bool::from(y.is_odd()) != is_odd {
            y = -y;
        }
        let affine: pallas::Affine =
            Option::from(pallas::Affine::from_xy(x, y)).ok_or(KeyError::InvalidPoint)?;
        Self::from_point(pallas::Point::from(affine)).ok_or(KeyError::InvalidPoint)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey").field(&self.to_base58()).finish()
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

/// Secret scalar with its derived public key.
///
/// The public key is derived once, on construction.
#[derive(Clone)]
pub struct Keypair {
    secret: pallas::Scalar,
    public: PublicKey,
}

impl Keypair {
    fn from_scalar(secret: pallas::Scalar) -> Result<Self, KeyError> {
        if bool::from(secret.is_zero()) {
            return Err(KeyError::Zero);
        }
        let public =
            PublicKey::from_point(pallas::Point::generator() * secret).ok_or(KeyError::Zero)?;
        Ok(Self { secret, public })
    }

    /// Parses a base58check secret key.
    pub fn from_base58(text: &str) -> Result<Self, KeyError> {
        let payload = decode_check(text)?;
        check_version(&payload, &SECRET_KEY_VERSION, SECRET_KEY_LEN)?;

        let mut repr = Zeroizing::new([0u8; 32]);
        repr.copy_from_slice(&payload[SECRET_KEY_VERSION.len()..]);
        let secret: pallas::Scalar =
            Option::from(pallas::Scalar::from_repr(*repr)).ok_or(KeyError::OutOfRange)?;
        Self::from_scalar(secret)
    }

    /// Draws a fresh random keypair.
    pub fn generate<R: RngCore>(mut rng: R) -> Self {
        loop {
            if let Ok(keypair) = Self::from_scalar(pallas::Scalar::random(&mut rng)) {
                return keypair;
            }
        }
    }

    /// Encodes the secret scalar as base58check.
    pub fn secret_to_base58(&self) -> Zeroizing<String> {
        let mut payload = Zeroizing::new(Vec::with_capacity(SECRET_KEY_LEN));
        payload.extend_from_slice(&SECRET_KEY_VERSION);
        payload.extend_from_slice(&self.secret.to_repr());
        Zeroizing::new(bs58::encode(payload.as_slice()).with_check().into_string())
    }

    /// Public half of the keypair.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub(crate) fn secret(&self) -> &pallas::Scalar {
        &self.secret
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("secret", &"<redacted>")
            .field("public", &self.public)
            .finish()
    }
}
