//! Field element representation helpers.

use ff::PrimeField;
use pasta_curves::pallas;

use crate::validation::ValidationError;

/// Element of the Pallas base field, the unit every encoding produces.
pub type FieldElement = pallas::Base;

/// Formats an element as `0x`-prefixed, zero-padded big-endian hex.
pub fn to_hex(element: &FieldElement) -> String {
    let mut bytes = element.to_repr();
    bytes.reverse();
    format!("0x{}", hex::encode(bytes))
}

/// Parses the output of [`to_hex`] back into an element.
///
/// Rejects non-canonical values (at or above the field modulus).
pub fn from_hex(value: &str) -> Result<FieldElement, ValidationError> {
    let mismatch = || ValidationError::PatternMismatch {
        field: "field_element",
        value: value.to_string(),
    };
    let digits = value.strip_prefix("0x").ok_or_else(mismatch)?;
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(digits, &mut bytes).map_err(|_| mismatch())?;
    bytes.reverse();
    Option::from(FieldElement::from_repr(bytes)).ok_or_else(mismatch)
}
