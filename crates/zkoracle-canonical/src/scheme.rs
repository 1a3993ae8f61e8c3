//! Versioned, public string-to-field encoding schemes.
//!
//! A verifier must reproduce the encoding byte-for-byte, so each scheme is a
//! fixed protocol. Any change to chunk size, padding or ordering needs a new
//! identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Characters packed into one element by `packed-v1`.
pub const PACKED_CHARS_PER_ELEMENT: usize = 10;
/// Width of one character code unit in `packed-v1`.
pub const PACKED_BITS_PER_CHAR: u32 = 24;
/// Elements emitted per string by `fixed128-v1`.
pub const FIXED_ELEMENTS_PER_STRING: usize = 128;

/// Encoding scheme identifier carried alongside every attestation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncodingScheme {
    /// Length element followed by 10 characters (24 bits each) per element.
    #[default]
    #[serde(rename = "packed-v1")]
    PackedV1,
    /// One UTF-16 code unit per element, zero-padded to 128 elements.
    #[serde(rename = "fixed128-v1")]
    Fixed128V1,
}

impl EncodingScheme {
    /// Stable wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingScheme::PackedV1 => "packed-v1",
            EncodingScheme::Fixed128V1 => "fixed128-v1",
        }
    }

    /// Parses a wire identifier.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "packed-v1" => Ok(EncodingScheme::PackedV1),
            "fixed128-v1" => Ok(EncodingScheme::Fixed128V1),
            other => Err(ValidationError::PatternMismatch {
                field: "encoding",
                value: other.to_string(),
            }),
        }
    }

    /// Number of elements an accepted string of `chars` characters occupies.
    pub fn encoded_len(&self, chars: usize) -> usize {
        match self {
            EncodingScheme::PackedV1 => 1 + chars.div_ceil(PACKED_CHARS_PER_ELEMENT),
            EncodingScheme::Fixed128V1 => FIXED_ELEMENTS_PER_STRING,
        }
    }
}

impl fmt::Display for EncodingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodingScheme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
