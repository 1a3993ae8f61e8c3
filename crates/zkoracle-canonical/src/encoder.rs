use ff::Field;

use crate::field::FieldElement;
use crate::scheme::{
    EncodingScheme, FIXED_ELEMENTS_PER_STRING, PACKED_BITS_PER_CHAR, PACKED_CHARS_PER_ELEMENT,
};

/// Error returned when a record cannot be encoded without loss.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// A character collides with the padding code unit.
    #[error("field {field}: character U+{codepoint:04X} at position {position} is not representable")]
    UnrepresentableChar {
        /// Index of the string within the record.
        field: usize,
        /// Character offset within the string.
        position: usize,
        /// Offending Unicode scalar value.
        codepoint: u32,
    },
    /// A string is longer than the scheme or the encoder allows.
    #[error("field {field}: length {len} exceeds maximum {max}")]
    LengthExceeded {
        /// Index of the string within the record.
        field: usize,
        /// Measured length (characters, or UTF-16 units for `fixed128-v1`).
        len: usize,
        /// Allowed maximum.
        max: usize,
    },
    /// A record must contain at least one string.
    #[error("record has no fields")]
    EmptyRecord,
}

/// Encoder that maps ordered strings to field elements.
///
/// The output for a record is the concatenation of each string's encoding in
/// input order. Encoding is a pure function of the input and the encoder's
/// settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Encoder {
    scheme: EncodingScheme,
    max_chars: Option<usize>,
}

impl Encoder {
    /// Creates an encoder for the given scheme with no extra length bound.
    pub fn new(scheme: EncodingScheme) -> Self {
        Self {
            scheme,
            max_chars: None,
        }
    }

    /// Rejects strings with more than `max_chars` characters.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = Some(max_chars);
        self
    }

    /// Scheme used by this encoder.
    pub fn scheme(&self) -> EncodingScheme {
        self.scheme
    }

    /// Encodes a single string.
    pub fn encode_str(&self, value: &str) -> Result<Vec<FieldElement>, EncodingError> {
        let mut out = Vec::new();
        self.encode_field(0, value, &mut out)?;
        Ok(out)
    }

    /// Encodes an ordered record, concatenating per-string encodings.
    pub fn encode_record<S: AsRef<str>>(
        &self,
        fields: &[S],
    ) -> Result<Vec<FieldElement>, EncodingError> {
        if fields.is_empty() {
            return Err(EncodingError::EmptyRecord);
        }
        let mut out = Vec::new();
        for (index, value) in fields.iter().enumerate() {
            self.encode_field(index, value.as_ref(), &mut out)?;
        }
        Ok(out)
    }

    fn encode_field(
        &self,
        index: usize,
        value: &str,
        out: &mut Vec<FieldElement>,
    ) -> Result<(), EncodingError> {
        let chars = check_chars(index, value)?;
        if let Some(max) = self.max_chars {
            if chars > max {
                return Err(EncodingError::LengthExceeded {
                    field: index,
                    len: chars,
                    max,
                });
            }
        }
        match self.scheme {
            EncodingScheme::PackedV1 => encode_packed(value, chars, out),
            EncodingScheme::Fixed128V1 => encode_fixed(index, value, out)?,
        }
        Ok(())
    }
}

/// Counts characters, rejecting the reserved padding code unit.
fn check_chars(index: usize, value: &str) -> Result<usize, EncodingError> {
    let mut count = 0;
    for (position, ch) in value.chars().enumerate() {
        if ch == '\0' {
            return Err(EncodingError::UnrepresentableChar {
                field: index,
                position,
                codepoint: 0,
            });
        }
        count += 1;
    }
    Ok(count)
}

fn encode_packed(value: &str, chars: usize, out: &mut Vec<FieldElement>) {
    let shift = FieldElement::from(1u64 << PACKED_BITS_PER_CHAR);
    let codes: Vec<u64> = value.chars().map(|ch| u64::from(u32::from(ch))).collect();

    out.reserve(EncodingScheme::PackedV1.encoded_len(chars));
    out.push(FieldElement::from(chars as u64));
    for group in codes.chunks(PACKED_CHARS_PER_ELEMENT) {
        // Horner from the last character: first character is least significant.
        let element = group
            .iter()
            .rev()
            .fold(FieldElement::ZERO, |acc, code| {
                acc * shift + FieldElement::from(*code)
            });
        out.push(element);
    }
}

fn encode_fixed(
    index: usize,
    value: &str,
    out: &mut Vec<FieldElement>,
) -> Result<(), EncodingError> {
    let units: Vec<u16> = value.encode_utf16().collect();
    if units.len() > FIXED_ELEMENTS_PER_STRING {
        return Err(EncodingError::LengthExceeded {
            field: index,
            len: units.len(),
            max: FIXED_ELEMENTS_PER_STRING,
        });
    }
    out.reserve(FIXED_ELEMENTS_PER_STRING);
    out.extend(units.iter().map(|unit| FieldElement::from(u64::from(*unit))));
    out.extend(std::iter::repeat(FieldElement::ZERO).take(FIXED_ELEMENTS_PER_STRING - units.len()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_length_prefix_counts_chars_not_bytes() {
        let encoder = Encoder::default();
        let seq = encoder.encode_str("é€").unwrap();
        assert_eq!(seq[0], FieldElement::from(2u64));
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn max_chars_applies_to_every_field() {
        let encoder = Encoder::default().with_max_chars(3);
        assert!(encoder.encode_record(&["abc", "def"]).is_ok());
        assert_eq!(
            encoder.encode_record(&["abc", "defg"]),
            Err(EncodingError::LengthExceeded {
                field: 1,
                len: 4,
                max: 3
            })
        );
    }

    #[test]
    fn fixed_counts_utf16_units() {
        let encoder = Encoder::new(EncodingScheme::Fixed128V1);
        // Each emoji is a surrogate pair.
        let text: String = std::iter::repeat('\u{1F600}').take(64).collect();
        assert_eq!(encoder.encode_str(&text).unwrap().len(), 128);
        let text: String = std::iter::repeat('\u{1F600}').take(65).collect();
        assert!(matches!(
            encoder.encode_str(&text),
            Err(EncodingError::LengthExceeded { len: 130, .. })
        ));
    }
}
