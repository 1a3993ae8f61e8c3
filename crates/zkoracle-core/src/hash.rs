//! Poseidon hashing over Pallas base field elements.

use ff::Field;
use halo2_gadgets::poseidon::primitives::{self as poseidon, ConstantLength, P128Pow5T3};
use zkoracle_canonical::FieldElement;

/// Maps a short ASCII label to a field element (little-endian bytes).
///
/// Labels up to 31 bytes map injectively.
pub fn domain_tag(label: &[u8]) -> FieldElement {
    let base = FieldElement::from(256u64);
    label
        .iter()
        .rev()
        .fold(FieldElement::ZERO, |acc, byte| acc * base + FieldElement::from(u64::from(*byte)))
}

/// Two-to-one Poseidon compression (width 3, rate 2).
pub fn compress(left: FieldElement, right: FieldElement) -> FieldElement {
    poseidon::Hash::<_, P128Pow5T3, ConstantLength<2>, 3, 2>::init().hash([left, right])
}

/// Hashes a variable-length input by chaining [`compress`] from `tag` and
/// finishing with the input length.
pub fn hash_fields<I>(tag: FieldElement, input: I) -> FieldElement
where
    I: IntoIterator<Item = FieldElement>,
{
    let mut state = tag;
    let mut len = 0u64;
    for element in input {
        state = compress(state, element);
        len += 1;
    }
    compress(state, FieldElement::from(len))
}
