use proptest::prelude::*;
use zkoracle_canonical::{Encoder, EncodingScheme};

fn text() -> impl Strategy<Value = String> {
    // Any string without the reserved padding character.
    r"[^\x00]{0,40}"
}

proptest! {
    #[test]
    fn encoding_is_deterministic(id in text(), body in text()) {
        let encoder = Encoder::default();
        let first = encoder.encode_record(&[&id, &body]).unwrap();
        let second = encoder.encode_record(&[&id, &body]).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn encoding_is_order_sensitive(a in text(), b in text()) {
        prop_assume!(a != b);
        let encoder = Encoder::default();
        let ab = encoder.encode_record(&[&a, &b]).unwrap();
        let ba = encoder.encode_record(&[&b, &a]).unwrap();
        prop_assert_ne!(ab, ba);
    }

    #[test]
    fn packed_length_is_a_function_of_char_count(value in text()) {
        let chars = value.chars().count();
        let seq = Encoder::default().encode_str(&value).unwrap();
        prop_assert_eq!(seq.len(), EncodingScheme::PackedV1.encoded_len(chars));
    }

    #[test]
    fn fixed128_is_order_sensitive(a in "[a-z]{0,20}", b in "[a-z]{0,20}") {
        prop_assume!(a != b);
        let encoder = Encoder::new(EncodingScheme::Fixed128V1);
        let ab = encoder.encode_record(&[&a, &b]).unwrap();
        let ba = encoder.encode_record(&[&b, &a]).unwrap();
        prop_assert_ne!(ab, ba);
    }
}
