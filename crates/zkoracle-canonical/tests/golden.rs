use zkoracle_canonical::{
    field::{from_hex, to_hex},
    sequence_digest, Digest, DigestAlg, Encoder, EncodingError, EncodingScheme, FieldElement,
};

fn hexes(seq: &[FieldElement]) -> Vec<String> {
    seq.iter().map(to_hex).collect()
}

fn padded(value: &str) -> String {
    format!("0x{:0>64}", value)
}

#[test]
fn packed_hello_record_matches_golden_sequence() {
    let encoder = Encoder::default();
    let seq = encoder.encode_record(&["1", "hello"]).unwrap();

    assert_eq!(
        hexes(&seq),
        vec![
            padded("1"),
            padded("31"),
            padded("5"),
            padded("6f00006c00006c000065000068"),
        ]
    );
}

#[test]
fn packed_splits_after_ten_chars() {
    let seq = Encoder::default().encode_str("abcdefghijk").unwrap();

    assert_eq!(
        hexes(&seq),
        vec![
            padded("b"),
            padded("6a000069000068000067000066000065000064000063000062000061"),
            padded("6b"),
        ]
    );
}

#[test]
fn packed_accepts_astral_plane_characters() {
    let seq = Encoder::default().encode_str("\u{1F600}").unwrap();
    assert_eq!(hexes(&seq), vec![padded("1"), padded("1f600")]);
}

#[test]
fn empty_string_is_a_single_length_element() {
    let seq = Encoder::default().encode_str("").unwrap();
    assert_eq!(seq, vec![FieldElement::from(0u64)]);
}

#[test]
fn empty_strings_still_separate_fields() {
    let encoder = Encoder::default();
    let a = encoder.encode_record(&["", "a"]).unwrap();
    let b = encoder.encode_record(&["a", ""]).unwrap();
    assert_ne!(a, b);
}

#[test]
fn record_is_concatenation_of_fields() {
    let encoder = Encoder::default();
    let mut expected = encoder.encode_str("1").unwrap();
    expected.extend(encoder.encode_str("hello").unwrap());
    assert_eq!(encoder.encode_record(&["1", "hello"]).unwrap(), expected);
}

#[test]
fn hello_and_hellp_differ_in_last_element() {
    let encoder = Encoder::default();
    let a = encoder.encode_record(&["1", "hello"]).unwrap();
    let b = encoder.encode_record(&["1", "hellp"]).unwrap();
    assert_eq!(a.len(), b.len());
    assert_eq!(a[..a.len() - 1], b[..b.len() - 1]);
    assert_ne!(a.last(), b.last());
}

#[test]
fn nul_character_is_rejected_not_padded() {
    let err = Encoder::default()
        .encode_record(&["1", "hel\0lo"])
        .unwrap_err();
    assert_eq!(
        err,
        EncodingError::UnrepresentableChar {
            field: 1,
            position: 3,
            codepoint: 0
        }
    );
    assert!(Encoder::new(EncodingScheme::Fixed128V1)
        .encode_str("\0")
        .is_err());
}

#[test]
fn empty_record_is_rejected() {
    let fields: [&str; 0] = [];
    assert_eq!(
        Encoder::default().encode_record(&fields),
        Err(EncodingError::EmptyRecord)
    );
}

#[test]
fn fixed128_pads_each_field() {
    let encoder = Encoder::new(EncodingScheme::Fixed128V1);
    let seq = encoder.encode_record(&["1", "hi"]).unwrap();

    assert_eq!(seq.len(), 256);
    assert_eq!(seq[0], FieldElement::from(0x31u64));
    assert!(seq[1..128].iter().all(|f| *f == FieldElement::from(0u64)));
    assert_eq!(seq[128], FieldElement::from(u64::from(b'h')));
    assert_eq!(seq[129], FieldElement::from(u64::from(b'i')));

    let empty = encoder.encode_str("").unwrap();
    assert_eq!(empty, vec![FieldElement::from(0u64); 128]);
}

#[test]
fn fixed128_rejects_long_strings() {
    let text = "x".repeat(129);
    assert_eq!(
        Encoder::new(EncodingScheme::Fixed128V1).encode_str(&text),
        Err(EncodingError::LengthExceeded {
            field: 0,
            len: 129,
            max: 128
        })
    );
}

#[test]
fn scheme_serializes_to_wire_identifier() {
    assert_eq!(
        serde_json::to_string(&EncodingScheme::PackedV1).unwrap(),
        r#""packed-v1""#
    );
    assert_eq!(
        "fixed128-v1".parse::<EncodingScheme>().unwrap(),
        EncodingScheme::Fixed128V1
    );
    assert!(EncodingScheme::parse("packed-v2").is_err());
}

#[test]
fn sequence_digest_is_stable_and_content_sensitive() {
    let encoder = Encoder::default();
    let a = sequence_digest(&encoder.encode_str("hello").unwrap());
    let b = sequence_digest(&encoder.encode_str("hello").unwrap());
    let c = sequence_digest(&encoder.encode_str("hellp").unwrap());

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.alg, DigestAlg::Sha256);
    assert!(Digest::new(DigestAlg::Sha256, a.b64.clone()).is_ok());
}

#[test]
fn digest_serializes_to_golden_json() {
    let digest = Digest {
        alg: DigestAlg::Sha256,
        b64: "Zm9vYmFy".into(),
    };
    assert_eq!(
        serde_json::to_string(&digest).unwrap(),
        r#"{"alg":"sha-256","b64":"Zm9vYmFy"}"#
    );
}

#[test]
fn hex_output_parses_back() {
    let seq = Encoder::default().encode_str("round trip").unwrap();
    let parsed: Vec<FieldElement> = hexes(&seq).iter().map(|h| from_hex(h).unwrap()).collect();
    assert_eq!(parsed, seq);
}
