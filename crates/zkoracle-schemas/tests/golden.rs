use serde_json::json;
use zkoracle_canonical::EncodingScheme;
use zkoracle_schemas::{Attestation, RawRecord, Signature, SIGNATURE_ALG};

fn make_attestation() -> Attestation {
    Attestation {
        data: RawRecord::new("1", "hello"),
        signature: Signature {
            alg: SIGNATURE_ALG.to_string(),
            sig: "c2lnbmF0dXJl".to_string(),
        },
        public_key: "B62qexample".to_string(),
        encoding: EncodingScheme::PackedV1,
    }
}

#[test]
fn attestation_matches_expected_shape() {
    let value = serde_json::to_value(make_attestation()).unwrap();
    let expected = json!({
        "data": { "id": "1", "text": "hello" },
        "signature": { "alg": "schnorr-pallas-poseidon-v1", "sig": "c2lnbmF0dXJl" },
        "publicKey": "B62qexample",
        "encoding": "packed-v1"
    });
    assert_eq!(value, expected);
}

#[test]
fn missing_encoding_defaults_to_packed() {
    let parsed: Attestation = serde_json::from_value(json!({
        "data": { "id": "1", "text": "hello" },
        "signature": { "alg": "schnorr-pallas-poseidon-v1", "sig": "c2lnbmF0dXJl" },
        "publicKey": "B62qexample"
    }))
    .unwrap();
    assert_eq!(parsed, make_attestation());
}

#[test]
fn record_accepts_str_alias() {
    let record: RawRecord = serde_json::from_value(json!({ "id": "7", "str": "gm" })).unwrap();
    assert_eq!(record, RawRecord::new("7", "gm"));
    assert_eq!(record.fields(), ["7", "gm"]);
}
