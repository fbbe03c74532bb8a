use serde_json::json;
use ziproto::{encode_value, Value, ZiProtoEncoder, ZiProtoEncoderStable, ZiProtoJsonCodec};

#[test]
fn json_codec_roundtrip_matrix() {
    let mut codec = ZiProtoJsonCodec::new();
    let cases = vec![
        json!(null),
        json!(true),
        json!(123),
        json!(-123),
        json!(1.5),
        json!("hello"),
        json!([1, 2, 3]),
        json!({"a": 1, "b": [true, null, "x"], "c": {"d": -2.5}}),
    ];
    for case in cases {
        let bytes = codec.encode(&case).expect("encode");
        let (back, consumed) = codec.decode(&bytes).expect("decode");
        assert_eq!(back, case);
        assert_eq!(consumed, bytes.len());
    }
}

#[test]
fn json_object_key_order_is_preserved() {
    let mut codec = ZiProtoJsonCodec::new();
    let json = json!({"z": 1, "m": 2, "a": 3});
    let bytes = codec.encode(&json).unwrap();
    // fixmap(3), then keys in insertion order.
    assert_eq!(bytes[0], 0x83);
    assert_eq!(&bytes[1..3], &[0xa1, b'z']);
    let (back, _) = codec.decode(&bytes).unwrap();
    let keys: Vec<&String> = back.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["z", "m", "a"]);
}

#[test]
fn encode_json_matches_value_path() {
    let json = json!({"n": [1, -2, 0.25, "s", null, false]});
    let mut encoder = ZiProtoEncoder::new();
    let direct = encoder.encode_json(&json).unwrap();
    let via_value = encode_value(&Value::from(json)).unwrap();
    assert_eq!(direct, via_value);
}

#[test]
fn json_number_families() {
    let mut encoder = ZiProtoEncoder::new();
    // Non-negative integers take the unsigned family.
    assert_eq!(encoder.encode_json(&json!(300)).unwrap(), [0xcd, 0x01, 0x2c]);
    // Negative integers take the signed family.
    assert_eq!(encoder.encode_json(&json!(-33)).unwrap(), [0xd0, 0xdf]);
    // Fractional numbers take the float family.
    assert_eq!(
        encoder.encode_json(&json!(1.5)).unwrap(),
        [0xca, 0x3f, 0xc0, 0x00, 0x00]
    );
}

#[test]
fn bin_surfaces_as_data_uri_in_json() {
    let (json, _) = ZiProtoJsonCodec::new()
        .decode(&encode_value(&Value::Bin(vec![1, 2, 3])).unwrap())
        .unwrap();
    assert_eq!(json, json!("data:application/octet-stream;base64,AQID"));
}

#[test]
fn stable_encoder_canonicalizes_map_order() {
    let forward = Value::Map(vec![
        (Value::Str("a".into()), Value::UInt(1)),
        (Value::Str("b".into()), Value::UInt(2)),
    ]);
    let backward = Value::Map(vec![
        (Value::Str("b".into()), Value::UInt(2)),
        (Value::Str("a".into()), Value::UInt(1)),
    ]);
    let mut stable = ZiProtoEncoderStable::new();
    let first = stable.encode(&forward).unwrap();
    let second = stable.encode(&backward).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, vec![0x82, 0xa1, b'a', 0x01, 0xa1, b'b', 0x02]);

    // The plain encoder keeps insertion order, so the two differ there.
    let mut plain = ZiProtoEncoder::new();
    assert_ne!(
        plain.encode(&forward).unwrap(),
        plain.encode(&backward).unwrap()
    );
}

#[test]
fn stable_encoder_sorts_by_encoded_key_bytes() {
    // UInt(2) encodes as 0x02, Str("a") as 0xa1 0x61: integer keys sort
    // ahead of string keys by their wire bytes.
    let value = Value::Map(vec![
        (Value::Str("a".into()), Value::Nil),
        (Value::UInt(2), Value::Nil),
    ]);
    let mut stable = ZiProtoEncoderStable::new();
    assert_eq!(
        stable.encode(&value).unwrap(),
        vec![0x82, 0x02, 0xc0, 0xa1, b'a', 0xc0]
    );
}

#[test]
fn stable_encoder_keeps_duplicate_keys_in_insertion_order() {
    let value = Value::Map(vec![
        (Value::Str("k".into()), Value::UInt(1)),
        (Value::Str("a".into()), Value::UInt(0)),
        (Value::Str("k".into()), Value::UInt(2)),
    ]);
    let mut stable = ZiProtoEncoderStable::new();
    assert_eq!(
        stable.encode(&value).unwrap(),
        vec![
            0x83, // fixmap(3)
            0xa1, b'a', 0x00, // "a": 0
            0xa1, b'k', 0x01, // first "k"
            0xa1, b'k', 0x02, // second "k"
        ]
    );
}

#[test]
fn stable_encoder_canonicalizes_nested_maps() {
    let nested_forward = Value::Array(vec![Value::Map(vec![
        (Value::Str("y".into()), Value::Nil),
        (Value::Str("x".into()), Value::Nil),
    ])]);
    let nested_backward = Value::Array(vec![Value::Map(vec![
        (Value::Str("x".into()), Value::Nil),
        (Value::Str("y".into()), Value::Nil),
    ])]);
    let mut stable = ZiProtoEncoderStable::new();
    assert_eq!(
        stable.encode(&nested_forward).unwrap(),
        stable.encode(&nested_backward).unwrap()
    );
}
