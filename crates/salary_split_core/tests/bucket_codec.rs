use salary_split_core::{
    decode_buckets, encode_buckets, Bucket, BucketId, BucketKind, CodecError, StoreConfig,
};
use std::collections::HashSet;

fn sample_buckets() -> Vec<Bucket> {
    let mut rent = Bucket::new(BucketId::new("rent-id"), "Rent", "#0088FE");
    rent.amount = 800.0;
    let mut savings = Bucket::new(BucketId::new("savings-id"), "Savings", "#FFBB28");
    savings.kind = BucketKind::Percent;
    savings.amount = 12.5;
    vec![rent, savings]
}

#[test]
fn encoded_payload_uses_expected_wire_fields() {
    let json: serde_json::Value =
        serde_json::from_str(&encode_buckets(&sample_buckets()).unwrap()).unwrap();

    assert_eq!(json[0]["id"], "rent-id");
    assert_eq!(json[0]["title"], "Rent");
    assert_eq!(json[0]["kind"], "fixed");
    assert_eq!(json[0]["amount"], 800.0);
    assert_eq!(json[0]["color"], "#0088FE");
    assert_eq!(json[1]["kind"], "percent");
    assert_eq!(json[1]["amount"], 12.5);
    assert_eq!(json[0].as_object().unwrap().len(), 5);
}

#[test]
fn encode_then_decode_preserves_content_and_order() {
    let buckets = sample_buckets();
    let payload = encode_buckets(&buckets).unwrap();

    let decoded = decode_buckets(&payload, &StoreConfig::default()).unwrap();
    assert_eq!(decoded.buckets, buckets);
    assert_eq!(decoded.skipped, 0);
    assert_eq!(decoded.reassigned_ids, 0);
}

#[test]
fn decode_accepts_legacy_layout_with_string_amounts() {
    let payload = r##"[
        {"id": "1700000000000", "title": "Rent", "type": "percent", "amount": "30", "color": "#0088FE"},
        {"id": 1700000000001, "title": "Fun", "type": "fixed", "amount": "", "color": "#FFBB28"}
    ]"##;

    let decoded = decode_buckets(payload, &StoreConfig::default()).unwrap();
    let buckets = decoded.buckets;
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].id, BucketId::new("1700000000000"));
    assert_eq!(buckets[0].kind, BucketKind::Percent);
    assert_eq!(buckets[0].amount, 30.0);
    assert_eq!(buckets[1].id, BucketId::new("1700000000001"));
    assert_eq!(buckets[1].amount, 0.0);
}

#[test]
fn decode_defaults_missing_keys_and_ignores_unknown_ones() {
    let payload = r#"[{"id": "a", "extra": {"nested": true}}, {"id": "b", "kind": "mystery"}]"#;

    let buckets = decode_buckets(payload, &StoreConfig::default())
        .unwrap()
        .buckets;
    assert_eq!(buckets[0].title, "New Field");
    assert_eq!(buckets[0].kind, BucketKind::Fixed);
    assert_eq!(buckets[0].amount, 0.0);
    assert_eq!(buckets[0].color, "#0088FE");
    assert_eq!(buckets[1].kind, BucketKind::Fixed);
    assert_eq!(buckets[1].color, "#FFBB28");
}

#[test]
fn decode_reassigns_missing_and_duplicate_ids() {
    let payload = r#"[{"id": "dup"}, {"id": "dup"}, {"title": "no id"}, {"id": ""}]"#;

    let decoded = decode_buckets(payload, &StoreConfig::default()).unwrap();
    assert_eq!(decoded.buckets.len(), 4);
    assert_eq!(decoded.reassigned_ids, 3);
    assert_eq!(decoded.buckets[0].id, BucketId::new("dup"));

    let unique: HashSet<&str> = decoded.buckets.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(unique.len(), 4);
}

#[test]
fn decode_rejects_non_array_payloads() {
    let config = StoreConfig::default();
    assert!(matches!(
        decode_buckets(r#"{"fields": []}"#, &config),
        Err(CodecError::NotAnArray)
    ));
    assert!(matches!(
        decode_buckets("not json", &config),
        Err(CodecError::Json(_))
    ));
}

#[test]
fn decode_defaults_wrongly_typed_kind_and_color_instead_of_dropping() {
    let payload = r#"[
        {"id": "keep", "title": "Keep", "kind": "percent", "amount": 10},
        {"id": "odd-kind", "title": "Odd", "kind": 5, "amount": 200},
        {"id": "odd-color", "type": ["percent"], "color": 3, "amount": "7"}
    ]"#;

    let decoded = decode_buckets(payload, &StoreConfig::default()).unwrap();
    assert_eq!(decoded.skipped, 0);
    let buckets = decoded.buckets;
    assert_eq!(buckets.len(), 3);
    assert_eq!(buckets[1].id, BucketId::new("odd-kind"));
    assert_eq!(buckets[1].kind, BucketKind::Fixed);
    assert_eq!(buckets[1].amount, 200.0);
    assert_eq!(buckets[2].kind, BucketKind::Fixed);
    assert_eq!(buckets[2].color, "#FF8042");
    assert_eq!(buckets[2].amount, 7.0);
}
