use osuwire_model::{FieldKind, FieldSpec, Shape, ShapeRegistry};
use osuwire_types::Ruleset;
use pretty_assertions::assert_eq;
use serde_json::json;

fn test_registry() -> ShapeRegistry {
    let mut reg = ShapeRegistry::new();
    reg.register_enum(Ruleset::TABLE).unwrap();
    reg.register_many(vec![
        Shape::new("tag").field(FieldSpec::required("name", FieldKind::Str)),
        Shape::new("post")
            .field(FieldSpec::required("id", FieldKind::Int))
            .field(FieldSpec::required("mode", FieldKind::Enum("ruleset".to_string())))
            .field(FieldSpec::required("length", FieldKind::DurationSecs))
            .field(FieldSpec::optional("rating", FieldKind::Float))
            .field(FieldSpec::optional("created_at", FieldKind::Timestamp))
            .field(FieldSpec::optional("primary_tag", FieldKind::Entity("tag".to_string())))
            .field(FieldSpec::optional(
                "tags",
                FieldKind::List(Box::new(FieldKind::Entity("tag".to_string()))),
            ))
            .field(FieldSpec::optional("extra", FieldKind::Opaque)),
    ])
    .unwrap();
    reg
}

// ── Round trips ──────────────────────────────────────────────────

#[test]
fn full_payload_round_trips() {
    let reg = test_registry();
    let payload = json!({
        "id": 1,
        "mode": "mania",
        "length": 90,
        "created_at": "2023-07-12T14:01:02+00:00",
        "primary_tag": {"name": "rhythm"},
        "tags": [{"name": "a"}, {"name": "b"}],
        "extra": {"unknown": [null, 1, "x"]}
    });

    let entity = reg.decode(&payload, "post").unwrap();
    assert_eq!(entity.to_wire(), payload);
}

#[test]
fn minimal_payload_round_trips_with_absent_keys_omitted() {
    let reg = test_registry();
    let payload = json!({
        "id": 1,
        "mode": "osu",
        "length": 0
    });

    let entity = reg.decode(&payload, "post").unwrap();
    let encoded = entity.to_wire();
    assert_eq!(encoded, payload);
    assert!(encoded.get("created_at").is_none());
    assert!(encoded.get("tags").is_none());
}

#[test]
fn explicit_null_optional_encodes_as_omission() {
    let reg = test_registry();
    let with_null = json!({
        "id": 1,
        "mode": "osu",
        "length": 10,
        "created_at": null
    });
    let without = json!({
        "id": 1,
        "mode": "osu",
        "length": 10
    });

    let entity = reg.decode(&with_null, "post").unwrap();
    assert_eq!(entity.to_wire(), without);
}

#[test]
fn unknown_keys_do_not_survive_the_round_trip() {
    let reg = test_registry();
    let mut payload = json!({
        "id": 1,
        "mode": "osu",
        "length": 10
    });
    let expected = payload.clone();
    payload["future_field"] = json!(true);

    let entity = reg.decode(&payload, "post").unwrap();
    assert_eq!(entity.to_wire(), expected);
}

// ── Wire forms ───────────────────────────────────────────────────

#[test]
fn duration_encodes_as_whole_seconds() {
    let reg = test_registry();
    let payload = json!({"id": 1, "mode": "osu", "length": 90});
    let entity = reg.decode(&payload, "post").unwrap();
    assert_eq!(entity.to_wire()["length"], json!(90));
}

#[test]
fn enum_encodes_as_its_tag() {
    let reg = test_registry();
    let payload = json!({"id": 1, "mode": "fruits", "length": 1});
    let entity = reg.decode(&payload, "post").unwrap();
    assert_eq!(entity.to_wire()["mode"], json!("fruits"));
}

#[test]
fn timestamp_encodes_with_its_original_offset() {
    let reg = test_registry();
    let payload = json!({
        "id": 1,
        "mode": "osu",
        "length": 1,
        "created_at": "2020-06-15T23:59:59+09:00"
    });
    let entity = reg.decode(&payload, "post").unwrap();
    assert_eq!(entity.to_wire()["created_at"], json!("2020-06-15T23:59:59+09:00"));
}

#[test]
fn integral_float_stays_integral() {
    // osu-web sends whole-valued floats without a decimal point.
    let reg = test_registry();
    let payload = json!({"id": 1, "mode": "osu", "length": 1, "rating": 178});
    let entity = reg.decode(&payload, "post").unwrap();
    assert_eq!(entity.get_f64("rating"), Some(178.0));
    assert_eq!(entity.to_wire(), payload);
}

#[test]
fn fractional_float_round_trips() {
    let reg = test_registry();
    let payload = json!({"id": 1, "mode": "osu", "length": 1, "rating": 5.31});
    let entity = reg.decode(&payload, "post").unwrap();
    assert_eq!(entity.to_wire(), payload);
}

#[test]
fn zulu_timestamp_round_trips() {
    let reg = test_registry();
    let payload = json!({
        "id": 1,
        "mode": "osu",
        "length": 1,
        "created_at": "2023-07-12T14:01:02Z"
    });
    let entity = reg.decode(&payload, "post").unwrap();
    assert_eq!(entity.to_wire(), payload);
}

#[test]
fn fractional_timestamp_round_trips() {
    let reg = test_registry();
    let payload = json!({
        "id": 1,
        "mode": "osu",
        "length": 1,
        "created_at": "2023-07-12T14:01:02.123+00:00"
    });
    let entity = reg.decode(&payload, "post").unwrap();
    assert_eq!(entity.to_wire(), payload);
}

#[test]
fn opaque_field_encodes_verbatim() {
    let reg = test_registry();
    let payload = json!({
        "id": 1,
        "mode": "osu",
        "length": 1,
        "extra": {"deep": {"er": [1, 2]}}
    });
    let entity = reg.decode(&payload, "post").unwrap();
    assert_eq!(entity.to_wire()["extra"], json!({"deep": {"er": [1, 2]}}));
}

#[test]
fn nested_entities_encode_recursively() {
    let reg = test_registry();
    let payload = json!({
        "id": 1,
        "mode": "osu",
        "length": 1,
        "tags": [{"name": "a"}, {"name": "b"}]
    });
    let entity = reg.decode(&payload, "post").unwrap();
    assert_eq!(entity.to_wire()["tags"], json!([{"name": "a"}, {"name": "b"}]));
}
