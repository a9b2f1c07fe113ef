//! Generator tests

use super::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

fn fragment(value: Value) -> SchemaFragment {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

// ============================================================================
// Dispatch Tests
// ============================================================================

#[test_case(json!(null), GeneratorKind::Null; "null")]
#[test_case(json!(true), GeneratorKind::Boolean; "boolean")]
#[test_case(json!(3), GeneratorKind::Number; "integer")]
#[test_case(json!(-3), GeneratorKind::Number; "negative integer")]
#[test_case(json!(2.5), GeneratorKind::Number; "float")]
#[test_case(json!("x"), GeneratorKind::String; "string")]
#[test_case(json!("héllo ✓"), GeneratorKind::String; "wide string")]
fn test_for_object(value: Value, expected: GeneratorKind) {
    assert_eq!(GeneratorKind::for_object(&value), Some(expected));
}

#[test_case(json!([1, 2]); "array")]
#[test_case(json!({"a": 1}); "object")]
fn test_for_object_composite_has_no_match(value: Value) {
    assert_eq!(GeneratorKind::for_object(&value), None);
}

#[test]
fn test_boolean_is_never_numeric() {
    assert!(!GeneratorKind::Number.match_object(&json!(true)));
    assert!(!GeneratorKind::Number.match_object(&json!(false)));
    assert!(GeneratorKind::Boolean.match_object(&json!(false)));
}

#[test_case(json!({"type": "null"}), GeneratorKind::Null; "null")]
#[test_case(json!({"type": "boolean"}), GeneratorKind::Boolean; "boolean")]
#[test_case(json!({"type": "integer"}), GeneratorKind::Number; "integer")]
#[test_case(json!({"type": "number"}), GeneratorKind::Number; "number")]
#[test_case(json!({"type": "string", "format": "date"}), GeneratorKind::String; "string")]
#[test_case(json!({}), GeneratorKind::Typeless; "empty")]
#[test_case(json!({"description": "anything"}), GeneratorKind::Typeless; "no type")]
fn test_for_schema(schema: Value, expected: GeneratorKind) {
    assert_eq!(GeneratorKind::for_schema(&fragment(schema)), Some(expected));
}

#[test]
fn test_for_schema_unknown_type() {
    assert_eq!(
        GeneratorKind::for_schema(&fragment(json!({"type": "object"}))),
        None
    );
    assert_eq!(GeneratorKind::for_schema(&fragment(json!({"type": 5}))), None);
}

#[test]
fn test_typeless_matching() {
    assert!(GeneratorKind::Typeless.match_schema(&fragment(json!({}))));
    assert!(!GeneratorKind::Typeless.match_schema(&fragment(json!({"type": "string"}))));

    for value in [json!(null), json!(true), json!(1), json!(1.5), json!("s"), json!([])] {
        assert!(!GeneratorKind::Typeless.match_object(&value));
    }
}

#[test]
fn test_match_schema_does_not_mutate() {
    let schema = fragment(json!({"type": "string", "format": "date"}));
    let before = schema.clone();
    for kind in GeneratorKind::ALL {
        kind.match_schema(&schema);
    }
    assert_eq!(schema, before);
}

#[test]
fn test_instantiate_kind_roundtrip() {
    for kind in GeneratorKind::ALL {
        let generator = kind.instantiate();
        assert_eq!(generator.kind(), kind);
        assert_eq!(generator.cardinality(), 0);
        assert!(generator.extra_keywords().is_empty());
    }
}

// ============================================================================
// Base Behavior Tests
// ============================================================================

#[test]
fn test_cardinality_counts_objects() {
    let mut generator = TypedGenerator::string();
    for i in 0..7 {
        assert_eq!(generator.base().cardinality(), i);
        generator.add_object(&json!("value"));
    }
    assert_eq!(generator.base().cardinality(), 7);
}

#[test]
fn test_objects_never_add_keywords() {
    let mut generator = TypedGenerator::string();
    generator.add_object(&json!("2024-01-15"));
    assert!(generator.base().extra_keywords().is_empty());
}

#[test]
fn test_add_schema_skips_type() {
    let mut base = BaseGenerator::new();
    let conflicts = base.add_schema(&fragment(json!({"type": "string", "format": "date"})));

    assert!(conflicts.is_empty());
    assert_eq!(base.extra_keywords(), &fragment(json!({"format": "date"})));
}

#[test]
fn test_keyword_conflict_first_wins() {
    let mut base = BaseGenerator::new();
    assert!(base.add_schema(&fragment(json!({"foo": 1}))).is_empty());

    let conflicts = base.add_schema(&fragment(json!({"foo": 2})));
    assert_eq!(conflicts, vec![KeywordConflict::new("foo", json!(1), json!(2))]);
    assert_eq!(base.extra_keywords()["foo"], json!(1));
}

#[test]
fn test_keyword_conflict_order_dependent() {
    let mut base = BaseGenerator::new();
    base.add_schema(&fragment(json!({"foo": 2})));
    let conflicts = base.add_schema(&fragment(json!({"foo": 1})));

    assert_eq!(conflicts.len(), 1);
    assert_eq!(base.extra_keywords()["foo"], json!(2));
}

#[test]
fn test_equal_keyword_is_noop() {
    let mut base = BaseGenerator::new();
    base.add_schema(&fragment(json!({"format": "date", "title": "When"})));
    let conflicts = base.add_schema(&fragment(json!({"format": "date"})));

    assert!(conflicts.is_empty());
    assert_eq!(base.extra_keywords().len(), 2);
}

#[test]
fn test_conflict_message() {
    let conflict = KeywordConflict::new("format", json!("date"), json!("time"));
    assert_eq!(
        conflict.to_string(),
        r#"Schema incompatible. Keyword 'format' has conflicting values ("date" vs. "time"). Using "date""#
    );
}

#[test]
fn test_rate() {
    let mut base = BaseGenerator::new();
    for _ in 0..3 {
        base.add_object();
    }
    assert_eq!(base.to_schema(12), fragment(json!({"rate": 0.25})));
}

#[test]
fn test_rate_omitted_without_parent() {
    let mut base = BaseGenerator::new();
    base.add_object();
    assert!(!base.to_schema(0).contains_key(RATE_KEYWORD));
}

#[test_case(1.0 / 3.0, 0.333; "one third")]
#[test_case(2.0 / 3.0, 0.667; "two thirds")]
#[test_case(0.25, 0.25; "exact")]
#[test_case(1.0, 1.0; "whole")]
#[test_case(0.0, 0.0; "zero")]
fn test_round_rate(input: f64, expected: f64) {
    assert_eq!(round_rate(input), expected);
}

#[test]
fn test_to_schema_is_idempotent_and_independent() {
    let mut generator = TypedGenerator::string();
    generator.add_schema(&fragment(json!({"type": "string", "format": "date"})));
    generator.add_object(&json!("x"));
    let before = generator.clone();

    let mut first = generator.to_schema(4);
    let second = generator.to_schema(4);
    assert_eq!(first, second);

    first.insert("format".to_string(), json!("mutated"));
    assert_eq!(generator, before);
    assert_eq!(generator.to_schema(4), second);
}

// ============================================================================
// Typed Generator Tests
// ============================================================================

#[test]
fn test_null_without_objects() {
    let generator = TypedGenerator::null();
    assert_eq!(generator.to_schema(0), fragment(json!({"type": "null"})));
}

#[test]
fn test_string_with_format() {
    let mut generator = TypedGenerator::string();
    generator.add_schema(&fragment(json!({"type": "string", "format": "date"})));
    generator.add_object(&json!("x"));

    assert_eq!(
        generator.to_schema(1),
        fragment(json!({"format": "date", "type": "string", "rate": 1.0}))
    );
}

#[test]
fn test_type_overrides_extra_keywords() {
    let mut generator = TypedGenerator::boolean();
    generator.add_schema(&fragment(json!({"type": "boolean", "default": false})));

    let schema = generator.to_schema(0);
    assert_eq!(schema["type"], json!("boolean"));
    assert_eq!(schema["default"], json!(false));
}

// ============================================================================
// Number Generator Tests
// ============================================================================

#[test]
fn test_number_defaults_to_integer() {
    let mut generator = NumberGenerator::new();
    assert_eq!(generator.numeric_type(), NumericType::Integer);

    generator.add_object(&json!(1));
    generator.add_object(&json!(-40));
    assert_eq!(generator.to_schema(0), fragment(json!({"type": "integer"})));
}

#[test]
fn test_number_promotion_by_object() {
    let mut generator = NumberGenerator::new();
    generator.add_object(&json!(5));
    generator.add_object(&json!(2.5));
    generator.add_object(&json!(7));

    assert_eq!(generator.base().cardinality(), 3);
    assert_eq!(
        generator.to_schema(3),
        fragment(json!({"type": "number", "rate": 1.0}))
    );
}

#[test]
fn test_number_promotion_by_schema() {
    let mut generator = NumberGenerator::new();
    generator.add_schema(&fragment(json!({"type": "number"})));
    generator.add_schema(&fragment(json!({"type": "integer"})));

    assert_eq!(generator.numeric_type(), NumericType::Number);
}

#[test_case("18446744073709551616"; "above u64")]
#[test_case("-9223372036854775809"; "below i64")]
#[test_case("123456789012345678901234567890"; "very large")]
fn test_big_integer_stays_integer(text: &str) {
    let value: Value = serde_json::from_str(text).unwrap();
    assert!(GeneratorKind::Number.match_object(&value));

    let mut generator = NumberGenerator::new();
    generator.add_object(&value);
    assert_eq!(generator.to_schema(0)["type"], json!("integer"));
}

#[test_case("1.0"; "fraction")]
#[test_case("1e3"; "exponent")]
#[test_case("2.5E-2"; "upper exponent")]
fn test_float_text_promotes(text: &str) {
    let value: Value = serde_json::from_str(text).unwrap();

    let mut generator = NumberGenerator::new();
    generator.add_object(&value);
    assert_eq!(generator.to_schema(0)["type"], json!("number"));
}

#[test]
fn test_number_promotion_is_sticky() {
    let mut generator = NumberGenerator::new();
    generator.add_object(&json!(0.5));
    for i in 0..100 {
        generator.add_object(&json!(i));
        assert_eq!(generator.to_schema(0)["type"], json!("number"));
    }
}

#[test]
fn test_integer_schema_keeps_keywords() {
    let mut generator = NumberGenerator::new();
    generator.add_schema(&fragment(json!({"type": "integer", "minimum": 0})));

    assert_eq!(
        generator.to_schema(0),
        fragment(json!({"minimum": 0, "type": "integer"}))
    );
}

// ============================================================================
// Typeless Generator Tests
// ============================================================================

#[test]
fn test_typeless_emits_only_keywords() {
    let mut generator = TypelessGenerator::new();
    assert_eq!(generator.to_schema(0), SchemaFragment::new());

    generator.add_schema(&fragment(json!({"description": "anything"})));
    assert_eq!(
        generator.to_schema(0),
        fragment(json!({"description": "anything"}))
    );
}

#[test]
fn test_schema_generator_dispatch() {
    let mut generator = GeneratorKind::Number.instantiate();
    assert!(generator.match_object(&json!(1)));
    assert!(!generator.match_object(&json!("1")));

    let conflicts = generator.add_schema(&fragment(json!({"type": "integer", "maximum": 9})));
    assert!(conflicts.is_empty());
    generator.add_object(&json!(1.5));

    assert_eq!(generator.cardinality(), 1);
    assert_eq!(generator.to_schema(2)["type"], json!("number"));
    assert_eq!(generator.to_schema(2)["rate"], json!(0.5));
}
