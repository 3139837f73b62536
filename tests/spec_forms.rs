//! Conformance tests for spec-document compilation.
//!
//! The record and sequence forms must select identically; YAML
//! documents go through `serde_yaml` into the same compiler.

#![cfg(feature = "config")]

use serde_json::json;
use valmatch::prelude::*;

fn builtins() -> Registry {
    Registry::with_builtins()
}

#[test]
fn record_and_sequence_forms_agree() {
    let record = compile(
        &json!({
            "5": "five",
            "@is_positive_integer": "pos",
            "$default": "other",
        }),
        &builtins(),
    )
    .unwrap();
    let sequence = compile(
        &json!([
            [5, "five"],
            [{"predicate": "is_positive_integer"}, "pos"],
            ["$default", "other"],
        ]),
        &builtins(),
    )
    .unwrap();

    for value in [
        Value::from(5i64),
        Value::from(9i64),
        Value::from(-2i64),
        Value::from("5"),
        Value::Null,
    ] {
        assert_eq!(
            record.evaluate(&value),
            sequence.evaluate(&value),
            "forms disagree for {value:?}"
        );
    }
}

#[test]
fn scenario_literal_key() {
    let spec = json!({"$default": "other", "5": "five"});
    let matcher = compile(&spec, &builtins()).unwrap();
    assert_eq!(matcher.evaluate(&Value::from(5i64)), Value::from("five"));
    assert_eq!(matcher.evaluate(&Value::from(6i64)), Value::from("other"));
}

#[test]
fn scenario_predicate_entry() {
    let matcher = compile(
        &json!([
            [{"predicate": "is_positive_integer"}, "pos"],
            ["$default", "not-pos"],
        ]),
        &builtins(),
    )
    .unwrap();
    assert_eq!(matcher.evaluate(&Value::from(-3i64)), Value::from("not-pos"));
    assert_eq!(matcher.evaluate(&Value::from(3i64)), Value::from("pos"));
}

#[test]
fn evaluations_come_back_verbatim() {
    let matcher = compile(
        &json!({
            "k": {"nested": [1, 2, {"deep": true}]},
            "$default": null,
        }),
        &builtins(),
    )
    .unwrap();

    let expected = Value::from(json!({"nested": [1, 2, {"deep": true}]}));
    assert_eq!(matcher.evaluate(&Value::from("k")), expected);
    assert_eq!(matcher.evaluate(&Value::from("miss")), Value::Null);
}

#[test]
fn invalid_shapes_are_rejected() {
    for spec in [json!(42), json!("x"), json!(false), json!(null)] {
        assert!(matches!(
            compile(&spec, &builtins()).unwrap_err(),
            MatchError::SpecShape { .. }
        ));
    }
}

#[test]
fn yaml_documents_compile() {
    let yaml = r#"
"5": five
"@is_non_empty_string": text
"$default": other
"#;
    let spec: serde_json::Value = serde_yaml::from_str(yaml).unwrap();
    let matcher = compile(&spec, &builtins()).unwrap();

    assert_eq!(matcher.evaluate(&Value::from(5i64)), Value::from("five"));
    assert_eq!(matcher.evaluate(&Value::from("hi")), Value::from("text"));
    assert_eq!(matcher.evaluate(&Value::from("")), Value::from("other"));
}

#[test]
fn yaml_sequence_form_compiles() {
    let yaml = r#"
- - predicate: is_array
  - sequence
- - "$default"
  - scalar
"#;
    let spec: serde_json::Value = serde_yaml::from_str(yaml).unwrap();
    let matcher = compile(&spec, &builtins()).unwrap();

    assert_eq!(
        matcher.evaluate(&Value::Array(vec![])),
        Value::from("sequence")
    );
    assert_eq!(matcher.evaluate(&Value::from(1i64)), Value::from("scalar"));
}

#[test]
fn container_predicates_compile_from_spec() {
    let matcher = compile(
        &json!({"@is_map": "map", "@is_date": "date", "$default": "other"}),
        &builtins(),
    )
    .unwrap();
    assert_eq!(
        matcher.evaluate(&Value::Object(Default::default())),
        Value::from("map")
    );
    assert_eq!(matcher.evaluate(&Value::from(1i64)), Value::from("other"));
}
