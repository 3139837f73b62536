//! Conformance tests for the typed matcher API.
//!
//! Exercises the selection contract end to end: ordering, default
//! fallback, lazy evaluations, validation errors, and predicate arms
//! built from the classification vocabularies.

use valmatch::prelude::*;
use valmatch::{classify, container};

fn fallback(result: &str) -> Arm {
    Arm::fallback(Evaluation::value(result))
}

#[test]
fn literal_hit_and_default_fallback() {
    let matcher = Matcher::new(vec![
        Arm::literal(5i64, Evaluation::value("five")),
        fallback("other"),
    ])
    .unwrap();

    assert_eq!(matcher.evaluate(&Value::from(5i64)), Value::from("five"));
    assert_eq!(matcher.evaluate(&Value::from(6i64)), Value::from("other"));
}

#[test]
fn predicate_arm_with_thunk_evaluation() {
    let matcher = Matcher::new(vec![
        Arm::when(classify::is_positive_integer, Evaluation::value("pos")),
        fallback("not-pos"),
    ])
    .unwrap();
    assert_eq!(matcher.evaluate(&Value::from(-3i64)), Value::from("not-pos"));

    let matcher = Matcher::new(vec![
        Arm::when(
            classify::is_positive_integer,
            Evaluation::thunk(|v| Value::from(format!("positive:{v}"))),
        ),
        fallback("n/a"),
    ])
    .unwrap();
    assert_eq!(
        matcher.evaluate(&Value::from(3i64)),
        Value::from("positive:3")
    );
}

#[test]
fn selection_prefers_earlier_arms_across_kinds() {
    // Literal before predicate: literal wins for its value, the
    // predicate picks up the rest, the default catches everything else.
    let matcher = Matcher::new(vec![
        Arm::literal(5i64, Evaluation::value("exactly-five")),
        Arm::when(classify::is_number, Evaluation::value("some-number")),
        Arm::when(classify::is_string, Evaluation::value("some-string")),
        fallback("other"),
    ])
    .unwrap();

    assert_eq!(
        matcher.evaluate(&Value::from(5i64)),
        Value::from("exactly-five")
    );
    assert_eq!(
        matcher.evaluate(&Value::from(5.5)),
        Value::from("some-number")
    );
    assert_eq!(
        matcher.evaluate(&Value::from("5")),
        Value::from("some-string")
    );
    assert_eq!(matcher.evaluate(&Value::Null), Value::from("other"));
    assert_eq!(
        matcher.evaluate(&Value::from(f64::NAN)),
        Value::from("other")
    );
}

#[test]
fn container_vocabulary_as_match_expressions() {
    let matcher = Matcher::new(vec![
        Arm::when(container::is_map, Evaluation::value("map")),
        Arm::when(classify::is_array, Evaluation::value("array")),
        fallback("scalar"),
    ])
    .unwrap();

    assert_eq!(
        matcher.evaluate(&Value::Object(Default::default())),
        Value::from("map")
    );
    assert_eq!(
        matcher.evaluate(&Value::Array(vec![])),
        Value::from("array")
    );
    assert_eq!(matcher.evaluate(&Value::from(1i64)), Value::from("scalar"));
}

#[test]
fn each_invocation_is_independent() {
    // Nothing carries over between evaluations: the same matcher gives
    // the same answers regardless of what was asked before.
    let matcher = Matcher::new(vec![
        Arm::literal("a", Evaluation::value(1i64)),
        Arm::literal("b", Evaluation::value(2i64)),
        fallback("none"),
    ])
    .unwrap();

    for _ in 0..3 {
        assert_eq!(matcher.evaluate(&Value::from("b")), Value::from(2i64));
        assert_eq!(matcher.evaluate(&Value::from("a")), Value::from(1i64));
        assert_eq!(matcher.evaluate(&Value::from("c")), Value::from("none"));
    }
}

#[test]
fn one_shot_match_value_builds_and_discards() {
    let result = match_value(
        &Value::from(5i64),
        vec![
            Arm::literal(5i64, Evaluation::value("five")),
            fallback("other"),
        ],
    )
    .unwrap();
    assert_eq!(result, Value::from("five"));
}

#[test]
fn validation_errors_by_kind() {
    assert_eq!(
        match_value(&Value::Null, vec![]).unwrap_err(),
        MatchError::EmptyMatcher
    );
    assert_eq!(
        match_value(
            &Value::Null,
            vec![Arm::literal("x", Evaluation::value("y"))]
        )
        .unwrap_err(),
        MatchError::MissingDefault
    );
    assert_eq!(
        match_value(&Value::Null, vec![fallback("a"), fallback("b")]).unwrap_err(),
        MatchError::DuplicateDefault { count: 2 }
    );
}

#[test]
fn thunk_panics_are_not_caught() {
    let matcher = Matcher::new(vec![
        Arm::literal(
            "boom",
            Evaluation::thunk(|_| panic!("evaluation blew up")),
        ),
        fallback("safe"),
    ])
    .unwrap();

    // Unselected arm: the thunk is never invoked.
    assert_eq!(matcher.evaluate(&Value::from("ok")), Value::from("safe"));

    // Selected arm: the panic propagates unwrapped.
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        matcher.evaluate(&Value::from("boom"))
    }));
    assert!(result.is_err());
}

#[test]
fn trace_agrees_with_evaluation() {
    let matcher = Matcher::new(vec![
        Arm::literal(5i64, Evaluation::value("five")),
        Arm::when(classify::is_string, Evaluation::value("text")),
        fallback("other"),
    ])
    .unwrap();

    let trace = matcher.evaluate_with_trace(&Value::from("hi"));
    assert_eq!(trace.result, Value::from("text"));
    assert!(!trace.used_default);
    assert_eq!(trace.steps.len(), 2);
    assert!(!trace.steps[0].matched);
    assert!(trace.steps[1].matched);

    let trace = matcher.evaluate_with_trace(&Value::from(true));
    assert_eq!(trace.result, Value::from("other"));
    assert!(trace.used_default);
}

#[test]
fn matchers_share_across_threads() {
    let matcher = std::sync::Arc::new(
        Matcher::new(vec![
            Arm::when(classify::is_number, Evaluation::value("number")),
            fallback("other"),
        ])
        .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let matcher = std::sync::Arc::clone(&matcher);
            std::thread::spawn(move || matcher.evaluate(&Value::from(i as i64)))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Value::from("number"));
    }
}
