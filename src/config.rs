//! Spec-document compilation — dynamic matcher specs to [`Matcher`]s
//!
//! A matcher spec is a JSON (or YAML, via any serde front-end that
//! produces `serde_json::Value`) document in one of two forms:
//!
//! - **Basic (record)**: an object whose keys are match expressions
//!   and whose values are the arm evaluations. Arm order is the
//!   document's key order.
//! - **Advanced (sequence)**: an array of `[expression, evaluation]`
//!   pairs. Entries that are not two-element arrays are silently
//!   dropped.
//!
//! Any other document shape is a [`MatchError::SpecShape`] error.
//!
//! # Expression encoding
//!
//! | Spelling | Meaning |
//! |---|---|
//! | key `"$default"` / entry `["$default", e]` | the default arm |
//! | key `"@name"` / entry `[{"predicate": "name"}, e]` | registered predicate |
//! | anything else | literal, compared by strict equality |
//!
//! Literal keys are decoded as JSON scalars when they parse as one
//! (`"5"` is the number five, `"true"` the boolean) and kept as string
//! literals otherwise. Evaluations in spec documents are always
//! literal values — thunks exist only in the typed API.
//!
//! # Example
//!
//! ```
//! use valmatch::{compile, Registry, Value};
//!
//! let spec = serde_json::json!({
//!     "5": "five",
//!     "@is_positive_integer": "pos",
//!     "$default": "other",
//! });
//! let matcher = compile(&spec, &Registry::with_builtins())?;
//!
//! assert_eq!(matcher.evaluate(&Value::from(5i64)), Value::from("five"));
//! assert_eq!(matcher.evaluate(&Value::from(9i64)), Value::from("pos"));
//! assert_eq!(matcher.evaluate(&Value::from(-2i64)), Value::from("other"));
//! # Ok::<(), valmatch::MatchError>(())
//! ```

use serde::Deserialize;
use serde_json::Value as Spec;

use crate::{Arm, Evaluation, MatchError, MatchExpr, Matcher, Registry, Value};

/// The reserved spelling of the default arm in spec documents.
pub const DEFAULT_KEY: &str = "$default";

/// Prefix marking a record-form key as a predicate reference.
pub const PREDICATE_PREFIX: char = '@';

/// A sequence-form predicate reference: `{"predicate": "is_string"}`.
#[derive(Debug, Clone, Deserialize)]
struct PredicateRef {
    predicate: String,
}

/// Compile a spec document into a validated [`Matcher`].
///
/// # Errors
///
/// - [`MatchError::SpecShape`] when the document is neither a record
///   nor a sequence.
/// - [`MatchError::UnknownPredicate`] for an unregistered reference.
/// - [`MatchError::InvalidSpec`] for a malformed predicate reference.
/// - The [`Matcher::new`] validation errors (`EmptyMatcher`,
///   `MissingDefault`, `DuplicateDefault`).
pub fn compile(spec: &Spec, registry: &Registry) -> Result<Matcher, MatchError> {
    let arms = match spec {
        Spec::Object(map) => map
            .iter()
            .map(|(key, eval)| arm_from_key(key, eval, registry))
            .collect::<Result<Vec<_>, _>>()?,
        Spec::Array(entries) => {
            let mut arms = Vec::with_capacity(entries.len());
            for entry in entries {
                // Non-pair entries are dropped, not rejected.
                let Some((expr, eval)) = as_pair(entry) else {
                    continue;
                };
                arms.push(arm_from_expr(expr, eval, registry)?);
            }
            arms
        }
        other => {
            return Err(MatchError::SpecShape {
                found: shape_name(other),
            })
        }
    };
    Matcher::new(arms)
}

/// Compile a spec document from JSON text.
///
/// # Errors
///
/// [`MatchError::InvalidSpec`] when the text is not valid JSON, plus
/// everything [`compile`] can return.
pub fn compile_str(text: &str, registry: &Registry) -> Result<Matcher, MatchError> {
    let spec: Spec = serde_json::from_str(text).map_err(|e| MatchError::InvalidSpec {
        detail: e.to_string(),
    })?;
    compile(&spec, registry)
}

fn shape_name(spec: &Spec) -> &'static str {
    match spec {
        Spec::Null => "null",
        Spec::Bool(_) => "bool",
        Spec::Number(_) => "number",
        Spec::String(_) => "string",
        Spec::Array(_) => "sequence",
        Spec::Object(_) => "record",
    }
}

fn as_pair(entry: &Spec) -> Option<(&Spec, &Spec)> {
    match entry.as_array() {
        Some(pair) if pair.len() == 2 => Some((&pair[0], &pair[1])),
        _ => None,
    }
}

/// Decode one record-form key/value pair.
fn arm_from_key(key: &str, eval: &Spec, registry: &Registry) -> Result<Arm, MatchError> {
    let evaluation = Evaluation::value(Value::from(eval));
    if key == DEFAULT_KEY {
        return Ok(Arm::fallback(evaluation));
    }
    if let Some(name) = key.strip_prefix(PREDICATE_PREFIX) {
        return Ok(Arm::new(MatchExpr::Predicate(registry.get(name)?), evaluation));
    }
    Ok(Arm::new(MatchExpr::Literal(literal_from_key(key)), evaluation))
}

/// Record-form keys are strings; a key that spells a JSON scalar means
/// that scalar (`"5"` is the number five), anything else is a string
/// literal.
fn literal_from_key(key: &str) -> Value {
    match serde_json::from_str::<Spec>(key) {
        Ok(scalar @ (Spec::Null | Spec::Bool(_) | Spec::Number(_))) => Value::from(scalar),
        _ => Value::String(key.to_string()),
    }
}

/// Decode one sequence-form `[expr, eval]` pair.
fn arm_from_expr(expr: &Spec, eval: &Spec, registry: &Registry) -> Result<Arm, MatchError> {
    let evaluation = Evaluation::value(Value::from(eval));
    match expr {
        Spec::String(s) if s == DEFAULT_KEY => Ok(Arm::fallback(evaluation)),
        Spec::Object(map) if map.contains_key("predicate") => {
            let reference: PredicateRef =
                serde_json::from_value(expr.clone()).map_err(|e| MatchError::InvalidSpec {
                    detail: format!("bad predicate reference: {e}"),
                })?;
            Ok(Arm::new(
                MatchExpr::Predicate(registry.get(&reference.predicate)?),
                evaluation,
            ))
        }
        other => Ok(Arm::new(
            MatchExpr::Literal(Value::from(other)),
            evaluation,
        )),
    }
}
