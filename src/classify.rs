//! Classification predicates — "is this value of kind K"
//!
//! Every function in this module is total over [`Value`]: any input,
//! including `Null`, `NaN`, empty containers, and deeply nested
//! structures, produces a boolean. Nothing here panics and nothing
//! here has side effects.
//!
//! These predicates are used two ways: called directly, or installed
//! as match expressions on [`Arm`](crate::Arm)s (plain `fn` items
//! coerce into the arm's predicate type).

use crate::Value;

/// True when the value is absent (the `Null` marker).
#[inline]
#[must_use]
pub fn is_missing(value: &Value) -> bool {
    value.is_null()
}

/// True when the value is not absent.
#[inline]
#[must_use]
pub fn is_present(value: &Value) -> bool {
    !value.is_null()
}

/// True when the value is boolean-typed.
#[inline]
#[must_use]
pub fn is_boolean(value: &Value) -> bool {
    value.is_bool()
}

/// True when the value is a sequence container.
#[inline]
#[must_use]
pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// True when the value is a present, non-array record.
#[inline]
#[must_use]
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

/// True when the value is textual.
#[inline]
#[must_use]
pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// True when the value is numeric and not `NaN`.
#[inline]
#[must_use]
pub fn is_number(value: &Value) -> bool {
    match value {
        Value::Int(_) => true,
        Value::Float(f) => !f.is_nan(),
        _ => false,
    }
}

/// True when the value is callable.
///
/// Callability is a declared capability on
/// [`CustomValue`](crate::CustomValue::is_callable), never probed.
#[inline]
#[must_use]
pub fn is_function(value: &Value) -> bool {
    value.as_custom().is_some_and(|c| c.is_callable())
}

/// True when the value can construct new instances.
///
/// Reads the [`CustomValue::is_constructable`](crate::CustomValue::is_constructable)
/// capability marker.
#[inline]
#[must_use]
pub fn is_constructable(value: &Value) -> bool {
    value.as_custom().is_some_and(|c| c.is_constructable())
}

/// True when the value is a string with at least one byte.
#[inline]
#[must_use]
pub fn is_non_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.is_empty())
}

/// True when the value is an array with at least one item.
#[inline]
#[must_use]
pub fn is_non_empty_array(value: &Value) -> bool {
    value.as_array().is_some_and(|items| !items.is_empty())
}

/// True when the value is strictly the boolean `true`.
#[inline]
#[must_use]
pub fn is_true(value: &Value) -> bool {
    value.as_bool() == Some(true)
}

/// True when the value is an integer-valued number greater than zero.
///
/// `Float` values qualify only when finite and without a fractional
/// part, so `3.0` passes and `3.5`, `NaN`, and infinities do not.
#[must_use]
pub fn is_positive_integer(value: &Value) -> bool {
    match value {
        Value::Int(i) => *i > 0,
        Value::Float(f) => f.is_finite() && f.fract() == 0.0 && *f > 0.0,
        _ => false,
    }
}

/// True when the value is an integer-valued number of at least zero.
#[must_use]
pub fn is_non_negative_integer(value: &Value) -> bool {
    match value {
        Value::Int(i) => *i >= 0,
        Value::Float(f) => f.is_finite() && f.fract() == 0.0 && *f >= 0.0,
        _ => false,
    }
}

/// True when the value is an array of length exactly 1.
#[inline]
#[must_use]
pub fn has_one_item(value: &Value) -> bool {
    value.as_array().is_some_and(|items| items.len() == 1)
}

/// True when the value is an array of length greater than 1.
#[inline]
#[must_use]
pub fn has_multiple_items(value: &Value) -> bool {
    value.as_array().is_some_and(|items| items.len() > 1)
}

/// True when the value is an object whose key set equals `keys` as a set.
///
/// Duplicate entries in `keys` collapse; order is irrelevant.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use valmatch::{classify, Value};
///
/// let mut map = BTreeMap::new();
/// map.insert("a".to_string(), Value::from(1i64));
/// map.insert("b".to_string(), Value::from(2i64));
/// let obj = Value::Object(map);
///
/// assert!(classify::has_only_keys(&obj, &["b", "a"]));
/// assert!(!classify::has_only_keys(&obj, &["a"]));
/// assert!(!classify::has_only_keys(&obj, &["a", "b", "c"]));
/// ```
#[must_use]
pub fn has_only_keys(value: &Value, keys: &[&str]) -> bool {
    let Some(map) = value.as_object() else {
        return false;
    };
    let expected: std::collections::BTreeSet<&str> = keys.iter().copied().collect();
    map.len() == expected.len() && map.keys().all(|k| expected.contains(k.as_str()))
}

/// Strict equality between two values (see [`Value`]'s `PartialEq` contract).
#[inline]
#[must_use]
pub fn is_equal(a: &Value, b: &Value) -> bool {
    a == b
}
