//! Container-kind vocabulary — classification by concrete container
//!
//! A second, independent way to classify values: not by general shape
//! (see [`classify`](crate::classify)) but by which concrete built-in
//! container a value is. `Object` is a map; the remaining kinds are
//! carried by [`CustomValue`](crate::CustomValue) implementations via
//! their conventional [`kind_name`](crate::CustomValue::kind_name)
//! strings.
//!
//! Neither vocabulary depends on the other.

use crate::Value;

/// The concrete container kinds this vocabulary distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// String-keyed map (the `Object` variant).
    Map,
    /// Set of values (custom kind `"set"`).
    Set,
    /// Weakly-referencing map (custom kind `"weak_map"`).
    WeakMap,
    /// Weakly-referencing set (custom kind `"weak_set"`).
    WeakSet,
    /// Calendar date / timestamp (custom kind `"date"`).
    Date,
}

impl ContainerKind {
    /// The conventional `kind_name` string for this kind.
    #[must_use]
    pub fn kind_name(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Set => "set",
            Self::WeakMap => "weak_map",
            Self::WeakSet => "weak_set",
            Self::Date => "date",
        }
    }
}

/// Classify a value by concrete container kind.
///
/// Returns `None` for values that are not containers in this
/// vocabulary (primitives, arrays, custom values with unrecognized
/// kind names).
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use valmatch::container::{container_kind, ContainerKind};
/// use valmatch::Value;
///
/// let obj = Value::Object(BTreeMap::new());
/// assert_eq!(container_kind(&obj), Some(ContainerKind::Map));
/// assert_eq!(container_kind(&Value::from(1i64)), None);
/// ```
#[must_use]
pub fn container_kind(value: &Value) -> Option<ContainerKind> {
    match value {
        Value::Object(_) => Some(ContainerKind::Map),
        Value::Custom(c) => match c.kind_name() {
            "map" => Some(ContainerKind::Map),
            "set" => Some(ContainerKind::Set),
            "weak_map" => Some(ContainerKind::WeakMap),
            "weak_set" => Some(ContainerKind::WeakSet),
            "date" => Some(ContainerKind::Date),
            _ => None,
        },
        _ => None,
    }
}

/// True when the value is a map container.
#[inline]
#[must_use]
pub fn is_map(value: &Value) -> bool {
    container_kind(value) == Some(ContainerKind::Map)
}

/// True when the value is a set container.
#[inline]
#[must_use]
pub fn is_set(value: &Value) -> bool {
    container_kind(value) == Some(ContainerKind::Set)
}

/// True when the value is a weakly-referencing map.
#[inline]
#[must_use]
pub fn is_weak_map(value: &Value) -> bool {
    container_kind(value) == Some(ContainerKind::WeakMap)
}

/// True when the value is a weakly-referencing set.
#[inline]
#[must_use]
pub fn is_weak_set(value: &Value) -> bool {
    container_kind(value) == Some(ContainerKind::WeakSet)
}

/// True when the value is a date container.
#[inline]
#[must_use]
pub fn is_date(value: &Value) -> bool {
    container_kind(value) == Some(ContainerKind::Date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CustomValue;
    use std::any::Any;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    #[derive(Debug)]
    struct Kind(&'static str);

    impl CustomValue for Kind {
        fn kind_name(&self) -> &'static str {
            self.0
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn custom(kind: &'static str) -> Value {
        Value::Custom(Arc::new(Kind(kind)))
    }

    #[test]
    fn object_is_map() {
        let obj = Value::Object(BTreeMap::new());
        assert_eq!(container_kind(&obj), Some(ContainerKind::Map));
        assert!(is_map(&obj));
        assert!(!is_set(&obj));
    }

    #[test]
    fn custom_kinds() {
        assert!(is_map(&custom("map")));
        assert!(is_set(&custom("set")));
        assert!(is_weak_map(&custom("weak_map")));
        assert!(is_weak_set(&custom("weak_set")));
        assert!(is_date(&custom("date")));
        assert_eq!(container_kind(&custom("geo_location")), None);
    }

    #[test]
    fn non_containers() {
        for value in [
            Value::Null,
            Value::from(true),
            Value::from(1i64),
            Value::from("x"),
            Value::Array(vec![]),
        ] {
            assert_eq!(container_kind(&value), None);
            assert!(!is_map(&value));
            assert!(!is_date(&value));
        }
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in [
            ContainerKind::Map,
            ContainerKind::Set,
            ContainerKind::WeakMap,
            ContainerKind::WeakSet,
            ContainerKind::Date,
        ] {
            assert_eq!(container_kind(&custom(kind.kind_name())), Some(kind));
        }
    }
}
