//! `Value` — The type-erased runtime value that predicates classify
//!
//! Every predicate and every match arm operates on this one enum.
//! Primitives stay stack-allocated; domain-specific values that the
//! primitives cannot express go through the [`CustomValue`] extension
//! point behind an `Arc`.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Extension trait for domain-specific values.
///
/// Implement this for types the primitive variants cannot express
/// (handles, callables, date-like values), then wrap with
/// `Value::Custom(Arc::new(your_type))`.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to keep `Value` shareable
/// across threads.
///
/// # Example
///
/// ```
/// use std::any::Any;
/// use std::sync::Arc;
/// use valmatch::{CustomValue, Value};
///
/// #[derive(Debug)]
/// struct Timestamp(i64);
///
/// impl CustomValue for Timestamp {
///     fn kind_name(&self) -> &'static str {
///         "date"
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
///
/// let value = Value::Custom(Arc::new(Timestamp(1_700_000_000)));
/// assert!(value.is_custom());
/// assert_eq!(value.type_name(), "date");
/// ```
pub trait CustomValue: Send + Sync + fmt::Debug {
    /// Returns the concrete kind of this value.
    ///
    /// Convention: use `snake_case` names. The container vocabulary in
    /// [`container`](crate::container) recognizes `"map"`, `"set"`,
    /// `"weak_map"`, `"weak_set"`, and `"date"`.
    fn kind_name(&self) -> &'static str;

    /// Returns a reference to `self` as `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Capability marker: this value can be invoked.
    ///
    /// Callability is declared, never probed. `classify::is_function`
    /// reads this marker and nothing else.
    fn is_callable(&self) -> bool {
        false
    }

    /// Capability marker: this value can construct new instances.
    ///
    /// Same contract as [`is_callable`](Self::is_callable) — a declared
    /// capability, not an attempt-and-catch classification.
    fn is_constructable(&self) -> bool {
        false
    }
}

/// A dynamic runtime value.
///
/// # Variants
///
/// - `Null` — the "no value" marker
/// - `Bool` / `Int` / `Float` / `String` — primitives
/// - `Array` — ordered sequence of values
/// - `Object` — string-keyed record
/// - `Custom` — domain extension via [`CustomValue`]
///
/// # Strict equality
///
/// `PartialEq` implements the equality the matcher uses for literal
/// arms: same-variant structural comparison, with two carve-outs.
/// `Int` and `Float` compare numerically across variants (`5 == 5.0`),
/// and `Float(NaN)` equals nothing, itself included. `Custom` values
/// compare by `Arc` identity — two separate allocations are never
/// equal, even when their contents agree.
///
/// # Example
///
/// ```
/// use valmatch::Value;
///
/// let v = Value::from("hello");
/// assert_eq!(v.as_str(), Some("hello"));
/// assert_eq!(Value::from(5i64), Value::from(5.0));
/// assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// The "no value" marker. Predicates treat this as absence.
    Null,

    /// Boolean value.
    Bool(bool),

    /// Integer-typed number.
    Int(i64),

    /// Float-typed number. `NaN` is representable but `is_number` rejects it.
    Float(f64),

    /// Textual value.
    String(String),

    /// Ordered sequence of values.
    Array(Vec<Value>),

    /// String-keyed record.
    Object(BTreeMap<String, Value>),

    /// Domain extension point. Compared by `Arc` identity.
    Custom(Arc<dyn CustomValue>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            // Numbers compare numerically across the Int/Float split.
            (Self::Int(a), Self::Float(b)) | (Self::Float(b), Self::Int(a)) => *a as f64 == *b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Value {
    /// Returns `true` if this is the `Null` variant.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if this is the `Bool` variant.
    #[inline]
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Returns `true` if this is the `Int` variant.
    #[inline]
    #[must_use]
    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Returns `true` if this is the `Float` variant.
    #[inline]
    #[must_use]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Returns `true` if this is the `String` variant.
    #[inline]
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Returns `true` if this is the `Array` variant.
    #[inline]
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Returns `true` if this is the `Object` variant.
    #[inline]
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Returns `true` if this is the `Custom` variant.
    #[inline]
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Try to get the value as a boolean.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as an `i64`. `Int` only — floats do not
    /// coerce here, even when integer-valued.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get the value as an `f64`. Both number variants qualify.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get the value as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Try to get the value as an array slice.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Try to get the value as an object map.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Try to get the value as a custom value reference.
    ///
    /// Use [`CustomValue::as_any`] to downcast to the concrete type.
    #[inline]
    #[must_use]
    pub fn as_custom(&self) -> Option<&dyn CustomValue> {
        match self {
            Self::Custom(c) => Some(c.as_ref()),
            _ => None,
        }
    }

    /// Returns a string describing the type of this value.
    ///
    /// For `Custom` variants this delegates to [`CustomValue::kind_name`].
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) | Self::Float(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Custom(c) => c.kind_name(),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Self::Custom(c) => f.write_str(c.kind_name()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self::Object(map)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

#[cfg(feature = "config")]
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                // u64 beyond i64::MAX, or a float.
                None => n.as_f64().map_or(Self::Null, Self::Float),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(feature = "config")]
impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        Value::from(json.clone())
    }
}
