//! `Arm` — One match expression paired with its evaluation
//!
//! The "is this expression a predicate or a literal?" decision is made
//! exactly once, when the arm is built: the expression is a tagged
//! [`MatchExpr`] variant, so selection never re-tests callability.
//! [`MatchExpr::Default`] is the fallback sentinel — a dedicated
//! variant no literal value can collide with.

use crate::Value;
use std::fmt;
use std::sync::Arc;

/// A predicate installed as a match expression.
pub type PredicateFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A lazily-invoked evaluation. Called with the original input value
/// only when its arm is selected.
pub type ThunkFn = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// What an arm matches on.
#[derive(Clone)]
pub enum MatchExpr {
    /// The fallback sentinel. Unforgeable: a distinct variant, not a
    /// reserved literal, so caller data can never collide with it.
    /// Skipped during the explicit scan; selected only when nothing
    /// else matches.
    Default,

    /// Matches when strictly equal to the input value.
    Literal(Value),

    /// Matches when the predicate returns `true` for the input value.
    Predicate(PredicateFn),
}

impl MatchExpr {
    /// Build a literal expression.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Build a predicate expression.
    pub fn predicate(f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Arc::new(f))
    }

    /// Returns `true` if this is the default sentinel.
    #[inline]
    #[must_use]
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// Does this expression match the given value?
    ///
    /// The default sentinel never matches here — fallback selection is
    /// the matcher's job, not the expression's.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Default => false,
            Self::Literal(literal) => literal == value,
            Self::Predicate(predicate) => predicate(value),
        }
    }
}

impl fmt::Debug for MatchExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            Self::Predicate(_) => f.debug_tuple("Predicate").field(&"..").finish(),
        }
    }
}

/// What a selected arm produces.
#[derive(Clone)]
pub enum Evaluation {
    /// Returned as-is. Never invoked, even if the value happens to be
    /// a callable custom value.
    Value(Value),

    /// Invoked with the original input value, lazily — only when this
    /// arm is selected.
    Thunk(ThunkFn),
}

impl Evaluation {
    /// Build a literal evaluation.
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    /// Build a lazy evaluation.
    pub fn thunk(f: impl Fn(&Value) -> Value + Send + Sync + 'static) -> Self {
        Self::Thunk(Arc::new(f))
    }

    /// Resolve this evaluation for the given input value.
    #[must_use]
    pub fn resolve(&self, value: &Value) -> Value {
        match self {
            Self::Value(v) => v.clone(),
            Self::Thunk(f) => f(value),
        }
    }
}

impl fmt::Debug for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Thunk(_) => f.debug_tuple("Thunk").field(&"..").finish(),
        }
    }
}

/// One arm of a matcher: expression + evaluation.
///
/// # Example
///
/// ```
/// use valmatch::{classify, Arm, Evaluation, Value};
///
/// let literal = Arm::literal(5i64, Evaluation::value("five"));
/// let predicate = Arm::when(classify::is_string, Evaluation::value("text"));
/// let fallback = Arm::fallback(Evaluation::value("other"));
///
/// assert!(literal.expr.matches(&Value::from(5i64)));
/// assert!(predicate.expr.matches(&Value::from("hi")));
/// assert!(fallback.expr.is_default());
/// ```
#[derive(Debug, Clone)]
pub struct Arm {
    /// What this arm matches on.
    pub expr: MatchExpr,

    /// What this arm produces when selected.
    pub evaluation: Evaluation,
}

impl Arm {
    /// Create an arm from any expression and evaluation.
    #[must_use]
    pub fn new(expr: MatchExpr, evaluation: Evaluation) -> Self {
        Self { expr, evaluation }
    }

    /// Create a literal arm: matches by strict equality.
    pub fn literal(value: impl Into<Value>, evaluation: Evaluation) -> Self {
        Self::new(MatchExpr::literal(value), evaluation)
    }

    /// Create a predicate arm: matches when `f` returns `true`.
    pub fn when(
        f: impl Fn(&Value) -> bool + Send + Sync + 'static,
        evaluation: Evaluation,
    ) -> Self {
        Self::new(MatchExpr::predicate(f), evaluation)
    }

    /// Create the default (fallback) arm.
    #[must_use]
    pub fn fallback(evaluation: Evaluation) -> Self {
        Self::new(MatchExpr::Default, evaluation)
    }
}
