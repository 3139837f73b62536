//! `Matcher` — Ordered arms with first-match-wins selection
//!
//! Validation happens at construction, selection at evaluation.
//! A constructed matcher is immutable; evaluating it never fails.

use crate::trace::{ArmTrace, EvalTrace};
use crate::{Arm, MatchError, Value};

/// An ordered, validated list of match arms.
///
/// Construction enforces the arm-list invariants:
///
/// - at least one arm ([`MatchError::EmptyMatcher`]),
/// - exactly one default arm ([`MatchError::MissingDefault`] /
///   [`MatchError::DuplicateDefault`]).
///
/// # First-match-wins
///
/// Arms are scanned in construction order with the default arm
/// skipped. The first arm whose expression matches terminates the
/// scan, even when later arms would also match. Only when no arm
/// matches is the default arm selected. The default's position in
/// the list is irrelevant — it never participates in the scan.
///
/// # Example
///
/// ```
/// use valmatch::{classify, Arm, Evaluation, Matcher, Value};
///
/// let matcher = Matcher::new(vec![
///     Arm::literal(5i64, Evaluation::value("five")),
///     Arm::when(classify::is_positive_integer, Evaluation::value("pos")),
///     Arm::fallback(Evaluation::value("other")),
/// ])?;
///
/// assert_eq!(matcher.evaluate(&Value::from(5i64)), Value::from("five"));
/// assert_eq!(matcher.evaluate(&Value::from(9i64)), Value::from("pos"));
/// assert_eq!(matcher.evaluate(&Value::from(-1i64)), Value::from("other"));
/// # Ok::<(), valmatch::MatchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Matcher {
    arms: Vec<Arm>,
    default_index: usize,
}

impl Matcher {
    /// Create a matcher from an ordered arm list.
    ///
    /// # Errors
    ///
    /// - [`MatchError::EmptyMatcher`] when `arms` is empty.
    /// - [`MatchError::MissingDefault`] when no arm is the default.
    /// - [`MatchError::DuplicateDefault`] when more than one is.
    pub fn new(arms: Vec<Arm>) -> Result<Self, MatchError> {
        if arms.is_empty() {
            return Err(MatchError::EmptyMatcher);
        }

        let mut defaults = arms
            .iter()
            .enumerate()
            .filter(|(_, arm)| arm.expr.is_default());
        let default_index = match defaults.next() {
            None => return Err(MatchError::MissingDefault),
            Some((index, _)) => index,
        };
        let extra = defaults.count();
        if extra > 0 {
            return Err(MatchError::DuplicateDefault { count: extra + 1 });
        }

        Ok(Self {
            arms,
            default_index,
        })
    }

    /// The arms, in construction order (default arm included).
    #[must_use]
    pub fn arms(&self) -> &[Arm] {
        &self.arms
    }

    /// Index of the default arm within [`arms`](Self::arms).
    #[must_use]
    pub fn default_index(&self) -> usize {
        self.default_index
    }

    /// Evaluate the matcher against a value.
    ///
    /// Scans non-default arms in order and resolves the first matching
    /// arm's evaluation; falls back to the default arm when nothing
    /// matches. Panics raised by caller-supplied predicates or thunks
    /// propagate unwrapped.
    #[must_use]
    pub fn evaluate(&self, value: &Value) -> Value {
        for (index, arm) in self.arms.iter().enumerate() {
            if index == self.default_index {
                continue;
            }
            if arm.expr.matches(value) {
                return arm.evaluation.resolve(value);
            }
        }
        self.arms[self.default_index].evaluation.resolve(value)
    }

    /// Evaluate with a per-arm trace.
    ///
    /// The trace records every arm checked, in order, stopping after
    /// the first match (first-match-wins is preserved, not simulated).
    /// `trace.result` always equals what [`evaluate`](Self::evaluate)
    /// returns for the same input.
    #[must_use]
    pub fn evaluate_with_trace(&self, value: &Value) -> EvalTrace {
        let mut steps = Vec::new();
        for (index, arm) in self.arms.iter().enumerate() {
            if index == self.default_index {
                continue;
            }
            let matched = arm.expr.matches(value);
            steps.push(ArmTrace {
                index,
                expr: format!("{:?}", arm.expr),
                matched,
            });
            if matched {
                return EvalTrace {
                    result: arm.evaluation.resolve(value),
                    steps,
                    used_default: false,
                };
            }
        }
        EvalTrace {
            result: self.arms[self.default_index].evaluation.resolve(value),
            steps,
            used_default: true,
        }
    }
}

/// One-shot dispatch: build an arm list, validate it, evaluate it,
/// discard it.
///
/// The arm list lives for exactly this call — nothing is retained or
/// shared between invocations.
///
/// # Errors
///
/// Same validation errors as [`Matcher::new`].
///
/// # Example
///
/// ```
/// use valmatch::{match_value, Arm, Evaluation, Value};
///
/// let result = match_value(
///     &Value::from(5i64),
///     vec![
///         Arm::literal(5i64, Evaluation::value("five")),
///         Arm::fallback(Evaluation::value("other")),
///     ],
/// )?;
/// assert_eq!(result, Value::from("five"));
/// # Ok::<(), valmatch::MatchError>(())
/// ```
pub fn match_value(value: &Value, arms: Vec<Arm>) -> Result<Value, MatchError> {
    Matcher::new(arms).map(|matcher| matcher.evaluate(value))
}
