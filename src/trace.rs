//! Evaluation traces — what the matcher actually did
//!
//! Structured debugging data for
//! [`Matcher::evaluate_with_trace`](crate::Matcher::evaluate_with_trace).
//! Traces are plain data; they carry no handles into the matcher that
//! produced them.

use crate::Value;

/// Trace of one full matcher evaluation.
///
/// # INV: `result` == `evaluate()` result
///
/// The `result` field always equals what
/// [`Matcher::evaluate`](crate::Matcher::evaluate) would return for
/// the same input.
#[derive(Debug, Clone)]
pub struct EvalTrace {
    /// The final result (identical to what `evaluate()` returns).
    pub result: Value,

    /// Every non-default arm checked, in order. Stops after the first
    /// match — the trace records what happened, it does not keep
    /// scanning for debugging's sake.
    pub steps: Vec<ArmTrace>,

    /// Whether the default arm supplied the result.
    pub used_default: bool,
}

/// One arm's check within a trace.
#[derive(Debug, Clone)]
pub struct ArmTrace {
    /// Index of the arm in the matcher's arm list (0-based).
    pub index: usize,

    /// Debug rendering of the arm's match expression.
    pub expr: String,

    /// Did the expression match?
    pub matched: bool,
}
