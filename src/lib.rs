//! valmatch - runtime value classification and first-match-wins dispatch
//!
//! Two layers, leaf-first:
//!
//! - **Predicate layer** — total, never-panicking classification
//!   functions over a dynamic [`Value`]: [`classify`] answers "what
//!   shape is this?" and [`container`] answers "which concrete
//!   container is this?". The two vocabularies are independent.
//! - **Matcher layer** — an ordered list of [`Arm`]s (match expression
//!   + evaluation), validated up front and evaluated against a value
//!   with first-match-wins semantics and a mandatory default arm.
//!
//! # Key Design Points
//!
//! 1. **Tagged expressions**: whether an arm matches by strict
//!    equality or by predicate is decided once, when the [`MatchExpr`]
//!    is built — never re-tested during selection.
//!
//! 2. **Unforgeable default**: the fallback sentinel is the dedicated
//!    [`MatchExpr::Default`] variant. No literal a caller can supply
//!    collides with it.
//!
//! 3. **Explicit order**: arms are an ordered list; first-match-wins
//!    depends only on construction order, never on any map's
//!    enumeration order.
//!
//! # Example
//!
//! ```
//! use valmatch::{classify, Arm, Evaluation, Matcher, Value};
//!
//! let matcher = Matcher::new(vec![
//!     Arm::literal(5i64, Evaluation::value("five")),
//!     Arm::when(
//!         classify::is_positive_integer,
//!         Evaluation::thunk(|v| Value::from(format!("positive:{v}"))),
//!     ),
//!     Arm::fallback(Evaluation::value("other")),
//! ])?;
//!
//! assert_eq!(matcher.evaluate(&Value::from(5i64)), Value::from("five"));
//! assert_eq!(matcher.evaluate(&Value::from(3i64)), Value::from("positive:3"));
//! assert_eq!(matcher.evaluate(&Value::from(-3i64)), Value::from("other"));
//! # Ok::<(), valmatch::MatchError>(())
//! ```
//!
//! # Spec documents
//!
//! With the default-on `config` feature, matchers also compile from
//! dynamic spec documents (a keyed record or a sequence of
//! `[expression, evaluation]` pairs) via [`compile`], with named
//! predicates resolved through a [`Registry`]. See the
//! [`config`] module.

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod arm;
mod matcher;
mod registry;
mod value;

pub mod classify;
pub mod container;
pub mod trace;

#[cfg(feature = "config")]
pub mod config;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use arm::{Arm, Evaluation, MatchExpr, PredicateFn, ThunkFn};
pub use matcher::{match_value, Matcher};
pub use registry::{Registry, RegistryBuilder};
pub use trace::{ArmTrace, EvalTrace};
pub use value::{CustomValue, Value};

pub use container::ContainerKind;

#[cfg(feature = "config")]
pub use config::{compile, compile_str};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use valmatch::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "config")]
    pub use crate::{compile, compile_str};
    pub use crate::{
        match_value,
        Arm,
        ArmTrace,
        ContainerKind,
        CustomValue,
        Evaluation,
        EvalTrace,
        // Errors
        MatchError,
        MatchExpr,
        Matcher,
        PredicateFn,
        Registry,
        RegistryBuilder,
        ThunkFn,
        Value,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from matcher normalization and validation.
///
/// All of these fire before or during construction — a built
/// [`Matcher`] never fails to evaluate. Every failure is immediate and
/// total for its invocation; there is no retry or partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A spec document is neither a record nor a sequence.
    SpecShape {
        /// The shape that was found instead.
        found: &'static str,
    },
    /// Normalization produced zero arms.
    EmptyMatcher,
    /// No arm carries the default sentinel.
    MissingDefault,
    /// More than one arm carries the default sentinel.
    DuplicateDefault {
        /// How many default arms were found.
        count: usize,
    },
    /// A predicate reference names nothing in the registry.
    UnknownPredicate {
        /// The unresolved name.
        name: String,
        /// Names that ARE registered (for self-correcting error messages).
        available: Vec<String>,
    },
    /// A well-shaped spec entry is malformed inside.
    InvalidSpec {
        /// The underlying problem.
        detail: String,
    },
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SpecShape { found } => {
                write!(f, "matcher spec must be a record or a sequence, got {found}")
            }
            Self::EmptyMatcher => {
                write!(f, "empty matcher: normalization produced zero arms")
            }
            Self::MissingDefault => {
                write!(f, "no default arm: exactly one arm must carry the default sentinel")
            }
            Self::DuplicateDefault { count } => {
                write!(f, "matcher has {count} default arms, but exactly one is allowed")
            }
            Self::UnknownPredicate { name, available } => {
                write!(f, "unknown predicate \"{name}\"")?;
                if available.is_empty() {
                    write!(f, " — no predicates are registered")
                } else {
                    write!(f, " — registered: {}", available.join(", "))
                }
            }
            Self::InvalidSpec { detail } => {
                write!(f, "invalid matcher spec: {detail}")
            }
        }
    }
}

impl std::error::Error for MatchError {}
