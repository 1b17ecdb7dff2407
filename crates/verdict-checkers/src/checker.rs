//! Checker contract shared by every predicate
//!
//! A checker is a named, pure predicate over runtime values. The harness
//! constructs an invocation (values plus parameter names), calls `check`
//! once, and interprets the outcome. Type and shape mismatches are
//! reported through the outcome, never as a panic, so the harness can
//! treat every checker uniformly.

use crate::value::Value;
use thiserror::Error;

/// Static description of a checker: display name plus parameter labels.
///
/// The harness uses the name in rendered reports and the label count to
/// reject malformed assertions before invoking the checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerInfo {
    pub name: &'static str,
    pub params: &'static [&'static str],
}

/// Malformed-input failure for a single check
///
/// Every variant is a value, never a panic: a checker resolves mismatches
/// locally and hands the harness a diagnostic through [`Outcome::Error`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// Wrong number of values for this checker
    #[error("{name} expects {expected} argument(s), got {got}")]
    Arity {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    /// A value's runtime type does not match what the checker requires
    #[error("{slot} value type must be {expected}, got {got}")]
    Type {
        slot: String,
        expected: &'static str,
        got: &'static str,
    },
    /// A value required to be a sequence is not one
    #[error("{slot} value is not a sequence, got {got}")]
    Shape { slot: String, got: &'static str },
    /// Two sequences carry different element types
    #[error("element types differ: {obtained} vs {expected}")]
    ElementType { obtained: String, expected: String },
    /// A sequence mixes element types and cannot be compared
    #[error("{slot} sequence has mixed element types ({found})")]
    MixedElements { slot: String, found: String },
}

/// Result of a single check
///
/// The error/mismatch distinction is structural: a `Fail` means the
/// predicate meaningfully ran and was false, an `Error` means the inputs
/// were malformed for this checker. Negation inverts only the former.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Predicate holds
    Pass,
    /// Predicate is false; the message explains the mismatch.
    /// Empty only when produced by [`Not`] inverting a pass.
    Fail(String),
    /// Input malformed for this checker (wrong type or shape)
    Error(CheckError),
}

impl Outcome {
    /// Build a failing outcome with a diagnostic message
    pub fn fail(message: impl Into<String>) -> Self {
        Outcome::Fail(message.into())
    }

    /// True iff the predicate held
    pub fn ok(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    /// True iff the inputs were malformed for the checker
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    /// Diagnostic message; empty on a pass
    pub fn message(&self) -> String {
        match self {
            Outcome::Pass => String::new(),
            Outcome::Fail(msg) => msg.clone(),
            Outcome::Error(err) => err.to_string(),
        }
    }

    /// Flatten into the (ok, message) pair the harness consumes
    pub fn into_parts(self) -> (bool, String) {
        match self {
            Outcome::Pass => (true, String::new()),
            Outcome::Fail(msg) => (false, msg),
            Outcome::Error(err) => (false, err.to_string()),
        }
    }
}

impl From<CheckError> for Outcome {
    fn from(err: CheckError) -> Self {
        Outcome::Error(err)
    }
}

/// A named, pure predicate over runtime values
///
/// The first value is conventionally "obtained" (produced by the system
/// under test), the second "expected" (authored by the test). Single-value
/// checkers (TimeBetween, IsTrue, IsFalse) take only "obtained".
/// Implementations hold no mutable state, so one instance may be checked
/// concurrently from any number of threads.
pub trait Checker: Send + Sync {
    /// Display name and parameter labels, for harness-side reporting
    fn info(&self) -> &CheckerInfo;

    /// Run the predicate over `values`. `names` are parallel labels used
    /// purely for message rendering; missing or empty names fall back to
    /// the checker's own parameter labels.
    fn check(&self, values: &[Value], names: &[&str]) -> Outcome;
}

/// Structural negation of another checker
///
/// Policy for errors (documented decision): a type or shape error means
/// the assertion never meaningfully ran, so it is reported unchanged
/// rather than inverted into a pass. A plain `Fail` inverts to `Pass`
/// with its message suppressed; a `Pass` inverts to `Fail` with an empty
/// message. `info()` reports the wrapped checker unchanged; decorating
/// the display name is the harness's rendering concern.
pub struct Not<C>(pub C);

impl<C: Checker> Checker for Not<C> {
    fn info(&self) -> &CheckerInfo {
        self.0.info()
    }

    fn check(&self, values: &[Value], names: &[&str]) -> Outcome {
        match self.0.check(values, names) {
            Outcome::Pass => Outcome::Fail(String::new()),
            Outcome::Fail(_) => Outcome::Pass,
            err @ Outcome::Error(_) => err,
        }
    }
}

/// Verify the invocation carries exactly one value per parameter label.
/// Nominally the harness validates arity, but indexing a short slice
/// would panic, which the checker contract forbids.
pub(crate) fn check_arity(info: &CheckerInfo, values: &[Value]) -> Result<(), CheckError> {
    if values.len() != info.params.len() {
        return Err(CheckError::Arity {
            name: info.name,
            expected: info.params.len(),
            got: values.len(),
        });
    }
    Ok(())
}

/// Label for the value in slot `index`: the caller-supplied name when
/// present and non-empty, else the checker's own parameter label.
pub(crate) fn param_label(info: &CheckerInfo, names: &[&str], index: usize) -> String {
    names
        .get(index)
        .copied()
        .filter(|name| !name.is_empty())
        .or_else(|| info.params.get(index).copied())
        .unwrap_or("value")
        .to_string()
}
