//! Inclusive time-range checker
//!
//! `TimeBetween` is the one checker produced by a factory: it closes over
//! two endpoint instants at construction. Unlike the binary checkers it
//! accepts a single obtained value; there is no expected slot, the
//! expectation is the range itself.

use crate::checker::{check_arity, param_label, CheckError, Checker, CheckerInfo, Outcome};
use crate::value::Value;
use chrono::{DateTime, Utc};

static TIME_BETWEEN_INFO: CheckerInfo = CheckerInfo {
    name: "TimeBetween",
    params: &["obtained"],
};

/// Passes when the obtained instant falls inside the closed range spanned
/// by the two construction-time endpoints.
///
/// The endpoints may be supplied in either order; whichever is
/// chronologically earlier acts as the lower bound. Equality to either
/// bound passes, and equal endpoints collapse the range to one instant.
/// Comparisons use chrono's absolute-instant ordering on
/// `DateTime<Utc>`, never wall-clock display semantics.
pub struct TimeBetween {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeBetween {
    /// Bind a range checker to two endpoint instants. The raw values are
    /// stored as given; ordering is normalized at check time.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        TimeBetween { start, end }
    }
}

impl Checker for TimeBetween {
    fn info(&self) -> &CheckerInfo {
        &TIME_BETWEEN_INFO
    }

    fn check(&self, values: &[Value], names: &[&str]) -> Outcome {
        if let Err(err) = check_arity(&TIME_BETWEEN_INFO, values) {
            return err.into();
        }
        let obtained = match &values[0] {
            Value::DateTime(dt) => **dt,
            other => {
                return CheckError::Type {
                    slot: param_label(&TIME_BETWEEN_INFO, names, 0),
                    expected: "datetime",
                    got: other.type_name(),
                }
                .into()
            }
        };

        let (lower, upper) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };

        if obtained < lower {
            return Outcome::fail(format!(
                "obtained time {} is before start time {}",
                obtained.to_rfc3339(),
                lower.to_rfc3339()
            ));
        }
        if obtained > upper {
            return Outcome::fail(format!(
                "obtained time {} is after end time {}",
                obtained.to_rfc3339(),
                upper.to_rfc3339()
            ));
        }
        Outcome::Pass
    }
}
