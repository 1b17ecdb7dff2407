//! Boolean convenience checkers
//!
//! IsTrue and IsFalse take a single obtained value. They exist so a
//! harness can assert directly on a boolean result without an expected
//! slot.

use crate::checker::{check_arity, param_label, CheckError, Checker, CheckerInfo, Outcome};
use crate::value::Value;

static IS_TRUE_INFO: CheckerInfo = CheckerInfo {
    name: "IsTrue",
    params: &["obtained"],
};

static IS_FALSE_INFO: CheckerInfo = CheckerInfo {
    name: "IsFalse",
    params: &["obtained"],
};

/// Passes when the obtained value is the boolean `true`.
pub struct IsTrue;

impl Checker for IsTrue {
    fn info(&self) -> &CheckerInfo {
        &IS_TRUE_INFO
    }

    fn check(&self, values: &[Value], names: &[&str]) -> Outcome {
        bool_check(&IS_TRUE_INFO, values, names, true)
    }
}

/// Passes when the obtained value is the boolean `false`.
pub struct IsFalse;

impl Checker for IsFalse {
    fn info(&self) -> &CheckerInfo {
        &IS_FALSE_INFO
    }

    fn check(&self, values: &[Value], names: &[&str]) -> Outcome {
        bool_check(&IS_FALSE_INFO, values, names, false)
    }
}

fn bool_check(info: &CheckerInfo, values: &[Value], names: &[&str], want: bool) -> Outcome {
    if let Err(err) = check_arity(info, values) {
        return err.into();
    }
    match &values[0] {
        Value::Bool(got) if *got == want => Outcome::Pass,
        Value::Bool(got) => Outcome::fail(format!("expected {}, got {}", want, got)),
        other => CheckError::Type {
            slot: param_label(info, names, 0),
            expected: "bool",
            got: other.type_name(),
        }
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_true() {
        assert!(IsTrue.check(&[Value::Bool(true)], &[]).ok());
        let outcome = IsTrue.check(&[Value::Bool(false)], &[]);
        assert_eq!(outcome.message(), "expected true, got false");
    }

    #[test]
    fn test_is_false() {
        assert!(IsFalse.check(&[Value::Bool(false)], &[]).ok());
        let outcome = IsFalse.check(&[Value::Bool(true)], &[]);
        assert_eq!(outcome.message(), "expected false, got true");
    }

    #[test]
    fn test_non_bool_is_a_type_error() {
        let outcome = IsTrue.check(&[Value::from(1)], &[]);
        assert!(outcome.is_error());
        assert_eq!(
            outcome.message(),
            "obtained value type must be bool, got number"
        );
    }
}
