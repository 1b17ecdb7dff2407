//! String predicate checkers
//!
//! HasPrefix, HasSuffix, and Contains compare byte-for-byte over a pair
//! of strings (obtained, expected). All three are stateless; the unit
//! structs double as the shared instances.

use crate::checker::{check_arity, param_label, CheckError, Checker, CheckerInfo, Outcome};
use crate::value::Value;

static HAS_PREFIX_INFO: CheckerInfo = CheckerInfo {
    name: "HasPrefix",
    params: &["obtained", "expected"],
};

static HAS_SUFFIX_INFO: CheckerInfo = CheckerInfo {
    name: "HasSuffix",
    params: &["obtained", "expected"],
};

static CONTAINS_INFO: CheckerInfo = CheckerInfo {
    name: "Contains",
    params: &["obtained", "expected"],
};

/// Passes when the obtained string starts with the expected prefix.
pub struct HasPrefix;

impl Checker for HasPrefix {
    fn info(&self) -> &CheckerInfo {
        &HAS_PREFIX_INFO
    }

    fn check(&self, values: &[Value], names: &[&str]) -> Outcome {
        string_check(&HAS_PREFIX_INFO, values, names, "start with", |s, p| {
            s.starts_with(p)
        })
    }
}

/// Passes when the obtained string ends with the expected suffix.
pub struct HasSuffix;

impl Checker for HasSuffix {
    fn info(&self) -> &CheckerInfo {
        &HAS_SUFFIX_INFO
    }

    fn check(&self, values: &[Value], names: &[&str]) -> Outcome {
        string_check(&HAS_SUFFIX_INFO, values, names, "end with", |s, p| {
            s.ends_with(p)
        })
    }
}

/// Passes when the expected string occurs anywhere within the obtained
/// string as a contiguous substring, boundaries included.
pub struct Contains;

impl Checker for Contains {
    fn info(&self) -> &CheckerInfo {
        &CONTAINS_INFO
    }

    fn check(&self, values: &[Value], names: &[&str]) -> Outcome {
        string_check(&CONTAINS_INFO, values, names, "contain", |s, p| {
            s.contains(p)
        })
    }
}

/// Shared core: extract both string slots, apply the predicate, and
/// render a mismatch message over both values.
fn string_check(
    info: &CheckerInfo,
    values: &[Value],
    names: &[&str],
    relation: &str,
    pred: impl Fn(&str, &str) -> bool,
) -> Outcome {
    if let Err(err) = check_arity(info, values) {
        return err.into();
    }
    let obtained = match expect_string(&values[0], param_label(info, names, 0)) {
        Ok(s) => s,
        Err(err) => return err.into(),
    };
    let expected = match expect_string(&values[1], param_label(info, names, 1)) {
        Ok(s) => s,
        Err(err) => return err.into(),
    };
    if pred(obtained, expected) {
        Outcome::Pass
    } else {
        Outcome::fail(format!(
            "{:?} does not {} {:?}",
            obtained, relation, expected
        ))
    }
}

fn expect_string(value: &Value, slot: String) -> Result<&str, CheckError> {
    match value {
        Value::String(s) => Ok(s.as_str()),
        other => Err(CheckError::Type {
            slot,
            expected: "string",
            got: other.type_name(),
        }),
    }
}
