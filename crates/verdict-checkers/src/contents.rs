//! Order-insensitive sequence comparison
//!
//! SameContents treats both sequences as multisets: every distinct value
//! must occur the same number of times on each side, element order is
//! irrelevant. Counting is hash-based, so the comparison stays linear in
//! the combined sequence lengths.

use crate::checker::{check_arity, param_label, CheckError, Checker, CheckerInfo, Outcome};
use crate::value::{HashKey, Value};
use std::collections::HashMap;
use std::hash::Hash;

static SAME_CONTENTS_INFO: CheckerInfo = CheckerInfo {
    name: "SameContents",
    params: &["obtained", "expected"],
};

/// Passes when two sequences hold the same elements with the same
/// occurrence counts, in any order.
///
/// Preconditions, each its own failure mode: both values must be
/// sequences, and both must carry the same element type. Elements key by
/// value, so structurally-equal records or nested arrays count as the
/// same element.
pub struct SameContents;

impl Checker for SameContents {
    fn info(&self) -> &CheckerInfo {
        &SAME_CONTENTS_INFO
    }

    fn check(&self, values: &[Value], names: &[&str]) -> Outcome {
        if let Err(err) = check_arity(&SAME_CONTENTS_INFO, values) {
            return err.into();
        }
        let obtained = match expect_sequence(&values[0], param_label(&SAME_CONTENTS_INFO, names, 0))
        {
            Ok(seq) => seq,
            Err(err) => return err.into(),
        };
        let expected = match expect_sequence(&values[1], param_label(&SAME_CONTENTS_INFO, names, 1))
        {
            Ok(seq) => seq,
            Err(err) => return err.into(),
        };
        if let Err(err) = check_element_types(obtained, expected, names) {
            return err.into();
        }

        let got = multiset(obtained.iter().map(HashKey::from_value));
        let want = multiset(expected.iter().map(HashKey::from_value));
        if got == want {
            return Outcome::Pass;
        }

        let (missing, extra) = multiset_diff(&got, &want);
        let mut parts = Vec::new();
        if !missing.is_empty() {
            parts.push(format!("missing from obtained: [{}]", render(&missing)));
        }
        if !extra.is_empty() {
            parts.push(format!("extra in obtained: [{}]", render(&extra)));
        }
        Outcome::Fail(parts.join("; "))
    }
}

/// Occurrence count per distinct element.
fn multiset<T, I>(items: I) -> HashMap<T, usize>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Duplicate-aware difference: elements of `want` unmatched in `got`
/// (missing) and elements of `got` unmatched in `want` (extra).
fn multiset_diff<T>(got: &HashMap<T, usize>, want: &HashMap<T, usize>) -> (Vec<T>, Vec<T>)
where
    T: Eq + Hash + Clone,
{
    let mut missing = Vec::new();
    for (key, want_count) in want {
        let have = got.get(key).copied().unwrap_or(0);
        for _ in have..*want_count {
            missing.push(key.clone());
        }
    }
    let mut extra = Vec::new();
    for (key, got_count) in got {
        let wanted = want.get(key).copied().unwrap_or(0);
        for _ in wanted..*got_count {
            extra.push(key.clone());
        }
    }
    (missing, extra)
}

fn expect_sequence<'a>(value: &'a Value, slot: String) -> Result<&'a [Value], CheckError> {
    match value {
        Value::Array(arr) => Ok(arr.as_slice()),
        other => Err(CheckError::Shape {
            slot,
            got: other.type_name(),
        }),
    }
}

/// Element-type agreement between the two sequences. An empty sequence
/// has no observable element type and is compatible with anything.
fn check_element_types(
    obtained: &[Value],
    expected: &[Value],
    names: &[&str],
) -> Result<(), CheckError> {
    let got = uniform_element_type(obtained, param_label(&SAME_CONTENTS_INFO, names, 0))?;
    let want = uniform_element_type(expected, param_label(&SAME_CONTENTS_INFO, names, 1))?;
    match (got, want) {
        (Some(got), Some(want)) if got != want => Err(CheckError::ElementType {
            obtained: got.to_string(),
            expected: want.to_string(),
        }),
        _ => Ok(()),
    }
}

fn uniform_element_type(seq: &[Value], slot: String) -> Result<Option<&'static str>, CheckError> {
    let mut seen: Option<&'static str> = None;
    for value in seq {
        match seen {
            None => seen = Some(value.type_name()),
            Some(ty) if ty == value.type_name() => {}
            Some(ty) => {
                return Err(CheckError::MixedElements {
                    slot,
                    found: format!("{}, {}", ty, value.type_name()),
                });
            }
        }
    }
    Ok(seen)
}

/// Deterministic rendering: display forms, sorted. HashMap iteration
/// order must not leak into diagnostics.
fn render(keys: &[HashKey]) -> String {
    let mut items: Vec<String> = keys.iter().map(|key| key.to_value().to_string()).collect();
    items.sort();
    items.join(", ")
}
