//! Property tests for checker invariants
//!
//! Covers the algebraic properties the predicates promise: slice
//! membership for the string checkers, bound order-independence for
//! TimeBetween, count equivalence for SameContents, and purity.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use std::collections::BTreeMap;
use verdict_checkers::{Checker, Contains, HasPrefix, HasSuffix, SameContents, TimeBetween, Value};

fn str_values(s: &str, p: &str) -> [Value; 2] {
    [s.into(), p.into()]
}

fn number_array(values: &[i8]) -> Value {
    Value::array(values.iter().map(|n| Value::from(f64::from(*n))).collect())
}

proptest! {
    /// Any slice of a string is a substring; leading slices are prefixes
    /// and trailing slices are suffixes.
    #[test]
    fn string_predicates_accept_actual_slices(s in "[a-z]{0,24}", a in 0usize..25, b in 0usize..25) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo = lo.min(s.len());
        let hi = hi.min(s.len());

        prop_assert!(Contains.check(&str_values(&s, &s[lo..hi]), &[]).ok());
        prop_assert!(HasPrefix.check(&str_values(&s, &s[..hi]), &[]).ok());
        prop_assert!(HasSuffix.check(&str_values(&s, &s[lo..]), &[]).ok());
    }

    /// A needle from a disjoint alphabet never matches any predicate.
    #[test]
    fn string_predicates_reject_absent_needles(s in "[a-z]{0,24}", p in "[0-9]{1,6}") {
        prop_assert!(!Contains.check(&str_values(&s, &p), &[]).ok());
        prop_assert!(!HasPrefix.check(&str_values(&s, &p), &[]).ok());
        prop_assert!(!HasSuffix.check(&str_values(&s, &p), &[]).ok());
    }

    /// TimeBetween(a, b) and TimeBetween(b, a) agree on every obtained
    /// instant, message included.
    #[test]
    fn time_between_is_bound_order_independent(
        a in -1_000_000_000i64..1_000_000_000,
        b in -1_000_000_000i64..1_000_000_000,
        t in -1_000_000_000i64..1_000_000_000,
    ) {
        let at = Utc.timestamp_opt(a, 0).unwrap();
        let bt = Utc.timestamp_opt(b, 0).unwrap();
        let obtained = Value::datetime(Utc.timestamp_opt(t, 0).unwrap());

        let forward = TimeBetween::new(at, bt).check(&[obtained.clone()], &[]);
        let reverse = TimeBetween::new(bt, at).check(&[obtained], &[]);
        prop_assert_eq!(forward, reverse);
    }

    /// The bounds themselves are always inside their own range.
    #[test]
    fn time_between_bounds_are_members(
        a in -1_000_000_000i64..1_000_000_000,
        b in -1_000_000_000i64..1_000_000_000,
    ) {
        let at = Utc.timestamp_opt(a, 0).unwrap();
        let bt = Utc.timestamp_opt(b, 0).unwrap();
        let checker = TimeBetween::new(at, bt);
        prop_assert!(checker.check(&[Value::datetime(at)], &[]).ok());
        prop_assert!(checker.check(&[Value::datetime(bt)], &[]).ok());
    }

    /// SameContents holds exactly when per-value occurrence counts match.
    #[test]
    fn same_contents_matches_multiset_counts(
        xs in proptest::collection::vec(0i8..6, 0..12),
        ys in proptest::collection::vec(0i8..6, 0..12),
    ) {
        let counts = |values: &[i8]| {
            let mut map = BTreeMap::new();
            for v in values {
                *map.entry(*v).or_insert(0usize) += 1;
            }
            map
        };
        let expected_ok = counts(&xs) == counts(&ys);

        let outcome = SameContents.check(&[number_array(&xs), number_array(&ys)], &[]);
        prop_assert_eq!(outcome.ok(), expected_ok);
    }

    /// Reordering a sequence never changes SameContents.
    #[test]
    fn same_contents_ignores_order(xs in proptest::collection::vec(-50i8..50, 0..32)) {
        let mut sorted = xs.clone();
        sorted.sort_unstable();
        let outcome = SameContents.check(&[number_array(&xs), number_array(&sorted)], &[]);
        prop_assert!(outcome.ok());
    }

    /// Checking twice with identical inputs yields identical outcomes.
    #[test]
    fn checks_are_idempotent(s in "[a-z]{0,16}", p in "[a-z]{0,4}") {
        let values = str_values(&s, &p);
        let first = Contains.check(&values, &[]);
        let second = Contains.check(&values, &[]);
        prop_assert_eq!(first, second);
    }
}
