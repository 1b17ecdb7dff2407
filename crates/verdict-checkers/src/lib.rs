//! Verdict Checkers - assertion predicates for test harnesses
//!
//! This library provides the checker contract and the predicate set:
//! - String matching (HasPrefix, HasSuffix, Contains)
//! - Inclusive time-range membership (TimeBetween)
//! - Order-insensitive sequence comparison (SameContents)
//! - Boolean convenience checkers (IsTrue, IsFalse)
//!
//! A checker is a pure function from runtime values to a pass/fail
//! outcome with a diagnostic on failure. How checkers are selected,
//! invoked, and rendered into a report belongs to the harness; nothing
//! here performs I/O or holds state across checks.

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod bools;
pub mod checker;
pub mod contents;
pub mod strings;
pub mod time;
pub mod value;

// Re-export commonly used types
pub use bools::{IsFalse, IsTrue};
pub use checker::{CheckError, Checker, CheckerInfo, Not, Outcome};
pub use contents::SameContents;
pub use strings::{Contains, HasPrefix, HasSuffix};
pub use time::TimeBetween;
pub use value::{HashKey, Value, ValueArray, ValueRecord};
