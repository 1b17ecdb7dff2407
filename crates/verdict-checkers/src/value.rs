//! Runtime value representation
//!
//! Shared value representation for checker inputs.
//! - Numbers, Bools, Null: Immediate values (stack-allocated)
//! - Strings: Heap-allocated, reference-counted (Arc<String>), immutable
//! - Arrays: Copy-on-write (ValueArray wrapping Arc<Vec<Value>>), value semantics
//! - Records: Copy-on-write string-keyed fields (ValueRecord), structural equality
//! - DateTimes: UTC instants (chrono), compared as absolute timestamps

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Copy-on-write array. Cheap to clone (refcount bump).
/// Mutations on a shared array clone the inner Vec first (Arc::make_mut).
#[derive(Clone, Debug)]
pub struct ValueArray(Arc<Vec<Value>>);

impl ValueArray {
    pub fn new() -> Self {
        ValueArray(Arc::new(Vec::new()))
    }

    pub fn from_vec(v: Vec<Value>) -> Self {
        ValueArray(Arc::new(v))
    }

    /// Read access — no clone needed.
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get element by index — returns reference into inner Vec.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Mutating access — triggers CoW if Arc is shared.
    pub fn push(&mut self, value: Value) {
        Arc::make_mut(&mut self.0).push(value);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }
}

impl Default for ValueArray {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ValueArray {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_slice() == other.0.as_slice()
    }
}

impl From<Vec<Value>> for ValueArray {
    fn from(v: Vec<Value>) -> Self {
        ValueArray::from_vec(v)
    }
}

impl FromIterator<Value> for ValueArray {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        ValueArray(Arc::new(iter.into_iter().collect()))
    }
}

/// Copy-on-write string-keyed record. Cheap to clone (refcount bump).
/// Fields are kept in a BTreeMap so equality, hashing, and rendering are
/// independent of construction order (structural semantics).
#[derive(Clone, Debug, Default)]
pub struct ValueRecord(Arc<BTreeMap<String, Value>>);

impl ValueRecord {
    pub fn new() -> Self {
        ValueRecord(Arc::new(BTreeMap::new()))
    }

    pub fn from_fields<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        ValueRecord(Arc::new(
            fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Mutating access — triggers CoW if Arc is shared.
    pub fn insert(&mut self, key: String, value: Value) {
        Arc::make_mut(&mut self.0).insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate fields in key order.
    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl PartialEq for ValueRecord {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_ref() == other.0.as_ref()
    }
}

impl From<BTreeMap<String, Value>> for ValueRecord {
    fn from(m: BTreeMap<String, Value>) -> Self {
        ValueRecord(Arc::new(m))
    }
}

/// Runtime value type
#[derive(Clone, Debug)]
pub enum Value {
    /// Numeric value (IEEE 754 double-precision)
    Number(f64),
    /// String value (reference-counted, immutable)
    String(Arc<String>),
    /// Boolean value
    Bool(bool),
    /// Null value
    Null,
    /// Array value (copy-on-write, value semantics)
    Array(ValueArray),
    /// Record value (string-keyed fields, structural equality)
    Record(ValueRecord),
    /// DateTime value (UTC timezone)
    DateTime(Arc<DateTime<Utc>>),
}

impl Value {
    /// Create a new string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Arc::new(s.into()))
    }

    /// Create a new array value
    pub fn array(values: Vec<Value>) -> Self {
        Value::Array(ValueArray::from_vec(values))
    }

    /// Create a new record value from (name, value) fields
    pub fn record<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Record(ValueRecord::from_fields(fields))
    }

    /// Create a new datetime value
    pub fn datetime(dt: DateTime<Utc>) -> Self {
        Value::DateTime(Arc::new(dt))
    }

    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Bool(_) => "bool",
            Value::Null => "null",
            Value::Array(_) => "array",
            Value::Record(_) => "record",
            Value::DateTime(_) => "datetime",
        }
    }
}

impl PartialEq for Value {
    /// Content equality throughout: two equal values may be different
    /// allocations. DateTimes compare timestamps (absolute instants).
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            // Different variants are never equal
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => {
                // Format number nicely (no trailing .0 for whole numbers)
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{:.0}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::String(s) => write!(f, "{}", s.as_ref()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
            Value::Array(arr) => {
                let elements: Vec<String> = arr.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", elements.join(", "))
            }
            Value::Record(rec) => {
                let fields: Vec<String> =
                    rec.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                write!(f, "{{{}}}", fields.join(", "))
            }
            Value::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Arc::new(s))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::datetime(dt)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::array(values)
    }
}

/// Canonical hashable form of a value
///
/// Every value variant canonicalizes: numbers through IEEE 754
/// normalization (OrderedFloat, all NaNs collapse to one key), records
/// through their sorted field order. Structurally-equal composites map to
/// the same key, which is what makes multiset counting value-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    /// Number value with IEEE 754 canonicalization
    Number(OrderedFloat<f64>),
    /// String value (reference-counted)
    String(Arc<String>),
    /// Boolean value
    Bool(bool),
    /// Null value
    Null,
    /// Array value (element keys in sequence order)
    Array(Vec<HashKey>),
    /// Record value (field keys in name order)
    Record(Vec<(String, HashKey)>),
    /// DateTime value (absolute instant)
    DateTime(DateTime<Utc>),
}

impl HashKey {
    /// Create HashKey from Value
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => {
                // Canonicalize NaN to ensure consistent hashing
                let normalized = if n.is_nan() { f64::NAN } else { *n };
                HashKey::Number(OrderedFloat(normalized))
            }
            Value::String(s) => HashKey::String(Arc::clone(s)),
            Value::Bool(b) => HashKey::Bool(*b),
            Value::Null => HashKey::Null,
            Value::Array(arr) => HashKey::Array(arr.iter().map(HashKey::from_value).collect()),
            Value::Record(rec) => HashKey::Record(
                rec.iter()
                    .map(|(k, v)| (k.clone(), HashKey::from_value(v)))
                    .collect(),
            ),
            Value::DateTime(dt) => HashKey::DateTime(**dt),
        }
    }

    /// Convert HashKey back to Value
    pub fn to_value(&self) -> Value {
        match self {
            HashKey::Number(n) => Value::Number(n.0),
            HashKey::String(s) => Value::String(Arc::clone(s)),
            HashKey::Bool(b) => Value::Bool(*b),
            HashKey::Null => Value::Null,
            HashKey::Array(keys) => Value::array(keys.iter().map(HashKey::to_value).collect()),
            HashKey::Record(fields) => {
                Value::record(fields.iter().map(|(k, v)| (k.clone(), v.to_value())))
            }
            HashKey::DateTime(dt) => Value::datetime(*dt),
        }
    }
}
