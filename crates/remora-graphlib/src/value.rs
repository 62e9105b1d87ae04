//! Attribute values for nodes and links.

use std::cmp::Ordering;

use crate::collections::IdSet;
use crate::Id;

/// A typed attribute value.
///
/// Node and link data maps store these: edge weights and distances as
/// numbers, labels as text, and contraction membership as id sets. Numbers
/// compare across `Int`/`Float`; only numbers and text are valid heap keys.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Id(Id),
    IdSet(IdSet),
}

impl Value {
    /// Numeric view of this value, if it is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_id_set(&self) -> Option<&IdSet> {
        match self {
            Value::IdSet(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this value may key a heap.
    pub fn is_heap_key(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_) | Value::Text(_))
    }

    /// Total order used by the heap comparator.
    ///
    /// Numbers compare through `f64::total_cmp` (so `Int` and `Float` keys
    /// mix freely), text lexicographically. Mixed kinds fall back to a fixed
    /// kind rank, keeping the order total.
    pub fn heap_ord(&self, other: &Value) -> Ordering {
        if let (Some(a), Some(b)) = (self.as_f64(), other.as_f64()) {
            return a.total_cmp(&b);
        }
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Value::Int(_) | Value::Float(_) => 0,
            Value::Text(_) => 1,
            Value::Id(_) => 2,
            Value::IdSet(_) => 3,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Id> for Value {
    fn from(id: Id) -> Self {
        Value::Id(id)
    }
}

impl From<IdSet> for Value {
    fn from(set: IdSet) -> Self {
        Value::IdSet(set)
    }
}
