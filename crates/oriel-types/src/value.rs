//! Resolved constant values

use serde::{Deserialize, Serialize};
use std::fmt;

/// A constant value produced at check time, e.g. an enum constant
/// folded into an identifier reference.
///
/// Equality is structural; `Double` uses IEEE comparison, so a NaN
/// constant never compares equal to anything, including itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Double(f64),
    String(String),
    Bytes(Vec<u8>),
    Null,

    /// An enum constant: the fully qualified enum type and its numeric value
    Enum { type_name: String, value: i64 },
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}u", u),
            Value::Double(d) => write!(f, "{}", d),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Bytes(b) => write!(f, "b\"{}\"", b.escape_ascii()),
            Value::Null => write!(f, "null"),
            Value::Enum { type_name, value } => write!(f, "{}({})", type_name, value),
        }
    }
}
