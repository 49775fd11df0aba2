//! Resolved type representations

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type as resolved by the checker.
///
/// `Dyn` doubles as the "unknown" sentinel: looking up an annotation
/// that was never written yields `Dyn`, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
    /// Dynamic / unknown type
    Dyn,
    Bool,
    Int,
    Uint,
    Double,
    String,
    Bytes,
    Null,

    /// Homogeneous list type
    List(Box<Type>),

    /// Map with key and value types
    Map(Box<Type>, Box<Type>),

    /// Named type supplied by the embedding environment, e.g. an enum
    /// or a protobuf-style message
    Opaque { name: String, args: Vec<Type> },
}

impl Type {
    pub fn is_dyn(&self) -> bool {
        matches!(self, Type::Dyn)
    }
}

impl Default for Type {
    fn default() -> Self {
        Type::Dyn
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Dyn => write!(f, "dyn"),
            Type::Bool => write!(f, "bool"),
            Type::Int => write!(f, "int"),
            Type::Uint => write!(f, "uint"),
            Type::Double => write!(f, "double"),
            Type::String => write!(f, "string"),
            Type::Bytes => write!(f, "bytes"),
            Type::Null => write!(f, "null"),
            Type::List(elem) => write!(f, "list<{}>", elem),
            Type::Map(key, value) => write!(f, "map<{}, {}>", key, value),
            Type::Opaque { name, args } => {
                if args.is_empty() {
                    write!(f, "{}", name)
                } else {
                    let args = args.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(", ");
                    write!(f, "{}<{}>", name, args)
                }
            }
        }
    }
}
