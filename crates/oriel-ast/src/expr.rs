//! Expression AST nodes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an expression node.
///
/// Ids are assigned by [`ExprFactory`](crate::ExprFactory) and are
/// stable for the lifetime of the tree; every metadata side table is
/// keyed by them. Id 0 is reserved for the nil expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExprId(pub u64);

impl fmt::Display for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An expression node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    pub id: ExprId,
    pub kind: ExprKind,
}

impl Expr {
    pub fn new(id: ExprId, kind: ExprKind) -> Self {
        Self { id, kind }
    }

    /// The nil expression sentinel: id 0, unspecified kind. Returned
    /// wherever a tree is absent so callers never see a missing root.
    pub fn nil() -> Self {
        Self::default()
    }

    pub fn is_nil(&self) -> bool {
        self.id == ExprId(0) && matches!(self.kind, ExprKind::Unspecified)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum ExprKind {
    /// Placeholder kind, only valid on the nil expression
    #[default]
    Unspecified,

    /// Literal value: `42`, `"hello"`, `true`, `null`
    Literal(Literal),

    /// Identifier: `x`, `request.auth` before qualification
    Ident(String),

    /// Field selection or presence test: `msg.field`, `has(msg.field)`
    Select {
        operand: Box<Expr>,
        field: String,
        /// True for a presence test, which yields bool rather than the field
        test_only: bool,
    },

    /// Function or method call: `size(x)`, `name.startsWith("/groups/")`
    Call {
        /// Receiver for method-style calls, absent for global functions
        target: Option<Box<Expr>>,
        function: String,
        args: Vec<Expr>,
    },

    /// List literal: `[1, 2, 3]`
    List(Vec<Expr>),

    /// Map literal: `{"k": "v"}`
    Map(Vec<MapEntry>),
}

/// A literal value as written in source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Double(f64),
    String(String),
    Bytes(Vec<u8>),
    Null,
}

/// A single key-value entry in a map literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapEntry {
    /// Id of the entry itself, distinct from the key and value ids
    pub id: ExprId,
    pub key: Expr,
    pub value: Expr,
}
