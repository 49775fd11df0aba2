//! Oriel AST - parsed and checked abstract syntax trees
//!
//! This crate defines the expression node types, the source metadata
//! attached to a parse, and the type/reference annotations written by
//! the checker. The parser, checker, and evaluator all share these
//! structures; none of their logic lives here.

mod ast;
mod expr;
mod factory;
mod reference;
mod source_info;

pub use ast::*;
pub use expr::*;
pub use factory::*;
pub use reference::*;
pub use source_info::*;
