//! Oriel type and value representations
//!
//! Opaque to the AST core: the checker writes these into the side
//! tables, the evaluator and diagnostics read them back.

mod types;
mod value;

pub use types::*;
pub use value::*;
