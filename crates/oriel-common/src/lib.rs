//! Oriel common - source text and location primitives
//!
//! Shared by the parser, checker, and diagnostic tooling.

mod location;
mod source;

pub use location::*;
pub use source::*;
