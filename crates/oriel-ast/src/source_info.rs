//! Positional source metadata
//!
//! Records where each expression node came from in the original text,
//! plus the original call expressions that macros replaced. The parser
//! fills this in; the checker and diagnostic tooling read it back and
//! may add to it.

use crate::{Expr, ExprId};
use oriel_common::{Location, TextSource};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Start and stop byte offsets of a section of the input text.
///
/// `start == stop` denotes a point location, e.g. position data
/// recovered from an encoding that only kept start offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetRange {
    pub start: i32,
    pub stop: i32,
}

impl OffsetRange {
    pub fn new(start: i32, stop: i32) -> Self {
        Self { start, stop }
    }

    /// A range carrying start information only.
    pub fn point(offset: i32) -> Self {
        Self { start: offset, stop: offset }
    }
}

/// Source metadata for one parsed expression.
///
/// The default value is the valid "no info" state: empty description,
/// no line offsets, no ranges, no macro calls. Every accessor returns
/// a neutral default from that state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceInfo {
    syntax_version: String,
    description: String,
    line_offsets: Vec<i32>,
    offset_ranges: HashMap<ExprId, OffsetRange>,
    macro_calls: HashMap<ExprId, Expr>,
}

impl SourceInfo {
    /// Create source info from a description and an ascending table of
    /// line-start offsets (start of line 2 onward).
    ///
    /// The table's ordering is the producing collaborator's contract;
    /// it is not validated here.
    pub fn new(description: impl Into<String>, line_offsets: Vec<i32>) -> Self {
        Self {
            syntax_version: String::new(),
            description: description.into(),
            line_offsets,
            offset_ranges: HashMap::new(),
            macro_calls: HashMap::new(),
        }
    }

    /// Create source info from an existing [`TextSource`].
    pub fn from_source(source: &TextSource) -> Self {
        Self::new(source.description(), source.line_offsets().to_vec())
    }

    pub fn with_syntax_version(mut self, version: impl Into<String>) -> Self {
        self.syntax_version = version.into();
        self
    }

    /// Syntax version of the text the expression was parsed from.
    pub fn syntax_version(&self) -> &str {
        &self.syntax_version
    }

    /// Where the expression came from, e.g. a file name.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Ascending start offsets of line 2 onward.
    pub fn line_offsets(&self) -> &[i32] {
        &self.line_offsets
    }

    /// Map of expression id to the original call expression a macro
    /// replaced at that id.
    pub fn macro_calls(&self) -> &HashMap<ExprId, Expr> {
        &self.macro_calls
    }

    /// The original call expression for `id`, if a macro was expanded
    /// there. Macro tracking must be enabled at parse time for this to
    /// ever return a value.
    pub fn get_macro_call(&self, id: ExprId) -> Option<&Expr> {
        self.macro_calls.get(&id)
    }

    /// Record the original, unexpanded call expression a macro replaced.
    pub fn set_macro_call(&mut self, id: ExprId, expr: Expr) {
        self.macro_calls.insert(id, expr);
    }

    /// Map of expression id to its position in the input text.
    pub fn offset_ranges(&self) -> &HashMap<ExprId, OffsetRange> {
        &self.offset_ranges
    }

    pub fn get_offset_range(&self, id: ExprId) -> Option<OffsetRange> {
        self.offset_ranges.get(&id).copied()
    }

    pub fn set_offset_range(&mut self, id: ExprId, range: OffsetRange) {
        self.offset_ranges.insert(id, range);
    }

    /// The 1-based line and 0-based column of the first character of
    /// the node at `id`, or [`Location::NONE`] if no range is recorded.
    pub fn get_start_location(&self, id: ExprId) -> Location {
        match self.get_offset_range(id) {
            Some(range) => self.offset_to_location(range.start),
            None => Location::NONE,
        }
    }

    /// The 1-based line and 0-based column of the last character of the
    /// node at `id`, or [`Location::NONE`] if no range is recorded.
    ///
    /// When the range only carries start information, this matches the
    /// start location.
    pub fn get_stop_location(&self, id: ExprId) -> Location {
        match self.get_offset_range(id) {
            Some(range) => self.offset_to_location(range.stop),
            None => Location::NONE,
        }
    }

    // Line starts strictly below the offset advance the line; a line
    // start equal to the offset does not, so an offset sitting exactly
    // on a line boundary maps to column 0 of the line it starts.
    fn offset_to_location(&self, offset: i32) -> Location {
        let mut line = 1;
        let mut col = offset;
        for &line_start in &self.line_offsets {
            if line_start < offset {
                line += 1;
                col = offset - line_start;
            } else {
                break;
            }
        }
        Location::new(line, col)
    }

    /// The byte offset of a 1-based line and 0-based column, or `-1`
    /// when the line is outside the known table.
    pub fn compute_offset(&self, line: i32, col: i32) -> i32 {
        if line == 1 {
            return col;
        }
        // A table with n entries describes n + 1 lines.
        if line < 1 || line > self.line_offsets.len() as i32 + 1 {
            return -1;
        }
        self.line_offsets[line as usize - 2] + col
    }
}
