//! Source text abstraction
//!
//! Wraps the raw expression text with a description and a precomputed
//! line-offset table. The table holds one entry per newline: the byte
//! offset of the first character after it, i.e. the start offset of
//! line 2, line 3, and so on, in ascending order.

use serde::{Deserialize, Serialize};

/// An expression's source text plus the metadata needed to map byte
/// offsets back to lines and columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSource {
    description: String,
    contents: String,
    line_offsets: Vec<i32>,
}

impl TextSource {
    /// Create a source from raw text and a description such as a file
    /// name or `<input>`.
    pub fn new(contents: impl Into<String>, description: impl Into<String>) -> Self {
        let contents = contents.into();
        let line_offsets = compute_line_offsets(&contents);
        Self {
            description: description.into(),
            contents,
            line_offsets,
        }
    }

    /// Where the expression came from.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The raw expression text.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Ascending start offsets of line 2 onward. Empty for single-line
    /// or empty input.
    pub fn line_offsets(&self) -> &[i32] {
        &self.line_offsets
    }

    /// Returns the text of the given 1-based line, without its trailing
    /// newline, if the line exists.
    pub fn snippet(&self, line: i32) -> Option<&str> {
        if line < 1 || line > self.line_offsets.len() as i32 + 1 {
            return None;
        }
        let start = if line == 1 {
            0
        } else {
            self.line_offsets[line as usize - 2] as usize
        };
        let end = if line as usize <= self.line_offsets.len() {
            self.line_offsets[line as usize - 1] as usize - 1
        } else {
            self.contents.len()
        };
        self.contents.get(start..end)
    }
}

fn compute_line_offsets(contents: &str) -> Vec<i32> {
    contents
        .bytes()
        .enumerate()
        .filter(|&(_, b)| b == b'\n')
        .map(|(i, _)| i as i32 + 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_offsets() {
        let src = TextSource::new("a = 1\nb = 10\nc", "<input>");
        assert_eq!(src.line_offsets(), &[6, 13]);
    }

    #[test]
    fn test_line_offsets_empty_and_single_line() {
        assert!(TextSource::new("", "<input>").line_offsets().is_empty());
        assert!(TextSource::new("x + y", "<input>").line_offsets().is_empty());
    }

    #[test]
    fn test_snippet() {
        let src = TextSource::new("a = 1\nb = 10\nc", "test.oriel");
        assert_eq!(src.snippet(1), Some("a = 1"));
        assert_eq!(src.snippet(2), Some("b = 10"));
        assert_eq!(src.snippet(3), Some("c"));
        assert_eq!(src.snippet(0), None);
        assert_eq!(src.snippet(4), None);
    }

    #[test]
    fn test_trailing_newline() {
        let src = TextSource::new("a\n", "<input>");
        assert_eq!(src.line_offsets(), &[2]);
        assert_eq!(src.snippet(2), Some(""));
    }
}
