//! Human-readable source locations

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source text as a 1-based line and 0-based column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub line: i32,
    pub col: i32,
}

impl Location {
    /// Sentinel returned when no position information is recorded.
    pub const NONE: Location = Location { line: -1, col: -1 };

    pub fn new(line: i32, col: i32) -> Self {
        Self { line, col }
    }

    /// Whether this is the "no location" sentinel.
    pub fn is_none(&self) -> bool {
        *self == Location::NONE
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::NONE
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_sentinel() {
        assert!(Location::NONE.is_none());
        assert!(Location::default().is_none());
        assert!(!Location::new(1, 0).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Location::new(3, 14).to_string(), "3:14");
    }
}
