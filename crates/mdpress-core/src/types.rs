//! Core types for mdpress

use serde::{Deserialize, Serialize};

/// Represents a position in the input document.
///
/// This is the parser's cursor: it only ever moves forward, one
/// character at a time, through [`Position::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number in characters (0-indexed)
    pub column: usize,
    /// Byte offset from start
    pub offset: usize,
}

impl Position {
    /// Position of the first character of a document.
    pub fn start() -> Self {
        Self::default()
    }

    /// Whether the position is the first column of a line.
    pub fn at_line_start(&self) -> bool {
        self.column == 0
    }

    /// Move past `ch`.
    ///
    /// # Example
    ///
    /// ```
    /// use mdpress_core::Position;
    /// let mut pos = Position::start();
    /// pos.advance('é');
    /// assert_eq!(pos.offset, 2);
    /// assert_eq!(pos.column, 1);
    /// pos.advance('\n');
    /// assert!(pos.at_line_start());
    /// assert_eq!(pos.line, 1);
    /// ```
    pub fn advance(&mut self, ch: char) {
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }
}

impl std::fmt::Display for Position {
    /// Formats as 1-indexed `line L, col C` for people reading warnings.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, col {}", self.line + 1, self.column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_tracks_lines() {
        let mut pos = Position::start();
        for ch in "ab\ncd".chars() {
            pos.advance(ch);
        }
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 2);
        assert_eq!(pos.offset, 5);
    }

    #[test]
    fn test_display_is_one_indexed() {
        let pos = Position {
            line: 0,
            column: 3,
            offset: 3,
        };
        assert_eq!(pos.to_string(), "line 1, col 4");
    }
}
