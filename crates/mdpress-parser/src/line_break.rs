//! Hard line breaks and blank lines.
//!
//! Spaces are held back instead of being written as they arrive. If the
//! line continues, they are flushed in front of the next content
//! character. If two or more of them end a line that has content, they
//! turn into a hard break. A line with no content at all is blank.

use mdpress_core::LineState;

/// Output of a hard line break.
pub const HARD_BREAK: &str = "<br />\n";

/// Number of trailing spaces that turn a line end into a hard break.
pub const BREAK_SPACES: usize = 2;

/// How a newline ends the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnd {
    /// Ordinary line end, preceded by `spaces` held spaces
    Soft { spaces: usize },
    /// Hard break; the held spaces are dropped
    Break,
    /// The line had no content
    Blank,
}

/// Tracks whitespace for one line context.
#[derive(Debug)]
pub struct LineBreakDetector<'s> {
    line: &'s mut LineState,
}

impl<'s> LineBreakDetector<'s> {
    pub fn new(line: &'s mut LineState) -> Self {
        Self { line }
    }

    /// Record a space.
    pub fn space(&mut self) {
        self.line.spaces += 1;
    }

    /// Record a content character. Returns the spaces to write before it.
    pub fn content(&mut self) -> usize {
        self.line.newlines = 0;
        std::mem::take(&mut self.line.spaces)
    }

    /// Record a newline.
    ///
    /// # Example
    ///
    /// ```
    /// use mdpress_core::LineState;
    /// use mdpress_parser::{LineBreakDetector, LineEnd};
    ///
    /// let mut line = LineState::mid_line();
    /// let mut detector = LineBreakDetector::new(&mut line);
    /// detector.space();
    /// detector.space();
    /// assert_eq!(detector.newline(), LineEnd::Break);
    /// assert_eq!(detector.newline(), LineEnd::Blank);
    /// ```
    pub fn newline(&mut self) -> LineEnd {
        let spaces = std::mem::take(&mut self.line.spaces);
        let had_content = !self.line.was_newline();
        self.line.newlines += 1;

        if !had_content {
            LineEnd::Blank
        } else if spaces >= BREAK_SPACES {
            LineEnd::Break
        } else {
            LineEnd::Soft { spaces }
        }
    }

    /// Drop the held spaces, returning how many there were.
    pub fn take_spaces(&mut self) -> usize {
        std::mem::take(&mut self.line.spaces)
    }

    /// Record text written verbatim, which counts as content unless it
    /// ends a line, trailing spaces aside.
    pub fn literal(&mut self, text: &str) {
        self.line.spaces = 0;
        self.line.newlines = usize::from(text.trim_end_matches(' ').ends_with('\n'));
    }
}
