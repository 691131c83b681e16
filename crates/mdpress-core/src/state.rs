//! Parse state for a single document conversion.
//!
//! The [`ParserState`] struct holds everything the composer mutates while
//! it walks a document. A fresh state is created per document and dropped
//! once the trailing flush completes; nothing in it is shared.

use crate::enums::{BlockKind, EmphasisClass, EmphasisPhase, HeadingPhase};
use crate::types::Position;

/// Paragraph transition flags.
///
/// These are orthogonal signals evaluated on every commit rather than
/// alternative states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParagraphFlags {
    /// Emit the opening tag before the next content
    pub begin: bool,
    /// A paragraph is open in the output
    pub active: bool,
    /// Emit the closing tag before the next content
    pub end: bool,
    /// Close the paragraph right after the current content
    pub surround: bool,
}

impl ParagraphFlags {
    /// Whether content written now would land in the currently open paragraph.
    pub fn is_open(&self) -> bool {
        self.active && !self.end
    }
}

/// Whitespace bookkeeping for the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineState {
    /// Spaces seen since the last non-space character, not yet written
    pub spaces: usize,
    /// Newlines seen since the last content character
    pub newlines: usize,
}

impl LineState {
    /// State at the start of a document, which behaves like the character
    /// after a line end.
    pub fn document_start() -> Self {
        Self {
            spaces: 0,
            newlines: 1,
        }
    }

    /// State inside a span that began mid-line.
    pub fn mid_line() -> Self {
        Self {
            spaces: 0,
            newlines: 0,
        }
    }

    /// Whether the previous non-space character was a newline.
    pub fn was_newline(&self) -> bool {
        self.newlines > 0
    }
}

impl Default for LineState {
    fn default() -> Self {
        Self::document_start()
    }
}

/// Buffers and counters of a heading being recognized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingState {
    /// Number of `#` markers seen, which becomes the heading level
    pub level: usize,
    /// Current phase
    pub phase: HeadingPhase,
    /// Exact source text consumed so far
    pub raw: String,
    /// HTML built so far; only valid if the heading completes
    pub parsed: String,
    /// Where the heading started
    pub start: Position,
}

impl HeadingState {
    /// Clear all buffers and counters.
    pub fn reset(&mut self) {
        self.level = 0;
        self.phase = HeadingPhase::CountingMarkers;
        self.raw.clear();
        self.parsed.clear();
        self.start = Position::default();
    }
}

/// Buffers and counters of an emphasis span being recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmphasisState {
    /// Class fixed by the opening run
    pub class: EmphasisClass,
    /// Current phase
    pub phase: EmphasisPhase,
    /// Length of the opening run
    pub open_len: usize,
    /// Length of the closing run seen so far
    pub close_len: usize,
    /// Exact source text consumed so far
    pub raw: String,
    /// HTML built so far; only valid if the span closes
    pub parsed: String,
    /// Whitespace inside the span
    pub line: LineState,
    /// Where the span started
    pub start: Position,
}

impl Default for EmphasisState {
    fn default() -> Self {
        Self {
            class: EmphasisClass::None,
            phase: EmphasisPhase::MatchingOpen,
            open_len: 0,
            close_len: 0,
            raw: String::new(),
            parsed: String::new(),
            line: LineState::mid_line(),
            start: Position::default(),
        }
    }
}

impl EmphasisState {
    /// Whether a span is being recognized.
    pub fn is_active(&self) -> bool {
        self.open_len > 0
    }

    /// Clear all buffers and counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Main parse state for one document conversion.
///
/// # Example
///
/// ```
/// use mdpress_core::{BlockKind, ParserState};
///
/// let state = ParserState::new();
/// assert_eq!(state.block, BlockKind::None);
/// assert!(state.cursor.at_line_start());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParserState {
    /// Current position in the document
    pub cursor: Position,
    /// Block the current line belongs to
    pub block: BlockKind,
    /// Paragraph transition flags
    pub paragraph: ParagraphFlags,
    /// Heading sub-state
    pub heading: HeadingState,
    /// Emphasis sub-state
    pub emphasis: EmphasisState,
    /// Whitespace tracking outside of recognizers
    pub line: LineState,
}

impl ParserState {
    /// Create a state positioned at the start of a document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a heading line is being recognized.
    pub fn in_heading(&self) -> bool {
        self.block == BlockKind::Heading
    }

    /// Whether an emphasis span is being recognized.
    pub fn in_emphasis(&self) -> bool {
        self.emphasis.is_active()
    }

    /// Enter a heading line starting at the cursor.
    pub fn enter_heading(&mut self) {
        self.heading.reset();
        self.heading.start = self.cursor;
        self.block = BlockKind::Heading;
    }

    /// Leave the heading line, falling back to whatever block is open.
    pub fn exit_heading(&mut self) {
        self.heading.reset();
        self.sync_block();
    }

    /// Enter an emphasis span starting at the cursor.
    pub fn enter_emphasis(&mut self) {
        self.emphasis.reset();
        self.emphasis.start = self.cursor;
    }

    /// Leave the emphasis span.
    pub fn exit_emphasis(&mut self) {
        self.emphasis.reset();
    }

    /// Recompute [`ParserState::block`] from the paragraph flags.
    ///
    /// Leaves a heading in progress alone.
    pub fn sync_block(&mut self) {
        if self.block == BlockKind::Heading && self.heading.level > 0 {
            return;
        }
        self.block = if self.paragraph.active {
            BlockKind::Paragraph
        } else {
            BlockKind::None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = ParserState::new();
        assert_eq!(state.block, BlockKind::None);
        assert_eq!(state.line, LineState::document_start());
        assert!(state.line.was_newline());
        assert!(!state.in_heading());
        assert!(!state.in_emphasis());
    }

    #[test]
    fn test_paragraph_is_open() {
        let mut flags = ParagraphFlags::default();
        assert!(!flags.is_open());
        flags.active = true;
        assert!(flags.is_open());
        flags.end = true;
        assert!(!flags.is_open());
    }

    #[test]
    fn test_heading_enter_exit() {
        let mut state = ParserState::new();
        state.enter_heading();
        state.heading.level = 2;
        state.heading.raw.push_str("##");
        assert!(state.in_heading());

        state.exit_heading();
        assert!(!state.in_heading());
        assert!(state.heading.raw.is_empty());
        assert_eq!(state.heading.level, 0);
    }

    #[test]
    fn test_exit_heading_returns_to_open_paragraph() {
        let mut state = ParserState::new();
        state.paragraph.active = true;
        state.enter_heading();
        state.heading.level = 1;
        state.exit_heading();
        assert_eq!(state.block, BlockKind::Paragraph);
    }

    #[test]
    fn test_emphasis_enter_exit() {
        let mut state = ParserState::new();
        state.enter_emphasis();
        state.emphasis.open_len = 1;
        assert!(state.in_emphasis());
        state.exit_emphasis();
        assert!(!state.in_emphasis());
        assert_eq!(state.emphasis.class, EmphasisClass::None);
    }

    #[test]
    fn test_sync_block_keeps_heading_in_progress() {
        let mut state = ParserState::new();
        state.enter_heading();
        state.heading.level = 3;
        state.paragraph.active = true;
        state.sync_block();
        assert_eq!(state.block, BlockKind::Heading);
    }
}
