//! Heading recognizer.
//!
//! Recognizes ATX-style heading lines: one to six `#` at column 0, a single
//! space, and the heading text up to the end of the line.
//!
//! ```text
//! ## Section title\n  ->  \n<h2>Section title</h2>\n
//! ```

use crate::recognizer::{ParsedToken, Recognizer, Step};
use mdpress_core::{Diagnostic, DiagnosticKind, HeadingPhase, HeadingState, Position};
use log::trace;

/// Deepest heading level.
pub const MAX_LEVEL: usize = 6;

/// Tag names by level, index 0 being level 1.
pub const HEADING_TAGS: [&str; MAX_LEVEL] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Recognizes one heading line, buffering into a [`HeadingState`].
#[derive(Debug)]
pub struct HeadingRecognizer<'s> {
    state: &'s mut HeadingState,
}

impl<'s> HeadingRecognizer<'s> {
    pub fn new(state: &'s mut HeadingState) -> Self {
        Self { state }
    }

    /// Consume the first `#` of a line at `at`.
    pub fn start(&mut self, at: Position) {
        trace!("heading starts at {}", at);
        self.state.reset();
        self.state.start = at;
        self.state.level = 1;
        self.state.raw.push('#');
    }

    fn tag(&self) -> &'static str {
        HEADING_TAGS[self.state.level.clamp(1, MAX_LEVEL) - 1]
    }

    /// Give up, returning the markup consumed so far. The character at
    /// `at` is left for the composer.
    fn fallback(&mut self, kind: DiagnosticKind, at: Position) -> ParsedToken {
        trace!("heading falls back at {}: {}", at, kind);
        let literal = std::mem::take(&mut self.state.raw);
        self.state.parsed.clear();
        ParsedToken::fallback(literal, Diagnostic::new(kind, at), at.offset)
    }

    fn fail(&mut self, kind: DiagnosticKind, at: Position) -> Step {
        Step::Done(self.fallback(kind, at))
    }

    fn separator(&mut self) -> Step {
        self.state.raw.push(' ');
        self.state.phase = HeadingPhase::WritingText;
        let open = format!("\n<{}>", self.tag());
        self.state.parsed.push_str(&open);
        Step::Consumed
    }
}

impl Recognizer for HeadingRecognizer<'_> {
    fn feed(&mut self, ch: char, at: Position) -> Step {
        match self.state.phase {
            HeadingPhase::CountingMarkers => match ch {
                '#' => {
                    self.state.level += 1;
                    self.state.raw.push('#');
                    if self.state.level == MAX_LEVEL {
                        self.state.phase = HeadingPhase::AwaitingSeparator;
                    }
                    Step::Consumed
                }
                ' ' => self.separator(),
                _ => self.fail(DiagnosticKind::MissingSeparator, at),
            },
            HeadingPhase::AwaitingSeparator => match ch {
                '#' => self.fail(DiagnosticKind::TooManyMarkers, at),
                ' ' => self.separator(),
                _ => self.fail(DiagnosticKind::MissingSeparator, at),
            },
            HeadingPhase::WritingText => {
                if ch != '\n' {
                    self.state.raw.push(ch);
                    self.state.parsed.push(ch);
                    return Step::Consumed;
                }

                let close = format!("</{}>\n", self.tag());
                let mut html = std::mem::take(&mut self.state.parsed);
                html.push_str(&close);
                trace!("heading h{} ends at {}", self.state.level, at);
                Step::Done(ParsedToken::rendered(
                    html,
                    self.state.start,
                    at.offset + ch.len_utf8(),
                ))
            }
        }
    }

    fn finish(&mut self, at: Position) -> ParsedToken {
        self.fallback(DiagnosticKind::UnterminatedHeading, at)
    }
}
