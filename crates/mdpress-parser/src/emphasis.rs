//! Emphasis recognizer.
//!
//! Handles the three flat emphasis styles:
//! - `*italic*`
//! - `**bold**`
//! - `***italic bold***`
//!
//! The opening delimiter run fixes the class and the closing run must have
//! exactly the same length. Spans do not nest; a shorter run inside a span
//! is plain text.

use crate::line_break::{LineBreakDetector, LineEnd, HARD_BREAK};
use crate::recognizer::{ParsedToken, Recognizer, Step};
use mdpress_core::{
    Diagnostic, DiagnosticKind, EmphasisClass, EmphasisPhase, EmphasisState, LineState, Position,
};
use log::trace;

/// Longest valid delimiter run.
pub const MAX_RUN: usize = 3;

/// Opening and closing tags, index 0 being a run of one marker.
pub const EMPHASIS_TAGS: [(&str, &str); MAX_RUN] = [
    ("<i>", "</i>"),
    ("<b>", "</b>"),
    ("<i><b>", "</b></i>"),
];

/// Tags for a class, if it renders at all.
pub fn tags(class: EmphasisClass) -> Option<(&'static str, &'static str)> {
    match class.run_length() {
        0 => None,
        len => EMPHASIS_TAGS.get(len - 1).copied(),
    }
}

/// Recognizes one emphasis span, buffering into an [`EmphasisState`].
#[derive(Debug)]
pub struct EmphasisRecognizer<'s> {
    state: &'s mut EmphasisState,
}

impl<'s> EmphasisRecognizer<'s> {
    pub fn new(state: &'s mut EmphasisState) -> Self {
        Self { state }
    }

    /// Consume the first `*` of a delimiter run at `at`.
    pub fn start(&mut self, at: Position) {
        trace!("emphasis starts at {}", at);
        self.state.reset();
        self.state.start = at;
        self.state.open_len = 1;
        self.state.raw.push('*');
    }

    fn fallback(&mut self, kind: DiagnosticKind, at: Position) -> ParsedToken {
        trace!("emphasis falls back at {}: {}", at, kind);
        let literal = std::mem::take(&mut self.state.raw);
        self.state.parsed.clear();
        ParsedToken::fallback(literal, Diagnostic::new(kind, at), at.offset)
    }

    fn fail(&mut self, kind: DiagnosticKind, at: Position) -> Step {
        Step::Done(self.fallback(kind, at))
    }

    /// Close the span; `resume` is where the composer picks up.
    fn close(&mut self, resume: usize) -> ParsedToken {
        let mut html = std::mem::take(&mut self.state.parsed);
        if let Some((_, close)) = tags(self.state.class) {
            html.push_str(close);
        }
        trace!("{} emphasis closes before offset {}", self.state.class, resume);
        ParsedToken::rendered(html, self.state.start, resume)
    }

    fn feed_open(&mut self, ch: char, at: Position) -> Step {
        if ch == '*' {
            self.state.open_len += 1;
            self.state.raw.push(ch);
            return Step::Consumed;
        }

        if self.state.open_len > MAX_RUN {
            let start = self.state.start;
            return Step::Done(self.fallback_at(DiagnosticKind::InvalidDelimiterRun, start, at));
        }
        if ch == ' ' || ch == '\n' {
            return self.fail(DiagnosticKind::EmptyOrInvalidEmphasis, at);
        }

        self.state.class = EmphasisClass::from_run_length(self.state.open_len);
        self.state.phase = EmphasisPhase::Writing;
        self.state.line = LineState::mid_line();
        if let Some((open, _)) = tags(self.state.class) {
            self.state.parsed.push_str(open);
        }
        self.feed_writing(ch, at)
    }

    fn feed_writing(&mut self, ch: char, at: Position) -> Step {
        let mut detector = LineBreakDetector::new(&mut self.state.line);
        match ch {
            '*' => {
                let spaces = detector.content();
                self.state.parsed.push_str(&" ".repeat(spaces));
                self.state.phase = EmphasisPhase::MatchingClose;
                self.state.close_len = 1;
                self.state.raw.push(ch);
            }
            ' ' => {
                detector.space();
                self.state.raw.push(ch);
            }
            '\n' => match detector.newline() {
                LineEnd::Blank => return self.fail(DiagnosticKind::UnterminatedEmphasis, at),
                LineEnd::Break => {
                    self.state.parsed.push_str(HARD_BREAK);
                    self.state.raw.push(ch);
                }
                LineEnd::Soft { spaces } => {
                    self.state.parsed.push_str(&" ".repeat(spaces));
                    self.state.parsed.push(ch);
                    self.state.raw.push(ch);
                }
            },
            _ => {
                let spaces = detector.content();
                self.state.parsed.push_str(&" ".repeat(spaces));
                self.state.parsed.push(ch);
                self.state.raw.push(ch);
            }
        }
        Step::Consumed
    }

    fn feed_close(&mut self, ch: char, at: Position) -> Step {
        if ch == '*' {
            self.state.close_len += 1;
            self.state.raw.push(ch);
            return Step::Consumed;
        }

        let (open_len, close_len) = (self.state.open_len, self.state.close_len);
        if close_len == open_len {
            return Step::Done(self.close(at.offset));
        }
        if close_len > open_len {
            return self.fail(DiagnosticKind::DelimiterRunOverflow, at);
        }

        // too short to close: the markers are text
        self.state.parsed.push_str(&"*".repeat(close_len));
        self.state.close_len = 0;
        self.state.phase = EmphasisPhase::Writing;
        self.feed_writing(ch, at)
    }

    /// Fallback reported at `location` while resuming at `at`.
    fn fallback_at(&mut self, kind: DiagnosticKind, location: Position, at: Position) -> ParsedToken {
        let mut token = self.fallback(kind, location);
        token.resume = at.offset;
        token
    }
}

impl Recognizer for EmphasisRecognizer<'_> {
    fn feed(&mut self, ch: char, at: Position) -> Step {
        match self.state.phase {
            EmphasisPhase::MatchingOpen => self.feed_open(ch, at),
            EmphasisPhase::Writing => self.feed_writing(ch, at),
            EmphasisPhase::MatchingClose => self.feed_close(ch, at),
        }
    }

    fn finish(&mut self, at: Position) -> ParsedToken {
        let (open_len, close_len) = (self.state.open_len, self.state.close_len);
        match self.state.phase {
            EmphasisPhase::MatchingClose if close_len == open_len => self.close(at.offset),
            EmphasisPhase::MatchingClose if close_len > open_len => {
                self.fallback(DiagnosticKind::DelimiterRunOverflow, at)
            }
            EmphasisPhase::MatchingOpen if open_len > MAX_RUN => {
                let start = self.state.start;
                self.fallback_at(DiagnosticKind::InvalidDelimiterRun, start, at)
            }
            _ => self.fallback(DiagnosticKind::UnterminatedEmphasis, at),
        }
    }
}
