//! Output composer.
//!
//! Walks a document one character at a time, hands characters to the
//! active recognizer, and writes everything through the paragraph tracker
//! so closing tags decided late still land in document order.

use crate::emphasis::EmphasisRecognizer;
use crate::heading::HeadingRecognizer;
use crate::line_break::{LineBreakDetector, LineEnd, HARD_BREAK};
use crate::paragraph::ParagraphTracker;
use crate::recognizer::{Outcome, ParsedToken, Recognizer, Step};
use crate::tokenizer::{classify, TokenKind};
use crate::{ConvertOptions, Conversion};
use log::trace;
use mdpress_core::{Diagnostic, LineState, ParserState, Position};

/// Single-use driver for one document conversion.
#[derive(Debug)]
pub struct Composer<'a> {
    source: &'a str,
    options: &'a ConvertOptions,
    state: ParserState,
    out: String,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Composer<'a> {
    pub fn new(source: &'a str, options: &'a ConvertOptions) -> Self {
        Self {
            source,
            options,
            state: ParserState::new(),
            out: String::with_capacity(source.len() + source.len() / 4 + 32),
            diagnostics: Vec::new(),
        }
    }

    /// Convert the whole document.
    pub fn run(mut self) -> Conversion {
        self.out.push('<');
        self.out.push_str(&self.options.container);
        self.out.push_str(">\n");

        while let Some(ch) = self.source[self.state.cursor.offset..].chars().next() {
            let at = self.state.cursor;
            let resume = self.step(ch, at);
            debug_assert!(resume == at.offset || resume == at.offset + ch.len_utf8());
            if resume > at.offset {
                self.state.cursor.advance(ch);
            }
        }

        self.finish()
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Handle the character at `at`, returning where to continue.
    fn step(&mut self, ch: char, at: Position) -> usize {
        if self.state.in_heading() {
            return self.feed_heading(ch, at);
        }
        // An open emphasis run takes every character, `#` at line start
        // included; a stray marker turns later headings into text.
        if self.state.in_emphasis() {
            return self.feed_emphasis(ch, at);
        }

        let next = at.offset + ch.len_utf8();
        match classify(ch) {
            TokenKind::HeadingMarker if at.at_line_start() => {
                self.state.enter_heading();
                HeadingRecognizer::new(&mut self.state.heading).start(at);
            }
            TokenKind::EmphasisMarker => {
                self.state.enter_emphasis();
                EmphasisRecognizer::new(&mut self.state.emphasis).start(at);
            }
            TokenKind::Space => LineBreakDetector::new(&mut self.state.line).space(),
            TokenKind::Newline => self.newline(),
            TokenKind::HeadingMarker | TokenKind::Other => {
                let mut buf = [0u8; 4];
                self.write_content(ch.encode_utf8(&mut buf));
            }
        }
        next
    }

    fn feed_heading(&mut self, ch: char, at: Position) -> usize {
        match HeadingRecognizer::new(&mut self.state.heading).feed(ch, at) {
            Step::Consumed => at.offset + ch.len_utf8(),
            Step::Done(token) => {
                self.state.exit_heading();
                self.resolve_heading(token)
            }
        }
    }

    fn feed_emphasis(&mut self, ch: char, at: Position) -> usize {
        match EmphasisRecognizer::new(&mut self.state.emphasis).feed(ch, at) {
            Step::Consumed => at.offset + ch.len_utf8(),
            Step::Done(token) => {
                self.state.exit_emphasis();
                self.resolve_emphasis(token)
            }
        }
    }

    fn resolve_heading(&mut self, token: ParsedToken) -> usize {
        match token.outcome {
            Outcome::Rendered(html) => self.write_block(&html),
            Outcome::Fallback {
                literal,
                diagnostic,
            } => self.write_fallback(&literal, diagnostic),
        }
        token.resume
    }

    fn resolve_emphasis(&mut self, token: ParsedToken) -> usize {
        match token.outcome {
            Outcome::Rendered(html) => self.write_content(&html),
            Outcome::Fallback {
                literal,
                diagnostic,
            } => self.write_fallback(&literal, diagnostic),
        }
        token.resume
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Inline content: opens a paragraph if needed, preceded by any spaces
    /// held back on the line.
    fn write_content(&mut self, text: &str) {
        let spaces = LineBreakDetector::new(&mut self.state.line).content();
        let mut content = if self.state.paragraph.is_open() {
            " ".repeat(spaces)
        } else {
            String::new()
        };
        content.push_str(text);

        let mut tracker = ParagraphTracker::new(&mut self.state.paragraph);
        tracker.prepare_content();
        tracker.commit(&mut self.out, &content, "");
        self.state.sync_block();
    }

    /// A block element, which closes any open paragraph first.
    fn write_block(&mut self, html: &str) {
        trace!("block at {}", self.state.cursor);
        LineBreakDetector::new(&mut self.state.line).take_spaces();
        let mut tracker = ParagraphTracker::new(&mut self.state.paragraph);
        tracker.request_end();
        tracker.commit(&mut self.out, html, "");
        self.state.line = LineState::document_start();
        self.state.sync_block();
    }

    /// Markup that did not parse: its source text becomes content.
    fn write_fallback(&mut self, literal: &str, diagnostic: Diagnostic) {
        self.report(diagnostic);
        self.write_content(literal);
        LineBreakDetector::new(&mut self.state.line).literal(literal);
    }

    fn newline(&mut self) {
        let end = LineBreakDetector::new(&mut self.state.line).newline();
        let open = self.state.paragraph.is_open();
        let mut tracker = ParagraphTracker::new(&mut self.state.paragraph);
        match end {
            LineEnd::Break if open => tracker.commit(&mut self.out, "", HARD_BREAK),
            LineEnd::Soft { spaces } if open => {
                let mut content = " ".repeat(spaces);
                content.push('\n');
                tracker.commit(&mut self.out, &content, "");
            }
            LineEnd::Blank => tracker.request_end(),
            // nothing is open for the line to end
            LineEnd::Break | LineEnd::Soft { .. } => {}
        }
        self.state.sync_block();
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        trace!("diagnostic: {}", diagnostic);
        self.diagnostics
            .push(diagnostic.with_excerpt(self.source, self.options.context_radius));
    }

    // =========================================================================
    // Trailing flush
    // =========================================================================

    fn finish(mut self) -> Conversion {
        let end = self.state.cursor;
        if self.state.in_heading() {
            let token = HeadingRecognizer::new(&mut self.state.heading).finish(end);
            self.state.exit_heading();
            self.resolve_heading(token);
        }
        if self.state.in_emphasis() {
            let token = EmphasisRecognizer::new(&mut self.state.emphasis).finish(end);
            self.state.exit_emphasis();
            self.resolve_emphasis(token);
        }

        let spaces = LineBreakDetector::new(&mut self.state.line).take_spaces();
        let tail = if self.state.paragraph.is_open() {
            " ".repeat(spaces)
        } else {
            String::new()
        };
        let mut tracker = ParagraphTracker::new(&mut self.state.paragraph);
        tracker.request_surround();
        tracker.commit(&mut self.out, &tail, "");

        self.out.push_str("\n</");
        self.out.push_str(&self.options.container);
        self.out.push('>');

        Conversion {
            html: self.out,
            diagnostics: self.diagnostics,
        }
    }
}
