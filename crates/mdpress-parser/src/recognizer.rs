//! The contract between the composer and the construct recognizers.
//!
//! A recognizer is fed one character at a time once the composer has seen
//! the character that starts its construct. It either keeps consuming or
//! resolves to a [`ParsedToken`]: rendered HTML when the construct turned
//! out to be valid, or the exact source text plus a diagnostic when it did
//! not. The composer does not need to know why a fallback happened.

use mdpress_core::{Diagnostic, Position};

/// What a resolved construct produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The construct was valid; this is its HTML.
    Rendered(String),
    /// The construct was malformed; write `literal` as plain text.
    Fallback {
        /// Exact source text consumed by the recognizer
        literal: String,
        /// Why the construct was rejected
        diagnostic: Diagnostic,
    },
}

/// A resolved construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedToken {
    /// Rendered HTML or literal fallback
    pub outcome: Outcome,
    /// Byte offset where dispatch continues
    ///
    /// Equal to the offset of the character just fed when that character
    /// was not part of the construct and must be dispatched again.
    pub resume: usize,
    /// Source location the token applies to
    pub location: Position,
}

impl ParsedToken {
    /// A valid construct starting at `location`.
    pub fn rendered(html: String, location: Position, resume: usize) -> Self {
        Self {
            outcome: Outcome::Rendered(html),
            resume,
            location,
        }
    }

    /// A malformed construct, located where the diagnostic points.
    pub fn fallback(literal: String, diagnostic: Diagnostic, resume: usize) -> Self {
        let location = diagnostic.location;
        Self {
            outcome: Outcome::Fallback {
                literal,
                diagnostic,
            },
            resume,
            location,
        }
    }

    /// The text to write, whichever way the construct resolved.
    pub fn text(&self) -> &str {
        match &self.outcome {
            Outcome::Rendered(html) => html,
            Outcome::Fallback { literal, .. } => literal,
        }
    }

    /// The diagnostic, if the construct fell back.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match &self.outcome {
            Outcome::Rendered(_) => None,
            Outcome::Fallback { diagnostic, .. } => Some(diagnostic),
        }
    }
}

/// Result of feeding one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The character belongs to the construct, which is still open.
    Consumed,
    /// The construct is resolved.
    Done(ParsedToken),
}

/// A construct recognizer driven by the composer.
pub trait Recognizer {
    /// Feed the character at `at`.
    fn feed(&mut self, ch: char, at: Position) -> Step;

    /// The document ended at `at` while the construct was open.
    fn finish(&mut self, at: Position) -> ParsedToken;
}
