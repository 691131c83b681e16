//! Diagnostics for malformed markup.
//!
//! A diagnostic never stops a conversion. The construct it describes is
//! written out literally and the diagnostic is handed to whoever called the
//! converter so it can be logged.

use crate::types::Position;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

/// Every recoverable problem the recognizers can report.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// More than six `#` at the start of a line
    #[error("headings can have at most 6 `#` characters")]
    TooManyMarkers,

    /// The `#` run is not followed by a space
    #[error("an unsupported character was found directly after `#`; a space must separate the markers from the heading text")]
    MissingSeparator,

    /// The document ended before the heading line did
    #[error("heading was not terminated by a newline")]
    UnterminatedHeading,

    /// An opening run of more than three `*`
    #[error("emphasis delimiter runs can be at most 3 `*` characters long")]
    InvalidDelimiterRun,

    /// Whitespace right after an opening run
    #[error("emphasis cannot open next to whitespace")]
    EmptyOrInvalidEmphasis,

    /// A closing run longer than the opening run
    #[error("closing delimiter run is longer than the opening run")]
    DelimiterRunOverflow,

    /// The document or paragraph ended inside an emphasis span
    #[error("emphasis was not closed")]
    UnterminatedEmphasis,
}

/// A bounded window of source text around a failure point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Excerpt {
    /// Up to `radius` characters before the failure point
    pub before: String,
    /// Up to `radius` characters from the failure point on
    pub after: String,
}

impl Excerpt {
    /// Cut the window around byte `offset` of `source`.
    ///
    /// Offsets past the end or inside a multi-byte character are clamped
    /// down to the nearest character boundary.
    ///
    /// # Example
    ///
    /// ```
    /// use mdpress_core::Excerpt;
    /// let excerpt = Excerpt::around("hello world", 6, 3);
    /// assert_eq!(excerpt.before, "lo ");
    /// assert_eq!(excerpt.after, "wor");
    /// ```
    pub fn around(source: &str, offset: usize, radius: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let (head, tail) = source.split_at(offset);

        let skip = head.chars().count().saturating_sub(radius);
        Self {
            before: head.chars().skip(skip).collect(),
            after: tail.chars().take(radius).collect(),
        }
    }

    /// A line with a caret under the `>` that [`Display`](std::fmt::Display) places at
    /// the failure point. Wide characters are accounted for.
    pub fn caret_line(&self) -> String {
        let width = "...".width() + visible(&self.before).width() + 1;
        format!("{}^", " ".repeat(width))
    }
}

impl std::fmt::Display for Excerpt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "...{} > {}...",
            visible(&self.before),
            visible(&self.after)
        )
    }
}

/// Keep an excerpt on one line.
fn visible(text: &str) -> String {
    text.replace('\n', "↵")
}

/// A recoverable problem found while converting a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// What went wrong
    pub kind: DiagnosticKind,
    /// Where it went wrong
    pub location: Position,
    /// Surrounding source text, once attached
    pub excerpt: Option<Excerpt>,
}

impl Diagnostic {
    /// Create a diagnostic without source context.
    pub fn new(kind: DiagnosticKind, location: Position) -> Self {
        Self {
            kind,
            location,
            excerpt: None,
        }
    }

    /// Attach the window of `source` around the diagnostic's location.
    pub fn with_excerpt(mut self, source: &str, radius: usize) -> Self {
        self.excerpt = Some(Excerpt::around(source, self.location.offset, radius));
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.location)?;
        if let Some(excerpt) = &self.excerpt {
            write!(f, ": {}", excerpt)?;
        }
        Ok(())
    }
}
