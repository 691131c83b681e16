//! mdpress Parser
//!
//! A single-pass converter from a small Markdown dialect to HTML. This is
//! the core of mdpress.
//!
//! # Overview
//!
//! The dialect has headings, paragraphs, hard line breaks, and three
//! emphasis styles. The converter reads the document one character at a
//! time and never looks back. Markup that turns out to be malformed is
//! written out as the exact source text and reported as a [`Diagnostic`];
//! a conversion never fails.
//!
//! # Example
//!
//! ```
//! use mdpress_parser::convert;
//!
//! let html = convert("# Hello\n\nSome *emphasis* here.");
//! assert_eq!(
//!     html,
//!     "<article>\n\n<h1>Hello</h1>\n\n<p>Some <i>emphasis</i> here.</p>\n\n</article>"
//! );
//! ```

pub mod composer;
pub mod emphasis;
pub mod heading;
pub mod line_break;
pub mod paragraph;
pub mod recognizer;
pub mod tokenizer;

pub use composer::Composer;
pub use emphasis::{EmphasisRecognizer, EMPHASIS_TAGS, MAX_RUN};
pub use heading::{HeadingRecognizer, HEADING_TAGS, MAX_LEVEL};
pub use line_break::{LineBreakDetector, LineEnd, HARD_BREAK};
pub use paragraph::{ParagraphTracker, PARAGRAPH_CLOSE, PARAGRAPH_OPEN};
pub use recognizer::{Outcome, ParsedToken, Recognizer, Step};
pub use tokenizer::{classify, TokenKind};

use log::{debug, warn};
use mdpress_core::Diagnostic;
use std::borrow::Cow;

/// Wrapper element used when none is configured.
pub const DEFAULT_CONTAINER: &str = "article";

/// Characters of context kept on each side of a diagnostic.
pub const DEFAULT_CONTEXT_RADIUS: usize = 15;

/// Options for a [`Converter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Name of the element wrapping the whole document
    pub container: String,
    /// Characters of source kept on each side of a diagnostic
    pub context_radius: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_string(),
            context_radius: DEFAULT_CONTEXT_RADIUS,
        }
    }
}

/// Result of converting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The complete HTML document
    pub html: String,
    /// Malformed markup found along the way, in document order
    pub diagnostics: Vec<Diagnostic>,
}

impl Conversion {
    /// Whether the document converted without diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Converts documents with a fixed set of options.
///
/// A converter holds no per-document state, so one instance can be
/// shared by any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with the given options.
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Get the options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a complete document.
    pub fn convert(&self, document: &str) -> Conversion {
        let source = normalize_line_endings(document);
        let conversion = Composer::new(&source, &self.options).run();
        debug!(
            "converted {} bytes into {} bytes with {} diagnostic(s)",
            document.len(),
            conversion.html.len(),
            conversion.diagnostics.len()
        );
        conversion
    }
}

/// Convert a complete document with default options.
///
/// Diagnostics are logged as warnings; use [`Converter::convert`] to
/// handle them yourself.
pub fn convert(document: &str) -> String {
    let conversion = Converter::new().convert(document);
    for diagnostic in &conversion.diagnostics {
        warn!("{}", diagnostic);
    }
    conversion.html
}

/// Replace `\r\n` with `\n`, borrowing when there is nothing to replace.
pub fn normalize_line_endings(document: &str) -> Cow<'_, str> {
    if document.contains("\r\n") {
        Cow::Owned(document.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(document)
    }
}
