//! Core enums for mdpress parsing state.
//!
//! These enums represent the various states that the parser can be in
//! while converting a document. Each one is a small closed set so the
//! parser never has to interpret loose integer codes.

use serde::{Deserialize, Serialize};

/// The block-level construct the current line belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    /// Between blocks; nothing is open
    #[default]
    None,
    /// A heading line is being recognized
    Heading,
    /// A paragraph is open in the output
    Paragraph,
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::None => write!(f, "none"),
            BlockKind::Heading => write!(f, "heading"),
            BlockKind::Paragraph => write!(f, "paragraph"),
        }
    }
}

/// Progress through a heading line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingPhase {
    /// Counting `#` markers (fewer than six seen)
    #[default]
    CountingMarkers,
    /// Six markers seen; only the separating space may follow
    AwaitingSeparator,
    /// Copying heading text until the end of the line
    WritingText,
}

impl std::fmt::Display for HeadingPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeadingPhase::CountingMarkers => write!(f, "counting-markers"),
            HeadingPhase::AwaitingSeparator => write!(f, "awaiting-separator"),
            HeadingPhase::WritingText => write!(f, "writing-text"),
        }
    }
}

/// Emphasis style selected by the length of the opening delimiter run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmphasisClass {
    /// No valid class (no run, or a run longer than three)
    #[default]
    None,
    /// `*text*`
    Italic,
    /// `**text**`
    Bold,
    /// `***text***`
    ItalicBold,
}

impl EmphasisClass {
    /// Map an opening run length to its class.
    ///
    /// # Example
    ///
    /// ```
    /// use mdpress_core::EmphasisClass;
    /// assert_eq!(EmphasisClass::from_run_length(2), EmphasisClass::Bold);
    /// assert_eq!(EmphasisClass::from_run_length(4), EmphasisClass::None);
    /// ```
    pub fn from_run_length(len: usize) -> Self {
        match len {
            1 => EmphasisClass::Italic,
            2 => EmphasisClass::Bold,
            3 => EmphasisClass::ItalicBold,
            _ => EmphasisClass::None,
        }
    }

    /// Number of markers that open (and must close) this class.
    pub fn run_length(&self) -> usize {
        match self {
            EmphasisClass::None => 0,
            EmphasisClass::Italic => 1,
            EmphasisClass::Bold => 2,
            EmphasisClass::ItalicBold => 3,
        }
    }
}

impl std::fmt::Display for EmphasisClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmphasisClass::None => write!(f, "none"),
            EmphasisClass::Italic => write!(f, "italic"),
            EmphasisClass::Bold => write!(f, "bold"),
            EmphasisClass::ItalicBold => write!(f, "italic-bold"),
        }
    }
}

/// Progress through an emphasis span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmphasisPhase {
    /// Counting the opening delimiter run
    #[default]
    MatchingOpen,
    /// Copying emphasized content
    Writing,
    /// Counting a candidate closing run
    MatchingClose,
}

impl std::fmt::Display for EmphasisPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmphasisPhase::MatchingOpen => write!(f, "matching-open"),
            EmphasisPhase::Writing => write!(f, "writing"),
            EmphasisPhase::MatchingClose => write!(f, "matching-close"),
        }
    }
}
