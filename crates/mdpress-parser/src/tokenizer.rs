//! Character classification.
//!
//! The converter looks at one character at a time; this module decides
//! which structural role that character can play.

/// Structural role of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `#`
    HeadingMarker,
    /// `*`
    EmphasisMarker,
    /// ` `
    Space,
    /// `\n`
    Newline,
    /// Anything else
    Other,
}

/// Classify a character.
///
/// # Example
///
/// ```
/// use mdpress_parser::{classify, TokenKind};
/// assert_eq!(classify('#'), TokenKind::HeadingMarker);
/// assert_eq!(classify('x'), TokenKind::Other);
/// ```
pub fn classify(ch: char) -> TokenKind {
    match ch {
        '#' => TokenKind::HeadingMarker,
        '*' => TokenKind::EmphasisMarker,
        ' ' => TokenKind::Space,
        '\n' => TokenKind::Newline,
        _ => TokenKind::Other,
    }
}
