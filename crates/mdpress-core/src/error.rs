//! Error types for mdpress

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mdpress operations.
///
/// Markup problems inside a document are never errors of this kind; they
/// are reported as [`crate::Diagnostic`]s and the document still converts.
#[derive(Error, Debug)]
pub enum MdpressError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The Markdown file pattern did not compile
    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A source or destination path could not be used
    #[error("Path error: {}: {}", .path.display(), .reason)]
    Path { path: PathBuf, reason: String },
}

/// Result type alias for mdpress operations
pub type Result<T> = std::result::Result<T, MdpressError>;
