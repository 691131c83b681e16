//! mdpress Core
//!
//! This crate provides core types, parser state, and error definitions
//! for the mdpress Markdown to HTML converter.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`ParserState`] - Per-document state owned by the output composer
//! - [`BlockKind`], [`HeadingPhase`], [`EmphasisClass`], [`EmphasisPhase`] - State enums
//! - [`Diagnostic`], [`DiagnosticKind`], [`Excerpt`] - Recoverable markup problems
//! - [`MdpressError`] - Fatal errors of the surrounding tooling
//! - [`Position`] - Source locations

pub mod diagnostic;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;

pub use diagnostic::{Diagnostic, DiagnosticKind, Excerpt};
pub use enums::{BlockKind, EmphasisClass, EmphasisPhase, HeadingPhase};
pub use error::{MdpressError, Result};
pub use state::{EmphasisState, HeadingState, LineState, ParagraphFlags, ParserState};
pub use types::Position;
