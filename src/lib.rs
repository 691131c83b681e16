//! mdpress - Converts a tree of Markdown posts into HTML pages.
//!
//! The conversion itself lives in [`mdpress_parser`]; this crate walks
//! source trees and writes the results.
//!
//! # Example
//!
//! ```no_run
//! use mdpress::site::SiteBuilder;
//! use mdpress_config::Config;
//! use std::path::Path;
//!
//! let builder = SiteBuilder::new(Config::default()).unwrap();
//! let report = builder.build(Path::new("posts"), Path::new("public")).unwrap();
//! println!("{}", report);
//! ```

pub mod site;

pub use mdpress_parser::{convert, Conversion, ConvertOptions, Converter};
pub use site::{BuildReport, SiteBuilder};
