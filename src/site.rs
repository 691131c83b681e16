//! Site builder.
//!
//! Mirrors a source tree into a destination tree. Markdown documents are
//! converted to HTML under a new extension, everything else is copied as
//! it is, and hidden entries are left out.

use log::{debug, info, warn};
use mdpress_config::Config;
use mdpress_core::{MdpressError, Result};
use mdpress_parser::{Conversion, Converter};
use rayon::prelude::*;
use regex::Regex;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Totals of one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Markdown documents converted
    pub converted: usize,
    /// Other files copied unchanged
    pub copied: usize,
    /// Directories visited, the source root included
    pub directories: usize,
    /// Diagnostics across all documents
    pub warnings: usize,
}

impl BuildReport {
    fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Converted { warnings } => {
                self.converted += 1;
                self.warnings += warnings;
            }
            FileOutcome::Copied => self.copied += 1,
        }
    }
}

impl std::fmt::Display for BuildReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} converted, {} copied, {} directories, {} warnings",
            self.converted, self.copied, self.directories, self.warnings
        )
    }
}

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileOutcome {
    Converted { warnings: usize },
    Copied,
}

/// Builds a destination tree from a source tree.
#[derive(Debug)]
pub struct SiteBuilder {
    config: Config,
    converter: Converter,
    pattern: Regex,
}

impl SiteBuilder {
    /// Create a builder, compiling the configured Markdown pattern.
    pub fn new(config: Config) -> Result<Self> {
        let pattern = config.markdown_pattern()?;
        let converter = Converter::with_options(config.convert_options());
        Ok(Self {
            config,
            converter,
            pattern,
        })
    }

    /// Whether a file with this name gets converted.
    pub fn is_markdown(&self, name: &OsStr) -> bool {
        self.pattern.is_match(&name.to_string_lossy())
    }

    /// Convert one document and log its diagnostics against `path`.
    pub fn convert_document(&self, path: &Path, source: &str) -> Conversion {
        let conversion = self.converter.convert(source);
        if self.config.features.warnings && !conversion.is_clean() {
            for diagnostic in &conversion.diagnostics {
                warn!("{}: {}", path.display(), diagnostic);
                if let Some(excerpt) = &diagnostic.excerpt {
                    warn!("{}", excerpt.caret_line());
                }
            }
        }
        conversion
    }

    /// Build `dst` from `src`.
    ///
    /// `dst` and any missing parents are created; existing files in it are
    /// overwritten. `dst` may live inside `src` and is then left out of the
    /// walk, but it may not be `src` itself.
    ///
    /// The build stops at the first failing file. In parallel mode, files of
    /// the same directory already being converted are still written.
    pub fn build(&self, src: &Path, dst: &Path) -> Result<BuildReport> {
        if !src.is_dir() {
            return Err(MdpressError::Path {
                path: src.to_path_buf(),
                reason: "source is not a directory".to_string(),
            });
        }
        let src_root = fs::canonicalize(src).map_err(at_path(src))?;
        fs::create_dir_all(dst).map_err(at_path(dst))?;
        let dst_root = fs::canonicalize(dst).map_err(at_path(dst))?;
        if dst_root == src_root {
            return Err(MdpressError::Path {
                path: dst.to_path_buf(),
                reason: "destination is the source directory".to_string(),
            });
        }

        let mut report = BuildReport::default();
        self.build_dir(src, dst, &dst_root, &mut report)?;
        info!("built {} from {}: {}", dst.display(), src.display(), report);
        Ok(report)
    }

    fn build_dir(
        &self,
        src: &Path,
        dst: &Path,
        dst_root: &Path,
        report: &mut BuildReport,
    ) -> Result<()> {
        info!("entering {}", src.display());
        report.directories += 1;

        let (files, dirs) = self.read_entries(src, dst_root)?;

        let outcomes: Vec<FileOutcome> = if self.config.features.parallel {
            files
                .par_iter()
                .map(|path| self.build_file(path, dst))
                .collect::<Result<_>>()?
        } else {
            files
                .iter()
                .map(|path| self.build_file(path, dst))
                .collect::<Result<_>>()?
        };
        for outcome in outcomes {
            report.record(outcome);
        }

        for dir in dirs {
            let Some(name) = dir.file_name() else {
                continue;
            };
            let target = dst.join(name);
            fs::create_dir_all(&target).map_err(at_path(&target))?;
            self.build_dir(&dir, &target, dst_root, report)?;
        }

        Ok(())
    }

    /// Files and subdirectories of `dir`, each sorted by name. The
    /// destination root is never listed.
    fn read_entries(&self, dir: &Path, dst_root: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
        let mut files = Vec::new();
        let mut dirs = Vec::new();

        for entry in fs::read_dir(dir).map_err(at_path(dir))? {
            let entry = entry.map_err(at_path(dir))?;
            if self.config.features.skip_hidden && is_hidden(&entry.file_name()) {
                debug!("skipping hidden {}", entry.path().display());
                continue;
            }

            let path = entry.path();
            if path.is_dir() {
                if fs::canonicalize(&path).is_ok_and(|p| p == dst_root) {
                    debug!("skipping destination {}", path.display());
                    continue;
                }
                dirs.push(path);
            } else if path.is_file() {
                files.push(path);
            } else {
                debug!("skipping {}", path.display());
            }
        }

        files.sort();
        dirs.sort();
        Ok((files, dirs))
    }

    fn build_file(&self, path: &Path, dst: &Path) -> Result<FileOutcome> {
        let name = path.file_name().ok_or_else(|| MdpressError::Path {
            path: path.to_path_buf(),
            reason: "no file name".to_string(),
        })?;
        let target = dst.join(name);

        if !self.is_markdown(name) {
            debug!("copying {}", path.display());
            fs::copy(path, &target).map_err(at_path(path))?;
            return Ok(FileOutcome::Copied);
        }

        let source = fs::read_to_string(path).map_err(at_path(path))?;
        let conversion = self.convert_document(path, &source);
        let target = target.with_extension(&self.config.output.extension);
        fs::write(&target, &conversion.html).map_err(at_path(&target))?;
        info!("converted {} -> {}", path.display(), target.display());

        Ok(FileOutcome::Converted {
            warnings: conversion.diagnostics.len(),
        })
    }
}

fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Attach the path an I/O operation failed on.
fn at_path(path: &Path) -> impl FnOnce(io::Error) -> MdpressError + '_ {
    move |err| MdpressError::Path {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
