//! Command-line interface for mdpress.

use clap::Parser;
use std::path::PathBuf;

/// mdpress - Converts a tree of Markdown posts into HTML pages.
///
/// Mirrors the source directory into the destination directory, turning
/// every Markdown file into an HTML page and copying everything else.
#[derive(Parser, Debug)]
#[command(
    name = "mdpress",
    author = "mdpress Contributors",
    version,
    about = "Converts a tree of Markdown posts into HTML pages",
    after_help = "Examples:\n  \
                  mdpress --src-dir posts --dst-dir public\n  \
                  mdpress --src-dir posts --dst-dir public --serial -l info\n  \
                  echo '# Title' | mdpress"
)]
pub struct Cli {
    /// Directory of Markdown sources (reads stdin if not provided)
    #[arg(long = "src-dir", alias = "src_dir", value_name = "DIR", requires = "dst_dir")]
    pub src_dir: Option<PathBuf>,

    /// Directory the site is written to
    #[arg(long = "dst-dir", alias = "dst_dir", value_name = "DIR", requires = "src_dir")]
    pub dst_dir: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Convert files one at a time
    #[arg(long = "serial")]
    pub serial: bool,

    /// Element wrapping each document (overrides the config)
    #[arg(long = "container", value_name = "NAME")]
    pub container: Option<String>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// Write the default config file if there is none, then exit
    #[arg(long = "init-config")]
    pub init_config: bool,
}

/// Show paths information.
pub fn show_paths() {
    use mdpress_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
