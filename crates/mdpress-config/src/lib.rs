//! mdpress Config
//!
//! This crate handles configuration loading and management
//! for mdpress, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/mdpress/config.toml`
//! - macOS: `~/Library/Application Support/mdpress/config.toml`
//! - Windows: `%APPDATA%\mdpress\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use mdpress_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod features;
mod output;

pub use features::{FeaturesConfig, FeaturesOverride};
pub use output::{OutputConfig, OutputOverride};

use mdpress_core::{MdpressError, Result};
use mdpress_parser::ConvertOptions;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[features]
Parallel   = true
SkipHidden = true
Warnings   = true

[output]
Container     = "article"
Extension     = "html"
Pattern       = '\.md$'
ContextRadius = 15
"#;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Feature flags configuration
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings named by a `-c` override, merged over the loaded config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigOverride {
    #[serde(default)]
    pub features: FeaturesOverride,

    #[serde(default)]
    pub output: OutputOverride,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "mdpress")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| MdpressError::Config("Could not determine config directory".into()))?;
        Self::ensure_config_file_in(&config_dir)
    }

    /// Like [`Config::ensure_config_file`], inside `config_dir`. An existing
    /// file is left untouched.
    pub fn ensure_config_file_in(config_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| MdpressError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` names an existing file, load and merge it;
    ///    otherwise parse it as inline TOML and merge that
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mdpress_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[output]\nContainer = \"main\"")).unwrap();
    /// assert_eq!(config.output.container, "main");
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            config.merge(&Self::parse_override(override_str)?);
        }

        Ok(config)
    }

    /// Parse an override given as a file path or as inline TOML.
    pub fn parse_override(override_str: &str) -> Result<ConfigOverride> {
        let override_path = Path::new(override_str);

        let override_toml = if override_path.is_file() {
            std::fs::read_to_string(override_path)?
        } else {
            override_str.to_string()
        };

        toml::from_str(&override_toml)
            .map_err(|e| MdpressError::Config(format!("Override parse error: {}", e)))
    }

    /// Merge an override into this config.
    ///
    /// Values named in `other` take precedence; everything else in `self`
    /// is kept.
    ///
    /// # Example
    ///
    /// ```
    /// use mdpress_config::{Config, ConfigOverride};
    ///
    /// let mut base = Config::default();
    /// base.output.container = "main".to_string();
    /// let override_config: ConfigOverride = toml::from_str(r#"
    ///     [features]
    ///     Parallel = false
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert!(!base.features.parallel);
    /// assert_eq!(base.output.container, "main");
    /// ```
    pub fn merge(&mut self, other: &ConfigOverride) {
        self.features.merge(&other.features);
        self.output.merge(&other.output);
    }

    /// Options for the converter.
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            container: self.output.container.clone(),
            context_radius: self.output.context_radius,
        }
    }

    /// Compile the pattern that picks Markdown documents.
    ///
    /// # Example
    ///
    /// ```
    /// use mdpress_config::Config;
    /// let pattern = Config::default().markdown_pattern().unwrap();
    /// assert!(pattern.is_match("index.md"));
    /// assert!(!pattern.is_match("style.css"));
    /// ```
    pub fn markdown_pattern(&self) -> Result<Regex> {
        Ok(Regex::new(&self.output.pattern)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.features.parallel);
        assert!(config.features.skip_hidden);
        assert_eq!(config.output.container, "article");
        assert_eq!(config.output.context_radius, 15);
    }

    #[test]
    fn test_default_toml_matches_struct_defaults() {
        let config: Config = toml::from_str(DEFAULT_TOML).unwrap();
        assert_eq!(config.features, FeaturesConfig::default());
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();

        let override_toml = r#"
            [features]
            Warnings = false
            [output]
            Extension = "htm"
        "#;
        let override_config: ConfigOverride = toml::from_str(override_toml).unwrap();

        base.merge(&override_config);
        assert!(!base.features.warnings);
        assert_eq!(base.output.extension, "htm");
        assert_eq!(base.output.container, "article");
    }

    #[test]
    fn test_merge_keeps_unnamed_settings() {
        let mut base: Config = toml::from_str("[output]\nContainer = \"main\"").unwrap();
        base.features.skip_hidden = false;

        base.merge(&Config::parse_override("[features]\nParallel = false").unwrap());
        assert!(!base.features.parallel);
        assert!(!base.features.skip_hidden);
        assert_eq!(base.output.container, "main");
    }

    #[test]
    fn test_parse_inline_override() {
        let config = Config::parse_override("[output]\nContainer = \"main\"").unwrap();
        assert_eq!(config.output.container.as_deref(), Some("main"));
        assert_eq!(config.output.extension, None);
    }

    #[test]
    fn test_parse_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[features]\nSkipHidden = false").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = Config::parse_override(&path).unwrap();
        assert_eq!(config.features.skip_hidden, Some(false));
    }

    #[test]
    fn test_bad_override_is_config_error() {
        let err = Config::parse_override("[output\nbroken").unwrap_err();
        assert!(matches!(err, MdpressError::Config(_)));
    }

    #[test]
    fn test_config_path() {
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("mdpress"));
            assert!(p.ends_with("config.toml"));
        }
    }

    #[test]
    fn test_convert_options() {
        let mut config = Config::default();
        config.output.container = "main".to_string();
        config.output.context_radius = 4;

        let options = config.convert_options();
        assert_eq!(options.container, "main");
        assert_eq!(options.context_radius, 4);
    }

    #[test]
    fn test_markdown_pattern() {
        let config = Config::default();
        let pattern = config.markdown_pattern().unwrap();
        assert!(pattern.is_match("notes.md"));
        assert!(!pattern.is_match("notes.md.bak"));
    }

    #[test]
    fn test_invalid_pattern() {
        let mut config = Config::default();
        config.output.pattern = "(".to_string();
        assert!(matches!(
            config.markdown_pattern(),
            Err(MdpressError::Pattern(_))
        ));
    }

    #[test]
    fn test_ensure_config_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("mdpress");

        let path = Config::ensure_config_file_in(&config_dir).unwrap();
        assert_eq!(path, config_dir.join("config.toml"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_TOML);
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_ensure_config_file_keeps_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\nContainer = \"main\"\n").unwrap();

        assert_eq!(Config::ensure_config_file_in(dir.path()).unwrap(), path);
        assert_eq!(Config::load_from(&path).unwrap().output.container, "main");
    }
}
