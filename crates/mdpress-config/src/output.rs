//! Output configuration.
//!
//! Which files count as Markdown, what they are renamed to, and how the
//! converted HTML is wrapped.

use mdpress_parser::{DEFAULT_CONTAINER, DEFAULT_CONTEXT_RADIUS};
use serde::{Deserialize, Serialize};

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputConfig {
    /// Element wrapping each converted document.
    /// Default: "article"
    #[serde(default = "default_container")]
    pub container: String,

    /// Extension given to converted files, without the dot.
    /// Default: "html"
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Regex matched against file names to pick Markdown documents.
    /// Default: `\.md$`
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Characters of source shown on each side of a diagnostic.
    /// Default: 15
    #[serde(default = "default_context_radius")]
    pub context_radius: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            container: default_container(),
            extension: default_extension(),
            pattern: default_pattern(),
            context_radius: default_context_radius(),
        }
    }
}

/// Output values named by an override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutputOverride {
    pub container: Option<String>,
    pub extension: Option<String>,
    pub pattern: Option<String>,
    pub context_radius: Option<usize>,
}

impl OutputConfig {
    /// Merge an override into this config, keeping every value it does
    /// not name.
    pub fn merge(&mut self, other: &OutputOverride) {
        if let Some(ref container) = other.container {
            self.container = container.clone();
        }
        if let Some(ref extension) = other.extension {
            self.extension = extension.clone();
        }
        if let Some(ref pattern) = other.pattern {
            self.pattern = pattern.clone();
        }
        if let Some(context_radius) = other.context_radius {
            self.context_radius = context_radius;
        }
    }
}

fn default_container() -> String {
    DEFAULT_CONTAINER.to_string()
}

fn default_extension() -> String {
    "html".to_string()
}

fn default_pattern() -> String {
    r"\.md$".to_string()
}

fn default_context_radius() -> usize {
    DEFAULT_CONTEXT_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let output = OutputConfig::default();
        assert_eq!(output.container, "article");
        assert_eq!(output.extension, "html");
        assert_eq!(output.pattern, r"\.md$");
        assert_eq!(output.context_radius, 15);
    }

    #[test]
    fn test_serde_pascal_case() {
        let toml_str = r#"
            Container = "main"
            Extension = "htm"
            Pattern = '\.(md|markdown)$'
            ContextRadius = 20
        "#;

        let output: OutputConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(output.container, "main");
        assert_eq!(output.extension, "htm");
        assert_eq!(output.pattern, r"\.(md|markdown)$");
        assert_eq!(output.context_radius, 20);
    }

    #[test]
    fn test_merge() {
        let mut output = OutputConfig::default();
        output.extension = "htm".to_string();
        let other: OutputOverride = toml::from_str(r#"Container = "section""#).unwrap();
        output.merge(&other);
        assert_eq!(output.container, "section");
        assert_eq!(output.extension, "htm");
        assert_eq!(output.context_radius, 15);
    }
}
