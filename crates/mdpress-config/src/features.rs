//! Feature flags configuration.
//!
//! This module contains the `FeaturesConfig` struct which holds
//! the boolean switches of a site build.

use serde::{Deserialize, Serialize};

/// Feature flags configuration.
///
/// Controls how mdpress walks and converts a source tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Convert the files of a directory in parallel.
    /// Default: true
    #[serde(default = "default_true")]
    pub parallel: bool,

    /// Skip files and directories whose name starts with a dot.
    /// Default: true
    #[serde(default = "default_true")]
    pub skip_hidden: bool,

    /// Log a warning for every malformed heading or emphasis.
    /// Default: true
    #[serde(default = "default_true")]
    pub warnings: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            skip_hidden: true,
            warnings: true,
        }
    }
}

/// Feature switches named by an override. Unnamed switches are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FeaturesOverride {
    pub parallel: Option<bool>,
    pub skip_hidden: Option<bool>,
    pub warnings: Option<bool>,
}

impl FeaturesConfig {
    /// Merge an override into this config, keeping every switch it does
    /// not name.
    pub fn merge(&mut self, other: &FeaturesOverride) {
        if let Some(parallel) = other.parallel {
            self.parallel = parallel;
        }
        if let Some(skip_hidden) = other.skip_hidden {
            self.skip_hidden = skip_hidden;
        }
        if let Some(warnings) = other.warnings {
            self.warnings = warnings;
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let features = FeaturesConfig::default();
        assert!(features.parallel);
        assert!(features.skip_hidden);
        assert!(features.warnings);
    }

    fn all_off() -> FeaturesConfig {
        FeaturesConfig {
            parallel: false,
            skip_hidden: false,
            warnings: false,
        }
    }

    #[test]
    fn test_serde_pascal_case() {
        let toml_str = r#"
            Parallel = false
            SkipHidden = false
            Warnings = false
        "#;

        let features: FeaturesConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(features, all_off());
    }

    #[test]
    fn test_missing_keys_default_on() {
        let features: FeaturesConfig = toml::from_str("Parallel = false").unwrap();
        assert!(!features.parallel);
        assert!(features.skip_hidden);
        assert!(features.warnings);
    }

    #[test]
    fn test_merge_only_named_switches() {
        let mut features = all_off();
        let other: FeaturesOverride = toml::from_str("Warnings = true").unwrap();
        assert_eq!(other.parallel, None);

        features.merge(&other);
        assert!(!features.parallel);
        assert!(!features.skip_hidden);
        assert!(features.warnings);
    }
}
