//! Configuration module

use crate::error::CliError;
use bitext_core::config::{DEFAULT_MAX_PARTITIONS, DEFAULT_PARALLEL_THRESHOLD};
use bitext_core::partition::generator::{DEFAULT_GENERATOR_CAP, DEFAULT_SEED};
use bitext_core::{AlignOptions, ScoringWeights};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Search configuration
    #[serde(default)]
    pub alignment: AlignmentConfig,

    /// Scoring weights
    #[serde(default)]
    pub scoring: ScoringWeights,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Search-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AlignmentConfig {
    /// Partitions scored per segmentation policy
    pub max_partitions: usize,

    /// Partitions generated per segmentation policy
    pub generator_cap: usize,

    /// Sampling seed
    pub seed: u64,

    /// Partition count at which scoring goes parallel
    pub parallel_threshold: usize,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            max_partitions: DEFAULT_MAX_PARTITIONS,
            generator_cap: DEFAULT_GENERATOR_CAP,
            seed: DEFAULT_SEED,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl CliConfig {
    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))
    }

    /// Parse TOML configuration text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Alignment options described by this file
    pub fn align_options(&self) -> AlignOptions {
        AlignOptions {
            max_partitions: self.alignment.max_partitions,
            generator_cap: self.alignment.generator_cap,
            seed: self.alignment.seed,
            verbose: false,
            parallel_threshold: self.alignment.parallel_threshold,
            weights: self.scoring,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.align_options(), AlignOptions::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = CliConfig::from_toml(
            r#"
            [alignment]
            max_partitions = 500
            seed = 7

            [scoring]
            merge = 80.0

            [output]
            pretty_json = true
            "#,
        )
        .unwrap();

        assert_eq!(config.alignment.max_partitions, 500);
        assert_eq!(config.alignment.generator_cap, DEFAULT_GENERATOR_CAP);
        assert!(config.output.pretty_json);

        let options = config.align_options();
        assert_eq!(options.seed, 7);
        assert_eq!(options.weights.merge, 80.0);
        assert_eq!(options.weights.leading_empty, 15_000.0);
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(CliConfig::from_toml("[alignment]\nmax_partitions = \"many\"").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let error = CliConfig::load(Path::new("/nonexistent/bitext.toml")).unwrap_err();
        assert!(error.to_string().starts_with("Configuration error: cannot read"));
    }
}
