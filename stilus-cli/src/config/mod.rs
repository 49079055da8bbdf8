//! Configuration module

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stilus_core::Analyses;

use crate::error::CliError;

/// CLI configuration file
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Analysis-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Locale used when `--locale` is not given
    pub default_locale: Option<String>,

    /// `all`, `transitions` or `passive`
    pub analyses: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_locale: None,
            analyses: "all".to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Analyses selected by the configuration file
    pub fn analyses(&self) -> Result<Analyses> {
        Ok(self
            .analysis
            .analyses
            .parse::<Analyses>()
            .map_err(CliError::from)?)
    }
}
