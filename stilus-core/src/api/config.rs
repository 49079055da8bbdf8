//! Analyzer configuration

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::paper::Paper;

/// Which analyses a run performs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Analyses {
    /// Transition words, plus passive voice when the locale supports it
    #[default]
    All,
    /// Transition words only
    Transitions,
    /// Passive voice only; fails for locales without passive data
    Passive,
}

impl Analyses {
    pub(crate) fn transitions(self) -> bool {
        matches!(self, Analyses::All | Analyses::Transitions)
    }

    pub(crate) fn passive(self) -> bool {
        matches!(self, Analyses::All | Analyses::Passive)
    }
}

impl FromStr for Analyses {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Analyses::All),
            "transitions" | "transition" => Ok(Analyses::Transitions),
            "passive" => Ok(Analyses::Passive),
            other => Err(Error::Configuration(format!(
                "unknown analysis '{other}', expected all, transitions or passive"
            ))),
        }
    }
}

impl fmt::Display for Analyses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Analyses::All => "all",
            Analyses::Transitions => "transitions",
            Analyses::Passive => "passive",
        };
        f.write_str(name)
    }
}

/// Analyzer configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) locale: String,
    pub(crate) language_file: Option<PathBuf>,
    pub(crate) analyses: Analyses,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Paper::DEFAULT_LOCALE.to_string(),
            language_file: None,
            analyses: Analyses::default(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Locale analyzed texts are written in
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// External language definition replacing the embedded one
    pub fn language_file(&self) -> Option<&PathBuf> {
        self.language_file.as_ref()
    }

    pub fn analyses(&self) -> Analyses {
        self.analyses
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.locale.trim().is_empty() && self.language_file.is_none() {
            return Err(Error::Configuration(
                "locale must not be empty".into(),
            ));
        }

        if let Some(path) = &self.language_file {
            if !path.exists() {
                return Err(Error::Configuration(format!(
                    "language file not found: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }
}

/// Fluent builder for [`Config`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    locale: Option<String>,
    language_file: Option<PathBuf>,
    analyses: Option<Analyses>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the locale, e.g. `es_ES`
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Load word lists from a TOML file instead of the embedded data
    pub fn language_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.language_file = Some(path.into());
        self
    }

    /// Choose the analyses to run
    pub fn analyses(mut self, analyses: Analyses) -> Self {
        self.analyses = Some(analyses);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        config.language_file = self.language_file;
        if let Some(analyses) = self.analyses {
            config.analyses = analyses;
        }

        config.validate()?;
        Ok(config)
    }
}
