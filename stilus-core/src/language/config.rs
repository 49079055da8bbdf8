//! Configuration structures and validation
//!
//! This module defines the TOML schema for per-locale word lists.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    pub transitions: Transitions,
    #[serde(default)]
    pub passive: Option<Passive>,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Transition word lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transitions {
    pub words: Vec<String>,
    /// Kept as nested lists so that malformed entries reach validation
    /// instead of failing inside the TOML decoder
    #[serde(default)]
    pub two_part: Vec<Vec<String>>,
}

/// Passive voice lexicon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passive {
    pub auxiliaries: Vec<String>,
    #[serde(default)]
    pub regular_suffixes: Vec<String>,
    #[serde(default)]
    pub irregular_participles: Vec<String>,
    /// Words with a participle ending that are never participles ("nada")
    #[serde(default)]
    pub non_participles: Vec<String>,
    #[serde(default)]
    pub direct_precedence_exceptions: Vec<String>,
    #[serde(default)]
    pub stopwords: Vec<String>,
}

impl LanguageConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(Error::InvalidInput("language code must not be empty".into()));
        }

        if self.transitions.words.is_empty() {
            return Err(Error::InvalidInput(format!(
                "no transition words defined for '{}'",
                self.metadata.code
            )));
        }

        if let Some(passive) = &self.passive {
            if passive.auxiliaries.is_empty() {
                return Err(Error::InvalidInput(format!(
                    "passive section for '{}' defines no auxiliaries",
                    self.metadata.code
                )));
            }
            if passive.regular_suffixes.is_empty() && passive.irregular_participles.is_empty() {
                return Err(Error::InvalidInput(format!(
                    "passive section for '{}' defines no participle forms",
                    self.metadata.code
                )));
            }
        }

        Ok(())
    }
}
