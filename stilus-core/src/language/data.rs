//! Validated per-locale word lists

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::language::config::{LanguageConfig, Passive};
use crate::passive::{DirectPrecedenceRule, ExceptionRuleSet, ParticipleKind};

/// Transition words of one locale
///
/// Every two-part entry holds exactly two non-empty markers; the first must
/// precede the second in a sentence for the pair to match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TransitionWordData {
    transition_words: Vec<String>,
    two_part_transition_words: Vec<[String; 2]>,
}

impl TransitionWordData {
    /// Build from raw lists, rejecting malformed entries
    pub fn new(transition_words: Vec<String>, two_part: Vec<Vec<String>>) -> Result<Self> {
        let pairs = two_part
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                <[String; 2]>::try_from(entry).map_err(|entry| {
                    Error::InvalidInput(format!(
                        "two-part transition word {index} has {} elements, expected 2",
                        entry.len()
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_pairs(transition_words, pairs)
    }

    /// Build from already paired two-part entries
    pub fn from_pairs(transition_words: Vec<String>, pairs: Vec<[String; 2]>) -> Result<Self> {
        if let Some(index) = transition_words.iter().position(|w| w.trim().is_empty()) {
            return Err(Error::InvalidInput(format!(
                "transition word {index} is empty"
            )));
        }
        if let Some(index) = pairs
            .iter()
            .position(|[first, second]| first.trim().is_empty() || second.trim().is_empty())
        {
            return Err(Error::InvalidInput(format!(
                "two-part transition word {index} has an empty element"
            )));
        }

        Ok(Self {
            transition_words,
            two_part_transition_words: pairs,
        })
    }

    /// Single transition markers, in list order
    pub fn transition_words(&self) -> &[String] {
        &self.transition_words
    }

    /// Two-part transition markers, in list order
    pub fn two_part_transition_words(&self) -> &[[String; 2]] {
        &self.two_part_transition_words
    }
}

/// Passive voice lexicon of one locale
#[derive(Debug)]
pub struct PassiveVoiceData {
    auxiliaries: HashSet<String>,
    regular_suffixes: Vec<String>,
    irregular_participles: HashSet<String>,
    non_participles: HashSet<String>,
    stopwords: HashSet<String>,
    exceptions: Arc<ExceptionRuleSet>,
}

impl PassiveVoiceData {
    /// Build from the `[passive]` configuration section
    pub fn from_config(passive: &Passive) -> Self {
        Self {
            auxiliaries: lowercase_set(&passive.auxiliaries),
            regular_suffixes: passive
                .regular_suffixes
                .iter()
                .map(|suffix| suffix.to_lowercase())
                .collect(),
            irregular_participles: lowercase_set(&passive.irregular_participles),
            non_participles: lowercase_set(&passive.non_participles),
            stopwords: lowercase_set(&passive.stopwords),
            exceptions: Arc::new(ExceptionRuleSet::new(DirectPrecedenceRule::new(
                &passive.direct_precedence_exceptions,
            ))),
        }
    }

    /// Replace the exception rules, e.g. to register extra locale rules
    pub fn with_exceptions(mut self, exceptions: ExceptionRuleSet) -> Self {
        self.exceptions = Arc::new(exceptions);
        self
    }

    /// Whether `word` is a passive auxiliary
    pub fn is_auxiliary(&self, word: &str) -> bool {
        self.auxiliaries.contains(&word.to_lowercase())
    }

    /// Whether `word` starts a new sentence part
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Morphological class of `word` if it looks like a participle
    ///
    /// Irregular forms win over suffix matches; auxiliaries ("sido") and
    /// listed non-participles ("nada") are never participles.
    pub fn participle_kind(&self, word: &str) -> Option<ParticipleKind> {
        let lower = word.to_lowercase();
        if self.auxiliaries.contains(&lower) || self.non_participles.contains(&lower) {
            return None;
        }
        if self.irregular_participles.contains(&lower) {
            return Some(ParticipleKind::Irregular);
        }
        let length = lower.chars().count();
        self.regular_suffixes
            .iter()
            .any(|suffix| length > suffix.chars().count() && lower.ends_with(suffix.as_str()))
            .then_some(ParticipleKind::Regular)
    }

    /// Exception rules for this locale
    pub fn exceptions(&self) -> &Arc<ExceptionRuleSet> {
        &self.exceptions
    }
}

fn lowercase_set(words: &[String]) -> HashSet<String> {
    words.iter().map(|word| word.to_lowercase()).collect()
}

/// All word-list data of one locale
#[derive(Debug)]
pub struct LanguageData {
    code: String,
    name: String,
    transitions: Arc<TransitionWordData>,
    passive: Option<Arc<PassiveVoiceData>>,
}

impl LanguageData {
    /// Create from a parsed configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        config.validate()?;

        let transitions = TransitionWordData::new(
            config.transitions.words.clone(),
            config.transitions.two_part.clone(),
        )?;

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            transitions: Arc::new(transitions),
            passive: config
                .passive
                .as_ref()
                .map(|passive| Arc::new(PassiveVoiceData::from_config(passive))),
        })
    }

    /// Parse and validate a TOML language definition
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(toml_str)?;
        Self::from_config(&config)
    }

    /// Load a TOML language definition from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Infrastructure(format!(
                "Failed to read language file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Language code from the metadata section
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable language name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Transition word lists
    pub fn transitions(&self) -> &Arc<TransitionWordData> {
        &self.transitions
    }

    /// Passive voice lexicon, if this locale ships one
    pub fn passive(&self) -> Result<&Arc<PassiveVoiceData>> {
        self.passive
            .as_ref()
            .ok_or_else(|| Error::MissingPassiveData(self.code.clone()))
    }

    /// Whether passive voice detection is available
    pub fn supports_passive_voice(&self) -> bool {
        self.passive.is_some()
    }
}
