//! Participle candidates and their passive/active evaluation
//!
//! A candidate starts out provisional and is evaluated at most once; the
//! result is cached on the candidate, so the order in which its accessors are
//! called never changes what they report.

use std::cell::OnceCell;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::passive::exceptions::{ExceptionRuleSet, ExclusionReason};
use crate::text::words;

/// Morphological class of a participle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipleKind {
    Regular,
    Irregular,
}

/// Locale metadata attached to a candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipleMetadata {
    /// Auxiliaries found in the sentence part
    pub auxiliaries: Vec<String>,
    pub kind: ParticipleKind,
}

impl ParticipleMetadata {
    pub fn new<I, S>(auxiliaries: I, kind: ParticipleKind) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            auxiliaries: auxiliaries.into_iter().map(Into::into).collect(),
            kind,
        }
    }
}

/// Final classification of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passive,
    Active,
}

/// Result of evaluating a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub verdict: Verdict,
    /// Set when the participle itself was ruled out
    pub exclusion: Option<ExclusionReason>,
}

/// One participle occurrence inside a sentence part
#[derive(Debug)]
pub struct Participle {
    participle: String,
    sentence_part: String,
    metadata: ParticipleMetadata,
    /// Word index of the participle within the sentence part
    position: Option<usize>,
    rules: Arc<ExceptionRuleSet>,
    evaluation: OnceCell<Evaluation>,
}

impl Participle {
    /// Create a candidate positioned at the first occurrence of `participle`
    pub fn new(
        participle: impl Into<String>,
        sentence_part: impl Into<String>,
        metadata: ParticipleMetadata,
        rules: Arc<ExceptionRuleSet>,
    ) -> Self {
        let participle = participle.into();
        let sentence_part = sentence_part.into();
        let position = if participle.is_empty() {
            None
        } else {
            words(&sentence_part)
                .iter()
                .position(|word| word.to_lowercase() == participle.to_lowercase())
        };

        Self {
            participle,
            sentence_part,
            metadata,
            position,
            rules,
            evaluation: OnceCell::new(),
        }
    }

    /// Create a candidate at a known word index, for repeated occurrences
    pub fn at_position(
        participle: impl Into<String>,
        sentence_part: impl Into<String>,
        metadata: ParticipleMetadata,
        rules: Arc<ExceptionRuleSet>,
        position: usize,
    ) -> Self {
        Self {
            participle: participle.into(),
            sentence_part: sentence_part.into(),
            metadata,
            position: Some(position),
            rules,
            evaluation: OnceCell::new(),
        }
    }

    /// The participle text, or `None` when absent or excluded
    pub fn participle(&self) -> Option<&str> {
        if self.evaluation().exclusion.is_some() {
            None
        } else {
            Some(self.participle.as_str())
        }
    }

    /// The sentence part containing the participle
    pub fn sentence_part(&self) -> &str {
        &self.sentence_part
    }

    pub fn metadata(&self) -> &ParticipleMetadata {
        &self.metadata
    }

    /// Word index of the participle within the sentence part
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Whether the word(s) before `position` in `sentence_part` are an exception
    ///
    /// Returns false when there is no word before `position`.
    pub fn direct_precedence_exception(&self, sentence_part: &str, position: usize) -> bool {
        let words = words(sentence_part);
        if position == 0 || position > words.len() {
            return false;
        }
        self.rules.direct_precedence().matches(&words[..position])
    }

    /// Evaluate the candidate (once) and return the cached result
    pub fn evaluation(&self) -> &Evaluation {
        self.evaluation.get_or_init(|| self.evaluate())
    }

    /// Whether this candidate makes its sentence part passive
    pub fn determines_sentence_part_is_passive(&self) -> bool {
        self.evaluation().verdict == Verdict::Passive
    }

    fn evaluate(&self) -> Evaluation {
        if self.participle.trim().is_empty() {
            return Evaluation {
                verdict: Verdict::Active,
                exclusion: Some(ExclusionReason::NoParticiple),
            };
        }

        if let Some(position) = self.position {
            let words = words(&self.sentence_part);
            let preceding = &words[..position.min(words.len())];
            if let Some(reason) = self.rules.check(preceding, &self.participle) {
                tracing::trace!(participle = %self.participle, ?reason, "participle excluded");
                return Evaluation {
                    verdict: Verdict::Active,
                    exclusion: Some(reason),
                };
            }
        }

        let verdict = if self.metadata.auxiliaries.is_empty() {
            Verdict::Active
        } else {
            Verdict::Passive
        };
        Evaluation {
            verdict,
            exclusion: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passive::exceptions::DirectPrecedenceRule;

    fn spanish_rules() -> Arc<ExceptionRuleSet> {
        Arc::new(ExceptionRuleSet::new(DirectPrecedenceRule::new([
            "un", "una", "el", "la",
        ])))
    }

    #[test]
    fn test_passive_participle() {
        let participle = Participle::new(
            "escrito",
            "El libro fue escrito por mi amiga.",
            ParticipleMetadata::new(["fue"], ParticipleKind::Irregular),
            spanish_rules(),
        );

        assert_eq!(participle.participle(), Some("escrito"));
        assert_eq!(participle.position(), Some(3));
        assert!(participle.determines_sentence_part_is_passive());
        assert_eq!(participle.participle(), Some("escrito"));
    }

    #[test]
    fn test_direct_precedence_exception() {
        let participle = Participle::new(
            "sentido",
            "fue un sentido monumental y grandilocuente.",
            ParticipleMetadata::new(["fue"], ParticipleKind::Irregular),
            spanish_rules(),
        );

        assert!(participle.direct_precedence_exception(participle.sentence_part(), 2));
        assert!(!participle.determines_sentence_part_is_passive());
        assert_eq!(participle.participle(), None);
        assert_eq!(
            participle.evaluation().exclusion,
            Some(ExclusionReason::DirectPrecedence)
        );
    }

    #[test]
    fn test_exclusion_independent_of_call_order() {
        let participle = Participle::new(
            "sentido",
            "fue un sentido monumental",
            ParticipleMetadata::new(["fue"], ParticipleKind::Regular),
            spanish_rules(),
        );

        // Reading the participle first already reflects the exclusion
        assert_eq!(participle.participle(), None);
        assert!(!participle.determines_sentence_part_is_passive());
        assert!(!participle.determines_sentence_part_is_passive());
    }

    #[test]
    fn test_empty_participle_is_not_passive() {
        let participle = Participle::new(
            "",
            "fue escrito por mi amiga.",
            ParticipleMetadata::new(["fue"], ParticipleKind::Regular),
            spanish_rules(),
        );

        assert!(!participle.direct_precedence_exception(participle.sentence_part(), 1));
        assert!(!participle.determines_sentence_part_is_passive());
        assert_eq!(participle.participle(), None);
        assert_eq!(
            participle.evaluation().exclusion,
            Some(ExclusionReason::NoParticiple)
        );
    }

    #[test]
    fn test_no_auxiliary_is_not_passive() {
        let participle = Participle::new(
            "escrito",
            "un texto escrito a mano",
            ParticipleMetadata::new(Vec::<String>::new(), ParticipleKind::Irregular),
            spanish_rules(),
        );

        assert!(!participle.determines_sentence_part_is_passive());
        // Not excluded: the participle stays available
        assert_eq!(participle.participle(), Some("escrito"));
    }

    #[test]
    fn test_out_of_bounds_positions() {
        let participle = Participle::new(
            "sentido",
            "un sentido",
            ParticipleMetadata::new(["fue"], ParticipleKind::Regular),
            spanish_rules(),
        );

        assert!(!participle.direct_precedence_exception("un sentido", 0));
        assert!(participle.direct_precedence_exception("un sentido", 1));
        assert!(!participle.direct_precedence_exception("un sentido", 2));
        assert!(!participle.direct_precedence_exception("un sentido", 3));
        assert!(!participle.direct_precedence_exception("", 1));
    }

    #[test]
    fn test_explicit_position_for_repeated_word() {
        let rules = spanish_rules();
        let metadata = ParticipleMetadata::new(["fue"], ParticipleKind::Regular);
        let part = "el pasado fue pasado por alto";

        let first = Participle::new("pasado", part, metadata.clone(), Arc::clone(&rules));
        let second = Participle::at_position("pasado", part, metadata, rules, 3);

        assert!(!first.determines_sentence_part_is_passive());
        assert!(second.determines_sentence_part_is_passive());
    }
}
