//! Exception rules that invalidate a passive reading of a participle
//!
//! Rules see the whole run of words preceding the participle inside its
//! sentence part, so a locale can express multi-word contexts as well as the
//! single-word direct precedence case.

use std::fmt;

/// Why a participle candidate was excluded from passive classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    /// The candidate carries no participle text
    NoParticiple,
    /// An exception word directly precedes the participle
    DirectPrecedence,
    /// A locale-specific rule registered on the rule set
    Rule(&'static str),
}

/// A positional or lexical rule evaluated against a participle candidate
pub trait ExceptionRule: fmt::Debug + Send + Sync {
    /// Name reported in [`ExclusionReason::Rule`]
    fn name(&self) -> &'static str;

    /// Whether the rule excludes `participle` given the words before it
    fn applies(&self, preceding: &[&str], participle: &str) -> bool;
}

/// Exception words that cannot directly precede a passive participle
///
/// Entries may span several words ("a lo"); an entry matches when the
/// preceding words end with it. Comparison is case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct DirectPrecedenceRule {
    phrases: Vec<Vec<String>>,
}

impl DirectPrecedenceRule {
    /// Build from exception entries
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = entries
            .into_iter()
            .map(|entry| {
                entry
                    .as_ref()
                    .split_whitespace()
                    .map(str::to_lowercase)
                    .collect::<Vec<_>>()
            })
            .filter(|phrase| !phrase.is_empty())
            .collect();
        Self { phrases }
    }

    /// Number of exception entries
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Whether no exception entries are defined
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Whether the words before the participle end with an exception entry
    pub fn matches(&self, preceding: &[&str]) -> bool {
        self.phrases.iter().any(|phrase| {
            phrase.len() <= preceding.len()
                && preceding[preceding.len() - phrase.len()..]
                    .iter()
                    .zip(phrase)
                    .all(|(word, expected)| word.to_lowercase() == *expected)
        })
    }
}

/// The exception rules of one locale
#[derive(Debug, Default)]
pub struct ExceptionRuleSet {
    direct_precedence: DirectPrecedenceRule,
    rules: Vec<Box<dyn ExceptionRule>>,
}

impl ExceptionRuleSet {
    /// Create a rule set with the direct precedence exception only
    pub fn new(direct_precedence: DirectPrecedenceRule) -> Self {
        Self {
            direct_precedence,
            rules: Vec::new(),
        }
    }

    /// Register an additional rule, evaluated after direct precedence
    pub fn with_rule(mut self, rule: impl ExceptionRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// The direct precedence rule
    pub fn direct_precedence(&self) -> &DirectPrecedenceRule {
        &self.direct_precedence
    }

    /// First rule excluding the participle, if any
    pub fn check(&self, preceding: &[&str], participle: &str) -> Option<ExclusionReason> {
        if self.direct_precedence.matches(preceding) {
            return Some(ExclusionReason::DirectPrecedence);
        }
        self.rules
            .iter()
            .find(|rule| rule.applies(preceding, participle))
            .map(|rule| ExclusionReason::Rule(rule.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct AfterNegation;

    impl ExceptionRule for AfterNegation {
        fn name(&self) -> &'static str {
            "after_negation"
        }

        fn applies(&self, preceding: &[&str], _participle: &str) -> bool {
            preceding.iter().any(|word| word.eq_ignore_ascii_case("nunca"))
        }
    }

    #[test]
    fn test_single_word_precedence() {
        let rule = DirectPrecedenceRule::new(["un", "el"]);
        assert!(rule.matches(&["fue", "un"]));
        assert!(rule.matches(&["fue", "UN"]));
        assert!(!rule.matches(&["un", "fue"]));
        assert!(!rule.matches(&[]));
    }

    #[test]
    fn test_multi_word_precedence() {
        let rule = DirectPrecedenceRule::new(["a lo"]);
        assert!(rule.matches(&["fue", "a", "lo"]));
        assert!(!rule.matches(&["lo"]));
        assert!(!rule.matches(&["a", "fue", "lo"]));
    }

    #[test]
    fn test_blank_entries_ignored() {
        let rule = DirectPrecedenceRule::new(["", "  ", "un"]);
        assert_eq!(rule.len(), 1);
    }

    #[test]
    fn test_rule_set_order() {
        let rules = ExceptionRuleSet::new(DirectPrecedenceRule::new(["un"])).with_rule(AfterNegation);

        assert_eq!(
            rules.check(&["nunca", "un"], "sentido"),
            Some(ExclusionReason::DirectPrecedence)
        );
        assert_eq!(
            rules.check(&["nunca", "fue"], "visto"),
            Some(ExclusionReason::Rule("after_negation"))
        );
        assert_eq!(rules.check(&["fue"], "visto"), None);
    }
}
