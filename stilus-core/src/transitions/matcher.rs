//! Transition word matching for a single sentence

use std::sync::Arc;

use regex::Regex;

use crate::error::Result;
use crate::language::TransitionWordData;
use crate::text::normalize_single_quotes;
use crate::transitions::compiler::{PatternCompiler, TwoPartPattern};

/// Outcome of matching one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionMatch {
    /// A two-part connective; single words were not consulted
    TwoPart([String; 2]),
    /// One or more single markers, in word-list order
    Single(Vec<String>),
    /// Nothing matched
    None,
}

impl TransitionMatch {
    /// Whether anything matched
    pub fn is_match(&self) -> bool {
        !matches!(self, TransitionMatch::None)
    }
}

/// Match a sentence against two-part transition words
pub fn match_two_part(
    sentence: &str,
    pairs: &[[String; 2]],
    compiler: &PatternCompiler,
) -> Result<Option<[String; 2]>> {
    let sentence = normalize_single_quotes(sentence);
    let pattern = compiler.two_part(pairs)?;
    Ok(pattern.find(&sentence).cloned())
}

/// Match a sentence against single transition words
///
/// Every marker is tested; all matches are reported, not only the first.
pub fn match_single(
    sentence: &str,
    words: &[String],
    compiler: &PatternCompiler,
) -> Result<Vec<String>> {
    let sentence = normalize_single_quotes(sentence);
    let mut matched = Vec::new();
    for word in words {
        if compiler.single_word(word)?.is_match(&sentence) {
            matched.push(word.clone());
        }
    }
    Ok(matched)
}

/// Matcher with all patterns of one locale compiled up front
///
/// Compilation happens once in [`TransitionMatcher::new`]; matching a
/// sentence afterwards cannot fail.
#[derive(Debug, Clone)]
pub struct TransitionMatcher {
    two_part: Arc<TwoPartPattern>,
    single: Vec<(String, Arc<Regex>)>,
}

impl TransitionMatcher {
    /// Compile (or fetch from cache) every pattern of `data`
    pub fn new(data: &TransitionWordData, compiler: &PatternCompiler) -> Result<Self> {
        let two_part = compiler.two_part(data.two_part_transition_words())?;
        let single = data
            .transition_words()
            .iter()
            .map(|word| Ok((word.clone(), compiler.single_word(word)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { two_part, single })
    }

    /// Match one sentence; two-part connectives take precedence
    pub fn match_sentence(&self, sentence: &str) -> TransitionMatch {
        let sentence = normalize_single_quotes(sentence);

        if let Some(pair) = self.two_part.find(&sentence) {
            return TransitionMatch::TwoPart(pair.clone());
        }

        let matched: Vec<String> = self
            .single
            .iter()
            .filter(|(_, pattern)| pattern.is_match(&sentence))
            .map(|(word, _)| word.clone())
            .collect();

        if matched.is_empty() {
            TransitionMatch::None
        } else {
            TransitionMatch::Single(matched)
        }
    }
}
