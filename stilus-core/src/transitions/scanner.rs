//! Sentence-level transition word scan

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::language::{get_transition_words, TransitionWordData};
use crate::paper::TextSource;
use crate::text::get_sentences;
use crate::transitions::compiler::PatternCompiler;
use crate::transitions::matcher::{TransitionMatch, TransitionMatcher};

/// Which kind of marker produced a sentence result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    TwoPart,
    Single,
}

/// A sentence containing at least one transition marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceFeatureResult {
    pub sentence: String,
    /// The two-part pair, or every matched single marker
    pub transition_words: Vec<String>,
    pub kind: MatchKind,
}

/// Transition word statistics for a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub total_sentences: usize,
    pub sentence_results: Vec<SentenceFeatureResult>,
    /// Always equal to `sentence_results.len()`
    pub transition_word_sentences: usize,
}

impl ScanSummary {
    pub(crate) fn new(
        total_sentences: usize,
        sentence_results: Vec<SentenceFeatureResult>,
    ) -> Self {
        Self {
            total_sentences,
            transition_word_sentences: sentence_results.len(),
            sentence_results,
        }
    }

    /// Share of sentences with a transition marker, in percent
    pub fn percentage(&self) -> f64 {
        if self.total_sentences == 0 {
            return 0.0;
        }
        self.transition_word_sentences as f64 / self.total_sentences as f64 * 100.0
    }
}

/// Scan sentences with an already compiled matcher
///
/// Results follow sentence order; sentences without a marker are absent.
pub fn scan_with<S: AsRef<str>>(
    sentences: &[S],
    matcher: &TransitionMatcher,
) -> Vec<SentenceFeatureResult> {
    sentences
        .iter()
        .filter_map(|sentence| {
            let sentence = sentence.as_ref();
            let (transition_words, kind) = match matcher.match_sentence(sentence) {
                TransitionMatch::TwoPart(pair) => (pair.to_vec(), MatchKind::TwoPart),
                TransitionMatch::Single(words) => (words, MatchKind::Single),
                TransitionMatch::None => return None,
            };
            Some(SentenceFeatureResult {
                sentence: sentence.to_string(),
                transition_words,
                kind,
            })
        })
        .collect()
}

/// Scan sentences against a locale's transition words
pub fn scan<S: AsRef<str>>(
    sentences: &[S],
    data: &TransitionWordData,
) -> Result<Vec<SentenceFeatureResult>> {
    let matcher = TransitionMatcher::new(data, &PatternCompiler::default())?;
    Ok(scan_with(sentences, &matcher))
}

/// Count the sentences of a text that contain transition words
///
/// Fails with [`crate::Error::UnknownLocale`] when the locale has no data.
pub fn analyze_transition_words(source: &impl TextSource) -> Result<ScanSummary> {
    let data = get_transition_words(source.locale())?;
    analyze_transition_words_with(source, &data, &PatternCompiler::default())
}

/// Count transition sentences with explicit word lists and compiler
pub fn analyze_transition_words_with(
    source: &impl TextSource,
    data: &TransitionWordData,
    compiler: &PatternCompiler,
) -> Result<ScanSummary> {
    let matcher = TransitionMatcher::new(data, compiler)?;
    let sentences = get_sentences(source.text());
    let results = scan_with(&sentences, &matcher);

    tracing::debug!(
        sentences = sentences.len(),
        matched = results.len(),
        "transition word scan finished"
    );
    Ok(ScanSummary::new(sentences.len(), results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paper::Paper;
    use crate::transitions::compiler::PatternCache;
    use crate::Error;
    use std::sync::Arc;

    fn data() -> TransitionWordData {
        TransitionWordData::from_pairs(
            vec!["firstly".into(), "secondly".into(), "either".into()],
            vec![["either".into(), "or".into()]],
        )
        .unwrap()
    }

    #[test]
    fn test_scan_is_sparse_and_ordered() {
        let sentences = [
            "Firstly, we begin; secondly, we end.",
            "Nothing to see here.",
            "Either you go, or you stay.",
        ];
        let results = scan(&sentences, &data()).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].sentence, sentences[0]);
        assert_eq!(results[0].transition_words, vec!["firstly", "secondly"]);
        assert_eq!(results[0].kind, MatchKind::Single);
        assert_eq!(results[1].sentence, sentences[2]);
        assert_eq!(results[1].transition_words, vec!["either", "or"]);
        assert_eq!(results[1].kind, MatchKind::TwoPart);
    }

    #[test]
    fn test_analyze_with_injected_cache() {
        let compiler = PatternCompiler::with_cache(Arc::new(PatternCache::new()));
        let paper = Paper::new(
            "Firstly, we begin. Then nothing. Either this, or that.",
            "en_US",
        );
        let summary = analyze_transition_words_with(&paper, &data(), &compiler).unwrap();

        assert_eq!(summary.total_sentences, 3);
        assert_eq!(summary.transition_word_sentences, 2);
        assert_eq!(summary.sentence_results.len(), 2);
        assert!((summary.percentage() - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_empty_text() {
        let summary = analyze_transition_words(&Paper::new("", "en")).unwrap();
        assert_eq!(summary.total_sentences, 0);
        assert_eq!(summary.transition_word_sentences, 0);
        assert_eq!(summary.percentage(), 0.0);
    }

    #[test]
    fn test_unknown_locale_is_an_error() {
        let result = analyze_transition_words(&Paper::new("However, it works.", "zz_ZZ"));
        assert!(matches!(result, Err(Error::UnknownLocale(_))));
    }

    #[test]
    fn test_markers_inside_typographic_punctuation() {
        for (text, locale) in [
            ("\u{201C}However, we left.\u{201D}", "en"),
            ("It works\u{2014}however, slowly.", "en"),
            ("\u{201C}Sin embargo\u{201D}, dijo.", "es"),
        ] {
            let summary = analyze_transition_words(&Paper::new(text, locale)).unwrap();
            assert_eq!(summary.total_sentences, 1, "{text}");
            assert_eq!(summary.transition_word_sentences, 1, "{text}");
        }
    }

    #[test]
    fn test_summary_serializes() {
        let summary = analyze_transition_words(&Paper::new("However, it works.", "en")).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["transition_word_sentences"], 1);
        assert_eq!(json["sentence_results"][0]["kind"], "single");
    }
}
