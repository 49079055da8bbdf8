//! Passive voice classification of sentence parts

use std::sync::Arc;

use crate::language::PassiveVoiceData;
use crate::passive::participle::{Participle, ParticipleMetadata};
use crate::text::{word_spans, words};

/// A stretch of a sentence that may hold one passive construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentencePart {
    pub text: String,
    /// Auxiliaries occurring in this part, as written
    pub auxiliaries: Vec<String>,
}

/// Classifies sentence parts using one locale's passive voice lexicon
#[derive(Debug, Clone)]
pub struct PassiveVoiceClassifier {
    data: Arc<PassiveVoiceData>,
}

impl PassiveVoiceClassifier {
    pub fn new(data: Arc<PassiveVoiceData>) -> Self {
        Self { data }
    }

    /// Split a sentence into parts
    ///
    /// A new part starts at every auxiliary and every stop word.
    pub fn sentence_parts(&self, sentence: &str) -> Vec<SentencePart> {
        let spans = word_spans(sentence);
        let mut starts: Vec<usize> = spans
            .iter()
            .filter(|(_, word)| self.data.is_auxiliary(word) || self.data.is_stopword(word))
            .map(|&(offset, _)| offset)
            .collect();
        if starts.first() != Some(&0) {
            starts.insert(0, 0);
        }

        let mut parts = Vec::with_capacity(starts.len());
        for (index, &start) in starts.iter().enumerate() {
            let end = starts.get(index + 1).copied().unwrap_or(sentence.len());
            let text = sentence[start..end].trim();
            if text.is_empty() {
                continue;
            }
            let auxiliaries = words(text)
                .into_iter()
                .filter(|word| self.data.is_auxiliary(word))
                .map(str::to_string)
                .collect();
            parts.push(SentencePart {
                text: text.to_string(),
                auxiliaries,
            });
        }
        parts
    }

    /// One candidate per participle-like word in the part
    pub fn participles(&self, part: &SentencePart) -> Vec<Participle> {
        words(&part.text)
            .into_iter()
            .enumerate()
            .filter_map(|(position, word)| {
                let kind = self.data.participle_kind(word)?;
                Some(Participle::at_position(
                    word,
                    part.text.as_str(),
                    ParticipleMetadata::new(part.auxiliaries.iter().cloned(), kind),
                    Arc::clone(self.data.exceptions()),
                    position,
                ))
            })
            .collect()
    }

    /// Whether any surviving candidate makes the part passive
    ///
    /// Parts without auxiliaries or without candidates are active.
    pub fn is_passive_part(&self, part: &SentencePart) -> bool {
        if part.auxiliaries.is_empty() {
            return false;
        }
        self.participles(part)
            .iter()
            .any(Participle::determines_sentence_part_is_passive)
    }

    /// Whether any part of the sentence is passive
    pub fn is_passive(&self, sentence: &str) -> bool {
        self.sentence_parts(sentence)
            .iter()
            .any(|part| self.is_passive_part(part))
    }
}
