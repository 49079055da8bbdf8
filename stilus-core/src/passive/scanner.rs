//! Sentence-level passive voice scan

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::language::{get_passive_voice_data, PassiveVoiceData};
use crate::paper::TextSource;
use crate::passive::classifier::PassiveVoiceClassifier;
use crate::text::get_sentences;

use std::sync::Arc;

/// Passive voice statistics for a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassiveVoiceSummary {
    pub total_sentences: usize,
    /// Passive sentences, in text order
    pub passives: Vec<String>,
    pub passive_sentences: usize,
}

impl PassiveVoiceSummary {
    /// Share of passive sentences, in percent
    pub fn percentage(&self) -> f64 {
        if self.total_sentences == 0 {
            return 0.0;
        }
        self.passive_sentences as f64 / self.total_sentences as f64 * 100.0
    }
}

/// Classify each sentence and keep the passive ones
pub fn scan_passive_voice<S: AsRef<str>>(
    sentences: &[S],
    data: Arc<PassiveVoiceData>,
) -> PassiveVoiceSummary {
    let classifier = PassiveVoiceClassifier::new(data);
    let passives: Vec<String> = sentences
        .iter()
        .map(AsRef::as_ref)
        .filter(|sentence| classifier.is_passive(sentence))
        .map(str::to_string)
        .collect();

    PassiveVoiceSummary {
        total_sentences: sentences.len(),
        passive_sentences: passives.len(),
        passives,
    }
}

/// Find the passive sentences of a text
///
/// Fails with [`crate::Error::MissingPassiveData`] for locales without a
/// passive voice lexicon.
pub fn analyze_passive_voice(source: &impl TextSource) -> Result<PassiveVoiceSummary> {
    let data = get_passive_voice_data(source.locale())?;
    let sentences = get_sentences(source.text());
    let summary = scan_passive_voice(&sentences, data);

    tracing::debug!(
        sentences = summary.total_sentences,
        passive = summary.passive_sentences,
        "passive voice scan finished"
    );
    Ok(summary)
}
