//! Analysis report

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::passive::PassiveVoiceSummary;
use crate::transitions::ScanSummary;

/// Result of one analyzer run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Locale the text was analyzed in
    pub locale: String,
    /// Absent when not requested
    pub transition_words: Option<ScanSummary>,
    /// Absent when not requested or when the locale has no passive data
    pub passive_voice: Option<PassiveVoiceSummary>,
    pub metadata: ReportMetadata,
}

/// Metadata about the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    #[serde(with = "duration_micros")]
    pub duration: Duration,
    pub stats: TextStats,
}

/// Size of the analyzed text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub bytes: usize,
    pub chars: usize,
    pub words: usize,
    pub sentences: usize,
}

impl TextStats {
    pub(crate) fn measure(text: &str, sentences: usize) -> Self {
        Self {
            bytes: text.len(),
            chars: text.chars().count(),
            words: crate::text::words(text).len(),
            sentences,
        }
    }
}

impl Report {
    /// Serialize the report as JSON
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.map_err(|e| Error::Infrastructure(format!("Failed to serialize report: {}", e)))
    }
}

mod duration_micros {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(duration.as_micros()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_micros)
    }
}
