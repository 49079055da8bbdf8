//! Passive voice detection
//!
//! Sentences are cut into parts at auxiliaries and stop words. A part is
//! passive when it holds an auxiliary and at least one participle that no
//! exception rule rules out.

mod classifier;
mod exceptions;
mod participle;
mod scanner;

pub use classifier::{PassiveVoiceClassifier, SentencePart};
pub use exceptions::{DirectPrecedenceRule, ExceptionRule, ExceptionRuleSet, ExclusionReason};
pub use participle::{Evaluation, Participle, ParticipleKind, ParticipleMetadata, Verdict};
pub use scanner::{analyze_passive_voice, scan_passive_voice, PassiveVoiceSummary};
