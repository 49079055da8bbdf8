//! Transition word detection
//!
//! Two-part connectives ("either … or") are matched first; only when none
//! matches are single markers ("however") consulted, and then every one of
//! them is reported.

pub mod compiler;
mod matcher;
mod scanner;

pub use compiler::{CacheStats, PatternCache, PatternCompiler, TwoPartPattern};
pub use matcher::{match_single, match_two_part, TransitionMatch, TransitionMatcher};
pub use scanner::{
    analyze_transition_words, analyze_transition_words_with, scan, scan_with, MatchKind,
    ScanSummary, SentenceFeatureResult,
};
