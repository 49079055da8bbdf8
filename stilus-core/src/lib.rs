//! Linguistic feature detection for writing-quality scoring
//!
//! Two detectors run over sentences of a text:
//!
//! - **Transition words**: single markers ("however") and two-part
//!   connectives ("either … or"), compiled into cached patterns per locale.
//! - **Passive voice**: participles following an auxiliary, minus the cases
//!   ruled out by locale exception rules ("fue un sentido …").
//!
//! Word lists live in TOML definitions under `configs/languages/`, embedded
//! at build time and validated on first use.
//!
//! # Example
//!
//! ```rust
//! use stilus_core::{analyze_passive_voice, analyze_transition_words, Paper};
//!
//! let paper = Paper::new("Firstly, we begin. Secondly, we end.", "en_US");
//! let summary = analyze_transition_words(&paper).unwrap();
//! assert_eq!(summary.total_sentences, 2);
//! assert_eq!(summary.transition_word_sentences, 2);
//!
//! let paper = Paper::new("El libro fue escrito por mi amiga.", "es_ES");
//! let passive = analyze_passive_voice(&paper).unwrap();
//! assert_eq!(passive.passive_sentences, 1);
//! ```
//!
//! The [`api`] module wraps both detectors behind [`StyleAnalyzer`]:
//!
//! ```rust
//! use stilus_core::{Input, StyleAnalyzer};
//!
//! let analyzer = StyleAnalyzer::for_locale("es").unwrap();
//! let report = analyzer.analyze(Input::from_text("Ni esto ni aquello.")).unwrap();
//! assert!(report.transition_words.is_some());
//! ```

pub mod api;
pub mod error;
pub mod language;
pub mod paper;
pub mod passive;
pub mod text;
pub mod transitions;

pub use api::{Analyses, Config, ConfigBuilder, Input, Report, StyleAnalyzer};
pub use error::{Error, Result};
pub use language::{available_languages, get_transition_words, LanguageData, TransitionWordData};
pub use paper::{Paper, TextSource};
pub use passive::{
    analyze_passive_voice, Participle, ParticipleKind, ParticipleMetadata, PassiveVoiceSummary,
};
pub use transitions::{analyze_transition_words, ScanSummary, SentenceFeatureResult};
