//! Per-locale word lists
//!
//! Transition words, auxiliaries, participle forms and exception words are
//! data, not code: each locale is a TOML definition validated on load.

pub mod config;
mod data;
mod loader;

pub use config::LanguageConfig;
pub use data::{LanguageData, PassiveVoiceData, TransitionWordData};
pub use loader::{
    available_languages, get_language_data, get_passive_voice_data, get_transition_words,
    resolve_locale,
};
