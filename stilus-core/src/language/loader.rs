//! Language data loader
//!
//! Manages the embedded language definitions with lazy initialization.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{Error, Result};
use crate::language::data::{LanguageData, PassiveVoiceData, TransitionWordData};

/// Outcome of loading one embedded definition
///
/// Load failures are kept so that lookups report them instead of treating a
/// built-in language as unknown.
type Loaded = std::result::Result<Arc<LanguageData>, String>;

/// Embedded language definitions, keyed by primary language code
static EMBEDDED: OnceLock<HashMap<&'static str, Loaded>> = OnceLock::new();

const EMBEDDED_SOURCES: [(&str, &str); 2] = [
    ("en", include_str!("../../configs/languages/english.toml")),
    ("es", include_str!("../../configs/languages/spanish.toml")),
];

fn embedded() -> &'static HashMap<&'static str, Loaded> {
    EMBEDDED.get_or_init(|| load_registry(&EMBEDDED_SOURCES))
}

fn load_registry(sources: &[(&'static str, &str)]) -> HashMap<&'static str, Loaded> {
    sources
        .iter()
        .map(|&(code, source)| {
            let loaded = match LanguageData::from_toml_str(source) {
                Ok(data) => {
                    tracing::debug!(code, name = data.name(), "loaded embedded language");
                    Ok(Arc::new(data))
                }
                Err(e) => {
                    tracing::error!(code, error = %e, "failed to load embedded language");
                    Err(e.to_string())
                }
            };
            (code, loaded)
        })
        .collect()
}

fn lookup(registry: &HashMap<&'static str, Loaded>, locale: &str) -> Result<Arc<LanguageData>> {
    let code = resolve_locale(locale);
    match registry.get(code.as_str()) {
        Some(Ok(data)) => Ok(Arc::clone(data)),
        Some(Err(message)) => Err(Error::InvalidInput(format!(
            "embedded language '{code}' failed to load: {message}"
        ))),
        None => Err(Error::UnknownLocale(locale.to_string())),
    }
}

/// Reduce a locale to its primary language code
///
/// `es_ES`, `es-MX`, `ES` and `spanish` all resolve to `es`.
pub fn resolve_locale(locale: &str) -> String {
    let primary = locale
        .trim()
        .split(['_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();

    match primary.as_str() {
        "english" | "eng" => "en".to_string(),
        "spanish" | "español" | "espanol" | "spa" => "es".to_string(),
        _ => primary,
    }
}

/// Load all language data for a locale
pub fn get_language_data(locale: &str) -> Result<Arc<LanguageData>> {
    lookup(embedded(), locale)
}

/// Transition word lists for a locale
///
/// Unknown locales fail with [`Error::UnknownLocale`] rather than yielding
/// empty lists, so "no data" is never mistaken for "no matches".
pub fn get_transition_words(locale: &str) -> Result<Arc<TransitionWordData>> {
    get_language_data(locale).map(|data| Arc::clone(data.transitions()))
}

/// Passive voice lexicon for a locale
pub fn get_passive_voice_data(locale: &str) -> Result<Arc<PassiveVoiceData>> {
    let data = get_language_data(locale)?;
    data.passive().map(Arc::clone)
}

/// Codes and names of the embedded languages, sorted by code
pub fn available_languages() -> Vec<(&'static str, String)> {
    let mut languages: Vec<_> = embedded()
        .iter()
        .filter_map(|(code, loaded)| {
            let data = loaded.as_ref().ok()?;
            Some((*code, data.name().to_string()))
        })
        .collect();
    languages.sort();
    languages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_locale() {
        assert_eq!(resolve_locale("es_ES"), "es");
        assert_eq!(resolve_locale("es-MX"), "es");
        assert_eq!(resolve_locale("EN_us"), "en");
        assert_eq!(resolve_locale("Spanish"), "es");
        assert_eq!(resolve_locale("english"), "en");
        assert_eq!(resolve_locale("fr_FR"), "fr");
        assert_eq!(resolve_locale(""), "");
    }

    #[test]
    fn test_embedded_languages_load() {
        let languages = available_languages();
        assert_eq!(
            languages,
            vec![("en", "English".to_string()), ("es", "Spanish".to_string())]
        );
    }

    #[test]
    fn test_unknown_locale() {
        assert!(matches!(get_language_data("xx_XX"), Err(Error::UnknownLocale(l)) if l == "xx_XX"));
        assert!(matches!(get_transition_words(""), Err(Error::UnknownLocale(_))));
    }

    #[test]
    fn test_english_has_no_passive_data() {
        assert!(matches!(
            get_passive_voice_data("en_US"),
            Err(Error::MissingPassiveData(_))
        ));
    }

    #[test]
    fn test_spanish_data() {
        let transitions = get_transition_words("es_ES").unwrap();
        assert!(transitions.transition_words().iter().any(|w| w == "sin embargo"));

        let passive = get_passive_voice_data("es").unwrap();
        assert!(passive.is_auxiliary("fue"));
        assert!(passive.exceptions().direct_precedence().matches(&["un"]));
    }

    #[test]
    fn test_broken_embedded_definition_is_not_unknown() {
        let registry = load_registry(&[
            ("en", EMBEDDED_SOURCES[0].1),
            ("es", "[metadata]\ncode = \"es\"\n"),
        ]);

        assert!(lookup(&registry, "en_US").is_ok());
        let err = lookup(&registry, "es_ES").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("embedded language 'es' failed to load"));
        assert!(matches!(lookup(&registry, "fr"), Err(Error::UnknownLocale(_))));
    }

    #[test]
    fn test_every_embedded_definition_loads() {
        for (code, loaded) in embedded() {
            assert!(loaded.is_ok(), "{code}: {loaded:?}");
        }
    }

    #[test]
    fn test_registry_returns_shared_instances() {
        let first = get_transition_words("en").unwrap();
        let second = get_transition_words("en_GB").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
