//! Where the CLI takes its word lists from

use std::path::PathBuf;

use stilus_core::{Config, ConfigBuilder};

/// Source of language data for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSource {
    /// Embedded word lists for a locale
    BuiltIn(String),
    /// External TOML definition
    External(PathBuf),
}

impl LanguageSource {
    /// Display name for logs and reports
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(locale) => format!("Built-in: {locale}"),
            LanguageSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Apply this source to an analyzer configuration
    pub fn configure(&self, builder: ConfigBuilder) -> ConfigBuilder {
        match self {
            LanguageSource::BuiltIn(locale) => builder.locale(locale.clone()),
            LanguageSource::External(path) => builder.language_file(path.clone()),
        }
    }
}

impl Default for LanguageSource {
    fn default() -> Self {
        LanguageSource::BuiltIn(Config::default().locale().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(
            LanguageSource::BuiltIn("es_ES".to_string()).display_name(),
            "Built-in: es_ES"
        );
        assert_eq!(
            LanguageSource::External(PathBuf::from("lang.toml")).display_name(),
            "External: lang.toml"
        );
    }

    #[test]
    fn test_default_is_builtin_default_locale() {
        assert_eq!(
            LanguageSource::default(),
            LanguageSource::BuiltIn("en_US".to_string())
        );
    }

    #[test]
    fn test_configure_builtin() {
        let config = LanguageSource::BuiltIn("es".to_string())
            .configure(Config::builder())
            .build()
            .unwrap();
        assert_eq!(config.locale(), "es");
        assert!(config.language_file().is_none());
    }
}
