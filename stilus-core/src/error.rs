//! Error types for the detection engine

use thiserror::Error;

/// Error type for engine operations
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed word-list or configuration data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No language data registered for the requested locale
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// The locale is known but ships no passive-voice data
    #[error("No passive voice data for locale: {0}")]
    MissingPassiveData(String),

    /// Analyzer configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A word list compiled into an unusable pattern
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Language file could not be parsed
    #[error("Failed to parse language data: {0}")]
    Parse(#[from] toml::de::Error),

    /// Infrastructure error (I/O, encoding)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_locale_display() {
        let error = Error::UnknownLocale("xx".to_string());
        assert_eq!(error.to_string(), "Unknown locale: xx");
    }

    #[test]
    fn test_invalid_input_display() {
        let error = Error::InvalidInput("two-part entry 3 has 1 elements".to_string());
        assert!(error.to_string().starts_with("Invalid input:"));
    }

    #[test]
    fn test_unknown_locale_is_distinct_from_missing_passive_data() {
        let unknown = Error::UnknownLocale("en".to_string());
        let missing = Error::MissingPassiveData("en".to_string());
        assert!(matches!(unknown, Error::UnknownLocale(_)));
        assert!(matches!(missing, Error::MissingPassiveData(_)));
        assert_ne!(unknown.to_string(), missing.to_string());
    }

    #[test]
    fn test_regex_error_conversion() {
        let regex_error = regex::Regex::new("(").unwrap_err();
        let error: Error = regex_error.into();
        assert!(matches!(error, Error::Pattern(_)));
    }
}
