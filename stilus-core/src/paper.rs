//! Text container handed to the analyses

use serde::{Deserialize, Serialize};

/// Anything that exposes raw text and the locale it is written in
pub trait TextSource {
    /// Locale identifier such as `en_US` or `es_ES`
    fn locale(&self) -> &str;

    /// Raw text to analyze
    fn text(&self) -> &str;
}

/// A piece of text with its locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    text: String,
    locale: String,
}

impl Paper {
    /// Default locale when none is given
    pub const DEFAULT_LOCALE: &'static str = "en_US";

    /// Create a paper in the given locale
    pub fn new(text: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            locale: locale.into(),
        }
    }

    /// Create a paper in [`Paper::DEFAULT_LOCALE`]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(text, Self::DEFAULT_LOCALE)
    }
}

impl TextSource for Paper {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale() {
        let paper = Paper::from_text("Hello.");
        assert_eq!(paper.locale(), "en_US");
        assert_eq!(paper.text(), "Hello.");
    }
}
