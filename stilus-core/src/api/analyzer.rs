//! Style analyzer facade

use std::io::Read;
use std::sync::Arc;
use std::time::Instant;

use crate::api::{Analyses, Config, Input, Report, ReportMetadata, TextStats};
use crate::error::Result;
use crate::language::{get_language_data, LanguageData};
use crate::passive::scan_passive_voice;
use crate::text::get_sentences;
use crate::transitions::{scan_with, PatternCompiler, ScanSummary, TransitionMatcher};

/// Runs the configured analyses over texts of one locale
///
/// Language data is resolved and every pattern compiled when the analyzer is
/// built, so [`StyleAnalyzer::analyze`] only fails on unreadable input.
#[derive(Debug)]
pub struct StyleAnalyzer {
    config: Config,
    language: Arc<LanguageData>,
    matcher: TransitionMatcher,
}

impl StyleAnalyzer {
    /// Analyzer for the default locale
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Analyzer for a locale, running every supported analysis
    pub fn for_locale(locale: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::builder().locale(locale).build()?)
    }

    /// Analyzer with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Self::with_compiler(config, &PatternCompiler::default())
    }

    /// Analyzer compiling its patterns through `compiler`
    pub fn with_compiler(config: Config, compiler: &PatternCompiler) -> Result<Self> {
        config.validate()?;

        let language = match config.language_file() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading external language file");
                Arc::new(LanguageData::from_file(path)?)
            }
            None => get_language_data(config.locale())?,
        };

        if config.analyses() == Analyses::Passive {
            // Fail early instead of on the first text
            language.passive()?;
        }

        let matcher = TransitionMatcher::new(language.transitions(), compiler)?;
        Ok(Self {
            config,
            language,
            matcher,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Language data the analyzer runs with
    pub fn language(&self) -> &LanguageData {
        &self.language
    }

    /// Analyze one input
    pub fn analyze(&self, input: Input) -> Result<Report> {
        let start = Instant::now();
        let text = input.into_text()?;
        let sentences = get_sentences(&text);
        let analyses = self.config.analyses();

        let transition_words = analyses.transitions().then(|| {
            let results = scan_with(&sentences, &self.matcher);
            ScanSummary::new(sentences.len(), results)
        });

        let passive_voice = match self.language.passive() {
            Ok(data) if analyses.passive() => {
                Some(scan_passive_voice(&sentences, Arc::clone(data)))
            }
            Ok(_) => None,
            Err(e) if analyses == Analyses::Passive => return Err(e),
            Err(_) => {
                tracing::debug!(
                    code = self.language.code(),
                    "passive voice not supported, skipping"
                );
                None
            }
        };

        let duration = start.elapsed();
        tracing::debug!(
            sentences = sentences.len(),
            duration_us = duration.as_micros() as u64,
            "analysis finished"
        );

        Ok(Report {
            locale: self.report_locale(),
            transition_words,
            passive_voice,
            metadata: ReportMetadata {
                duration,
                stats: TextStats::measure(&text, sentences.len()),
            },
        })
    }

    /// Analyze plain text
    pub fn analyze_text(&self, text: impl Into<String>) -> Result<Report> {
        self.analyze(Input::from_text(text))
    }

    /// Analyze everything a reader yields
    pub fn analyze_stream<R: Read + Send + Sync + 'static>(&self, reader: R) -> Result<Report> {
        self.analyze(Input::from_reader(reader))
    }

    fn report_locale(&self) -> String {
        if self.config.language_file().is_some() || self.config.locale().trim().is_empty() {
            self.language.code().to_string()
        } else {
            self.config.locale().to_string()
        }
    }
}
