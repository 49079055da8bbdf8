//! Analyze command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use stilus_core::{Analyses, Config, Input, StyleAnalyzer};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::language_source::LanguageSource;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Locale of the input text, e.g. en_US or es_ES
    #[arg(short, long, value_name = "LOCALE", env = "STILUS_LOCALE")]
    pub locale: Option<String>,

    /// External language configuration file (TOML)
    #[arg(long, value_name = "FILE", conflicts_with = "locale")]
    pub language_config: Option<PathBuf>,

    /// Run a single analysis instead of every supported one
    #[arg(long, value_enum)]
    pub only: Option<Feature>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary per file
    Text,
    /// JSON array with one report per file
    Json,
    /// Markdown report with tables
    Markdown,
}

/// Analyses selectable with `--only`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Feature {
    /// Transition words
    Transitions,
    /// Passive voice
    Passive,
}

impl From<Feature> for Analyses {
    fn from(feature: Feature) -> Self {
        match feature {
            Feature::Transitions => Analyses::Transitions,
            Feature::Passive => Analyses::Passive,
        }
    }
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting analysis");
        log::debug!("Arguments: {:?}", self);

        let cli_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to analyze", files.len());

        let source = self.language_source(&cli_config);
        log::info!("Language: {}", source.display_name());

        let analyzer = StyleAnalyzer::with_config(self.analyzer_config(&cli_config, &source)?)
            .map_err(CliError::from)?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = self.create_formatter(&cli_config, writer)?;

        let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
        progress.init_files(files.len() as u64);

        for path in &files {
            let name = path.display().to_string();
            log::debug!("Analyzing {}", name);

            let text = FileReader::read_text(path)?;
            let report = analyzer
                .analyze(Input::from_text(text))
                .map_err(CliError::from)
                .with_context(|| format!("Failed to analyze {name}"))?;

            formatter.format_report(&name, &report)?;
            progress.file_completed(&name);
        }

        formatter.finish()?;
        progress.finish();
        log::info!("Analysis complete");
        Ok(())
    }

    /// Command-line locale or file first, then the config file, then the default
    pub(crate) fn language_source(&self, cli_config: &CliConfig) -> LanguageSource {
        if let Some(path) = &self.language_config {
            return LanguageSource::External(path.clone());
        }
        match (&self.locale, &cli_config.analysis.default_locale) {
            (Some(locale), _) | (None, Some(locale)) => LanguageSource::BuiltIn(locale.clone()),
            (None, None) => LanguageSource::default(),
        }
    }

    pub(crate) fn analyzer_config(
        &self,
        cli_config: &CliConfig,
        source: &LanguageSource,
    ) -> Result<Config> {
        let analyses = match self.only {
            Some(feature) => feature.into(),
            None => cli_config.analyses()?,
        };
        let config = source
            .configure(Config::builder())
            .analyses(analyses)
            .build()
            .map_err(CliError::from)?;
        Ok(config)
    }

    pub(crate) fn output_format(&self, cli_config: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => <OutputFormat as ValueEnum>::from_str(&cli_config.output.default_format, true)
                .map_err(|_| {
                    anyhow::Error::from(CliError::ConfigError(format!(
                        "unknown output format '{}'",
                        cli_config.output.default_format
                    )))
                }),
        }
    }

    fn create_formatter(
        &self,
        cli_config: &CliConfig,
        writer: Box<dyn Write + Send + Sync>,
    ) -> Result<Box<dyn OutputFormatter>> {
        let formatter: Box<dyn OutputFormatter> = match self.output_format(cli_config)? {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer, cli_config.output.pretty_json))
            }
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };
        Ok(formatter)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running inside tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> AnalyzeArgs {
        AnalyzeArgs {
            input: vec!["test.txt".to_string()],
            output: None,
            format: None,
            locale: None,
            language_config: None,
            only: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_language_source_precedence() {
        let mut cli_config = CliConfig::default();
        let mut args = args();
        assert_eq!(
            args.language_source(&cli_config),
            LanguageSource::BuiltIn("en_US".to_string())
        );

        cli_config.analysis.default_locale = Some("es_ES".to_string());
        assert_eq!(
            args.language_source(&cli_config),
            LanguageSource::BuiltIn("es_ES".to_string())
        );

        args.locale = Some("en".to_string());
        assert_eq!(
            args.language_source(&cli_config),
            LanguageSource::BuiltIn("en".to_string())
        );

        args.language_config = Some(PathBuf::from("custom.toml"));
        assert_eq!(
            args.language_source(&cli_config),
            LanguageSource::External(PathBuf::from("custom.toml"))
        );
    }

    #[test]
    fn test_only_overrides_config_analyses() {
        let mut cli_config = CliConfig::default();
        cli_config.analysis.analyses = "passive".to_string();
        let mut args = args();
        let source = LanguageSource::BuiltIn("es".to_string());

        let config = args.analyzer_config(&cli_config, &source).unwrap();
        assert_eq!(config.analyses(), Analyses::Passive);

        args.only = Some(Feature::Transitions);
        let config = args.analyzer_config(&cli_config, &source).unwrap();
        assert_eq!(config.analyses(), Analyses::Transitions);
    }

    #[test]
    fn test_output_format_from_config() {
        let mut cli_config = CliConfig::default();
        let mut args = args();
        assert_eq!(args.output_format(&cli_config).unwrap(), OutputFormat::Text);

        cli_config.output.default_format = "Markdown".to_string();
        assert_eq!(
            args.output_format(&cli_config).unwrap(),
            OutputFormat::Markdown
        );

        cli_config.output.default_format = "yaml".to_string();
        assert!(args.output_format(&cli_config).is_err());

        args.format = Some(OutputFormat::Json);
        assert_eq!(args.output_format(&cli_config).unwrap(), OutputFormat::Json);
    }
}
