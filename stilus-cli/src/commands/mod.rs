//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};

use stilus_core::language::get_language_data;

pub mod analyze;
pub mod generate_config;
pub mod validate;

use analyze::OutputFormat;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect transition words and passive voice in text files
    Analyze(analyze::AnalyzeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a language configuration file
    Validate(validate::ValidateArgs),

    /// Write a language configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded languages
    Languages,

    /// List output formats
    Formats,
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) -> Result<()> {
        for line in self.lines()? {
            println!("{line}");
        }
        Ok(())
    }

    fn lines(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        match self {
            ListCommands::Languages => {
                lines.push("Available languages:".to_string());
                for (code, name) in stilus_core::available_languages() {
                    let data = get_language_data(code)?;
                    let features = if data.supports_passive_voice() {
                        "transitions, passive voice"
                    } else {
                        "transitions"
                    };
                    lines.push(format!("  {code:<4}{name:<12}({features})"));
                }
            }
            ListCommands::Formats => {
                lines.push("Available output formats:".to_string());
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        let help = value.get_help().map(ToString::to_string).unwrap_or_default();
                        lines.push(format!("  {:<10}{}", value.get_name(), help));
                    }
                }
            }
        }
        Ok(lines)
    }
}
