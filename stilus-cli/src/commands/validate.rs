//! Validate command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use stilus_core::LanguageData;

use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        match LanguageData::from_file(&self.language_config) {
            Ok(data) => {
                println!("✓ Configuration is valid!");
                for line in summary(&data) {
                    println!("  {line}");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(CliError::ConfigError(format!("Validation failed: {e}")).into())
            }
        }
    }
}

fn summary(data: &LanguageData) -> Vec<String> {
    let transitions = data.transitions();
    let passive = if data.supports_passive_voice() {
        "yes"
    } else {
        "no"
    };
    vec![
        format!("Language code: {}", data.code()),
        format!("Language name: {}", data.name()),
        format!("Transition words: {}", transitions.transition_words().len()),
        format!(
            "Two-part transition words: {}",
            transitions.two_part_transition_words().len()
        ),
        format!("Passive voice: {passive}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_validate_valid_config() {
        let file = write_config(
            r#"
[metadata]
code = "pt"
name = "Portuguese"

[transitions]
words = ["porém", "além disso"]
two_part = [["não só", "mas também"]]
"#,
        );
        let args = ValidateArgs {
            language_config: file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());

        let data = LanguageData::from_file(file.path()).unwrap();
        let lines = summary(&data);
        assert_eq!(lines[0], "Language code: pt");
        assert_eq!(lines[2], "Transition words: 2");
        assert_eq!(lines[3], "Two-part transition words: 1");
        assert_eq!(lines[4], "Passive voice: no");
    }

    #[test]
    fn test_validate_malformed_pair() {
        let file = write_config(
            r#"
[metadata]
code = "pt"
name = "Portuguese"

[transitions]
words = ["porém"]
two_part = [["não só"]]
"#,
        );
        let args = ValidateArgs {
            language_config: file.path().to_path_buf(),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("two-part transition word 0 has 1 elements"));
    }
}
