//! Generate config command implementation

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating language configuration template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Replace the sample word lists with your language's markers");
        println!("2. Validate your configuration:");
        println!(
            "   stilus validate --language-config {}",
            self.output.display()
        );
        println!("3. Use it for analysis:");
        println!(
            "   stilus analyze -i input.txt --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Language configuration for {code}

[metadata]
code = "{code}"
name = "Custom Language"

[transitions]
# Single markers; multi-word markers match as whole phrases
words = ["however", "therefore", "in addition"]

# Two-part markers: the first must occur before the second in a sentence.
# Every entry holds exactly two non-empty strings; the first matching pair
# in list order is reported.
two_part = [
    ["either", "or"],
    ["not only", "but also"],
]

# Passive voice (optional). Remove the comment markers to enable it.
# [passive]
# Auxiliary verb forms that introduce a passive construction
# auxiliaries = ["was", "were"]
# Endings of regular participles
# regular_suffixes = ["ed"]
# Participles that do not follow the regular endings
# irregular_participles = ["written", "seen"]
# Words with a regular ending that are never participles
# non_participles = ["bed", "need"]
# Words that, directly before a participle, make it a noun or adjective
# direct_precedence_exceptions = ["a", "the"]
# Words that start a new sentence part
# stopwords = ["that", "which"]
"#,
            code = self.language_code
        )
    }
}
