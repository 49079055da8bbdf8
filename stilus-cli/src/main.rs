//! stilus command-line entry point

use anyhow::Result;
use clap::Parser;

use stilus_cli::commands::Commands;

/// Transition-word and passive-voice detection for prose
#[derive(Debug, Parser)]
#[command(name = "stilus", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => args.execute(),
        Commands::List { subcommand } => subcommand.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from(["stilus", "analyze", "-i", "a.txt", "-l", "es"]).unwrap();
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.input, vec!["a.txt"]);
                assert_eq!(args.locale.as_deref(), Some("es"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
