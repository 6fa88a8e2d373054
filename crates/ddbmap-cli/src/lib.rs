mod config;
mod generate;
mod theme;

pub use config::ConfigFile;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ddbmap")]
#[command(about = "Generate DynamoDB marshall/unmarshall methods for Java classes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Generate mapping methods into a Java source file
    Generate(generate::GenerateCommand),
}

/// Parses command-line arguments and runs the selected command.
pub fn run() -> Result<()> {
    match Cli::parse().command {
        Command::Generate(cmd) => cmd.run(),
    }
}
