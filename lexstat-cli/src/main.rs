//! lexstat command-line entry point

use clap::Parser;
use lexstat_cli::commands::Commands;

/// Text statistics: word counts, distributions, co-occurrence and readability
#[derive(Debug, Parser)]
#[command(name = "lexstat", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
