//! Scour CLI - CSV profiling and cleaning tool.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze { file, json } => commands::analyze::run(file, json, cli.verbose),

        Commands::Clean {
            file,
            output,
            null_only,
        } => commands::clean::run(file, output, null_only, cli.verbose),

        Commands::Insight {
            file,
            question,
            mock,
        } => commands::insight::run(file, question, mock),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
