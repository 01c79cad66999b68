//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scour: CSV profiling and cleaning tool
#[derive(Parser)]
#[command(name = "scour")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profile a data file and print the dataset summary
    Analyze {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output the profile as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the automatic cleaning pass and export the cleaned data
    Clean {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for cleaned data (default: <file>_cleaned.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only fill truly null cells (leave 0/false/"" in place)
        #[arg(long)]
        null_only: bool,
    },

    /// Ask the remote model for insights about a data file
    Insight {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Ask a specific question instead of the automatic analysis
        #[arg(short, long)]
        question: Option<String>,

        /// Use the mock provider (no API key needed)
        #[arg(long)]
        mock: bool,
    },
}
