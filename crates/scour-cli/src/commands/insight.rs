//! Insight command - ask the remote model about a dataset.

use std::path::PathBuf;

use colored::Colorize;
use scour::{MockProvider, OpenAiProvider, Scour};

pub fn run(
    file: PathBuf,
    question: Option<String>,
    mock: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let engine = if mock {
        Scour::new().with_insight(MockProvider::new())
    } else {
        Scour::new().with_insight(OpenAiProvider::from_env()?)
    };

    let (dataset, meta) = engine.load(&file)?;

    println!(
        "{} {} ({} rows)",
        "Consulting model about".cyan().bold(),
        meta.file.white(),
        meta.row_count
    );

    let text = match question {
        Some(q) => engine.ask(&dataset, &q)?,
        None => engine.insight(&dataset)?,
    };

    println!();
    println!("{}", text);

    Ok(())
}
