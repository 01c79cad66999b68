//! Analyze command - profile a file and print its summary.

use std::path::PathBuf;

use colored::Colorize;
use scour::Scour;

pub fn run(file: PathBuf, json: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let engine = Scour::new();
    let (dataset, meta) = engine.load(&file)?;

    let Some(analysis) = engine.analyze(&dataset) else {
        println!("{}", "Nothing to analyze - the file has no data rows.".yellow());
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis.profile)?);
        return Ok(());
    }

    println!(
        "{} {} ({} rows, {} columns, {})",
        "Analyzed".cyan().bold(),
        meta.file.white(),
        meta.row_count,
        meta.column_count,
        meta.format
    );
    println!();
    println!("{}", analysis.summary);

    if verbose {
        println!("{}", "Columns:".yellow().bold());
        for (name, info) in &analysis.profile.column_analysis {
            println!(
                "  {:20} {:12} {:>6} unique  {:>5.1}% missing",
                name,
                info.kind.to_string(),
                info.unique_count,
                info.null_percentage
            );
        }
    }

    Ok(())
}
