//! Clean command - run the automatic cleaning pass and export the result.

use std::path::PathBuf;

use colored::Colorize;
use scour::input::write_csv;
use scour::{CleanOptions, FillPolicy, Scour, ScourConfig};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    null_only: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let mut config = ScourConfig::default();
    if null_only {
        config.clean = CleanOptions {
            fill_policy: FillPolicy::NullOnly,
        };
    }

    let engine = Scour::with_config(config);
    let (dataset, meta) = engine.load(&file)?;

    println!(
        "{} {} ({} rows)",
        "Cleaning".cyan().bold(),
        meta.file.white(),
        meta.row_count
    );

    let Some(outcome) = engine.clean(&dataset) else {
        println!("{}", "Nothing to clean - the file has no data rows.".yellow());
        return Ok(());
    };

    if verbose {
        println!();
        println!("{}", outcome.plan.description);
    }

    let output_path = output.unwrap_or_else(|| {
        let stem = file.file_stem().unwrap_or_default().to_string_lossy();
        file.with_file_name(format!("{}_cleaned.csv", stem))
    });
    std::fs::write(&output_path, write_csv(&outcome.cleaned)?)?;

    println!();
    println!("{}", outcome.report);
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );

    Ok(())
}
