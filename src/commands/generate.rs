//! Implementation of the generation pipeline command.
//!
//! Loads config, runs the manager, and prints either a human-readable
//! summary or the JSON run report.

use crate::config::Config;
use crate::error::{Result, SprigError};
use crate::manager;
use std::path::PathBuf;

/// Execute a request end to end and report the outcome.
pub fn cmd_generate(
    request: &str,
    dry_run: bool,
    root: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let mut config = Config::load_or_default()?;
    if let Some(root) = root {
        config.output_root = root;
    }

    let report = manager::handle(request, &config, dry_run)?;

    for warning in &report.warnings {
        eprintln!("warning: {}", warning);
    }

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| SprigError::UserError(format!("failed to serialize report: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    println!(
        "Category: {} (agent: {}, score {})",
        report.category, report.agent, report.score
    );
    let scores: Vec<String> = report
        .ranked
        .iter()
        .map(|(category, score)| format!("{}={}", category, score))
        .collect();
    println!("Scores:   {}", scores.join(" "));
    println!("Bundle:   {}", report.bundle);

    if dry_run {
        println!();
        println!("Dry run; would write {} file(s):", report.manifest.len());
    } else if let Some(dir) = &report.output_dir {
        println!("Output:   {}", dir.display());
        println!();
        println!("Generated {} file(s):", report.manifest.len());
    }

    for entry in &report.manifest {
        println!("  {} ({} bytes)", entry.path.display(), entry.bytes);
    }

    Ok(())
}
