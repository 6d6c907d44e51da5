// src/reporting.rs
//! Console output for build and filter results.

use crate::dataset::export::Manifest;
use crate::tables::filter::FilterSummary;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Prints a per-dataset summary of a build.
pub fn print_build_summary(manifest: &Manifest, out_dir: &Path) {
    if manifest.datasets.is_empty() {
        println!("{}", "No datasets configured.".yellow());
        return;
    }

    for entry in &manifest.datasets {
        let header = format!("{} ({})", entry.name, entry.file);
        if entry.nodes == 0 {
            println!("{} {}", "EMPTY".red().bold(), header);
        } else {
            println!("{} {}", "OK".green().bold(), header);
        }
        println!(
            "   {} {} nodes, {} edges, {} labels",
            "=".blue(),
            entry.nodes,
            entry.edges,
            entry.labels.len()
        );
        if !entry.labels.is_empty() {
            println!("   {} {}", "|".blue(), entry.labels.join(", ").dimmed());
        }
        println!("   {} sha256 {}", "|".blue(), entry.sha256.dimmed());
    }

    println!(
        "\n{} {}",
        "Wrote".green(),
        out_dir.join(crate::dataset::export::MANIFEST_FILE).display()
    );
}

/// Prints the manifest as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json(manifest: &Manifest) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(manifest)?);
    Ok(())
}

pub fn print_filter_summary(summary: &FilterSummary, output: &Path) {
    println!(
        "{} kept {} of {} rows -> {}",
        "OK".green().bold(),
        summary.rows_kept,
        summary.rows_read,
        output.display()
    );
}
