// src/cli/handlers/mod.rs
//! Build, filter and init command handlers.

use crate::config::Config;
use crate::dataset::{assemble, export};
use crate::exit::WikigraphExit;
use crate::reporting;
use crate::tables::filter::filter_for_main_namespace;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Handles the build command.
///
/// # Errors
/// Returns error if the config is invalid or any pipeline stage fails.
pub fn handle_build(config_path: &Path, out_dir: &Path, json: bool) -> Result<WikigraphExit> {
    let config = Config::load(config_path)
        .with_context(|| format!("Failed to load config: {}", config_path.display()))?;
    info!(
        config = %config_path.display(),
        datasets = config.datasets.len(),
        "starting build"
    );

    let datasets = assemble(&config.datasets, &config.tables, &config.options)
        .context("Dataset assembly failed")?;
    let manifest = export::write_datasets(&datasets, out_dir)
        .with_context(|| format!("Failed to write output to {}", out_dir.display()))?;

    if json {
        reporting::print_json(&manifest)?;
    } else {
        reporting::print_build_summary(&manifest, out_dir);
    }

    Ok(if manifest.has_empty() {
        WikigraphExit::EmptyDataset
    } else {
        WikigraphExit::Success
    })
}

/// Handles the filter command.
///
/// # Errors
/// Returns error if the input cannot be read or the output cannot be written.
pub fn handle_filter(input: &Path, output: &Path, fields: &[usize]) -> Result<WikigraphExit> {
    if fields.is_empty() {
        bail!("At least one field index is required");
    }
    let summary = filter_for_main_namespace(input, output, fields)
        .with_context(|| format!("Failed to filter {}", input.display()))?;
    reporting::print_filter_summary(&summary, output);
    Ok(WikigraphExit::Success)
}

/// Handles the init command.
///
/// # Errors
/// Returns error if the template cannot be rendered or the file cannot be written.
pub fn handle_init(config_path: &Path, force: bool) -> Result<WikigraphExit> {
    if config_path.exists() && !force {
        eprintln!(
            "{} {} already exists (use --force to overwrite)",
            "warning:".yellow().bold(),
            config_path.display()
        );
        return Ok(WikigraphExit::InvalidInput);
    }
    let template = Config::template().context("Failed to render config template")?;
    fs::write(config_path, template)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("{} {}", "Created".green(), config_path.display());
    Ok(WikigraphExit::Success)
}
