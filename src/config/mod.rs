// src/config/mod.rs
pub mod types;

pub use self::types::{Config, DatasetSpec, DuplicatePolicy, LabelMapping, PipelineOptions, TablePaths};

use crate::error::{Result, WikigraphError};
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

pub const CONFIG_FILE: &str = "wikigraph.toml";

/// Reserved for the export manifest.
const RESERVED_NAMES: &[&str] = &["manifest"];

static DATASET_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.-]*$").unwrap_or_else(|_| panic!("Invalid Regex"))
});

impl Config {
    /// Reads and validates a config file. Relative table paths are resolved
    /// against the directory holding the file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, is not valid TOML, or fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| WikigraphError::io(e, path))?;
        let mut config = Self::parse(&content)?;
        if let Some(base) = path.parent() {
            config.tables.resolve_relative(base);
        }
        config.validate()?;
        Ok(config)
    }

    /// Parses TOML without resolving paths or validating.
    ///
    /// # Errors
    /// Returns error on invalid TOML or unknown enum values.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| WikigraphError::Config(e.to_string()))
    }

    /// Validates configuration. An empty dataset list is allowed and simply
    /// produces no output.
    ///
    /// # Errors
    /// Returns `Config` error describing the first violation found.
    pub fn validate(&self) -> Result<()> {
        if self.options.redirect_column < 3 {
            return Err(WikigraphError::Config(format!(
                "redirect_column must be at least 3 (id, namespace and title come first), got {}",
                self.options.redirect_column
            )));
        }

        let mut seen = HashSet::new();
        for spec in &self.datasets {
            spec.validate()?;
            if !seen.insert(spec.name.as_str()) {
                return Err(WikigraphError::Config(format!(
                    "dataset '{}' is defined more than once",
                    spec.name
                )));
            }
        }
        Ok(())
    }

    /// A starter config written by `wikigraph init`.
    ///
    /// # Errors
    /// Returns `Config` error if the template cannot be serialized.
    pub fn template() -> Result<String> {
        let example = DatasetSpec::new(
            "example",
            LabelMapping::new()
                .with("label_a", ["Some_category", "Another_category"])
                .with("label_b", ["Third_category"]),
        );
        let config = Self {
            datasets: vec![example],
            ..Self::default()
        };
        toml::to_string_pretty(&config).map_err(|e| WikigraphError::Config(e.to_string()))
    }
}

impl DatasetSpec {
    /// # Errors
    /// Returns `Config` error on an unusable dataset, label or category name.
    pub fn validate(&self) -> Result<()> {
        if !DATASET_NAME_RE.is_match(&self.name) || RESERVED_NAMES.contains(&self.name.as_str()) {
            return Err(WikigraphError::Config(format!(
                "invalid dataset name '{}' (use letters, digits, '_', '-', '.')",
                self.name
            )));
        }
        self.labels.validate(&self.name)
    }
}

impl LabelMapping {
    /// # Errors
    /// Returns `Config` error if a label or category name is blank.
    pub fn validate(&self, dataset: &str) -> Result<()> {
        for (label, categories) in self.iter() {
            if label.trim().is_empty() {
                return Err(WikigraphError::Config(format!(
                    "dataset '{dataset}' has an empty label name"
                )));
            }
            if categories.iter().any(|c| c.trim().is_empty()) {
                return Err(WikigraphError::Config(format!(
                    "label '{label}' in dataset '{dataset}' lists an empty category"
                )));
            }
        }
        Ok(())
    }
}

impl TablePaths {
    pub fn resolve_relative(&mut self, base: &Path) {
        for path in [
            &mut self.page,
            &mut self.categories,
            &mut self.pagelinks,
            &mut self.redirect,
            &mut self.text_dir,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
