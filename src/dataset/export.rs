// src/dataset/export.rs
//! Writes assembled datasets to disk with a checksummed manifest.

use super::node::{Dataset, Node};
use crate::error::{Result, WikigraphError};
use crate::utils::compute_sha256;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Serialize)]
struct DatasetFile<'a> {
    name: &'a str,
    nodes: Vec<&'a Node>,
}

/// One exported dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub file: String,
    pub nodes: usize,
    pub edges: usize,
    pub labels: Vec<String>,
    pub sha256: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub datasets: Vec<ManifestEntry>,
}

impl Manifest {
    /// Loads a manifest written by [`write_datasets`].
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| WikigraphError::io(e, path))?;
        serde_json::from_str(&content).map_err(|source| WikigraphError::Json {
            source,
            path: path.to_path_buf(),
            line: 0,
        })
    }

    #[must_use]
    pub fn has_empty(&self) -> bool {
        self.datasets.iter().any(|d| d.nodes == 0)
    }
}

/// Serializes one dataset: nodes ordered by id, pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_json(dataset: &Dataset) -> Result<String> {
    let file = DatasetFile {
        name: &dataset.name,
        nodes: dataset.nodes.values().collect(),
    };
    serde_json::to_string_pretty(&file).map_err(|source| WikigraphError::Json {
        source,
        path: format!("{}.json", dataset.name).into(),
        line: 0,
    })
}

/// Writes `<name>.json` for each dataset and a `manifest.json` summarizing
/// them. Output is byte-identical for identical datasets.
///
/// # Errors
/// Returns error if the directory cannot be created or a file cannot be written.
pub fn write_datasets(datasets: &[Dataset], out_dir: &Path) -> Result<Manifest> {
    fs::create_dir_all(out_dir).map_err(|e| WikigraphError::io(e, out_dir))?;

    let mut manifest = Manifest::default();
    for dataset in datasets {
        let file = format!("{}.json", dataset.name);
        let path = out_dir.join(&file);
        let content = to_json(dataset)?;
        fs::write(&path, &content).map_err(|e| WikigraphError::io(e, &path))?;

        manifest.datasets.push(ManifestEntry {
            name: dataset.name.clone(),
            file,
            nodes: dataset.len(),
            edges: dataset.edge_count(),
            labels: dataset.label_vocabulary().into_iter().collect(),
            sha256: compute_sha256(content.as_bytes()),
        });
        info!(dataset = %dataset.name, path = %path.display(), "wrote dataset");
    }

    let path = out_dir.join(MANIFEST_FILE);
    let content = serde_json::to_string_pretty(&manifest).map_err(|source| WikigraphError::Json {
        source,
        path: path.clone(),
        line: 0,
    })?;
    fs::write(&path, content).map_err(|e| WikigraphError::io(e, &path))?;
    Ok(manifest)
}
