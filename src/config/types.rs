use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// What to do when a key that should be unique shows up twice in an input
/// (a main-namespace title in the page table, a page id in the text corpus).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Last row read wins.
    #[default]
    Overwrite,
    /// Abort the stage with `DuplicateKey`.
    Reject,
}

/// Locations of the dump tables and the extracted-text corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePaths {
    pub page: PathBuf,
    pub categories: PathBuf,
    pub pagelinks: PathBuf,
    pub redirect: PathBuf,
    pub text_dir: PathBuf,
}

impl Default for TablePaths {
    fn default() -> Self {
        Self {
            page: PathBuf::from("data/page.csv"),
            categories: PathBuf::from("data/page2cat.tsv"),
            pagelinks: PathBuf::from("data/pagelinks.csv"),
            redirect: PathBuf::from("data/redirect.csv"),
            text_dir: PathBuf::from("data/text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOptions {
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
    /// Column of `is_redirect` in page rows.
    #[serde(default = "default_redirect_column")]
    pub redirect_column: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            duplicates: DuplicatePolicy::default(),
            redirect_column: default_redirect_column(),
        }
    }
}

const fn default_redirect_column() -> usize { 5 }

/// Label name -> source categories for one logical dataset.
///
/// A category may feed several labels, so a page can end up with more than one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelMapping(BTreeMap<String, Vec<String>>);

impl LabelMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds categories under `label`, extending any already present.
    pub fn insert<I, S>(&mut self, label: impl Into<String>, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .entry(label.into())
            .or_default()
            .extend(categories.into_iter().map(Into::into));
    }

    /// Builder form of [`LabelMapping::insert`].
    #[must_use]
    pub fn with<I, S>(mut self, label: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(label, categories);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}

/// One logical dataset to build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSpec {
    pub name: String,
    #[serde(default)]
    pub labels: LabelMapping,
}

impl DatasetSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, labels: LabelMapping) -> Self {
        Self {
            name: name.into(),
            labels,
        }
    }
}

/// Contents of `wikigraph.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tables: TablePaths,
    #[serde(default)]
    pub options: PipelineOptions,
    #[serde(default)]
    pub datasets: Vec<DatasetSpec>,
}
