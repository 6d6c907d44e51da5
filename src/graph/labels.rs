// src/graph/labels.rs
//! Category -> label propagation.
//!
//! A caller's [`LabelMapping`] lists, per label, the categories that confer
//! it. The mapping is inverted once into a category lookup, then every row of
//! the page-to-category table is matched against it. Labels are unioned per
//! row, so a page in categories feeding two labels carries both.

use crate::config::LabelMapping;
use crate::error::Result;
use crate::tables::category::{self, CategoryRow};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;
use tracing::{debug, info};

/// Title -> labels, for titles with at least one label.
pub type TitleLabels = BTreeMap<String, BTreeSet<String>>;

/// Inverted view of a [`LabelMapping`].
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    by_category: HashMap<String, Vec<String>>,
}

impl LabelIndex {
    #[must_use]
    pub fn new(mapping: &LabelMapping) -> Self {
        let mut by_category: HashMap<String, Vec<String>> = HashMap::new();
        for (label, categories) in mapping.iter() {
            for category in categories {
                by_category
                    .entry(category.clone())
                    .or_default()
                    .push(label.to_string());
            }
        }
        Self { by_category }
    }

    /// Union of the labels fed by the given categories. Unknown categories are ignored.
    #[must_use]
    pub fn labels_for<'a, I>(&self, categories: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        categories
            .into_iter()
            .filter_map(|c| self.by_category.get(c))
            .flatten()
            .cloned()
            .collect()
    }

    /// Applies one table row. A repeated title replaces its earlier label set.
    pub fn apply(&self, row: &CategoryRow, out: &mut TitleLabels) {
        let labels = self.labels_for(row.categories.iter().map(String::as_str));
        if labels.is_empty() {
            return;
        }
        out.insert(row.title.clone(), labels);
    }
}

/// Labels for a single mapping.
///
/// # Errors
/// Returns error if the table cannot be read.
pub fn propagate_labels(mapping: &LabelMapping, path: &Path) -> Result<TitleLabels> {
    let mut all = propagate_all(std::slice::from_ref(mapping), path)?;
    Ok(all.pop().unwrap_or_default())
}

/// Labels for several mappings from one pass over the table. The result is
/// in the order of `mappings`.
///
/// # Errors
/// Returns error if the table cannot be read.
pub fn propagate_all(mappings: &[LabelMapping], path: &Path) -> Result<Vec<TitleLabels>> {
    let indexes: Vec<LabelIndex> = mappings.iter().map(LabelIndex::new).collect();
    let mut results = vec![TitleLabels::new(); indexes.len()];
    if indexes.is_empty() {
        return Ok(results);
    }

    debug!(path = %path.display(), mappings = indexes.len(), "reading page-to-category table");
    category::visit(path, |row| {
        for (index, out) in indexes.iter().zip(results.iter_mut()) {
            index.apply(&row, out);
        }
    })?;

    for (i, labels) in results.iter().enumerate() {
        info!(dataset = i, titles = labels.len(), "propagated labels");
    }
    Ok(results)
}

/// Propagates labels over rows already in memory.
#[must_use]
pub fn propagate_rows<'a, I>(mapping: &LabelMapping, rows: I) -> TitleLabels
where
    I: IntoIterator<Item = &'a CategoryRow>,
{
    let index = LabelIndex::new(mapping);
    let mut out = TitleLabels::new();
    for row in rows {
        index.apply(row, &mut out);
    }
    out
}
