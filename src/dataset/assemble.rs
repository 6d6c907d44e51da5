// src/dataset/assemble.rs
//! Top-level pipeline.
//!
//! Several datasets can be built together. Label propagation is done per
//! dataset, then the union of all labeled titles is resolved once, and the
//! link graph and text tokens are built once over the union of ids. Every
//! dataset is then cut from that shared index, so overlapping datasets agree
//! on ids, links and tokens.
//!
//! A node is kept only if its title resolved, it has a label for the dataset,
//! it is in the link graph and it has text. Outlinks are then restricted to
//! nodes kept in the same dataset.

use crate::config::{DatasetSpec, LabelMapping, PipelineOptions, TablePaths};
use crate::error::Result;
use crate::graph::{propagate_all, resolve_titles, LinkGraph, RedirectMap, TitleLabels};
use crate::tables::page::PageIndex;
use crate::text::{load_tokens, TokenMap};
use super::node::{Dataset, Node};
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

/// Structures shared by every dataset of a run.
#[derive(Debug, Clone, Default)]
pub struct SharedIndex {
    pub titles: BTreeMap<String, u64>,
    pub links: LinkGraph,
    pub tokens: TokenMap,
}

impl SharedIndex {
    /// Resolves `titles` and loads links and text for the resolved ids.
    ///
    /// # Errors
    /// Returns error if any table or the text corpus fails to load.
    pub fn build<'a, I>(titles: I, tables: &TablePaths, options: &PipelineOptions) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let pages = PageIndex::load(&tables.page, options)?;
        let titles = resolve_titles(titles, &pages);
        let ids: BTreeSet<u64> = titles.values().copied().collect();

        let redirects = RedirectMap::load(&pages, &tables.redirect)?;
        let links = LinkGraph::load(&ids, &tables.pagelinks, &pages, &redirects)?;
        let tokens = load_tokens(&ids, &tables.text_dir, options.duplicates)?;

        Ok(Self { titles, links, tokens })
    }

    /// Outlinks restricted to destinations that are in the link graph and
    /// have text. Applied before any per-dataset restriction.
    #[must_use]
    pub fn valid_outlinks(&self) -> BTreeMap<u64, Vec<u64>> {
        self.links
            .iter()
            .map(|(source, dests)| {
                let kept = dests
                    .iter()
                    .copied()
                    .filter(|d| self.links.contains(*d) && self.tokens.contains_key(d))
                    .collect();
                (source, kept)
            })
            .collect()
    }
}

/// Builds every dataset in `specs`, returned in the same order.
///
/// # Errors
/// Returns error if any table or the text corpus fails to load or is malformed.
pub fn assemble(specs: &[DatasetSpec], tables: &TablePaths, options: &PipelineOptions) -> Result<Vec<Dataset>> {
    if specs.is_empty() {
        return Ok(Vec::new());
    }

    let mappings: Vec<LabelMapping> = specs.iter().map(|s| s.labels.clone()).collect();
    let labels = propagate_all(&mappings, &tables.categories)?;

    let all_titles: BTreeSet<&str> = labels
        .iter()
        .flat_map(|l| l.keys().map(String::as_str))
        .collect();
    if all_titles.is_empty() {
        info!("no titles carry a label; every dataset is empty");
        return Ok(specs.iter().map(|s| Dataset::new(s.name.clone())).collect());
    }

    let shared = SharedIndex::build(all_titles.iter().copied(), tables, options)?;
    let valid = shared.valid_outlinks();

    Ok(specs
        .iter()
        .zip(&labels)
        .map(|(spec, title_labels)| assemble_dataset(&spec.name, title_labels, &shared, &valid))
        .collect())
}

/// Builds one dataset.
///
/// # Errors
/// See [`assemble`].
pub fn assemble_single(spec: &DatasetSpec, tables: &TablePaths, options: &PipelineOptions) -> Result<Dataset> {
    let mut datasets = assemble(std::slice::from_ref(spec), tables, options)?;
    Ok(datasets.pop().unwrap_or_else(|| Dataset::new(spec.name.clone())))
}

/// Cuts one dataset out of the shared index.
#[must_use]
pub fn assemble_dataset(
    name: &str,
    labels: &TitleLabels,
    shared: &SharedIndex,
    valid: &BTreeMap<u64, Vec<u64>>,
) -> Dataset {
    let mut retained: BTreeMap<u64, (&str, &BTreeSet<String>)> = BTreeMap::new();
    for (title, title_labels) in labels {
        let Some(&id) = shared.titles.get(title) else {
            continue;
        };
        if valid.contains_key(&id) && shared.tokens.contains_key(&id) {
            retained.insert(id, (title.as_str(), title_labels));
        }
    }

    let nodes: BTreeMap<u64, Node> = retained
        .iter()
        .filter_map(|(&id, &(title, node_labels))| {
            let outlinks = valid
                .get(&id)?
                .iter()
                .copied()
                .filter(|dest| retained.contains_key(dest))
                .collect();
            let tokens = shared.tokens.get(&id)?.clone();
            Some((
                id,
                Node {
                    id,
                    title: title.to_string(),
                    labels: node_labels.clone(),
                    outlinks,
                    tokens,
                },
            ))
        })
        .collect();

    let dataset = Dataset {
        name: name.to_string(),
        nodes,
    };
    info!(
        dataset = name,
        labeled = labels.len(),
        nodes = dataset.len(),
        edges = dataset.edge_count(),
        "assembled dataset"
    );
    dataset
}
