// src/dataset/node.rs
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One retained page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: u64,
    pub title: String,
    pub labels: BTreeSet<String>,
    /// Pages this one links to, all present in the same dataset.
    pub outlinks: Vec<u64>,
    pub tokens: Vec<String>,
}

/// The nodes of one logical dataset, keyed by page id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub nodes: BTreeMap<u64, Node>,
}

impl Dataset {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Node> {
        self.nodes.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every label used by some node.
    #[must_use]
    pub fn label_vocabulary(&self) -> BTreeSet<String> {
        self.nodes
            .values()
            .flat_map(|n| n.labels.iter().cloned())
            .collect()
    }

    /// `(source, destination)` pairs in node order, repeated links included.
    #[must_use]
    pub fn edges(&self) -> Vec<(u64, u64)> {
        self.nodes
            .values()
            .flat_map(|n| n.outlinks.iter().map(move |&dest| (n.id, dest)))
            .collect()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.outlinks.len()).sum()
    }

    /// True when every outlink points at a node of this dataset.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.nodes
            .values()
            .flat_map(|n| n.outlinks.iter())
            .all(|dest| self.nodes.contains_key(dest))
    }
}
