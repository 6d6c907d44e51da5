// src/graph/links.rs
//! Link graph between a target set of pages.
//!
//! Links are stored as titles in the dump, so every destination is resolved
//! back to an id through the page index. A destination that is a redirect is
//! replaced by its resolved target, or dropped when it has none. Both ends of
//! every kept link lie in the target set.

use super::redirects::RedirectMap;
use crate::error::Result;
use crate::tables::page::PageIndex;
use crate::tables::pagelinks::{self, LinkRecord};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;
use tracing::{debug, info};

/// Source page id -> ordered destination ids.
///
/// Every id of the target set has an entry, empty for pages with no kept links.
/// Order follows the page table; repeated links are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkGraph {
    outlinks: BTreeMap<u64, Vec<u64>>,
}

impl LinkGraph {
    /// Builds the graph from link rows already in memory.
    #[must_use]
    pub fn build<I>(
        targets: &BTreeSet<u64>,
        links: I,
        pages: &PageIndex,
        redirects: &RedirectMap,
    ) -> Self
    where
        I: IntoIterator<Item = LinkRecord>,
    {
        let mut linked = LinkedTitles::default();
        for link in links {
            linked.record(link, targets);
        }
        linked.finish(targets, pages, redirects)
    }

    /// Streams the pagelinks table and builds the graph.
    ///
    /// # Errors
    /// Returns error if the pagelinks table is unreadable or malformed.
    pub fn load(
        targets: &BTreeSet<u64>,
        path: &Path,
        pages: &PageIndex,
        redirects: &RedirectMap,
    ) -> Result<Self> {
        debug!(path = %path.display(), targets = targets.len(), "reading pagelinks table");
        let mut linked = LinkedTitles::default();
        pagelinks::visit(path, |link| linked.record(link, targets))?;
        let graph = linked.finish(targets, pages, redirects);
        info!(
            pages = graph.len(),
            links = graph.link_count(),
            "built link graph"
        );
        Ok(graph)
    }

    /// Destinations linked from `id`, or `None` if `id` is not in the graph.
    #[must_use]
    pub fn outlinks(&self, id: u64) -> Option<&[u64]> {
        self.outlinks.get(&id).map(Vec::as_slice)
    }

    /// Pages linking to `id`, ordered by source id, one entry per link.
    #[must_use]
    pub fn linkers_of(&self, id: u64) -> Vec<u64> {
        self.outlinks
            .iter()
            .flat_map(|(&source, dests)| dests.iter().filter(move |&&d| d == id).map(move |_| source))
            .collect()
    }

    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.outlinks.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &[u64])> {
        self.outlinks.iter().map(|(&id, dests)| (id, dests.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outlinks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outlinks.is_empty()
    }

    #[must_use]
    pub fn link_count(&self) -> usize {
        self.outlinks.values().map(Vec::len).sum()
    }
}

/// Destination title -> source ids, for links leaving the target set.
#[derive(Default)]
struct LinkedTitles {
    by_title: HashMap<String, Vec<u64>>,
}

impl LinkedTitles {
    fn record(&mut self, link: LinkRecord, targets: &BTreeSet<u64>) {
        if !link.is_main() || !targets.contains(&link.from_id) {
            return;
        }
        self.by_title
            .entry(link.to_title)
            .or_default()
            .push(link.from_id);
    }

    fn finish(
        self,
        targets: &BTreeSet<u64>,
        pages: &PageIndex,
        redirects: &RedirectMap,
    ) -> LinkGraph {
        let mut outlinks: BTreeMap<u64, Vec<u64>> =
            targets.iter().map(|&id| (id, Vec::new())).collect();

        for page in pages.pages() {
            let Some(sources) = self.by_title.get(&page.title) else {
                continue;
            };
            let dest = if page.is_redirect {
                match redirects.target(page.id) {
                    Some(target) => target,
                    None => continue,
                }
            } else {
                page.id
            };
            if !targets.contains(&dest) {
                continue;
            }
            for source in sources {
                if let Some(list) = outlinks.get_mut(source) {
                    list.push(dest);
                }
            }
        }

        LinkGraph { outlinks }
    }
}
