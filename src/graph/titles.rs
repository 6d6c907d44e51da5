// src/graph/titles.rs
//! Title -> page id resolution against the main namespace.

use crate::tables::page::PageIndex;
use std::collections::BTreeMap;
use tracing::info;

/// Maps each title found in the main namespace to its page id. Titles that do
/// not resolve are omitted, so the result is usually partial.
#[must_use]
pub fn resolve_titles<'a, I>(titles: I, pages: &PageIndex) -> BTreeMap<String, u64>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut requested = 0usize;
    let resolved: BTreeMap<String, u64> = titles
        .into_iter()
        .inspect(|_| requested += 1)
        .filter_map(|title| pages.get(title).map(|page| (title.to_string(), page.id)))
        .collect();

    info!(requested, resolved = resolved.len(), "resolved titles");
    resolved
}
