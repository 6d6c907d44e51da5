// src/graph/redirects.rs
//! Single-hop redirect resolution.
//!
//! A redirect is resolved only when its target title names a main-namespace
//! page that is not itself a redirect. Double redirects are dropped, never
//! followed.

use crate::error::Result;
use crate::tables::page::PageIndex;
use crate::tables::redirect::{self, RedirectRecord};
use crate::tables::MAIN_NAMESPACE;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Redirect page id -> target page id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectMap {
    targets: HashMap<u64, u64>,
}

impl RedirectMap {
    /// Resolves redirect rows against the page index.
    #[must_use]
    pub fn resolve<I>(pages: &PageIndex, redirects: I) -> Self
    where
        I: IntoIterator<Item = RedirectRecord>,
    {
        let mut sources = TargetSources::default();
        for record in redirects {
            sources.record(record);
        }
        sources.finish(pages)
    }

    /// Streams the redirect table and resolves it.
    ///
    /// # Errors
    /// Returns error if the redirect table is unreadable or malformed.
    pub fn load(pages: &PageIndex, path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "reading redirect table");
        let mut sources = TargetSources::default();
        redirect::visit(path, |record| sources.record(record))?;
        let map = sources.finish(pages);
        info!(resolved = map.len(), "resolved redirects");
        Ok(map)
    }

    /// The page a redirect points at, or `None` when it cannot be resolved.
    #[must_use]
    pub fn target(&self, redirect_id: u64) -> Option<u64> {
        self.targets.get(&redirect_id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Target title -> redirect ids pointing at it.
#[derive(Default)]
struct TargetSources {
    by_title: HashMap<String, Vec<u64>>,
}

impl TargetSources {
    fn record(&mut self, record: RedirectRecord) {
        if record.to_namespace != MAIN_NAMESPACE {
            return;
        }
        self.by_title
            .entry(record.to_title)
            .or_default()
            .push(record.from_id);
    }

    fn finish(self, pages: &PageIndex) -> RedirectMap {
        let mut targets = HashMap::new();
        for page in pages.pages().iter().filter(|p| !p.is_redirect) {
            let Some(sources) = self.by_title.get(&page.title) else {
                continue;
            };
            for &source in sources {
                targets.insert(source, page.id);
            }
        }
        RedirectMap { targets }
    }
}
