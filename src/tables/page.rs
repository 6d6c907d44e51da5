// src/tables/page.rs
//! The page table and the immutable index built from it.
//!
//! Rows look like `id,namespace,title,...,is_redirect,...`. Only main-namespace
//! rows are kept; every later stage (title resolution, redirect resolution,
//! link building) reads this index instead of rescanning the file.

use super::{for_each_record, parse_id, parse_namespace, COMMA, MAIN_NAMESPACE};
use crate::config::{DuplicatePolicy, PipelineOptions};
use crate::error::{Result, WikigraphError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub id: u64,
    pub namespace: i32,
    pub title: String,
    pub is_redirect: bool,
}

impl PageRecord {
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>, is_redirect: bool) -> Self {
        Self {
            id,
            namespace: MAIN_NAMESPACE,
            title: title.into(),
            is_redirect,
        }
    }
}

/// Main-namespace pages in table order, with a title lookup.
#[derive(Debug, Clone, Default)]
pub struct PageIndex {
    pages: Vec<PageRecord>,
    by_title: HashMap<String, usize>,
    source: PathBuf,
}

impl PageIndex {
    /// Reads the page table once.
    ///
    /// # Errors
    /// Returns error on I/O failure, a row too short to hold `is_redirect`,
    /// a non-integer id or namespace, or a duplicate title under `Reject`.
    pub fn load(path: &Path, options: &PipelineOptions) -> Result<Self> {
        debug!(path = %path.display(), "reading page table");
        let mut index = Self {
            source: path.to_path_buf(),
            ..Self::default()
        };
        let width = options.redirect_column + 1;

        for_each_record(path, COMMA, |line, record| {
            if record.len() < width {
                return Err(WikigraphError::malformed(
                    path,
                    line,
                    format!("expected at least {width} fields, found {}", record.len()),
                ));
            }
            let id = parse_id(path, line, &record[0], "page id")?;
            let namespace = parse_namespace(path, line, &record[1])?;
            if namespace != MAIN_NAMESPACE {
                return Ok(());
            }
            index.push(
                PageRecord {
                    id,
                    namespace,
                    title: record[2].to_string(),
                    is_redirect: &record[options.redirect_column] == "1",
                },
                options.duplicates,
            )
        })?;

        info!(pages = index.len(), titles = index.by_title.len(), "page index built");
        Ok(index)
    }

    /// Builds an index from records already in memory. Non-main rows are dropped.
    ///
    /// # Errors
    /// Returns `DuplicateKey` on a repeated title under `Reject`.
    pub fn from_records<I>(records: I, policy: DuplicatePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = PageRecord>,
    {
        let mut index = Self {
            source: PathBuf::from("<memory>"),
            ..Self::default()
        };
        for record in records {
            if record.namespace == MAIN_NAMESPACE {
                index.push(record, policy)?;
            }
        }
        Ok(index)
    }

    fn push(&mut self, record: PageRecord, policy: DuplicatePolicy) -> Result<()> {
        let slot = self.pages.len();
        if let Some(previous) = self.by_title.insert(record.title.clone(), slot) {
            if policy == DuplicatePolicy::Reject {
                return Err(WikigraphError::DuplicateKey {
                    path: self.source.clone(),
                    key: format!("title {:?} (ids {} and {})", record.title, self.pages[previous].id, record.id),
                });
            }
        }
        self.pages.push(record);
        Ok(())
    }

    /// The row a title resolves to. With duplicate titles this is the last one read.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&PageRecord> {
        self.by_title.get(title).map(|&slot| &self.pages[slot])
    }

    /// Every kept row in table order, duplicates included.
    #[must_use]
    pub fn pages(&self) -> &[PageRecord] {
        &self.pages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
