// src/tables/pagelinks.rs
//! Rows look like `from_id,from_namespace,to_title,to_namespace`.

use super::{expect_width, for_each_record, parse_id, parse_namespace, COMMA, MAIN_NAMESPACE};
use crate::error::Result;
use std::path::Path;

const WIDTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub from_id: u64,
    pub from_namespace: i32,
    pub to_title: String,
    pub to_namespace: i32,
}

impl LinkRecord {
    /// A link between two main-namespace pages.
    #[must_use]
    pub fn main(from_id: u64, to_title: impl Into<String>) -> Self {
        Self {
            from_id,
            from_namespace: MAIN_NAMESPACE,
            to_title: to_title.into(),
            to_namespace: MAIN_NAMESPACE,
        }
    }

    #[must_use]
    pub fn is_main(&self) -> bool {
        self.from_namespace == MAIN_NAMESPACE && self.to_namespace == MAIN_NAMESPACE
    }
}

/// Streams the pagelinks table.
///
/// # Errors
/// Returns error on I/O failure, a row without exactly four fields, or a
/// non-integer id or namespace.
pub fn visit<F>(path: &Path, mut f: F) -> Result<()>
where
    F: FnMut(LinkRecord),
{
    for_each_record(path, COMMA, |line, record| {
        expect_width(path, line, record, WIDTH)?;
        f(LinkRecord {
            from_id: parse_id(path, line, &record[0], "link source id")?,
            from_namespace: parse_namespace(path, line, &record[1])?,
            to_title: record[2].to_string(),
            to_namespace: parse_namespace(path, line, &record[3])?,
        });
        Ok(())
    })
}
