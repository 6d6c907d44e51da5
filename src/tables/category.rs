// src/tables/category.rs
//! The page-to-category table: tab-delimited `title \t category_1 \t ...`.

use super::{for_each_record, TAB};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    /// Title in page-table form (underscores for spaces).
    pub title: String,
    pub categories: Vec<String>,
}

/// Page-table titles use underscores where the category dump uses spaces.
#[must_use]
pub fn normalize_title(title: &str) -> String {
    title.replace(' ', "_")
}

/// Visits every non-empty row. Titles are already normalized.
///
/// # Errors
/// Returns error on I/O or CSV decoding failure.
pub fn visit<F>(path: &Path, mut f: F) -> Result<()>
where
    F: FnMut(CategoryRow),
{
    for_each_record(path, TAB, |_, record| {
        let mut fields = record.iter();
        let Some(title) = fields.next() else {
            return Ok(());
        };
        f(CategoryRow {
            title: normalize_title(title),
            categories: fields.map(str::to_string).collect(),
        });
        Ok(())
    })
}
