// src/tables/redirect.rs
//! Rows look like `from_id,to_namespace,to_title,<ignored>,<ignored>`.

use super::{expect_width, for_each_record, parse_id, parse_namespace, COMMA};
use crate::error::Result;
use std::path::Path;

const WIDTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRecord {
    pub from_id: u64,
    pub to_namespace: i32,
    pub to_title: String,
}

/// Visits every row of the redirect table.
///
/// # Errors
/// Returns error on I/O failure, a row without exactly five fields, or a
/// non-integer id or namespace.
pub fn visit<F>(path: &Path, mut f: F) -> Result<()>
where
    F: FnMut(RedirectRecord),
{
    for_each_record(path, COMMA, |line, record| {
        expect_width(path, line, record, WIDTH)?;
        f(RedirectRecord {
            from_id: parse_id(path, line, &record[0], "redirect source id")?,
            to_namespace: parse_namespace(path, line, &record[1])?,
            to_title: record[2].to_string(),
        });
        Ok(())
    })
}
