// src/tables/mod.rs
//! Readers for the relational dump tables.
//!
//! All tables are headerless. Rows are visited one at a time so the large
//! tables (pagelinks, page-to-category) never have to be held in memory as raw
//! records; callers keep only what they index.

pub mod category;
pub mod filter;
pub mod page;
pub mod pagelinks;
pub mod redirect;

use crate::error::{Result, WikigraphError};
use csv::StringRecord;
use std::fs::File;
use std::path::Path;

/// The content-article namespace, as it appears in the dumps.
pub const MAIN_NAMESPACE: i32 = 0;

pub(crate) const COMMA: u8 = b',';
pub(crate) const TAB: u8 = b'\t';

/// Opens a headerless, variable-width table.
pub(crate) fn open_reader(path: &Path, delimiter: u8) -> Result<csv::Reader<File>> {
    let file = File::open(path).map_err(|e| WikigraphError::io(e, path))?;
    Ok(csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(file))
}

/// Calls `visit` for every record of the table with its 1-based line number.
/// The record buffer is reused between rows.
pub(crate) fn for_each_record<F>(path: &Path, delimiter: u8, visit: F) -> Result<()>
where
    F: FnMut(u64, &StringRecord) -> Result<()>,
{
    let mut reader = open_reader(path, delimiter)?;
    read_records(&mut reader, path, visit)
}

/// Drives `visit` over an already opened reader. `path` is only used in errors.
pub(crate) fn read_records<F>(reader: &mut csv::Reader<File>, path: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(u64, &StringRecord) -> Result<()>,
{
    let mut record = StringRecord::new();
    while reader
        .read_record(&mut record)
        .map_err(|e| WikigraphError::csv(e, path))?
    {
        let line = record.position().map_or(0, csv::Position::line);
        visit(line, &record)?;
    }
    Ok(())
}

/// Parses an integer page id field.
pub(crate) fn parse_id(path: &Path, line: u64, field: &str, what: &str) -> Result<u64> {
    field
        .parse::<u64>()
        .map_err(|_| WikigraphError::malformed(path, line, format!("{what} is not an integer: {field:?}")))
}

/// Parses an integer namespace field.
pub(crate) fn parse_namespace(path: &Path, line: u64, field: &str) -> Result<i32> {
    field
        .parse::<i32>()
        .map_err(|_| WikigraphError::malformed(path, line, format!("namespace is not an integer: {field:?}")))
}

pub(crate) fn expect_width(path: &Path, line: u64, record: &StringRecord, width: usize) -> Result<()> {
    if record.len() == width {
        return Ok(());
    }
    Err(WikigraphError::malformed(
        path,
        line,
        format!("expected {width} fields, found {}", record.len()),
    ))
}
