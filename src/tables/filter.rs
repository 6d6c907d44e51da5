// src/tables/filter.rs
//! Standalone preprocessing: keep the rows whose selected fields are all "0".

use super::{open_reader, read_records, COMMA};
use crate::error::{Result, WikigraphError};
use std::fs::File;
use std::path::Path;
use tracing::info;

const ZERO: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSummary {
    pub rows_read: u64,
    pub rows_kept: u64,
}

/// Copies every row of `input` whose fields at `field_indices` all equal the
/// literal `"0"` to `output`, in order and with field content unchanged.
/// A row too short to have one of the fields is dropped.
///
/// # Errors
/// Returns error if either file cannot be opened or a write fails. The output
/// is not touched when the input cannot be opened.
pub fn filter_for_main_namespace(
    input: &Path,
    output: &Path,
    field_indices: &[usize],
) -> Result<FilterSummary> {
    let mut reader = open_reader(input, COMMA)?;
    let file = File::create(output).map_err(|e| WikigraphError::io(e, output))?;
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(file);
    let mut summary = FilterSummary::default();

    read_records(&mut reader, input, |_, record| {
        summary.rows_read += 1;
        let keep = field_indices
            .iter()
            .all(|&idx| record.get(idx) == Some(ZERO));
        if keep {
            writer
                .write_record(record)
                .map_err(|e| WikigraphError::csv(e, output))?;
            summary.rows_kept += 1;
        }
        Ok(())
    })?;

    writer.flush().map_err(|e| WikigraphError::io(e, output))?;
    info!(
        input = %input.display(),
        read = summary.rows_read,
        kept = summary.rows_kept,
        "filtered table"
    );
    Ok(summary)
}
