// src/text/corpus.rs
//! Loads tokenized article text from a directory of JSON-lines files.
//!
//! Each line is an object with at least `id` (integer or integer string) and
//! `text`. Files are visited in sorted path order so repeated runs see
//! records in the same sequence.

use super::tokenize::word_tokenize;
use crate::config::DuplicatePolicy;
use crate::error::{Result, WikigraphError};
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Page id -> word tokens.
pub type TokenMap = HashMap<u64, Vec<String>>;

#[derive(Debug, Deserialize)]
struct TextRecord {
    id: RecordId,
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordId {
    Unsigned(u64),
    Signed(i64),
    Str(String),
}

impl RecordId {
    /// The integer value, which may be negative or out of page-id range.
    fn parse(&self) -> Option<i128> {
        match self {
            Self::Unsigned(id) => Some(i128::from(*id)),
            Self::Signed(id) => Some(i128::from(*id)),
            Self::Str(s) => s.trim().parse().ok(),
        }
    }
}

/// Tokenizes the text of every record whose id is in `targets`.
/// Ids with no record are absent from the result.
///
/// # Errors
/// Returns error if the directory cannot be walked, a file cannot be read, a
/// line is not a valid record, or an id repeats under `Reject`.
pub fn load_tokens(targets: &BTreeSet<u64>, dir: &Path, policy: DuplicatePolicy) -> Result<TokenMap> {
    let mut tokens = TokenMap::new();
    let walker = WalkDir::new(dir).follow_links(false).sort_by_file_name();

    let mut files = 0usize;
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        files += 1;
        load_file(entry.path(), targets, policy, &mut tokens)?;
    }

    info!(files, texts = tokens.len(), targets = targets.len(), "loaded text tokens");
    Ok(tokens)
}

fn load_file(
    path: &Path,
    targets: &BTreeSet<u64>,
    policy: DuplicatePolicy,
    tokens: &mut TokenMap,
) -> Result<()> {
    debug!(path = %path.display(), "reading text file");
    let file = File::open(path).map_err(|e| WikigraphError::io(e, path))?;

    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| WikigraphError::io(e, path))?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx as u64 + 1;
        let record: TextRecord = serde_json::from_str(&line).map_err(|source| WikigraphError::Json {
            source,
            path: path.to_path_buf(),
            line: line_no,
        })?;
        let raw = record
            .id
            .parse()
            .ok_or_else(|| WikigraphError::malformed(path, line_no, format!("record id is not an integer: {:?}", record.id)))?;
        // Negative ids can never name a page.
        let Ok(id) = u64::try_from(raw) else {
            debug!(path = %path.display(), line = line_no, id = %raw, "skipping out-of-range text id");
            continue;
        };

        if !targets.contains(&id) {
            continue;
        }
        if policy == DuplicatePolicy::Reject && tokens.contains_key(&id) {
            return Err(WikigraphError::DuplicateKey {
                path: path.to_path_buf(),
                key: format!("text id {id}"),
            });
        }
        tokens.insert(id, word_tokenize(&record.text));
    }
    Ok(())
}
