// tests/unit_tables.rs
//! Page index, table row validation and the namespace filter.

mod common;

use common::{page_rows, write_file};
use std::fs;
use tempfile::TempDir;
use wikigraph_core::tables::filter::filter_for_main_namespace;
use wikigraph_core::tables::page::{PageIndex, PageRecord};
use wikigraph_core::{DuplicatePolicy, PipelineOptions, WikigraphError};

fn load(content: &str, options: &PipelineOptions) -> Result<PageIndex, WikigraphError> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("page.csv");
    write_file(&path, content);
    PageIndex::load(&path, options)
}

#[test]
fn test_page_index_keeps_main_namespace_only() {
    let rows = page_rows(&[(1, 0, "Dog", false), (2, 14, "Dog", false), (3, 0, "Canine", true)]);
    let index = load(&rows, &PipelineOptions::default()).unwrap();

    assert_eq!(index.len(), 2);
    assert_eq!(index.get("Dog").map(|p| p.id), Some(1));
    assert!(index.get("Canine").unwrap().is_redirect);
}

#[test]
fn test_quoted_title_with_comma() {
    let index = load("7,0,\"Hello,_World\",,0,0\n", &PipelineOptions::default()).unwrap();
    assert_eq!(index.get("Hello,_World").map(|p| p.id), Some(7));
}

#[test]
fn test_duplicate_title_last_wins_by_default() {
    let rows = page_rows(&[(1, 0, "Dog", false), (9, 0, "Dog", false)]);
    let index = load(&rows, &PipelineOptions::default()).unwrap();

    assert_eq!(index.get("Dog").map(|p| p.id), Some(9));
    assert_eq!(index.pages().len(), 2, "both rows stay in scan order");
}

#[test]
fn test_duplicate_title_rejected_when_strict() {
    let rows = page_rows(&[(1, 0, "Dog", false), (9, 0, "Dog", false)]);
    let options = PipelineOptions {
        duplicates: DuplicatePolicy::Reject,
        ..PipelineOptions::default()
    };

    let err = load(&rows, &options).unwrap_err();
    assert!(matches!(err, WikigraphError::DuplicateKey { .. }));
}

#[test]
fn test_short_page_row_is_malformed() {
    let err = load("1,0,Dog\n", &PipelineOptions::default()).unwrap_err();
    assert!(matches!(err, WikigraphError::MalformedRow { line: 1, .. }));
}

#[test]
fn test_non_integer_page_id_is_malformed() {
    let err = load("x,0,Dog,,0,0\n", &PipelineOptions::default()).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("page id"));
}

#[test]
fn test_custom_redirect_column() {
    let options = PipelineOptions {
        redirect_column: 3,
        ..PipelineOptions::default()
    };
    let index = load("1,0,Dog,1\n", &options).unwrap();
    assert!(index.get("Dog").unwrap().is_redirect);
}

#[test]
fn test_from_records_drops_other_namespaces() {
    let mut talk = PageRecord::new(5, "Dog", false);
    talk.namespace = 1;
    let index = PageIndex::from_records(vec![PageRecord::new(1, "Dog", false), talk], DuplicatePolicy::Reject).unwrap();
    assert_eq!(index.len(), 1);
}

#[test]
fn test_filter_keeps_rows_with_all_zero_fields() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("links.csv");
    let output = dir.path().join("links.main.csv");
    write_file(&input, "1,0,Dog,0\n2,1,Dog,0\n3,0,\"A,B\",0\n4,0,Cat,14\n5,0\n");

    let summary = filter_for_main_namespace(&input, &output, &[1, 3]).unwrap();

    assert_eq!(summary.rows_read, 5);
    assert_eq!(summary.rows_kept, 2);
    assert_eq!(fs::read_to_string(&output).unwrap(), "1,0,Dog,0\n3,0,\"A,B\",0\n");
}

#[test]
fn test_filter_compares_literal_zero() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    write_file(&input, "1,00\n2,0\n3, 0\n");

    let summary = filter_for_main_namespace(&input, &output, &[1]).unwrap();

    assert_eq!(summary.rows_kept, 1);
    assert_eq!(fs::read_to_string(&output).unwrap(), "2,0\n");
}

#[test]
fn test_filter_missing_input_leaves_output_alone() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.csv");
    let output = dir.path().join("out.csv");
    write_file(&output, "previous\n");

    let err = filter_for_main_namespace(&input, &output, &[1]).unwrap_err();

    assert!(matches!(err, WikigraphError::Io { .. }));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous\n");
}
