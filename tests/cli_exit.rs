// tests/cli_exit.rs
//! Exit codes returned by the command handlers.

mod common;

use anyhow::Context;
use common::Fixture;
use std::fs;
use wikigraph_core::cli::handlers::{handle_build, handle_filter, handle_init};
use wikigraph_core::exit::WikigraphExit;
use wikigraph_core::{Config, DatasetSpec, LabelMapping, WikigraphError};

fn write_config(fx: &Fixture, datasets: Vec<DatasetSpec>) -> std::path::PathBuf {
    let config = Config {
        tables: fx.tables.clone(),
        datasets,
        ..Config::default()
    };
    let path = fx.dir.path().join("wikigraph.toml");
    fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();
    path
}

#[test]
fn test_exit_codes_are_stable() {
    assert_eq!(WikigraphExit::Success.code(), 0);
    assert_eq!(WikigraphExit::Error.code(), 1);
    assert_eq!(WikigraphExit::InvalidInput.code(), 2);
    assert_eq!(WikigraphExit::EmptyDataset.code(), 3);
}

#[test]
fn test_invalid_input_is_detected_through_context() {
    let err: anyhow::Result<()> = Err(WikigraphError::Config("bad".into())).context("Failed to load config");
    assert_eq!(WikigraphExit::from_error(&err.unwrap_err()), WikigraphExit::InvalidInput);

    let io = anyhow::Error::new(std::io::Error::other("disk"));
    assert_eq!(WikigraphExit::from_error(&io), WikigraphExit::Error);
}

#[test]
fn test_build_success() {
    let fx = Fixture::dog_cat();
    let config = write_config(&fx, vec![DatasetSpec::new("pets", LabelMapping::new().with("pets", ["Animal"]))]);
    let out = fx.dir.path().join("out");

    let exit = handle_build(&config, &out, true).unwrap();

    assert_eq!(exit, WikigraphExit::Success);
    assert!(out.join("pets.json").exists());
    assert!(out.join("manifest.json").exists());
}

#[test]
fn test_build_reports_empty_dataset() {
    let fx = Fixture::dog_cat();
    let config = write_config(&fx, vec![DatasetSpec::new("empty", LabelMapping::new().with("x", ["Nothing"]))]);

    let exit = handle_build(&config, &fx.dir.path().join("out"), true).unwrap();

    assert_eq!(exit, WikigraphExit::EmptyDataset);
}

#[test]
fn test_build_with_missing_config_fails() {
    let fx = Fixture::dog_cat();
    let err = handle_build(&fx.dir.path().join("absent.toml"), &fx.dir.path().join("out"), true).unwrap_err();
    assert_eq!(WikigraphExit::from_error(&err), WikigraphExit::Error);
}

#[test]
fn test_filter_requires_fields() {
    let fx = Fixture::dog_cat();
    let out = fx.dir.path().join("filtered.csv");
    assert!(handle_filter(&fx.tables.pagelinks, &out, &[]).is_err());
    assert_eq!(handle_filter(&fx.tables.pagelinks, &out, &[1, 3]).unwrap(), WikigraphExit::Success);
}

#[test]
fn test_init_does_not_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wikigraph.toml");

    assert_eq!(handle_init(&path, false).unwrap(), WikigraphExit::Success);
    fs::write(&path, "# mine").unwrap();
    assert_eq!(handle_init(&path, false).unwrap(), WikigraphExit::InvalidInput);
    assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");
    assert_eq!(handle_init(&path, true).unwrap(), WikigraphExit::Success);
    let written = Config::load(&path).unwrap();
    assert_eq!(written.datasets.len(), 1);
    assert_eq!(written.datasets[0].name, "example");
}
