pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod exit;
pub mod graph;
pub mod logging;
pub mod reporting;
pub mod tables;
pub mod text;
pub mod utils;

pub use config::{Config, DatasetSpec, DuplicatePolicy, LabelMapping, PipelineOptions, TablePaths};
pub use dataset::{assemble, assemble_single, Dataset, Node};
pub use error::{Result, WikigraphError};
