use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "wikigraph",
    version,
    about = "Builds labeled graph datasets from Wikipedia table dumps"
)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the pipeline for every dataset in the config
    Build {
        #[arg(long, short, value_name = "FILE", default_value = "wikigraph.toml")]
        config: PathBuf,
        #[arg(long, short, value_name = "DIR", default_value = "out")]
        out: PathBuf,
        /// Print the manifest as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Keep only the rows whose given fields are all "0"
    Filter {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
        /// Zero-based field indices, comma separated
        #[arg(long, short, value_delimiter = ',', required = true)]
        fields: Vec<usize>,
    },
    /// Write a starter wikigraph.toml
    Init {
        #[arg(long, short, value_name = "FILE", default_value = "wikigraph.toml")]
        config: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
