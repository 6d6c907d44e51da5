//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::Commands;
use super::handlers::{handle_build, handle_filter, handle_init};
use crate::exit::WikigraphExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<WikigraphExit> {
    match command {
        Commands::Build { config, out, json } => handle_build(&config, &out, json),
        Commands::Filter {
            input,
            output,
            fields,
        } => handle_filter(&input, &output, &fields),
        Commands::Init { config, force } => handle_init(&config, force),
    }
}
