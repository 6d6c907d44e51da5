// src/bin/wikigraph.rs
use clap::Parser;
use colored::Colorize;
use wikigraph_core::cli::{self, Cli};
use wikigraph_core::exit::WikigraphExit;
use wikigraph_core::logging;

fn main() -> WikigraphExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(WikigraphExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            WikigraphExit::from_error(&e)
        }
    }
}
