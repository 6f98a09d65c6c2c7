//! Main entry point for the encanto CLI.
//!
//! This is the command-line interface for an encanto catalog. It provides
//! commands for managing:
//! - `category`: categories arranged by hierarchical path
//! - `brand`: brands
//! - `product`: products and their nested view
//! - `image`: product images

mod cli;
mod commands;
mod error;
mod output;
mod utils;

use clap::Parser;
use cli::Cli;
use encanto::Logger;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        separator: cli.separator,
        disable_autoinit: cli.disable_autoinit,
    };

    if !Logger::new(utils::resolve_log_level(&global)).install() {
        log::debug!("a logger is already installed; keeping it");
    }

    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Category(cmd) => cmd.execute(&global),
        cli::Command::Brand(cmd) => cmd.execute(&global),
        cli::Command::Product(cmd) => cmd.execute(&global),
        cli::Command::Image(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
