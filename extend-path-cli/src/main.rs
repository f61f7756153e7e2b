//! Main entry point for the extend-path CLI.
//!
//! Reads a PATH-like variable from the environment and either verifies that
//! the given directories are listed or prints the list with them appended,
//! prepended or deleted.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = extend_path::init_logger(cli.verbose, cli.quiet);
    logger.install();

    if let Some(shell) = cli.completions {
        if !cli.quiet {
            commands::print_install_hint(shell);
        }
        commands::print_completions(shell);
        std::process::exit(0);
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        no_config: cli.no_config,
    };

    match cli.extend.execute(&global) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            logger.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}
