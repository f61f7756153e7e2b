//! CLI structure and argument definitions.
//!
//! `extend-path` has no subcommands: the mode flags select what happens to
//! the positional directories.

use crate::commands::ExtendCommand;
use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

const LONG_ABOUT: &str = "\
Edit or check a PATH-like environment variable.

Without a mode flag the given directories are verified: the exit status is 0
when every one of them is already listed, 1 otherwise. With --append,
--prepend or --delete the updated list is printed on stdout so it can be
assigned back, e.g.

    export PATH=\"$(extend-path --prepend ~/.local/bin)\"

Entries that differ only by trailing slashes are treated as the same
directory. When no directory survives resolution the current value is
printed unchanged.";

/// Command-line tool for editing PATH-like variables.
#[derive(Parser)]
#[command(name = "extend-path")]
#[command(
    version,
    about = "Append, prepend, delete or verify PATH entries",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from FILE instead of ~/.extend-path/config.yaml
    #[arg(long, value_name = "FILE", env = "EXTEND_PATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Ignore configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Print a shell completion script and exit
    #[arg(
        long,
        value_enum,
        value_name = "SHELL",
        conflicts_with_all = ["append", "prepend", "delete", "directories"]
    )]
    pub completions: Option<Shell>,

    #[command(flatten)]
    pub extend: ExtendCommand,
}
