//! Build script for extend-path-cli.
//!
//! Generates the `extend-path.1` man page into OUT_DIR with clap_mangen.
//! The command is described here by hand because a build script cannot
//! depend on the crate it builds.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs and src/commands/extend.rs.
fn build_cli() -> Command {
    Command::new("extend-path")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Append, prepend, delete or verify PATH entries")
        .long_about(
            "Edit or check a PATH-like environment variable. Without a mode flag the \
             given directories are verified; otherwise the updated list is printed.",
        )
        .arg(
            Arg::new("delete")
                .short('d')
                .long("delete")
                .help("Remove the directories from the list")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("append")
                .short('a')
                .long("append")
                .help("Add the directories at the end of the list")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("prepend")
                .short('p')
                .long("prepend")
                .help("Add the directories at the front of the list")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("relocate")
                .short('r')
                .long("relocate")
                .help("Move directories that are already listed instead of leaving them in place")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-relocate")
                .long("no-relocate")
                .help("Leave directories that are already listed in place, even if configured to relocate")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("validate")
                .long("validate")
                .help("Skip directories that do not exist or are not directories")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-validate")
                .long("no-validate")
                .help("Keep directories whether or not they exist, even if configured to validate")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("environment")
                .short('e')
                .long("environment")
                .value_name("VAR")
                .help("Name of the variable to edit (default: PATH)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .value_parser(["path", "lines", "json", "export"])
                .help("How to print the updated list"),
        )
        .arg(
            Arg::new("shell")
                .long("shell")
                .value_name("SHELL")
                .help("Shell syntax for --format export (default: detected from $SHELL)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .env("EXTEND_PATH_CONFIG")
                .help("Read configuration from FILE instead of ~/.extend-path/config.yaml"),
        )
        .arg(
            Arg::new("no-config")
                .long("no-config")
                .help("Ignore configuration files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .help("Print a shell completion script and exit"),
        )
        .arg(
            Arg::new("directories")
                .value_name("DIR")
                .num_args(0..)
                .help("Directories to add, remove or check"),
        )
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("extend-path.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
