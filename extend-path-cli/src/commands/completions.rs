//! Shell completion generation.
//!
//! `extend-path --completions <SHELL>` writes a completion script for
//! bash, zsh, fish, PowerShell or elvish to stdout.

use crate::cli::Cli;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Name of the installed binary.
const BIN_NAME: &str = "extend-path";

/// Write the completion script for `shell` to `out`.
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}

/// Print installation hints for `shell` on stderr.
pub fn print_install_hint(shell: Shell) {
    match shell {
        Shell::Bash => {
            eprintln!("# Add to ~/.bashrc:");
            eprintln!("#   eval \"$({BIN_NAME} --completions bash)\"");
        }
        Shell::Zsh => {
            eprintln!("#   {BIN_NAME} --completions zsh > ~/.zsh/completions/_{BIN_NAME}");
            eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
        }
        Shell::Fish => {
            eprintln!(
                "#   {BIN_NAME} --completions fish > ~/.config/fish/completions/{BIN_NAME}.fish"
            );
        }
        Shell::PowerShell => {
            eprintln!("#   {BIN_NAME} --completions powershell | Out-String | Invoke-Expression");
        }
        _ => {}
    }
}

/// Print the completion script for `shell` on stdout.
pub fn print_completions(shell: Shell) {
    write_completions(shell, &mut io::stdout());
}
