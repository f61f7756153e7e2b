//! The append / prepend / delete / verify command.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::{Args, ValueEnum};
use extend_path::config::{Config, OutputFormat as FormatSetting};
use extend_path::path::read_variable;
use extend_path::{execute, Directory, DirectoryResolver, Mode, Outcome};
use std::path::PathBuf;

/// Output format selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// The joined list, ready to assign back to the variable
    Path,
    /// One entry per line
    Lines,
    /// A JSON array of entries
    Json,
    /// A shell statement exporting the variable
    Export,
}

impl From<FormatArg> for FormatSetting {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Path => FormatSetting::Path,
            FormatArg::Lines => FormatSetting::Lines,
            FormatArg::Json => FormatSetting::Json,
            FormatArg::Export => FormatSetting::Export,
        }
    }
}

/// Edit or verify the entries of a PATH-like variable.
#[derive(Args)]
pub struct ExtendCommand {
    /// Remove the directories from the list
    #[arg(short, long, conflicts_with_all = ["append", "prepend"])]
    pub delete: bool,

    /// Add the directories at the end of the list
    #[arg(short, long, conflicts_with = "prepend")]
    pub append: bool,

    /// Add the directories at the front of the list
    #[arg(short, long)]
    pub prepend: bool,

    /// Move directories that are already listed instead of leaving them in place
    #[arg(short, long, conflicts_with = "delete")]
    pub relocate: bool,

    /// Leave directories that are already listed in place, even if configured to relocate
    #[arg(long, conflicts_with = "relocate")]
    pub no_relocate: bool,

    /// Skip directories that do not exist or are not directories
    #[arg(long)]
    pub validate: bool,

    /// Keep directories whether or not they exist, even if configured to validate
    #[arg(long, conflicts_with = "validate")]
    pub no_validate: bool,

    /// Name of the variable to edit (default: PATH)
    #[arg(short, long, value_name = "VAR")]
    pub environment: Option<String>,

    /// How to print the updated list
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Shell syntax for --format export (default: detected from $SHELL)
    #[arg(long, value_name = "SHELL")]
    pub shell: Option<String>,

    /// Directories to add, remove or check
    #[arg(value_name = "DIR")]
    pub directories: Vec<PathBuf>,
}

impl ExtendCommand {
    /// Configuration layer carrying the values set on the command line.
    ///
    /// Switches only override lower layers when they are given.
    pub fn config_overrides(&self) -> Config {
        Config {
            variable: self.environment.clone(),
            validate: switch(self.validate, self.no_validate),
            relocate: switch(self.relocate, self.no_relocate),
            output_format: self.format.map(FormatSetting::from),
            shell: self.shell.clone(),
        }
    }

    /// Mode selected by the flags, before the relocate setting is applied.
    pub fn mode(&self) -> Mode {
        if self.delete {
            Mode::Delete
        } else if self.append {
            Mode::Append { relocate: false }
        } else if self.prepend {
            Mode::Prepend { relocate: false }
        } else {
            Mode::Verify
        }
    }

    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global, self.config_overrides())?;
        let variable = config.variable_name();

        let current = read_variable(variable)?;
        log::debug!("{variable} has {} entries", current.len());

        let resolver = DirectoryResolver::new().with_validation(config.validate_enabled());
        let entries = resolver.resolve_all(&self.directories);
        if entries.len() < self.directories.len() {
            log::info!(
                "Using {} of {} directories",
                entries.len(),
                self.directories.len()
            );
        }

        let mode = self.mode().with_relocate(config.relocate_enabled());
        log::debug!("Running {mode:?} on {variable}");

        match execute(mode, &entries, &current) {
            Outcome::List(list) => {
                let format = config.output_format()?;
                println!("{}", format.render(variable, &list)?);
                Ok(())
            }
            Outcome::Verified { missing } if missing.is_empty() => Ok(()),
            Outcome::Verified { missing } => Err(CliError::SemanticFailure(format!(
                "Not in {variable}: {}",
                describe(&missing)
            ))),
        }
    }
}

fn switch(on: bool, off: bool) -> Option<bool> {
    if on {
        Some(true)
    } else if off {
        Some(false)
    } else {
        None
    }
}

fn describe(missing: &[Directory]) -> String {
    missing
        .iter()
        .map(Directory::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
