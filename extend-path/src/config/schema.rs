//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::output::{self, ShellType};

/// Variable edited when none is configured.
pub const DEFAULT_VARIABLE: &str = "PATH";

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; the accessor
/// methods supply the built-in defaults.
///
/// # Examples
///
/// ```
/// use extend_path::config::Config;
///
/// let config = Config {
///     variable: Some("MANPATH".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.variable_name(), "MANPATH");
/// assert!(!config.validate_enabled());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Environment variable holding the directory list.
    pub variable: Option<String>,

    /// Skip candidates that are not existing directories.
    pub validate: Option<bool>,

    /// Move already-present entries when appending or prepending.
    pub relocate: Option<bool>,

    /// How the resulting list is printed.
    pub output_format: Option<OutputFormat>,

    /// Shell used by the export format (detected when unset).
    pub shell: Option<String>,
}

/// Output format names accepted in configuration.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Entries joined with the list separator.
    Path,
    /// One entry per line.
    Lines,
    /// JSON array.
    Json,
    /// Shell export statement.
    Export,
}

impl OutputFormat {
    /// Parses a format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns a validation error for unknown names.
    pub fn parse(field: &str, s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "path" => Ok(Self::Path),
            "lines" => Ok(Self::Lines),
            "json" => Ok(Self::Json),
            "export" => Ok(Self::Export),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "unknown output format '{s}': expected path, lines, json or export"
                ),
            }),
        }
    }
}

impl Config {
    /// The configured variable name, or `PATH`.
    #[must_use]
    pub fn variable_name(&self) -> &str {
        self.variable.as_deref().unwrap_or(DEFAULT_VARIABLE)
    }

    /// Whether candidates must be existing directories (default: no).
    #[must_use]
    pub fn validate_enabled(&self) -> bool {
        self.validate.unwrap_or(false)
    }

    /// Whether insertions relocate existing entries (default: no).
    #[must_use]
    pub fn relocate_enabled(&self) -> bool {
        self.relocate.unwrap_or(false)
    }

    /// The shell for export statements, detected from the environment when
    /// not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured shell name is not recognized.
    pub fn shell_type(&self) -> Result<ShellType> {
        match self.shell.as_deref() {
            Some(name) => ShellType::from_string(name),
            None => Ok(ShellType::detect()),
        }
    }

    /// The effective output format (default: the plain serialized list).
    ///
    /// # Errors
    ///
    /// Returns an error if the export format is selected with an
    /// unrecognized shell.
    pub fn output_format(&self) -> Result<output::OutputFormat> {
        Ok(match self.output_format.unwrap_or(OutputFormat::Path) {
            OutputFormat::Path => output::OutputFormat::Path,
            OutputFormat::Lines => output::OutputFormat::Lines,
            OutputFormat::Json => output::OutputFormat::Json,
            OutputFormat::Export => output::OutputFormat::Export(self.shell_type()?),
        })
    }
}
