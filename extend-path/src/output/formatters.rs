//! Output formatter implementations.

use crate::directory::Directory;
use crate::path::list::join_list;
use crate::{Error, Result};

use super::{OutputFormatter, ShellType};

/// Validates that a string is a valid environment variable name.
///
/// Valid names must:
/// - Start with a letter or underscore
/// - Contain only letters, digits, and underscores
fn is_valid_env_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if !first.is_ascii_alphabetic() && first != '_' {
        return false;
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Formatter producing the serialized list, as it would be stored in the
/// variable.
pub struct PathFormatter;

impl OutputFormatter for PathFormatter {
    fn format(&self, _variable: &str, entries: &[Directory]) -> Result<String> {
        Ok(join_list(entries))
    }
}

/// Formatter producing one entry per line.
pub struct LinesFormatter;

impl OutputFormatter for LinesFormatter {
    fn format(&self, _variable: &str, entries: &[Directory]) -> Result<String> {
        Ok(entries
            .iter()
            .map(Directory::as_str)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Formatter producing a JSON array of entries.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, _variable: &str, entries: &[Directory]) -> Result<String> {
        Ok(serde_json::to_string_pretty(entries)?)
    }
}

/// Formatter for shell-specific export statements.
pub struct ExportFormatter {
    shell: ShellType,
}

impl ExportFormatter {
    /// Create a new export formatter for `shell`.
    #[must_use]
    pub fn new(shell: ShellType) -> Self {
        Self { shell }
    }
}

impl OutputFormatter for ExportFormatter {
    fn format(&self, variable: &str, entries: &[Directory]) -> Result<String> {
        if !is_valid_env_var_name(variable) {
            return Err(Error::Validation {
                field: "variable".to_string(),
                message: format!(
                    "invalid environment variable name '{variable}': must contain only alphanumeric characters and underscores, and start with a letter or underscore"
                ),
            });
        }
        Ok(self.shell.format_export(variable, &join_list(entries)))
    }
}
