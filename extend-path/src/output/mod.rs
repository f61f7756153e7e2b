//! Output formatting for directory lists.
//!
//! The plain serialized list is the default. Lists can also be rendered one
//! entry per line, as JSON, or as a shell statement that assigns the list to
//! its variable.

mod formatters;
mod shell;

use crate::directory::Directory;
use crate::Result;

pub use formatters::{ExportFormatter, JsonFormatter, LinesFormatter, PathFormatter};
pub use shell::ShellType;

/// Trait for rendering a directory list.
pub trait OutputFormatter {
    /// Format `entries`, the new value of environment variable `variable`.
    ///
    /// # Errors
    ///
    /// Returns an error if the formatting fails (e.g., invalid environment
    /// variable names or serialization failures).
    fn format(&self, variable: &str, entries: &[Directory]) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Entries joined with the list separator.
    #[default]
    Path,
    /// One entry per line.
    Lines,
    /// JSON array.
    Json,
    /// Shell-specific export statement.
    Export(ShellType),
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Path => Box::new(PathFormatter),
            Self::Lines => Box::new(LinesFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Export(shell) => Box::new(ExportFormatter::new(*shell)),
        }
    }

    /// Format `entries` in this format.
    ///
    /// # Errors
    ///
    /// See [`OutputFormatter::format`].
    ///
    /// # Examples
    ///
    /// ```
    /// use extend_path::output::OutputFormat;
    /// use extend_path::Directory;
    ///
    /// let entries = vec![Directory::from("/bin"), Directory::from("/sbin")];
    /// assert_eq!(OutputFormat::Lines.render("PATH", &entries).unwrap(), "/bin\n/sbin");
    /// ```
    pub fn render(&self, variable: &str, entries: &[Directory]) -> Result<String> {
        self.create_formatter().format(variable, entries)
    }
}
