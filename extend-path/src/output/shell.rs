//! Shell detection and export formatting.

use std::env;

use crate::Result;

/// Supported shell types for export formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    /// Bourne Again Shell (bash).
    Bash,
    /// Z Shell (zsh).
    Zsh,
    /// Friendly Interactive Shell (fish).
    Fish,
    /// `PowerShell`.
    PowerShell,
}

impl ShellType {
    /// Detect the current shell from environment variables.
    ///
    /// Detection precedence:
    /// 1. `ZSH_VERSION` - indicates zsh
    /// 2. `FISH_VERSION` - indicates fish
    /// 3. `PSModulePath` - indicates `PowerShell`
    /// 4. `SHELL` environment variable (path like `/bin/bash`)
    /// 5. Default to bash if unable to determine
    #[must_use]
    pub fn detect() -> Self {
        if env::var("ZSH_VERSION").is_ok() {
            return Self::Zsh;
        }
        if env::var("FISH_VERSION").is_ok() {
            return Self::Fish;
        }
        if env::var("PSModulePath").is_ok() {
            return Self::PowerShell;
        }

        if let Ok(shell_path) = env::var("SHELL") {
            return Self::from_shell_path(&shell_path);
        }

        Self::Bash
    }

    fn from_shell_path(shell_path: &str) -> Self {
        if shell_path.contains("zsh") {
            Self::Zsh
        } else if shell_path.contains("fish") {
            Self::Fish
        } else if shell_path.contains("pwsh") || shell_path.contains("powershell") {
            Self::PowerShell
        } else {
            Self::Bash
        }
    }

    /// Parse a shell type from a string.
    ///
    /// Accepts "bash", "sh", "zsh", "fish", "powershell", "pwsh" and "ps"
    /// (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the shell name is not recognized.
    pub fn from_string(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" | "sh" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            "fish" => Ok(Self::Fish),
            "powershell" | "pwsh" | "ps" => Ok(Self::PowerShell),
            _ => Err(crate::Error::Validation {
                field: "shell".to_string(),
                message: format!(
                    "unknown shell type '{s}': supported shells are bash, zsh, fish, powershell"
                ),
            }),
        }
    }

    /// Format a statement assigning `value` to the exported variable `var`.
    ///
    /// The value is quoted so that spaces and shell metacharacters in
    /// directory names survive.
    ///
    /// # Examples
    ///
    /// ```
    /// use extend_path::output::ShellType;
    ///
    /// assert_eq!(ShellType::Bash.format_export("PATH", "/bin:/usr/bin"), "export PATH='/bin:/usr/bin'");
    /// assert_eq!(ShellType::Fish.format_export("PATH", "/bin"), "set -gx PATH '/bin'");
    /// assert_eq!(ShellType::PowerShell.format_export("PATH", "C:\\bin"), "$env:PATH=\"C:\\bin\"");
    /// ```
    #[must_use]
    pub fn format_export(&self, var: &str, value: &str) -> String {
        match self {
            Self::Bash | Self::Zsh => format!("export {var}='{}'", value.replace('\'', r"'\''")),
            Self::Fish => format!(
                "set -gx {var} '{}'",
                value.replace('\\', r"\\").replace('\'', r"\'")
            ),
            Self::PowerShell => {
                let escaped = value
                    .replace('`', "``")
                    .replace('"', "`\"")
                    .replace('$', "`$");
                format!("$env:{var}=\"{escaped}\"")
            }
        }
    }
}
