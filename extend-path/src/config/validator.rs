//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::ShellType;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use extend_path::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { variable: Some("NOT=A=NAME".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the variable name cannot be looked up
    /// in the environment or the shell is not recognized.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref variable) = config.variable {
            Self::validate_variable(variable)?;
        }

        if let Some(ref shell) = config.shell {
            ShellType::from_string(shell)?;
        }

        Ok(())
    }

    /// Any name the environment can hold is accepted; identifier rules
    /// only apply to the export format.
    fn validate_variable(variable: &str) -> Result<()> {
        if variable.is_empty() || variable.contains(['=', '\0']) {
            return Err(Error::Validation {
                field: "variable".into(),
                message: format!(
                    "'{}' is not a usable environment variable name (empty, or contains '=' or NUL)",
                    variable.escape_default()
                ),
            });
        }
        Ok(())
    }
}
