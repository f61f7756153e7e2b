//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `EXTEND_PATH_*` environment variables
//! that override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;

/// Overrides [`Config::variable`].
pub const ENV_VARIABLE: &str = "EXTEND_PATH_VARIABLE";
/// Overrides [`Config::validate`].
pub const ENV_VALIDATE: &str = "EXTEND_PATH_VALIDATE";
/// Overrides [`Config::relocate`].
pub const ENV_RELOCATE: &str = "EXTEND_PATH_RELOCATE";
/// Overrides [`Config::output_format`].
pub const ENV_OUTPUT_FORMAT: &str = "EXTEND_PATH_OUTPUT_FORMAT";
/// Overrides [`Config::shell`].
pub const ENV_SHELL: &str = "EXTEND_PATH_SHELL";

/// Every variable read by [`EnvironmentConfig::apply_overrides`].
pub const ALL_ENV_VARS: [&str; 5] = [
    ENV_VARIABLE,
    ENV_VALIDATE,
    ENV_RELOCATE,
    ENV_OUTPUT_FORMAT,
    ENV_SHELL,
];

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use extend_path::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., an unknown output format or an invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(variable) = env::var(ENV_VARIABLE) {
            config.variable = Some(variable);
        }

        if let Ok(val) = env::var(ENV_VALIDATE) {
            config.validate = Some(Self::parse_bool(ENV_VALIDATE, &val)?);
        }

        if let Ok(val) = env::var(ENV_RELOCATE) {
            config.relocate = Some(Self::parse_bool(ENV_RELOCATE, &val)?);
        }

        if let Ok(val) = env::var(ENV_OUTPUT_FORMAT) {
            config.output_format = Some(OutputFormat::parse(ENV_OUTPUT_FORMAT, &val)?);
        }

        if let Ok(shell) = env::var(ENV_SHELL) {
            config.shell = Some(shell);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
