//! Configuration system for extend-path.
//!
//! This module provides layered configuration with support for:
//! - A YAML user configuration file
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`), which is
//!    where command-line flags land
//! 2. Environment variables (`EXTEND_PATH_*`)
//! 3. User config (`~/.extend-path/config.yaml`, or an explicit file)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use extend_path::config::{Config, ConfigBuilder};
//!
//! let custom = Config {
//!     variable: Some("MANPATH".to_string()),
//!     relocate: Some(true),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.variable_name(), "MANPATH");
//! assert!(config.relocate_enabled());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, DEFAULT_VARIABLE};
pub use validator::ConfigValidator;
