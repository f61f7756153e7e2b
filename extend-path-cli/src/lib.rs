//! Library exports for extend-path-cli.
//!
//! The CLI structure is exported so integration tests and documentation
//! tooling can inspect it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
