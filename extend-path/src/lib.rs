#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # extend-path
//!
//! A library for editing PATH-like directory lists.
//!
//! The heart of the crate is the [`engine`]: pure, order-preserving set
//! operations over lists of [`Directory`] entries in which `/opt/bin` and
//! `/opt/bin/` count as the same directory. Around it sit the pieces a
//! command-line front end needs: reading and splitting the variable
//! ([`path::list`]), resolving candidate directories ([`path::resolver`]),
//! configuration ([`config`]) and output formatting ([`output`]).
//!
//! ## Core Types
//!
//! - [`Directory`]: one list entry
//! - [`Mode`], [`Outcome`] and [`execute`]: single-call dispatch
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use extend_path::{execute, Directory, Mode, Outcome};
//! use extend_path::path::{join_list, split_list, LIST_SEPARATOR};
//!
//! let current = split_list(&format!("/home/bin{LIST_SEPARATOR}/bin{LIST_SEPARATOR}/sbin"));
//! let entries = vec![Directory::from("/opt/bin"), Directory::from("/bin")];
//!
//! let Outcome::List(updated) = execute(Mode::Prepend { relocate: true }, &entries, &current) else {
//!     unreachable!()
//! };
//! assert_eq!(
//!     join_list(&updated),
//!     format!("/opt/bin{LIST_SEPARATOR}/bin{LIST_SEPARATOR}/home/bin{LIST_SEPARATOR}/sbin")
//! );
//! ```

pub mod config;
pub mod directory;
pub mod engine;
pub mod error;
pub mod logging;
pub mod operation;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use directory::Directory;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operation::{execute, Mode, Outcome};
pub use output::{OutputFormat, ShellType};
pub use path::{DirectoryResolver, LIST_SEPARATOR};
