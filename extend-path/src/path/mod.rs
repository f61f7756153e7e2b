//! Collaborators that sit between the environment and the list engine.
//!
//! # Normalization
//!
//! Candidate directories are converted to absolute paths before they are
//! compared with list entries:
//! - Expanding tilde (~) to the home directory
//! - Converting relative paths to absolute paths
//! - Resolving `.` and `..` components
//!
//! Symlinks are never followed, so a link and its target remain distinct
//! entries.
//!
//! # Resolution
//!
//! [`DirectoryResolver`] applies normalization and, optionally, checks that
//! each candidate is an existing directory.
//!
//! # Serialized lists
//!
//! [`list`] splits a PATH-like value on the platform separator and joins
//! entries back together.
//!
//! # Examples
//!
//! ```
//! use extend_path::path::list::{join_list, split_list};
//!
//! let entries = split_list("");
//! assert!(entries.is_empty());
//! assert_eq!(join_list(&entries), "");
//! ```

pub mod list;
pub mod normalize;
pub mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use list::{join_list, read_variable, split_list, LIST_SEPARATOR};
pub use resolver::DirectoryResolver;
