//! Splitting and joining serialized directory lists.
//!
//! A list is serialized as its entries joined with the platform list
//! separator, the way `PATH` is. Entries are kept as written; in particular
//! empty entries survive a split.

use std::env;

use crate::directory::Directory;
use crate::error::{Error, Result};

/// Separator between entries of a serialized list.
#[cfg(windows)]
pub const LIST_SEPARATOR: char = ';';

/// Separator between entries of a serialized list.
#[cfg(not(windows))]
pub const LIST_SEPARATOR: char = ':';

/// Splits a serialized list into its entries.
///
/// An empty value is an empty list rather than a list holding one empty
/// entry.
///
/// # Examples
///
/// ```
/// use extend_path::path::list::{split_list, LIST_SEPARATOR};
///
/// let value = format!("/usr/bin{LIST_SEPARATOR}/bin");
/// let entries = split_list(&value);
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[1].as_str(), "/bin");
///
/// assert!(split_list("").is_empty());
/// ```
#[must_use]
pub fn split_list(value: &str) -> Vec<Directory> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(LIST_SEPARATOR).map(Directory::from).collect()
}

/// Joins entries into a serialized list.
#[must_use]
pub fn join_list(entries: &[Directory]) -> String {
    let mut buffer = String::new();
    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            buffer.push(LIST_SEPARATOR);
        }
        buffer.push_str(entry.as_str());
    }
    buffer
}

/// Reads and splits the list held by environment variable `name`.
///
/// An unset variable reads as an empty list.
///
/// # Errors
///
/// Returns [`Error::NonUnicodeVariable`] if the value is not valid Unicode.
pub fn read_variable(name: &str) -> Result<Vec<Directory>> {
    match env::var(name) {
        Ok(value) => Ok(split_list(&value)),
        Err(env::VarError::NotPresent) => {
            log::debug!("{name} is not set, starting from an empty list");
            Ok(Vec::new())
        }
        Err(env::VarError::NotUnicode(_)) => Err(Error::NonUnicodeVariable {
            name: name.to_string(),
        }),
    }
}
