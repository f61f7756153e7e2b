//! The `Directory` entry type.
//!
//! A [`Directory`] is an opaque path string as it appears in a PATH-like
//! list. Two directories are *equivalent* when they are equal after all
//! trailing `/` and `\` characters have been stripped; nothing else is
//! normalized.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Characters stripped from the end of a directory before comparison.
const TRAILING_SEPARATORS: &[char] = &['/', '\\'];

/// A single entry of a directory list.
///
/// `PartialEq` compares the raw strings. Use [`Directory::is_equivalent`]
/// for the trailing-separator-insensitive comparison that the list
/// operations rely on.
///
/// # Examples
///
/// ```
/// use extend_path::Directory;
///
/// let a = Directory::from("/opt/bin/");
/// let b = Directory::from("/opt/bin");
/// assert_ne!(a, b);
/// assert!(a.is_equivalent(&b));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directory(String);

impl Directory {
    /// Creates a directory entry from any string-like value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw entry.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the entry with every trailing `/` and `\` removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use extend_path::Directory;
    ///
    /// assert_eq!(Directory::from("/opt/bin//").trimmed(), "/opt/bin");
    /// assert_eq!(Directory::from("C:\\tools\\").trimmed(), "C:\\tools");
    /// assert_eq!(Directory::from("/").trimmed(), "");
    /// ```
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.0.trim_end_matches(TRAILING_SEPARATORS)
    }

    /// Checks whether two entries name the same directory.
    #[must_use]
    pub fn is_equivalent(&self, other: &Directory) -> bool {
        self.trimmed() == other.trimmed()
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Directory {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Directory {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Directory {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Directory> for String {
    fn from(value: Directory) -> Self {
        value.0
    }
}
