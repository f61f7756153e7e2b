//! Path normalization functions.
//!
//! Candidate directories given on the command line are normalized before
//! they reach the list operations:
//! - Expanding a leading tilde (~) to the home directory
//! - Converting relative paths to absolute paths
//! - Resolving `.` and `..` components
//! - Dropping repeated and trailing separators

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// Only `~` and `~/path` are expanded. Anything else starting with a tilde,
/// such as `~user` or `~old`, is a literal relative path and is returned
/// unchanged.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The path needs expanding and the home directory cannot be determined
///
/// # Examples
///
/// ```
/// use extend_path::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/bin")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("bin"));
///
/// let expanded = expand_tilde(Path::new("/usr/bin")).unwrap();
/// assert_eq!(expanded, Path::new("/usr/bin"));
///
/// let expanded = expand_tilde(Path::new("~old/bin")).unwrap();
/// assert_eq!(expanded, Path::new("~old/bin"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    let rest = match path_str.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') || rest.starts_with('\\') => &rest[1..],
        _ => return Ok(path.to_path_buf()),
    };

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}

/// Resolve `.` and `..` components in an absolute path.
///
/// A `..` at the root stays at the root, the way `cd /..` does. Iterating
/// components also collapses repeated separators and drops a trailing one.
///
/// # Examples
///
/// ```
/// use extend_path::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(resolve_components(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(resolve_components(Path::new("/a/../..")), PathBuf::from("/"));
/// assert_eq!(resolve_components(Path::new("/opt//bin/")), PathBuf::from("/opt/bin"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::RootDir => result.push(component),
            Component::Normal(c) => result.push(c),
            Component::CurDir => {}
            Component::ParentDir => {
                // Refuse to pop the root (or a Windows prefix) itself.
                if result.parent().is_some() {
                    result.pop();
                }
            }
        }
    }

    result
}

/// Normalize a path to absolute form.
///
/// This is the main normalization function that:
/// 1. Expands tilde (~) if present
/// 2. Converts relative paths to absolute (using current directory)
/// 3. Resolves `.` and `..` components
///
/// # Errors
///
/// Returns an error if tilde expansion fails or the current directory
/// cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use extend_path::path::normalize::normalize;
/// use std::path::Path;
///
/// let normalized = normalize(Path::new("./bin")).unwrap();
/// assert!(normalized.is_absolute());
///
/// let normalized = normalize(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(normalized, Path::new("/a/c"));
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Cannot get current directory: {e}"),
        })?;
        cwd.join(expanded)
    };

    Ok(resolve_components(&absolute))
}
