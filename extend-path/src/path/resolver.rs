//! Candidate directory resolution.
//!
//! This module provides the `DirectoryResolver` type, which turns the raw
//! directory arguments of an invocation into normalized [`Directory`]
//! entries that are safe to put in a list.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::directory::Directory;
use crate::error::{Error, Result};
use crate::path::list::LIST_SEPARATOR;
use crate::path::normalize;

/// Resolves candidate directories.
///
/// Every candidate is normalized to an absolute path. With validation
/// enabled, candidates must also exist and be directories.
///
/// # Examples
///
/// ```no_run
/// use extend_path::path::DirectoryResolver;
/// use std::path::Path;
///
/// let resolver = DirectoryResolver::new().with_validation(true);
/// let bin = resolver.resolve(Path::new("~/bin")).unwrap();
/// assert!(bin.as_str().ends_with("bin"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirectoryResolver {
    /// Whether candidates must exist and be directories.
    validate: bool,
}

impl DirectoryResolver {
    /// Create a resolver that does not touch the filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure whether candidates must be existing directories.
    #[must_use]
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Resolve a single candidate.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Normalization fails
    /// - The resolved path is not valid UTF-8 or contains the list separator
    /// - Validation is enabled and the path is missing or not a directory
    pub fn resolve(&self, path: &Path) -> Result<Directory> {
        let normalized = normalize::normalize(path)?;

        let entry = normalized.to_str().ok_or_else(|| Error::InvalidPath {
            path: normalized.clone(),
            reason: "Path contains invalid UTF-8".to_string(),
        })?;

        if entry.contains(LIST_SEPARATOR) {
            return Err(Error::InvalidPath {
                path: normalized.clone(),
                reason: format!("Path contains the list separator '{LIST_SEPARATOR}'"),
            });
        }

        if self.validate {
            Self::check_directory(&normalized)?;
        }

        Ok(Directory::from(entry))
    }

    /// Resolve every candidate, dropping the ones that fail.
    ///
    /// Order is preserved. Rejected candidates are reported through the
    /// `log` facade at debug level.
    #[must_use]
    pub fn resolve_all(&self, paths: &[PathBuf]) -> Vec<Directory> {
        paths
            .iter()
            .filter_map(|path| match self.resolve(path) {
                Ok(directory) => Some(directory),
                Err(e) => {
                    log::debug!("Skipping {}: {e}", path.display());
                    None
                }
            })
            .collect()
    }

    fn check_directory(path: &Path) -> Result<()> {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => Ok(()),
            Ok(_) => Err(Error::NotADirectory {
                path: path.to_path_buf(),
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::PathNotFound {
                path: path.to_path_buf(),
            }),
            Err(e) => Err(Error::Io(e)),
        }
    }
}
