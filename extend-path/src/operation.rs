//! Mode selection and dispatch.
//!
//! A single invocation performs exactly one [`Mode`]. Relocation is only
//! carried by the insertion modes, so a relocating delete or verify cannot
//! be expressed.

use crate::directory::Directory;
use crate::engine;

/// What to do with the candidate entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Emit the current list unchanged.
    Print,
    /// Check that every candidate is already in the list.
    Verify,
    /// Add candidates at the end of the list.
    Append {
        /// Move already-present candidates to the end as well.
        relocate: bool,
    },
    /// Add candidates at the front of the list.
    Prepend {
        /// Move already-present candidates to the front as well.
        relocate: bool,
    },
    /// Remove candidates from the list.
    Delete,
}

impl Mode {
    /// Returns the mode with its relocation setting replaced.
    ///
    /// Modes without a relocation setting are returned unchanged.
    #[must_use]
    pub const fn with_relocate(self, relocate: bool) -> Self {
        match self {
            Self::Append { .. } => Self::Append { relocate },
            Self::Prepend { .. } => Self::Prepend { relocate },
            other => other,
        }
    }
}

/// Result of running a [`Mode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The list to emit.
    List(Vec<Directory>),
    /// Verification verdict, naming the candidates that were not found.
    Verified {
        /// Candidates with no equivalent entry in the list.
        missing: Vec<Directory>,
    },
}

impl Outcome {
    /// Whether the invocation succeeded.
    ///
    /// Lists always succeed; verification succeeds when nothing is missing.
    #[must_use]
    pub fn is_success(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::Verified { missing } => missing.is_empty(),
        }
    }
}

/// Runs `mode` over the current `list` with the resolved candidate `entries`.
///
/// With no candidates there is nothing to insert, remove or check, so the
/// current list is returned whatever the mode.
///
/// # Examples
///
/// ```
/// use extend_path::{execute, Directory, Mode, Outcome};
///
/// let list = vec![Directory::from("/bin")];
/// let entries = vec![Directory::from("/opt/bin")];
///
/// let outcome = execute(Mode::Append { relocate: false }, &entries, &list);
/// assert_eq!(outcome, Outcome::List(vec!["/bin".into(), "/opt/bin".into()]));
///
/// let outcome = execute(Mode::Verify, &entries, &list);
/// assert!(!outcome.is_success());
/// ```
#[must_use]
pub fn execute(mode: Mode, entries: &[Directory], list: &[Directory]) -> Outcome {
    if entries.is_empty() {
        return Outcome::List(list.to_vec());
    }

    match mode {
        Mode::Print => Outcome::List(list.to_vec()),
        Mode::Verify => Outcome::Verified {
            missing: engine::missing(entries, list),
        },
        Mode::Append { relocate } => Outcome::List(engine::append(entries, list, relocate)),
        Mode::Prepend { relocate } => Outcome::List(engine::prepend(entries, list, relocate)),
        Mode::Delete => Outcome::List(engine::delete(entries, list)),
    }
}
