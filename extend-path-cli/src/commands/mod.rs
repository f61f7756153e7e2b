//! Command implementations.

pub mod completions;
pub mod extend;

pub use completions::{print_completions, print_install_hint};
pub use extend::ExtendCommand;
