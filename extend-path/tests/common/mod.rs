//! Common test utilities for integration tests.

use std::env;

use extend_path::config::environment::ALL_ENV_VARS;
use extend_path::Directory;

/// Builds a directory list from string literals.
#[allow(dead_code)]
pub fn dirs(entries: &[&str]) -> Vec<Directory> {
    entries.iter().copied().map(Directory::from).collect()
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using it must be `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Create a guard that removes the variable for its lifetime.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old_value {
            Some(ref value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}

/// Removes every `EXTEND_PATH_*` override for the guards' lifetime.
#[allow(dead_code)]
pub fn clear_extend_path_env_vars() -> Vec<EnvGuard> {
    ALL_ENV_VARS.iter().map(|key| EnvGuard::remove(key)).collect()
}
