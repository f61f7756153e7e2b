//! Common test utilities for CLI integration tests.
//!
//! Every command runs against a scratch variable (`TEST_DIRS`) with `HOME`
//! pointed at a temporary directory, so neither the real `PATH` nor the
//! user's configuration file leaks into the tests.

use assert_cmd::Command;
use extend_path::LIST_SEPARATOR;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variable edited by [`TestEnv::command`].
pub const VARIABLE: &str = "TEST_DIRS";

const CONFIG_VARS: [&str; 7] = [
    "EXTEND_PATH_CONFIG",
    "EXTEND_PATH_VARIABLE",
    "EXTEND_PATH_VALIDATE",
    "EXTEND_PATH_RELOCATE",
    "EXTEND_PATH_OUTPUT_FORMAT",
    "EXTEND_PATH_SHELL",
    "EXTEND_PATH_LOG_MODE",
];

/// Join entries the way the variable stores them.
pub fn list(entries: &[&str]) -> String {
    entries.join(LIST_SEPARATOR.to_string().as_str())
}

/// Isolated test environment.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Command with a clean configuration environment and no variable
    /// selected.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("extend-path").expect("Failed to find extend-path binary");
        for var in CONFIG_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.temp_path)
            .env("USERPROFILE", &self.temp_path)
            .current_dir(&self.temp_path);
        cmd
    }

    /// Command editing [`VARIABLE`], which holds `value`.
    pub fn command(&self, value: &str) -> Command {
        let mut cmd = self.command_bare();
        cmd.env(VARIABLE, value).arg("-e").arg(VARIABLE);
        cmd
    }

    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write `contents` to `name` under the temporary directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the default user configuration file.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        self.write_file(".extend-path/config.yaml", contents)
    }
}

/// Stdout of a successful run, without the trailing newline.
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run extend-path");
    assert!(
        output.status.success(),
        "extend-path failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
    stdout.trim_end_matches('\n').to_string()
}
