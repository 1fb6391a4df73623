//! Test utilities for tabhook integration tests.
//!
//! This module provides the `TestEnv` struct which runs the compiled binary
//! against a temporary home and working directory, so tests never see the
//! real user config.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test environment with temporary home and working directories.
pub struct TestEnv {
    /// Temporary directory used as $HOME for spawned commands
    pub home: TempDir,
    /// Temporary working directory for spawned commands
    pub cwd: TempDir,
}

impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("Failed to create home temp dir"),
            cwd: TempDir::new().expect("Failed to create cwd temp dir"),
        }
    }

    /// Get the path to the tabhook binary.
    pub fn bin() -> String {
        env!("CARGO_BIN_EXE_tabhook").to_string()
    }

    /// Run tabhook with the given arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(Self::bin())
            .args(args)
            .current_dir(&self.cwd)
            .env("HOME", self.home.path())
            .output()
            .expect("Failed to run tabhook command")
    }

    /// Path to a file under the temporary home directory.
    pub fn home_path(&self, suffix: &str) -> PathBuf {
        self.home.path().join(suffix)
    }

    /// Write the user config (~/.config/tabhook.toml) in the temp home.
    pub fn write_user_config(&self, contents: &str) {
        let dir = self.home.path().join(".config");
        fs::create_dir_all(&dir).expect("Failed to create .config dir");
        fs::write(dir.join("tabhook.toml"), contents).expect("Failed to write user config");
    }

    /// Write a local config (.tabhook.toml) in the temp working directory.
    pub fn write_local_config(&self, contents: &str) {
        fs::write(self.cwd.path().join(".tabhook.toml"), contents)
            .expect("Failed to write local config");
    }

    /// Write an arbitrary config file in the temp working directory,
    /// returning its path.
    pub fn write_config_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.cwd.path().join(name);
        fs::write(&path, contents).expect("Failed to write config file");
        path
    }

    /// Check if the output indicates success.
    pub fn assert_success(output: &Output) {
        assert!(
            output.status.success(),
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Check if the output indicates failure.
    pub fn assert_failure(output: &Output) {
        assert!(
            !output.status.success(),
            "Command should have failed but succeeded"
        );
    }

    /// Get stdout as a string.
    pub fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Get stderr as a string.
    pub fn stderr(output: &Output) -> String {
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
