//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Fixtures that create catalog records and return their ids

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ENCANTO_VARS: [&str; 8] = [
    "ENCANTO_DATA_DIR",
    "ENCANTO_DB_BACKEND",
    "ENCANTO_DB_PATH",
    "ENCANTO_BUSY_TIMEOUT_MS",
    "ENCANTO_PATH_SEPARATOR",
    "ENCANTO_OUTPUT_FORMAT",
    "ENCANTO_LOG_MODE",
    "ENCANTO_DISABLE_AUTOINIT",
];

/// Test environment with isolated data and working directories.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the encanto data directory (not created until first use)
    pub data_dir: PathBuf,
    /// Working directory for every command
    pub work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("encanto-data");
        let work_dir = temp_path.join("work");
        std::fs::create_dir_all(&work_dir).expect("Failed to create work dir");

        Self {
            temp_dir,
            temp_path,
            data_dir,
            work_dir,
        }
    }

    /// A command with no `--data-dir`, run from the work directory with
    /// every `ENCANTO_*` variable cleared.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("encanto").expect("Failed to find encanto binary");
        for var in ENCANTO_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// A command with this environment's data directory.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Path of the catalog database.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("encanto.db")
    }

    /// Write a project `encanto.yaml` into the work directory.
    pub fn write_project_config(&self, content: &str) -> &Path {
        std::fs::write(self.work_dir.join("encanto.yaml"), content)
            .expect("Failed to write project config");
        &self.work_dir
    }

    /// Run a command that must succeed and return its stdout.
    pub fn run(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run encanto");

        assert!(
            output.status.success(),
            "encanto {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Add a category and return its id.
    pub fn add_category(&self, path: &str) -> i64 {
        parse_id(&self.run(&["category", "add", path]))
    }

    /// Add a brand and return its id.
    pub fn add_brand(&self, name: &str) -> i64 {
        parse_id(&self.run(&["brand", "add", "--name", name, "--description", "test brand"]))
    }

    /// Add a product and return its id.
    pub fn add_product(&self, name: &str, price: &str, category: i64, brand: i64) -> i64 {
        parse_id(&self.run(&[
            "product",
            "add",
            "--name",
            name,
            "--price",
            price,
            "--quantity",
            "1",
            "--category",
            &category.to_string(),
            "--brand",
            &brand.to_string(),
        ]))
    }

    /// Run a list command with `--format json` and parse the result.
    pub fn list_json(&self, args: &[&str]) -> serde_json::Value {
        let mut full = args.to_vec();
        full.extend(["--format", "json"]);
        serde_json::from_str(&self.run(&full)).expect("List output is not JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the id printed by an `add` command.
#[allow(dead_code)]
pub fn parse_id(output: &str) -> i64 {
    output.trim().parse().expect("Output is not a record id")
}
