//! Runs the `huelens` binary against a scratch directory.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// The binary plus a private working directory for inputs and outputs
pub struct TestCli {
    dir: TempDir,
    config: Option<PathBuf>,
}

/// Captured result of one invocation
pub struct TestOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl TestOutput {
    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {}", self.stdout))
    }
}

impl TestCli {
    /// Create a CLI runner with built-in defaults (no config file)
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
            config: None,
        }
    }

    /// Create a CLI runner that passes `--config` with the given YAML
    pub fn with_config(yaml: &str) -> Self {
        let mut cli = Self::new();
        let path = cli.path("huelens.yaml");
        std::fs::write(&path, yaml).expect("Failed to write config");
        cli.config = Some(path);
        cli
    }

    /// Path of a file inside the scratch directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Run `huelens` with the given arguments
    pub fn run(&self, args: &[&str]) -> TestOutput {
        let mut command = Command::new(env!("CARGO_BIN_EXE_huelens"));
        command
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("HUELENS_CONFIG")
            .env("RUST_LOG", "huelens=warn");
        if let Some(config) = &self.config {
            command.arg("--config").arg(config);
        }

        let output = command.output().expect("Failed to run huelens");
        TestOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Run with an environment variable set
    pub fn run_with_env(&self, args: &[&str], key: &str, value: &Path) -> TestOutput {
        let output = Command::new(env!("CARGO_BIN_EXE_huelens"))
            .args(args)
            .current_dir(self.dir.path())
            .env(key, value)
            .env("RUST_LOG", "huelens=warn")
            .output()
            .expect("Failed to run huelens");
        TestOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
