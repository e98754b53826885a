//! Test environment builder for isolated embedfs testing.
//!
//! Provides `TestEnv` - a temp project directory with source files, plus
//! helpers to run the embedfs CLI inside it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Environment variables the CLI reads; cleared for every run.
const EMBEDFS_VARS: &[&str] = &["EMBEDFS_PREFIX", "EMBEDFS_MODTIME", "EMBEDFS_NO_COMPRESSION"];

/// Result of running an embedfs CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with a temp project directory.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Path to the embedfs binary
    embedfs_bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run embedfs in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run embedfs from project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.embedfs_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env_remove("RUST_LOG");
        for var in EMBEDFS_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute embedfs");
        output_to_result(output)
    }

    /// Read a file from the project directory
    pub fn read_file(&self, relative_path: &str) -> String {
        let full_path = self.project_path(relative_path);
        std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    /// Write a file to the project directory
    pub fn write_file(&self, relative_path: &str, content: &str) {
        write_file(self.project_root.path(), relative_path, content);
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(root: &Path, relative_path: &str, content: &str) {
    let full_path = root.join(relative_path);
    if let Some(parent) = full_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(&full_path, content).expect("Failed to write file");
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    files: Vec<(String, String)>,
    directories: Vec<String>,
    config: Option<String>,
}

impl TestEnvBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source file, relative to the project root
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.push((path.to_string(), content.to_string()));
        self
    }

    /// Add an empty directory
    pub fn with_dir(mut self, path: &str) -> Self {
        self.directories.push(path.to_string());
        self
    }

    /// Write `embedfs.toml` in the project root
    pub fn with_config(mut self, toml: &str) -> Self {
        self.config = Some(toml.to_string());
        self
    }

    /// Build the environment
    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project dir");

        for (path, content) in &self.files {
            write_file(project_root.path(), path, content);
        }
        for dir in &self.directories {
            std::fs::create_dir_all(project_root.path().join(dir))
                .expect("Failed to create directory");
        }
        if let Some(config) = &self.config {
            write_file(project_root.path(), "embedfs.toml", config);
        }

        TestEnv {
            project_root,
            embedfs_bin: PathBuf::from(env!("CARGO_BIN_EXE_embedfs")),
        }
    }
}
