//! Isolated test environment for running the `libris` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const LIBRIS_ENV_VARS: [&str; 4] = [
    "LIBRIS_DATA_FILE",
    "LIBRIS_LOAN_DAYS",
    "LIBRIS_VERBOSITY",
    "LIBRIS_ATOMIC_WRITES",
];

/// Result of running the binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn combined_output(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }

    /// Parse stdout as JSON, panicking with the output on failure
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

/// A project directory and a fake home, both deleted on drop
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Run `libris` from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], envs: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_libris"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("RUST_LOG");
        for var in LIBRIS_ENV_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in envs {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to run libris");
        output_to_result(output)
    }

    pub fn project_path(&self, rel: &str) -> PathBuf {
        self.project_root.path().join(rel)
    }

    pub fn write_project_file(&self, rel: &str, content: &str) {
        write_file(&self.project_path(rel), content);
    }

    pub fn write_user_config(&self, content: &str) {
        write_file(
            &self
                .home_dir
                .path()
                .join(".config")
                .join("libris")
                .join("config.toml"),
            content,
        );
    }

    pub fn read_project_file(&self, rel: &str) -> String {
        let path = self.project_path(rel);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
    }

    /// Parse a data file under the project root
    pub fn read_data_file(&self, rel: &str) -> serde_json::Value {
        serde_json::from_str(&self.read_project_file(rel))
            .unwrap_or_else(|e| panic!("{} is not JSON: {}", rel, e))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
pub struct TestEnvBuilder {
    data_file: Option<String>,
    project_config: Option<String>,
    user_config: Option<String>,
}

impl TestEnvBuilder {
    /// Seed `library.json` in the project root
    pub fn with_data(mut self, json: &str) -> Self {
        self.data_file = Some(json.to_string());
        self
    }

    /// Seed `libris.toml` in the project root
    pub fn with_project_config(mut self, toml: &str) -> Self {
        self.project_config = Some(toml.to_string());
        self
    }

    pub fn with_user_config(mut self, toml: &str) -> Self {
        self.user_config = Some(toml.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("failed to create project dir"),
            home_dir: TempDir::new().expect("failed to create home dir"),
        };
        if let Some(json) = &self.data_file {
            env.write_project_file("library.json", json);
        }
        if let Some(toml) = &self.project_config {
            env.write_project_file("libris.toml", toml);
        }
        if let Some(toml) = &self.user_config {
            env.write_user_config(toml);
        }
        env
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create parent dir");
    }
    std::fs::write(path, content)
        .unwrap_or_else(|e| panic!("failed to write {}: {}", path.display(), e));
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
