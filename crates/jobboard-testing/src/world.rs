//! TestWorld pattern for declarative integration test setup.
//!
//! Every world gets its own temp dir holding a config file and a posting
//! file, and runs the `jobboard` binary with `--config` pointing there so the
//! user's real config is never read.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::{SAMPLE_POSTINGS, SampleFiles};

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use jobboard_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_postings();
/// let result = world.run(&["list", "--department", "Sales"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    source_path: PathBuf,
    pass_source_flag: bool,
    env_vars: HashMap<String, String>,
    samples: SampleFiles,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment (no posting file yet).
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();

        Self {
            config_path: base_path.join("config.toml"),
            source_path: base_path.join("postings.json"),
            temp_dir,
            pass_source_flag: true,
            env_vars: HashMap::new(),
            samples: SampleFiles::new(),
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The posting file passed as `--source`
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Place the shared sample postings at the source path.
    pub fn with_sample_postings(self) -> Self {
        self.samples
            .copy_to(SAMPLE_POSTINGS, &self.source_path)
            .expect("Failed to copy sample postings");
        self
    }

    /// Write raw JSON as the posting file.
    pub fn with_postings_json(self, json: &str) -> Self {
        std::fs::write(&self.source_path, json).expect("Failed to write postings");
        self
    }

    /// Write the config file.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Rely on `source.path` from the config instead of `--source`.
    pub fn without_source_flag(mut self) -> Self {
        self.pass_source_flag = false;
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);
        if self.pass_source_flag {
            cmd.arg("--source").arg(&self.source_path);
        }

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("JOBBOARD_CONFIG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// A configured `jobboard` command, for `assert()`-style tests.
    #[allow(deprecated)]
    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("jobboard")
            .map_err(|e| anyhow::anyhow!("Failed to find jobboard binary: {}", e))?;
        self.configure_command(&mut cmd);
        Ok(cmd)
    }

    /// Execute the CLI with the given arguments in this environment.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = self.command()?;
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// `run` with `--format json`, parsed.
    pub fn run_json(&self, args: &[&str]) -> Result<serde_json::Value> {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        let result = self.run(&full)?;
        if !result.success() {
            anyhow::bail!(
                "jobboard {:?} failed: {}",
                args,
                result.stderr.trim_end()
            );
        }
        result.json()
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
