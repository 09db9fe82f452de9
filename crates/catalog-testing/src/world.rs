//! TestWorld pattern for declarative integration test setup.
//!
//! Each world owns a temp directory holding the catalog data directory and
//! any files the test wants to upload.

use anyhow::Result;
use assert_cmd::Command;
use catalog_store::{DEFAULT_STORAGE_KEY, KeyValueDb, KvProductStorage, ProductStorage};
use catalog_types::Product;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use catalog_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["add", "--name", "Mug", "--price", "9.5"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".catalog");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Get the data directory path (.catalog).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root. Upload fixtures go here.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("catalog.db")
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Seed the catalog with products before running any command.
    pub fn with_products(self, products: &[Product]) -> Self {
        let mut storage = KvProductStorage::open(&self.database_path(), DEFAULT_STORAGE_KEY)
            .expect("Failed to open storage");
        storage.save(products).expect("Failed to seed products");
        self
    }

    /// Seed the storage key with arbitrary text, valid JSON or not.
    pub fn with_raw_storage(self, raw: &str) -> Self {
        let db = KeyValueDb::open(&self.database_path()).expect("Failed to open database");
        db.set_item(DEFAULT_STORAGE_KEY, raw)
            .expect("Failed to seed storage");
        self
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.data_dir.join("config.toml"), toml).expect("Failed to write config");
        self
    }

    /// Products currently persisted, read back the way the app loads them.
    pub fn stored_products(&self) -> Result<Vec<Product>> {
        let storage = KvProductStorage::open(&self.database_path(), DEFAULT_STORAGE_KEY)?;
        Ok(storage.load())
    }

    /// Raw value under the storage key, if any.
    pub fn stored_raw(&self) -> Result<Option<String>> {
        let db = KeyValueDb::open(&self.database_path())?;
        Ok(db.get_item(DEFAULT_STORAGE_KEY)?)
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("CATALOG_PATH");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the catalog binary with plain output and capture it.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.execute("plain", args, "")
    }

    /// Execute with `--format json`.
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        self.execute("json", args, "")
    }

    /// Execute with `input` piped to stdin, for answering confirmation prompts.
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Result<CliResult> {
        self.execute("plain", args, input)
    }

    #[allow(deprecated)]
    fn execute(&self, format: &str, args: &[&str], input: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("catalog")
            .map_err(|e| anyhow::anyhow!("Failed to find catalog binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.arg("--format").arg(format);
        cmd.args(args);
        cmd.write_stdin(input.to_string());

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
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
