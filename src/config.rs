// Configuration for opening the task list core

use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Overrides `data_dir` when set
pub const DATA_DIR_ENV: &str = "TODOCORE_DATA_DIR";

const DATABASE_FILE: &str = "tasks.db";
const PREFERENCES_FILE: &str = "user_preferences.json";

/// Runtime configuration, loadable from YAML
///
/// Every field is optional in the file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the task database and the preference file
    pub data_dir: PathBuf,
    /// Insert the example tasks when the database is first created
    pub seed_example_tasks: bool,
    /// Capacity of each one-shot event channel
    pub event_capacity: usize,
    /// How long shutdown waits for application-scope jobs
    pub shutdown_grace_ms: u64,
    /// Default tracing filter, overridden by RUST_LOG
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            seed_example_tasks: true,
            event_capacity: 16,
            shutdown_grace_ms: 2000,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Defaults rooted at the given directory
    pub fn in_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.event_capacity == 0 {
            return Err(eyre!("event_capacity must be greater than zero"));
        }
        if self.data_dir.as_os_str().is_empty() {
            return Err(eyre!("data_dir cannot be empty"));
        }
        Ok(())
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(PREFERENCES_FILE)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_millis(self.shutdown_grace_ms)
    }
}

fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("todocore")
}
