//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::domain::value_objects::{LoanPolicy, DEFAULT_LOAN_PERIOD_DAYS};
use crate::error::LibrisResult;

use super::loader::{self, ConfigWarning};

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data file used when no `--data` flag is given
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default = "default_true")]
    pub atomic_writes: bool,

    /// Indent saved JSON
    #[serde(default)]
    pub pretty: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            atomic_writes: true,
            pretty: false,
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("library.json")
}

fn default_true() -> bool {
    true
}

/// Loan configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoansConfig {
    #[serde(default = "default_period_days")]
    pub period_days: i64,
}

impl Default for LoansConfig {
    fn default() -> Self {
        Self {
            period_days: DEFAULT_LOAN_PERIOD_DAYS,
        }
    }
}

fn default_period_days() -> i64 {
    DEFAULT_LOAN_PERIOD_DAYS
}

/// Output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub format: FormatMode,
}

/// Default output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormatMode {
    #[default]
    Text,
    Json,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse a verbosity name, falling back to `Normal`
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }

    /// Raise the level by the number of `-v` flags given
    pub fn raised_by(self, count: u8) -> Self {
        match (self, count) {
            (level, 0) => level,
            (Verbosity::Quiet | Verbosity::Normal, 1) => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }

    /// Most detailed log level shown at this verbosity
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::ERROR,
            Verbosity::Normal => LevelFilter::WARN,
            Verbosity::Verbose => LevelFilter::INFO,
            Verbosity::Debug => LevelFilter::DEBUG,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub loans: LoansConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LibrisResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LibrisResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from `libris.toml` in `cwd`, the user config, or defaults
    pub fn load_or_default(cwd: Option<&Path>) -> LibrisResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(cwd)
    }

    /// Apply environment variable overrides (LIBRIS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Loan policy described by `[loans]`
    pub fn loan_policy(&self) -> LoanPolicy {
        LoanPolicy::new(self.loans.period_days)
    }
}
