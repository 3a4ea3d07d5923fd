//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LibrisError, LibrisResult};

use super::types::{Config, Verbosity};

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "libris.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LibrisResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LibrisError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if config.loans.period_days < 0 {
        return Err(LibrisError::Config {
            file: path.to_path_buf(),
            message: format!(
                "loans.period_days must not be negative (got {})",
                config.loans.period_days
            ),
        });
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Candidate config files, most specific first
pub fn config_paths(cwd: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = cwd {
        paths.push(dir.join(PROJECT_CONFIG_FILE));
    }
    if let Some(user_config_dir) = dirs_config_dir() {
        paths.push(user_config_dir.join("libris").join("config.toml"));
    }
    paths
}

/// Load from the first config file that exists, or defaults.
///
/// Environment overrides are applied in every case. A config file that
/// exists but cannot be parsed is an error.
pub fn load_or_default(cwd: Option<&Path>) -> LibrisResult<(Config, Vec<ConfigWarning>)> {
    for path in config_paths(cwd) {
        if path.exists() {
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((config.with_env_overrides(), warnings));
        }
    }

    Ok((Config::default().with_env_overrides(), Vec::new()))
}

/// Apply environment variable overrides (LIBRIS_* prefix)
///
/// `lookup` resolves a variable name to its value.
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // LIBRIS_DATA_FILE
    if let Some(path) = lookup("LIBRIS_DATA_FILE").filter(|p| !p.is_empty()) {
        config.storage.data_file = PathBuf::from(path);
    }

    // LIBRIS_LOAN_DAYS (ignored unless it is a non-negative whole number)
    if let Some(days) = lookup("LIBRIS_LOAN_DAYS")
        .and_then(|d| d.trim().parse::<i64>().ok())
        .filter(|days| *days >= 0)
    {
        config.loans.period_days = days;
    }

    // LIBRIS_VERBOSITY
    if let Some(verbosity) = lookup("LIBRIS_VERBOSITY") {
        config.output.verbosity = Verbosity::from_name(&verbosity);
    }

    // LIBRIS_ATOMIC_WRITES
    if let Some(val) = lookup("LIBRIS_ATOMIC_WRITES") {
        config.storage.atomic_writes = val.to_lowercase() != "false" && val != "0";
    }

    config
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "data_file",
        "atomic_writes",
        "pretty",
        "loans",
        "period_days",
        "output",
        "verbosity",
        "format",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

pub(super) fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
