//! Configuration module for Libris
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LIBRIS_*)
//! 3. Working directory config (./libris.toml)
//! 4. User config (~/.config/libris/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{config_paths, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, FormatMode, LoansConfig, OutputConfig, StorageConfig, Verbosity};
