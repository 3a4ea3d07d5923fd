//! Session Factory
//!
//! Creates sessions with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::LibrarySession;
use crate::config::{Config, StorageConfig};
use crate::domain::ports::{LibraryRepository, RepositoryResult};
use crate::infrastructure::{JsonLibraryRepository, LocalFs};

/// Create the JSON repository described by `[storage]`
pub fn create_repository(storage: &StorageConfig) -> Arc<dyn LibraryRepository> {
    let fs = LocalFs::with_atomic_writes(storage.atomic_writes);
    Arc::new(JsonLibraryRepository::with_fs(fs).pretty(storage.pretty))
}

/// Open a session on `data_file`, loading it if it exists
///
/// `data_file` overrides `storage.data_file` (the `--data` flag).
pub fn open_session(config: &Config, data_file: Option<&Path>) -> RepositoryResult<LibrarySession> {
    let data_file = data_file.unwrap_or(config.storage.data_file.as_path());
    LibrarySession::open(
        create_repository(&config.storage),
        data_file,
        config.loan_policy(),
    )
}
