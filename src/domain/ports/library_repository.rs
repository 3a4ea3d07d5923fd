//! LibraryRepository port - abstraction for library persistence
//!
//! This trait allows the application layer to load/save the whole
//! aggregate without knowing about JSON serialization details.

use std::path::{Path, PathBuf};

use crate::domain::entities::Library;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository operation errors
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No data file at the given path
    #[error("data file not found: {0}")]
    NotFound(PathBuf),

    /// The file exists but is not a valid library document
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Anything else the file system reported
    #[error("failed to access {path}: {message}")]
    Io { path: PathBuf, message: String },
}

/// Abstract repository for library persistence
///
/// Load and save always move the entire aggregate; there is no merge.
pub trait LibraryRepository {
    /// Read the books and readers stored at `path` into `library`, replacing
    /// its contents. On error `library` is left untouched.
    fn load_into(&self, library: &mut Library, path: &Path) -> RepositoryResult<()>;

    /// Write every book and reader in `library` to `path`, overwriting it
    fn save(&self, library: &Library, path: &Path) -> RepositoryResult<()>;

    /// Whether anything is stored at `path`
    fn exists(&self, path: &Path) -> bool;
}
