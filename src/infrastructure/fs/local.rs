//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go through a temp file in the target directory followed by a
/// rename, unless atomic writes are switched off, in which case the target is
/// truncated and rewritten in place.
#[derive(Debug, Clone, Copy)]
pub struct LocalFs {
    atomic_writes: bool,
}

impl LocalFs {
    /// Create a new LocalFs instance with atomic writes
    pub fn new() -> Self {
        Self {
            atomic_writes: true,
        }
    }

    pub fn with_atomic_writes(atomic_writes: bool) -> Self {
        Self { atomic_writes }
    }

    fn write_atomic(path: &Path, content: &str) -> FsResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| FsError::at(dir, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| FsError::at(path, e))?;
        tmp.as_file().sync_all().map_err(|e| FsError::at(path, e))?;
        tmp.persist(path).map_err(|e| FsError::at(path, e.error))?;
        Ok(())
    }
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::at(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        // Ensure parent directories exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;
            }
        }

        if self.atomic_writes {
            Self::write_atomic(path, content)
        } else {
            std::fs::write(path, content).map_err(|e| FsError::at(path, e))
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
