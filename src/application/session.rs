//! Library Session
//!
//! Owns the one in-memory `Library` a command operates on, together with the
//! repository that loads and saves it and the data file it belongs to.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::Library;
use crate::domain::ports::{LibraryRepository, RepositoryResult};
use crate::domain::value_objects::LoanPolicy;

pub struct LibrarySession {
    library: Library,
    repository: Arc<dyn LibraryRepository>,
    data_file: PathBuf,
}

impl LibrarySession {
    /// Start with an empty library bound to `data_file`
    pub fn new(
        repository: Arc<dyn LibraryRepository>,
        data_file: impl Into<PathBuf>,
        policy: LoanPolicy,
    ) -> Self {
        Self {
            library: Library::with_policy(policy),
            repository,
            data_file: data_file.into(),
        }
    }

    /// Bind to `data_file`, loading it when it already exists
    pub fn open(
        repository: Arc<dyn LibraryRepository>,
        data_file: impl Into<PathBuf>,
        policy: LoanPolicy,
    ) -> RepositoryResult<Self> {
        let mut session = Self::new(repository, data_file, policy);
        if session.repository.exists(&session.data_file) {
            let path = session.data_file.clone();
            session.load(&path)?;
        } else {
            debug!(path = %session.data_file.display(), "no data file yet, starting empty");
        }
        Ok(session)
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut Library {
        &mut self.library
    }

    /// Replace the in-memory library with the contents of `path`
    pub fn load(&mut self, path: &Path) -> RepositoryResult<()> {
        self.repository.load_into(&mut self.library, path)?;
        info!(
            path = %path.display(),
            books = self.library.books().len(),
            readers = self.library.readers().len(),
            "library loaded"
        );
        Ok(())
    }

    /// Write the in-memory library to `path`
    pub fn save(&self, path: &Path) -> RepositoryResult<()> {
        self.repository.save(&self.library, path)?;
        info!(
            path = %path.display(),
            books = self.library.books().len(),
            readers = self.library.readers().len(),
            "library saved"
        );
        Ok(())
    }

    /// Write the in-memory library back to its data file
    pub fn commit(&self) -> RepositoryResult<()> {
        self.save(&self.data_file)
    }
}
