//! Error types for Libris
//!
//! Uses `thiserror` for library errors. Each layer owns its own error enum;
//! `LibrisError` wraps them for callers that cross layers, such as the
//! command handlers of the binary.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::LoanError;
use crate::domain::ports::RepositoryError;
use crate::domain::value_objects::UpdateParseError;

/// Result type alias for Libris operations
pub type LibrisResult<T> = Result<T, LibrisError>;

/// Main error type for Libris operations
#[derive(Error, Debug)]
pub enum LibrisError {
    /// Issue refused by the loan rules
    #[error(transparent)]
    Loan(#[from] LoanError),

    /// Data file could not be loaded or saved
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Malformed `field=value` assignment
    #[error(transparent)]
    Update(#[from] UpdateParseError),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
