//! Libris - library record manager
//!
//! Keeps track of books, readers and the loans between them, enforces the
//! lending period when books are issued, reports on stock and loans, and
//! persists everything to a JSON data file.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::LibrarySession;
pub use config::Config;
pub use domain::entities::{
    Book, IssuedBookEntry, Library, Loan, LoanError, OverdueEntry, Reader, ReturnOutcome,
};
pub use domain::value_objects::{BookQuery, BookUpdate, LoanPolicy, ReaderQuery, ReaderUpdate};
pub use error::{LibrisError, LibrisResult};
pub use infrastructure::JsonLibraryRepository;
