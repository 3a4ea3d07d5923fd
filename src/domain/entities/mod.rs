//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Book` - a catalogued title and its available copies
//! - `Reader` - a patron and the loans they currently hold
//! - `Library` - the aggregate that owns both and runs the loan lifecycle

mod book;
mod library;
mod reader;

pub use book::Book;
pub use library::{local_now, IssuedBookEntry, Library, LoanError, OverdueEntry, ReturnOutcome};
pub use reader::{Loan, Reader};
