//! Library aggregate
//!
//! Owns every book and reader and is the only place their state changes.
//! Books carry no back-reference to the loans against them, so each loan
//! operation keeps `Book::copies` and `Reader::loans` in step by hand.
//!
//! This is a pure data structure - persistence lives behind
//! `LibraryRepository`.

mod reports;

use chrono::{Local, NaiveDateTime};
use thiserror::Error;

use super::{Book, Loan, Reader};
use crate::domain::value_objects::timestamp::truncate_to_micros;
use crate::domain::value_objects::{BookQuery, BookUpdate, LoanPolicy, ReaderQuery, ReaderUpdate};

pub use reports::{IssuedBookEntry, OverdueEntry};

/// Why an issue request was refused. The aggregate is unchanged in every case.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoanError {
    #[error("no reader with card number '{card_number}'")]
    ReaderNotFound { card_number: String },

    #[error("no book titled '{title}'")]
    BookNotFound { title: String },

    #[error("no copies of '{title}' are available")]
    NoCopiesAvailable { title: String },

    #[error("reader '{card_number}' has overdue books: {}; they must be returned first", titles.join(", "))]
    HasOverdueBooks {
        card_number: String,
        titles: Vec<String>,
    },
}

/// What `return_book` did. None of these is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// The loan was removed; `restocked` is false when the book record no longer exists
    Returned { restocked: bool },
    /// No reader holds that card number
    UnknownReader,
    /// The reader has no active loan of that title
    NotBorrowed,
}

/// Current local wall-clock time at the precision the data file keeps
pub fn local_now() -> NaiveDateTime {
    truncate_to_micros(Local::now().naive_local())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    books: Vec<Book>,
    readers: Vec<Reader>,
    policy: LoanPolicy,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: LoanPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn from_parts(books: Vec<Book>, readers: Vec<Reader>) -> Self {
        Self {
            books,
            readers,
            policy: LoanPolicy::default(),
        }
    }

    pub fn policy(&self) -> LoanPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: LoanPolicy) {
        self.policy = policy;
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn readers(&self) -> &[Reader] {
        &self.readers
    }

    /// Swap in a whole new catalogue and reader list, keeping the loan policy
    pub fn replace_contents(&mut self, books: Vec<Book>, readers: Vec<Reader>) {
        self.books = books;
        self.readers = readers;
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty() && self.readers.is_empty()
    }

    // === Books ===

    /// Append a book. Duplicate titles are kept as separate records.
    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Remove every book with this title; returns how many went
    pub fn remove_book(&mut self, title: &str) -> usize {
        let before = self.books.len();
        self.books.retain(|book| book.title != title);
        before - self.books.len()
    }

    /// Apply `update` to every book with this title; returns how many matched
    pub fn update_book(&mut self, title: &str, update: &BookUpdate) -> usize {
        let mut touched = 0;
        for book in self.books.iter_mut().filter(|book| book.title == title) {
            update.apply(book);
            touched += 1;
        }
        touched
    }

    /// First book with this title
    pub fn find_book(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.title == title)
    }

    pub fn search_books(&self, query: &BookQuery) -> Vec<&Book> {
        self.books.iter().filter(|book| query.matches(book)).collect()
    }

    // === Readers ===

    pub fn add_reader(&mut self, reader: Reader) {
        self.readers.push(reader);
    }

    /// Remove every reader with this card number; returns how many went.
    /// Their active loans go with them and no copies are restored.
    pub fn remove_reader(&mut self, card_number: &str) -> usize {
        let before = self.readers.len();
        self.readers.retain(|reader| reader.card_number != card_number);
        before - self.readers.len()
    }

    pub fn update_reader(&mut self, card_number: &str, update: &ReaderUpdate) -> usize {
        let mut touched = 0;
        for reader in self
            .readers
            .iter_mut()
            .filter(|reader| reader.card_number == card_number)
        {
            update.apply(reader);
            touched += 1;
        }
        touched
    }

    /// First reader with this card number
    pub fn find_reader(&self, card_number: &str) -> Option<&Reader> {
        self.readers
            .iter()
            .find(|reader| reader.card_number == card_number)
    }

    pub fn search_readers(&self, query: &ReaderQuery) -> Vec<&Reader> {
        self.readers
            .iter()
            .filter(|reader| query.matches(reader))
            .collect()
    }

    // === Loans ===

    pub fn issue_book(&mut self, card_number: &str, book_title: &str) -> Result<(), LoanError> {
        self.issue_book_at(card_number, book_title, local_now())
    }

    /// Lend one copy of `book_title` to the reader holding `card_number`.
    ///
    /// Checks run in order: reader exists, book exists, a copy is on the
    /// shelf, the reader has nothing overdue. Only when all pass is the loan
    /// recorded and the copy count decremented.
    pub fn issue_book_at(
        &mut self,
        card_number: &str,
        book_title: &str,
        now: NaiveDateTime,
    ) -> Result<(), LoanError> {
        let policy = self.policy;

        let reader = self
            .readers
            .iter_mut()
            .find(|reader| reader.card_number == card_number)
            .ok_or_else(|| LoanError::ReaderNotFound {
                card_number: card_number.to_string(),
            })?;

        let book = self
            .books
            .iter_mut()
            .find(|book| book.title == book_title)
            .ok_or_else(|| LoanError::BookNotFound {
                title: book_title.to_string(),
            })?;

        if !book.is_available() {
            return Err(LoanError::NoCopiesAvailable {
                title: book_title.to_string(),
            });
        }

        let overdue: Vec<String> = reader
            .loans
            .iter()
            .filter(|loan| policy.blocks_issue(loan.borrowed_at, now))
            .map(|loan| loan.title.clone())
            .collect();
        if !overdue.is_empty() {
            return Err(LoanError::HasOverdueBooks {
                card_number: card_number.to_string(),
                titles: overdue,
            });
        }

        reader.loans.push(Loan::new(book_title, now));
        book.copies -= 1;
        Ok(())
    }

    /// Take back one copy of `book_title` from the reader holding `card_number`.
    ///
    /// Unknown readers and titles the reader does not hold are silent no-ops.
    /// If the book record has been removed since it was issued, the loan is
    /// still dropped but no copy count is restored anywhere.
    pub fn return_book(&mut self, card_number: &str, book_title: &str) -> ReturnOutcome {
        let Some(reader) = self
            .readers
            .iter_mut()
            .find(|reader| reader.card_number == card_number)
        else {
            tracing::debug!(card_number, book_title, "return ignored: unknown reader");
            return ReturnOutcome::UnknownReader;
        };

        if reader.take_loan(book_title).is_none() {
            tracing::debug!(card_number, book_title, "return ignored: title not on loan");
            return ReturnOutcome::NotBorrowed;
        }

        let restocked = match self.books.iter_mut().find(|book| book.title == book_title) {
            Some(book) => {
                book.copies += 1;
                true
            }
            None => false,
        };
        ReturnOutcome::Returned { restocked }
    }
}
