//! Read-only reports over the aggregate

use chrono::NaiveDateTime;
use serde::Serialize;

use super::{local_now, Library};
use crate::domain::value_objects::timestamp::format_report_date;

/// One active loan, as listed in the issued books report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedBookEntry {
    pub reader: String,
    pub book_title: String,
    /// Day-month-year
    pub borrow_date: String,
}

/// One overdue loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverdueEntry {
    pub reader: String,
    pub book_title: String,
    pub days_overdue: i64,
}

impl Library {
    /// Available copies across books of exactly this genre
    pub fn genre_report(&self, genre: &str) -> i64 {
        self.books
            .iter()
            .filter(|book| book.genre == genre)
            .map(|book| book.copies)
            .sum()
    }

    /// Available copies across the whole catalogue
    pub fn total_books_report(&self) -> i64 {
        self.books.iter().map(|book| book.copies).sum()
    }

    /// Titles on loan to this reader; empty when the card is unknown
    pub fn reader_report(&self, card_number: &str) -> Vec<String> {
        self.find_reader(card_number)
            .map(|reader| reader.borrowed_titles())
            .unwrap_or_default()
    }

    /// Every active loan, reader by reader in insertion order
    pub fn issued_books_report(&self) -> Vec<IssuedBookEntry> {
        self.readers
            .iter()
            .flat_map(|reader| {
                let name = reader.full_name();
                reader.loans.iter().map(move |loan| IssuedBookEntry {
                    reader: name.clone(),
                    book_title: loan.title.clone(),
                    borrow_date: format_report_date(loan.borrowed_at),
                })
            })
            .collect()
    }

    pub fn overdue_report(&self) -> Vec<OverdueEntry> {
        self.overdue_report_at(local_now())
    }

    pub fn overdue_report_at(&self, now: NaiveDateTime) -> Vec<OverdueEntry> {
        let policy = self.policy;
        self.readers
            .iter()
            .flat_map(|reader| {
                let name = reader.full_name();
                reader
                    .loans
                    .iter()
                    .filter(move |loan| policy.is_overdue(loan.borrowed_at, now))
                    .map(move |loan| OverdueEntry {
                        reader: name.clone(),
                        book_title: loan.title.clone(),
                        days_overdue: policy.days_overdue(loan.borrowed_at, now),
                    })
            })
            .collect()
    }
}
