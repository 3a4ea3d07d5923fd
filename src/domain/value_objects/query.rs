//! Search predicates over the fixed set of searchable fields
//!
//! A record matches when every field set on the query equals the record's
//! field exactly. An empty query matches every record.

use crate::domain::entities::{Book, Reader};

use super::update::{BookUpdate, ReaderUpdate};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub copies: Option<i64>,
}

impl BookQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn copies(mut self, copies: i64) -> Self {
        self.copies = Some(copies);
        self
    }

    pub fn matches(&self, book: &Book) -> bool {
        self.title.as_ref().map_or(true, |v| *v == book.title)
            && self.author.as_ref().map_or(true, |v| *v == book.author)
            && self.year.map_or(true, |v| v == book.year)
            && self.genre.as_ref().map_or(true, |v| *v == book.genre)
            && self.copies.map_or(true, |v| v == book.copies)
    }
}

/// `field=value` criteria share their parsing with updates
impl From<BookUpdate> for BookQuery {
    fn from(update: BookUpdate) -> Self {
        Self {
            title: update.title,
            author: update.author,
            year: update.year,
            genre: update.genre,
            copies: update.copies,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReaderQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub card_number: Option<String>,
}

impl ReaderQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn card_number(mut self, card_number: impl Into<String>) -> Self {
        self.card_number = Some(card_number.into());
        self
    }

    pub fn matches(&self, reader: &Reader) -> bool {
        self.first_name.as_ref().map_or(true, |v| *v == reader.first_name)
            && self.last_name.as_ref().map_or(true, |v| *v == reader.last_name)
            && self.card_number.as_ref().map_or(true, |v| *v == reader.card_number)
    }
}

impl From<ReaderUpdate> for ReaderQuery {
    fn from(update: ReaderUpdate) -> Self {
        Self {
            first_name: update.first_name,
            last_name: update.last_name,
            card_number: update.card_number,
        }
    }
}
