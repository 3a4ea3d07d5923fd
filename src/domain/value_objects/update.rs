//! Typed update requests for books and readers
//!
//! Each request names exactly the fields that may change. Assignments coming
//! from the outside world (`field=value` strings) are parsed against that
//! fixed set, so a misspelled field is an error instead of a silently
//! ignored attribute.

use thiserror::Error;

use crate::domain::entities::{Book, Reader};

/// Errors from parsing `field=value` assignments
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UpdateParseError {
    #[error("expected 'field=value', got '{0}'")]
    MissingSeparator(String),

    #[error("unknown field '{field}' (expected one of: {expected})")]
    UnknownField { field: String, expected: String },

    #[error("invalid value '{value}' for field '{field}': expected an integer")]
    InvalidInteger { field: String, value: String },
}

fn split_assignment(raw: &str) -> Result<(&str, &str), UpdateParseError> {
    raw.split_once('=')
        .map(|(field, value)| (field.trim(), value))
        .ok_or_else(|| UpdateParseError::MissingSeparator(raw.to_string()))
}

fn parse_int<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, UpdateParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| UpdateParseError::InvalidInteger {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Fields of a [`Book`] that may be overwritten
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub copies: Option<i64>,
}

impl BookUpdate {
    pub const FIELDS: &'static [&'static str] = &["title", "author", "year", "genre", "copies"];

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

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Build an update from `field=value` strings; later assignments win
    pub fn from_assignments<S: AsRef<str>>(assignments: &[S]) -> Result<Self, UpdateParseError> {
        let mut update = Self::new();
        for raw in assignments {
            let (field, value) = split_assignment(raw.as_ref())?;
            match field {
                "title" => update.title = Some(value.to_string()),
                "author" => update.author = Some(value.to_string()),
                "year" => update.year = Some(parse_int(field, value)?),
                "genre" => update.genre = Some(value.to_string()),
                "copies" => update.copies = Some(parse_int(field, value)?),
                _ => {
                    return Err(UpdateParseError::UnknownField {
                        field: field.to_string(),
                        expected: Self::FIELDS.join(", "),
                    })
                }
            }
        }
        Ok(update)
    }

    pub fn apply(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
        if let Some(year) = self.year {
            book.year = year;
        }
        if let Some(genre) = &self.genre {
            book.genre = genre.clone();
        }
        if let Some(copies) = self.copies {
            book.copies = copies;
        }
    }
}

/// Fields of a [`Reader`] that may be overwritten (loans are not among them)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReaderUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub card_number: Option<String>,
}

impl ReaderUpdate {
    pub const FIELDS: &'static [&'static str] = &["first_name", "last_name", "card_number"];

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

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn from_assignments<S: AsRef<str>>(assignments: &[S]) -> Result<Self, UpdateParseError> {
        let mut update = Self::new();
        for raw in assignments {
            let (field, value) = split_assignment(raw.as_ref())?;
            match field {
                "first_name" => update.first_name = Some(value.to_string()),
                "last_name" => update.last_name = Some(value.to_string()),
                "card_number" => update.card_number = Some(value.to_string()),
                _ => {
                    return Err(UpdateParseError::UnknownField {
                        field: field.to_string(),
                        expected: Self::FIELDS.join(", "),
                    })
                }
            }
        }
        Ok(update)
    }

    pub fn apply(&self, reader: &mut Reader) {
        if let Some(first_name) = &self.first_name {
            reader.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            reader.last_name = last_name.clone();
        }
        if let Some(card_number) = &self.card_number {
            reader.card_number = card_number.clone();
        }
    }
}
