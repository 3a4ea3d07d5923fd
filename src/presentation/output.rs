//! Output Rendering
//!
//! Provides a unified interface for rendering command results as text or
//! JSON. Renderers return strings; the caller decides where they go.

use serde::Serialize;
use serde_json::json;

use crate::config::FormatMode;
use crate::domain::entities::{Book, IssuedBookEntry, OverdueEntry, Reader, ReturnOutcome};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl From<FormatMode> for OutputFormat {
    fn from(mode: FormatMode) -> Self {
        match mode {
            FormatMode::Text => OutputFormat::Text,
            FormatMode::Json => OutputFormat::Json,
        }
    }
}

/// Result of a command that changed or moved the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    BookAdded {
        title: String,
    },
    BooksRemoved {
        title: String,
        removed: usize,
    },
    BooksUpdated {
        title: String,
        updated: usize,
    },
    ReaderAdded {
        card_number: String,
        name: String,
    },
    ReadersRemoved {
        card_number: String,
        removed: usize,
    },
    ReadersUpdated {
        card_number: String,
        updated: usize,
    },
    BookIssued {
        card_number: String,
        title: String,
    },
    BookReturned {
        card_number: String,
        title: String,
        status: ReturnStatus,
    },
    Loaded {
        path: String,
        books: usize,
        readers: usize,
    },
    Saved {
        path: String,
        books: usize,
        readers: usize,
    },
}

/// Serializable form of [`ReturnOutcome`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnStatus {
    Returned,
    ReturnedNotRestocked,
    UnknownReader,
    NotBorrowed,
}

impl From<ReturnOutcome> for ReturnStatus {
    fn from(outcome: ReturnOutcome) -> Self {
        match outcome {
            ReturnOutcome::Returned { restocked: true } => ReturnStatus::Returned,
            ReturnOutcome::Returned { restocked: false } => ReturnStatus::ReturnedNotRestocked,
            ReturnOutcome::UnknownReader => ReturnStatus::UnknownReader,
            ReturnOutcome::NotBorrowed => ReturnStatus::NotBorrowed,
        }
    }
}

/// Which stock figure a count report shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopiesScope<'a> {
    Genre(&'a str),
    Total,
}

/// Trait for rendering library results
pub trait LibraryRenderer {
    fn event(&self, event: &Event) -> String;
    fn books(&self, books: &[&Book]) -> String;
    fn readers(&self, readers: &[&Reader]) -> String;
    fn copies(&self, scope: CopiesScope<'_>, copies: i64) -> String;
    fn reader_titles(&self, card_number: &str, titles: &[String]) -> String;
    fn issued(&self, entries: &[IssuedBookEntry]) -> String;
    fn overdue(&self, entries: &[OverdueEntry]) -> String;
}

/// Text renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}

impl LibraryRenderer for TextRenderer {
    fn event(&self, event: &Event) -> String {
        match event {
            Event::BookAdded { title } => format!("Book '{}' added.", title),
            Event::BooksRemoved { title, removed: 0 } => {
                format!("No book titled '{}'; nothing removed.", title)
            }
            Event::BooksRemoved { title, removed } => format!(
                "Removed {} titled '{}'.",
                plural(*removed, "book", "books"),
                title
            ),
            Event::BooksUpdated { title, updated: 0 } => {
                format!("No book titled '{}'; nothing updated.", title)
            }
            Event::BooksUpdated { title, updated } => format!(
                "Updated {} titled '{}'.",
                plural(*updated, "book", "books"),
                title
            ),
            Event::ReaderAdded { card_number, name } => {
                format!("Reader '{}' added with card {}.", name, card_number)
            }
            Event::ReadersRemoved {
                card_number,
                removed: 0,
            } => format!("No reader with card {}; nothing removed.", card_number),
            Event::ReadersRemoved {
                card_number,
                removed,
            } => format!(
                "Removed {} with card {}.",
                plural(*removed, "reader", "readers"),
                card_number
            ),
            Event::ReadersUpdated {
                card_number,
                updated: 0,
            } => format!("No reader with card {}; nothing updated.", card_number),
            Event::ReadersUpdated {
                card_number,
                updated,
            } => format!(
                "Updated {} with card {}.",
                plural(*updated, "reader", "readers"),
                card_number
            ),
            Event::BookIssued { card_number, title } => {
                format!("Issued '{}' to reader {}.", title, card_number)
            }
            Event::BookReturned {
                card_number,
                title,
                status,
            } => match status {
                ReturnStatus::Returned => {
                    format!("Reader {} returned '{}'.", card_number, title)
                }
                ReturnStatus::ReturnedNotRestocked => format!(
                    "Reader {} returned '{}'; the book is no longer catalogued, so no copy was restocked.",
                    card_number, title
                ),
                ReturnStatus::UnknownReader => {
                    format!("No reader with card {}; nothing returned.", card_number)
                }
                ReturnStatus::NotBorrowed => format!(
                    "Reader {} has not borrowed '{}'; nothing returned.",
                    card_number, title
                ),
            },
            Event::Loaded {
                path,
                books,
                readers,
            } => format!(
                "Loaded {} and {} from '{}'.",
                plural(*books, "book", "books"),
                plural(*readers, "reader", "readers"),
                path
            ),
            Event::Saved {
                path,
                books,
                readers,
            } => format!(
                "Saved {} and {} to '{}'.",
                plural(*books, "book", "books"),
                plural(*readers, "reader", "readers"),
                path
            ),
        }
    }

    fn books(&self, books: &[&Book]) -> String {
        if books.is_empty() {
            return "No books found.".to_string();
        }
        books
            .iter()
            .map(|book| {
                format!(
                    "{} by {} ({}), {}: {} {} available",
                    book.title,
                    book.author,
                    book.year,
                    book.genre,
                    book.copies,
                    if book.copies == 1 { "copy" } else { "copies" }
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn readers(&self, readers: &[&Reader]) -> String {
        if readers.is_empty() {
            return "No readers found.".to_string();
        }
        readers
            .iter()
            .map(|reader| {
                format!(
                    "[{}] {}, {} on loan",
                    reader.card_number,
                    reader.full_name(),
                    plural(reader.loans.len(), "book", "books")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn copies(&self, scope: CopiesScope<'_>, copies: i64) -> String {
        match scope {
            CopiesScope::Genre(genre) => format!("{}: {} available", genre, copies),
            CopiesScope::Total => format!("Total: {} available", copies),
        }
    }

    fn reader_titles(&self, card_number: &str, titles: &[String]) -> String {
        if titles.is_empty() {
            format!("Reader {} has no books on loan.", card_number)
        } else {
            format!("Reader {} has borrowed: {}", card_number, titles.join(", "))
        }
    }

    fn issued(&self, entries: &[IssuedBookEntry]) -> String {
        if entries.is_empty() {
            return "No books are currently issued.".to_string();
        }
        let mut lines = vec![format!("Issued books ({}):", entries.len())];
        lines.extend(entries.iter().map(|entry| {
            format!(
                "  {}: '{}' issued {}",
                entry.reader, entry.book_title, entry.borrow_date
            )
        }));
        lines.join("\n")
    }

    fn overdue(&self, entries: &[OverdueEntry]) -> String {
        if entries.is_empty() {
            return "No overdue books.".to_string();
        }
        let mut lines = vec![format!("Overdue books ({}):", entries.len())];
        lines.extend(entries.iter().map(|entry| {
            format!(
                "  {}: '{}' overdue by {}",
                entry.reader,
                entry.book_title,
                if entry.days_overdue == 1 {
                    "1 day".to_string()
                } else {
                    format!("{} days", entry.days_overdue)
                }
            )
        }));
        lines.join("\n")
    }
}

/// JSON renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

impl LibraryRenderer for JsonRenderer {
    fn event(&self, event: &Event) -> String {
        to_json(event)
    }

    fn books(&self, books: &[&Book]) -> String {
        let books: Vec<_> = books
            .iter()
            .map(|book| {
                json!({
                    "title": book.title,
                    "author": book.author,
                    "year": book.year,
                    "genre": book.genre,
                    "copies": book.copies,
                })
            })
            .collect();
        to_json(&json!({ "books": books }))
    }

    fn readers(&self, readers: &[&Reader]) -> String {
        let readers: Vec<_> = readers
            .iter()
            .map(|reader| {
                json!({
                    "first_name": reader.first_name,
                    "last_name": reader.last_name,
                    "card_number": reader.card_number,
                    "borrowed_books": reader.borrowed_titles(),
                })
            })
            .collect();
        to_json(&json!({ "readers": readers }))
    }

    fn copies(&self, scope: CopiesScope<'_>, copies: i64) -> String {
        match scope {
            CopiesScope::Genre(genre) => to_json(&json!({ "genre": genre, "copies": copies })),
            CopiesScope::Total => to_json(&json!({ "total": copies })),
        }
    }

    fn reader_titles(&self, card_number: &str, titles: &[String]) -> String {
        to_json(&json!({ "card_number": card_number, "books": titles }))
    }

    fn issued(&self, entries: &[IssuedBookEntry]) -> String {
        to_json(&json!({ "issued": entries }))
    }

    fn overdue(&self, entries: &[OverdueEntry]) -> String {
        to_json(&json!({ "overdue": entries }))
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat) -> Box<dyn LibraryRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Loan;
    use chrono::NaiveDate;
    use insta::assert_snapshot;

    fn dune() -> Book {
        Book::new("Dune", "Herbert", 1965, "SciFi", 2)
    }

    fn ada() -> Reader {
        let at = NaiveDate::from_ymd_opt(2024, 4, 2)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Reader::new("Ada", "Lovelace", "R1").with_loans(vec![Loan::new("Dune", at)])
    }

    #[test]
    fn output_format_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
        assert_eq!(OutputFormat::from(FormatMode::Json), OutputFormat::Json);
    }

    #[test]
    fn text_books_list() {
        let emma = Book::new("Emma", "Austen", 1815, "Romance", 1);
        let gone = Book::new("Ulysses", "Joyce", 1922, "Modernist", 0);
        let text = TextRenderer.books(&[&dune(), &emma, &gone]);

        assert_snapshot!(text, @r"
        Dune by Herbert (1965), SciFi: 2 copies available
        Emma by Austen (1815), Romance: 1 copy available
        Ulysses by Joyce (1922), Modernist: 0 copies available
        ");
    }

    #[test]
    fn text_books_negative_copies_shown_as_is() {
        let odd = Book::new("Dune", "Herbert", 1965, "SciFi", -1);
        assert_snapshot!(TextRenderer.books(&[&odd]), @"Dune by Herbert (1965), SciFi: -1 copies available");
    }

    #[test]
    fn text_empty_lists() {
        assert_eq!(TextRenderer.books(&[]), "No books found.");
        assert_eq!(TextRenderer.readers(&[]), "No readers found.");
        assert_eq!(TextRenderer.issued(&[]), "No books are currently issued.");
        assert_eq!(TextRenderer.overdue(&[]), "No overdue books.");
    }

    #[test]
    fn text_readers_list() {
        let alan = Reader::new("Alan", "Turing", "R2");
        assert_snapshot!(TextRenderer.readers(&[&ada(), &alan]), @r"
        [R1] Ada Lovelace, 1 book on loan
        [R2] Alan Turing, 0 books on loan
        ");
    }

    #[test]
    fn text_issued_report() {
        let entries = vec![
            IssuedBookEntry {
                reader: "Ada Lovelace".to_string(),
                book_title: "Dune".to_string(),
                borrow_date: "02-04-2024".to_string(),
            },
            IssuedBookEntry {
                reader: "Alan Turing".to_string(),
                book_title: "Emma".to_string(),
                borrow_date: "15-04-2024".to_string(),
            },
        ];

        assert_snapshot!(TextRenderer.issued(&entries), @r"
        Issued books (2):
          Ada Lovelace: 'Dune' issued 02-04-2024
          Alan Turing: 'Emma' issued 15-04-2024
        ");
    }

    #[test]
    fn text_overdue_report() {
        let entries = vec![
            OverdueEntry {
                reader: "Ada Lovelace".to_string(),
                book_title: "Dune".to_string(),
                days_overdue: 1,
            },
            OverdueEntry {
                reader: "Ada Lovelace".to_string(),
                book_title: "Emma".to_string(),
                days_overdue: 0,
            },
        ];

        assert_snapshot!(TextRenderer.overdue(&entries), @r"
        Overdue books (2):
          Ada Lovelace: 'Dune' overdue by 1 day
          Ada Lovelace: 'Emma' overdue by 0 days
        ");
    }

    #[test]
    fn text_copies_and_titles() {
        assert_eq!(TextRenderer.copies(CopiesScope::Genre("SciFi"), 5), "SciFi: 5 available");
        assert_eq!(TextRenderer.copies(CopiesScope::Total, 7), "Total: 7 available");
        assert_eq!(
            TextRenderer.reader_titles("R1", &["Dune".to_string(), "Emma".to_string()]),
            "Reader R1 has borrowed: Dune, Emma"
        );
        assert_eq!(
            TextRenderer.reader_titles("R9", &[]),
            "Reader R9 has no books on loan."
        );
    }

    #[test]
    fn text_events() {
        let events = [
            Event::BookAdded {
                title: "Dune".to_string(),
            },
            Event::BooksRemoved {
                title: "Dune".to_string(),
                removed: 2,
            },
            Event::ReadersRemoved {
                card_number: "R9".to_string(),
                removed: 0,
            },
            Event::BookIssued {
                card_number: "R1".to_string(),
                title: "Dune".to_string(),
            },
            Event::BookReturned {
                card_number: "R1".to_string(),
                title: "Emma".to_string(),
                status: ReturnStatus::NotBorrowed,
            },
            Event::Saved {
                path: "library.json".to_string(),
                books: 1,
                readers: 3,
            },
        ];
        let text = events
            .iter()
            .map(|e| TextRenderer.event(e))
            .collect::<Vec<_>>()
            .join("\n");

        assert_snapshot!(text, @r"
        Book 'Dune' added.
        Removed 2 books titled 'Dune'.
        No reader with card R9; nothing removed.
        Issued 'Dune' to reader R1.
        Reader R1 has not borrowed 'Emma'; nothing returned.
        Saved 1 book and 3 readers to 'library.json'.
        ");
    }

    #[test]
    fn json_event_is_tagged() {
        let json = JsonRenderer.event(&Event::BookReturned {
            card_number: "R1".to_string(),
            title: "Dune".to_string(),
            status: ReturnOutcome::Returned { restocked: false }.into(),
        });
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value,
            json!({
                "event": "book_returned",
                "card_number": "R1",
                "title": "Dune",
                "status": "returned_not_restocked"
            })
        );
    }

    #[test]
    fn json_readers_list_titles() {
        let value: serde_json::Value =
            serde_json::from_str(&JsonRenderer.readers(&[&ada()])).unwrap();

        assert_eq!(value["readers"][0]["card_number"], "R1");
        assert_eq!(value["readers"][0]["borrowed_books"], json!(["Dune"]));
    }

    #[test]
    fn json_reports() {
        let overdue = vec![OverdueEntry {
            reader: "Ada Lovelace".to_string(),
            book_title: "Dune".to_string(),
            days_overdue: 3,
        }];
        let value: serde_json::Value =
            serde_json::from_str(&JsonRenderer.overdue(&overdue)).unwrap();
        assert_eq!(
            value,
            json!({"overdue": [{"reader": "Ada Lovelace", "book_title": "Dune", "days_overdue": 3}]})
        );

        let value: serde_json::Value =
            serde_json::from_str(&JsonRenderer.copies(CopiesScope::Total, 4)).unwrap();
        assert_eq!(value, json!({"total": 4}));
    }
}
