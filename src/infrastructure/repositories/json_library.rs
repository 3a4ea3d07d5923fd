//! JSON Library Repository
//!
//! Implements the LibraryRepository port using the JSON document format
//! shared with existing data files:
//!
//! ```json
//! {
//!   "books": [{"title": "...", "author": "...", "year": 1965, "genre": "...", "copies": 2}],
//!   "readers": [{"first_name": "...", "last_name": "...", "card_number": "...",
//!                "borrowed_books": [{"title": "...", "borrow_date": "2024-03-01T10:15:00"}]}]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Book, Library, Loan, Reader};
use crate::domain::ports::file_system::{FileSystem, FsError};
use crate::domain::ports::library_repository::{
    LibraryRepository, RepositoryError, RepositoryResult,
};
use crate::domain::value_objects::{format_timestamp, parse_timestamp};
use crate::infrastructure::fs::LocalFs;

/// JSON-based library repository
pub struct JsonLibraryRepository {
    fs: LocalFs,
    pretty: bool,
}

impl JsonLibraryRepository {
    /// Create a new repository with the default file system
    pub fn new() -> Self {
        Self {
            fs: LocalFs::new(),
            pretty: false,
        }
    }

    /// Create with a custom file system
    pub fn with_fs(fs: LocalFs) -> Self {
        Self { fs, pretty: false }
    }

    /// Indent the written document
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Turn a JSON document into books and readers
    pub fn decode(content: &str) -> Result<(Vec<Book>, Vec<Reader>), String> {
        let document: JsonLibrary = serde_json::from_str(content).map_err(|e| e.to_string())?;

        let books = document.books.into_iter().map(Book::from).collect();
        let readers = document
            .readers
            .into_iter()
            .map(JsonReader::into_reader)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((books, readers))
    }

    /// Render every book and reader in `library` as a JSON document
    pub fn encode(library: &Library, pretty: bool) -> Result<String, String> {
        let document = JsonLibrary {
            books: library.books().iter().map(JsonBook::from).collect(),
            readers: library.readers().iter().map(JsonReader::from).collect(),
        };

        if pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        }
        .map_err(|e| e.to_string())
    }
}

impl Default for JsonLibraryRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON representation of a book. Every key is required and no others are allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonBook {
    title: String,
    author: String,
    year: i32,
    genre: String,
    copies: i64,
}

impl From<&Book> for JsonBook {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year,
            genre: book.genre.clone(),
            copies: book.copies,
        }
    }
}

impl From<JsonBook> for Book {
    fn from(book: JsonBook) -> Self {
        Book::new(book.title, book.author, book.year, book.genre, book.copies)
    }
}

/// JSON representation of an active loan
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonLoan {
    title: String,
    borrow_date: String,
}

/// JSON representation of a reader
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonReader {
    first_name: String,
    last_name: String,
    card_number: String,
    borrowed_books: Vec<JsonLoan>,
}

impl From<&Reader> for JsonReader {
    fn from(reader: &Reader) -> Self {
        Self {
            first_name: reader.first_name.clone(),
            last_name: reader.last_name.clone(),
            card_number: reader.card_number.clone(),
            borrowed_books: reader
                .loans
                .iter()
                .map(|loan| JsonLoan {
                    title: loan.title.clone(),
                    borrow_date: format_timestamp(loan.borrowed_at),
                })
                .collect(),
        }
    }
}

impl JsonReader {
    fn into_reader(self) -> Result<Reader, String> {
        let card_number = self.card_number;
        let loans = self
            .borrowed_books
            .into_iter()
            .map(|loan| {
                parse_timestamp(&loan.borrow_date)
                    .map(|at| Loan::new(loan.title, at))
                    .map_err(|e| format!("reader '{}': {}", card_number, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Reader::new(self.first_name, self.last_name, card_number).with_loans(loans))
    }
}

/// JSON representation of the whole aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonLibrary {
    books: Vec<JsonBook>,
    readers: Vec<JsonReader>,
}

fn fs_error(path: &Path, err: FsError) -> RepositoryError {
    match err {
        FsError::NotFound(_) => RepositoryError::NotFound(path.to_path_buf()),
        other => RepositoryError::Io {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    }
}

impl LibraryRepository for JsonLibraryRepository {
    fn load_into(&self, library: &mut Library, path: &Path) -> RepositoryResult<()> {
        let content = self.fs.read(path).map_err(|e| fs_error(path, e))?;
        let (books, readers) = Self::decode(&content).map_err(|message| RepositoryError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

        library.replace_contents(books, readers);
        Ok(())
    }

    fn save(&self, library: &Library, path: &Path) -> RepositoryResult<()> {
        let content = Self::encode(library, self.pretty).map_err(|message| RepositoryError::Io {
            path: path.to_path_buf(),
            message,
        })?;
        self.fs.write(path, &content).map_err(|e| fs_error(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        self.fs.exists(path)
    }
}
