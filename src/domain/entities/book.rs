//! Book entity
//!
//! Static bibliographic data plus the number of copies currently on the shelf.
//! The title is the business key, but nothing enforces its uniqueness.

/// A catalogued title and its available copies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    /// Copies currently available for lending (not the total owned)
    pub copies: i64,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        copies: i64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            copies,
        }
    }

    /// Whether at least one copy can be lent out right now
    pub fn is_available(&self) -> bool {
        self.copies > 0
    }
}
