//! Sample data files.

/// Two books and two readers; Ada borrowed Emma in 2000, so she is overdue
pub const SAMPLE_LIBRARY: &str = r#"{
  "books": [
    {"title": "Dune", "author": "Herbert", "year": 1965, "genre": "SciFi", "copies": 2},
    {"title": "Emma", "author": "Austen", "year": 1815, "genre": "Romance", "copies": 0}
  ],
  "readers": [
    {
      "first_name": "Ada",
      "last_name": "Lovelace",
      "card_number": "R1",
      "borrowed_books": [{"title": "Emma", "borrow_date": "2000-01-01T10:00:00"}]
    },
    {
      "first_name": "Alan",
      "last_name": "Turing",
      "card_number": "R2",
      "borrowed_books": []
    }
  ]
}
"#;

pub const EMPTY_LIBRARY: &str = r#"{"books": [], "readers": []}"#;

/// Truncated JSON
pub const MALFORMED_LIBRARY: &str = r#"{"books": [{"title": "Dune""#;
