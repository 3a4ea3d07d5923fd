//! Saving and loading a library reproduces it.

use chrono::{DateTime, NaiveDateTime};
use proptest::prelude::*;

use libris::domain::entities::{Book, Library, Loan, Reader};
use libris::JsonLibraryRepository;

fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z ]{0,12}",
        "\\PC{0,8}",
        Just("Quote \" and \\ slash".to_string()),
    ]
}

fn timestamp() -> impl Strategy<Value = NaiveDateTime> {
    // 1970-01-01 to 2100-01-01; about half carry a microsecond fraction
    (
        0i64..4_102_444_800,
        prop_oneof![Just(0u32), 1u32..1_000_000],
    )
        .prop_map(|(secs, micros)| {
            DateTime::from_timestamp(secs, micros * 1_000)
                .map(|at| at.naive_utc())
                .unwrap_or_default()
        })
}

fn book() -> impl Strategy<Value = Book> {
    (text(), text(), any::<i32>(), text(), -5i64..1000).prop_map(
        |(title, author, year, genre, copies)| Book::new(title, author, year, genre, copies),
    )
}

fn reader() -> impl Strategy<Value = Reader> {
    (
        text(),
        text(),
        text(),
        prop::collection::vec((text(), timestamp()), 0..4),
    )
        .prop_map(|(first, last, card, loans)| {
            Reader::new(first, last, card).with_loans(
                loans
                    .into_iter()
                    .map(|(title, at)| Loan::new(title, at))
                    .collect(),
            )
        })
}

proptest! {
    #[test]
    fn encode_then_decode_preserves_library(
        books in prop::collection::vec(book(), 0..6),
        readers in prop::collection::vec(reader(), 0..6),
        pretty in any::<bool>(),
    ) {
        let library = Library::from_parts(books, readers);

        let json = JsonLibraryRepository::encode(&library, pretty).unwrap();
        let (books, readers) = JsonLibraryRepository::decode(&json).unwrap();

        prop_assert_eq!(books.as_slice(), library.books());
        prop_assert_eq!(readers.as_slice(), library.readers());
    }

    #[test]
    fn decode_never_panics(input in "\\PC{0,200}") {
        let _ = JsonLibraryRepository::decode(&input);
    }
}
