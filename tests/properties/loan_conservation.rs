//! Issue and return move copies between shelf and readers without loss.

use proptest::prelude::*;

use libris::domain::entities::{Book, Library, Reader};

const TITLES: [&str; 3] = ["Dune", "Emma", "Solaris"];
const CARDS: [&str; 3] = ["R1", "R2", "R3"];

#[derive(Debug, Clone)]
enum Op {
    Issue(usize, usize),
    Return(usize, usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..CARDS.len(), 0..TITLES.len()).prop_map(|(c, t)| Op::Issue(c, t)),
        (0..CARDS.len(), 0..TITLES.len()).prop_map(|(c, t)| Op::Return(c, t)),
    ]
}

/// Copies on the shelf plus copies on loan, per title
fn holdings(library: &Library, title: &str) -> i64 {
    let shelved: i64 = library
        .books()
        .iter()
        .filter(|book| book.title == title)
        .map(|book| book.copies)
        .sum();
    let lent = library
        .readers()
        .iter()
        .flat_map(|reader| reader.loans.iter())
        .filter(|loan| loan.title == title)
        .count() as i64;
    shelved + lent
}

proptest! {
    #[test]
    fn copies_are_conserved(
        stock in prop::collection::vec(0i64..4, TITLES.len()),
        ops in prop::collection::vec(op(), 0..40),
    ) {
        let mut library = Library::new();
        for (title, copies) in TITLES.iter().zip(&stock) {
            library.add_book(Book::new(*title, "Author", 1900, "Genre", *copies));
        }
        for card in CARDS {
            library.add_reader(Reader::new("First", "Last", card));
        }

        for op in ops {
            match op {
                Op::Issue(c, t) => {
                    let _ = library.issue_book(CARDS[c], TITLES[t]);
                }
                Op::Return(c, t) => {
                    library.return_book(CARDS[c], TITLES[t]);
                }
            }
            for (title, copies) in TITLES.iter().zip(&stock) {
                prop_assert_eq!(holdings(&library, title), *copies);
            }
            for book in library.books() {
                prop_assert!(book.copies >= 0);
            }
        }
    }

    #[test]
    fn failed_issue_changes_nothing(
        copies in 0i64..2,
        card in 0..CARDS.len() + 1,
    ) {
        let mut library = Library::new();
        library.add_book(Book::new("Dune", "Herbert", 1965, "SciFi", copies));
        library.add_reader(Reader::new("Ada", "Lovelace", "R1"));
        let before = library.clone();

        let card_number = CARDS.get(card).copied().unwrap_or("R9");
        if library.issue_book(card_number, "Dune").is_err() {
            prop_assert_eq!(library.books(), before.books());
            prop_assert_eq!(library.readers(), before.readers());
        }
    }
}
