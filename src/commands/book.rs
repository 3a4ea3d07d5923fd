use tracing::info;

use libris::domain::entities::{Book, Library};
use libris::domain::value_objects::{BookQuery, BookUpdate};
use libris::presentation::{BookCommand, Event, LibraryRenderer};
use libris::LibrisResult;

pub fn cmd_book(
    library: &mut Library,
    command: BookCommand,
    renderer: &dyn LibraryRenderer,
) -> LibrisResult<String> {
    match command {
        BookCommand::Add(new) => {
            info!(title = %new.title, copies = new.copies, "book added");
            let title = new.title.clone();
            library.add_book(Book::new(
                new.title, new.author, new.year, new.genre, new.copies,
            ));
            Ok(renderer.event(&Event::BookAdded { title }))
        }
        BookCommand::Remove { title } => {
            let removed = library.remove_book(&title);
            info!(%title, removed, "books removed");
            Ok(renderer.event(&Event::BooksRemoved { title, removed }))
        }
        BookCommand::Update { title, assignments } => {
            let update = BookUpdate::from_assignments(&assignments)?;
            let updated = library.update_book(&title, &update);
            info!(%title, updated, "books updated");
            Ok(renderer.event(&Event::BooksUpdated { title, updated }))
        }
        BookCommand::Search { criteria } => {
            let query: BookQuery = BookUpdate::from_assignments(&criteria)?.into();
            Ok(renderer.books(&library.search_books(&query)))
        }
        BookCommand::List => {
            let books: Vec<&Book> = library.books().iter().collect();
            Ok(renderer.books(&books))
        }
    }
}
