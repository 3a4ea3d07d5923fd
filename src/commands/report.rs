use libris::domain::entities::Library;
use libris::presentation::{CopiesScope, LibraryRenderer, ReportCommand};

pub fn cmd_report(
    library: &Library,
    command: ReportCommand,
    renderer: &dyn LibraryRenderer,
) -> String {
    match command {
        ReportCommand::Genre { genre } => {
            renderer.copies(CopiesScope::Genre(&genre), library.genre_report(&genre))
        }
        ReportCommand::Total => renderer.copies(CopiesScope::Total, library.total_books_report()),
        ReportCommand::Reader { card_number } => {
            renderer.reader_titles(&card_number, &library.reader_report(&card_number))
        }
        ReportCommand::Issued => renderer.issued(&library.issued_books_report()),
        ReportCommand::Overdue => renderer.overdue(&library.overdue_report()),
    }
}
