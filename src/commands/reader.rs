use tracing::info;

use libris::domain::entities::{Library, Reader};
use libris::domain::value_objects::{ReaderQuery, ReaderUpdate};
use libris::presentation::{Event, LibraryRenderer, ReaderCommand};
use libris::LibrisResult;

pub fn cmd_reader(
    library: &mut Library,
    command: ReaderCommand,
    renderer: &dyn LibraryRenderer,
) -> LibrisResult<String> {
    match command {
        ReaderCommand::Add(new) => {
            let reader = Reader::new(new.first_name, new.last_name, new.card_number);
            let event = Event::ReaderAdded {
                card_number: reader.card_number.clone(),
                name: reader.full_name(),
            };
            info!(card_number = %reader.card_number, "reader added");
            library.add_reader(reader);
            Ok(renderer.event(&event))
        }
        ReaderCommand::Remove { card_number } => {
            let removed = library.remove_reader(&card_number);
            info!(%card_number, removed, "readers removed");
            Ok(renderer.event(&Event::ReadersRemoved {
                card_number,
                removed,
            }))
        }
        ReaderCommand::Update {
            card_number,
            assignments,
        } => {
            let update = ReaderUpdate::from_assignments(&assignments)?;
            let updated = library.update_reader(&card_number, &update);
            info!(%card_number, updated, "readers updated");
            Ok(renderer.event(&Event::ReadersUpdated {
                card_number,
                updated,
            }))
        }
        ReaderCommand::Search { criteria } => {
            let query: ReaderQuery = ReaderUpdate::from_assignments(&criteria)?.into();
            Ok(renderer.readers(&library.search_readers(&query)))
        }
        ReaderCommand::List => {
            let readers: Vec<&Reader> = library.readers().iter().collect();
            Ok(renderer.readers(&readers))
        }
    }
}
