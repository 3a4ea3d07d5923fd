use tracing::{info, warn};

use libris::domain::entities::{Library, ReturnOutcome};
use libris::presentation::{Event, LibraryRenderer};
use libris::LibrisResult;

pub fn cmd_issue(
    library: &mut Library,
    card_number: &str,
    title: &str,
    renderer: &dyn LibraryRenderer,
) -> LibrisResult<String> {
    if let Err(err) = library.issue_book(card_number, title) {
        warn!(card_number, title, reason = %err, "issue refused");
        return Err(err.into());
    }

    info!(card_number, title, "book issued");
    Ok(renderer.event(&Event::BookIssued {
        card_number: card_number.to_string(),
        title: title.to_string(),
    }))
}

/// Returns never fail; unknown readers and titles are reported, not raised.
pub fn cmd_return(
    library: &mut Library,
    card_number: &str,
    title: &str,
    renderer: &dyn LibraryRenderer,
) -> (ReturnOutcome, String) {
    let outcome = library.return_book(card_number, title);
    if let ReturnOutcome::Returned { restocked } = outcome {
        info!(card_number, title, restocked, "book returned");
    }

    let output = renderer.event(&Event::BookReturned {
        card_number: card_number.to_string(),
        title: title.to_string(),
        status: outcome.into(),
    });
    (outcome, output)
}
