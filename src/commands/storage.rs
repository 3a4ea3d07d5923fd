use std::path::Path;

use libris::application::LibrarySession;
use libris::presentation::{Event, LibraryRenderer};
use libris::LibrisResult;

pub fn cmd_save(
    session: &LibrarySession,
    to: &Path,
    renderer: &dyn LibraryRenderer,
) -> LibrisResult<String> {
    session.save(to)?;
    let library = session.library();
    Ok(renderer.event(&Event::Saved {
        path: to.display().to_string(),
        books: library.books().len(),
        readers: library.readers().len(),
    }))
}

/// Replace the session's library with `from`; nothing changes if it fails
pub fn cmd_load(
    session: &mut LibrarySession,
    from: &Path,
    renderer: &dyn LibraryRenderer,
) -> LibrisResult<String> {
    session.load(from)?;
    let library = session.library();
    Ok(renderer.event(&Event::Loaded {
        path: from.display().to_string(),
        books: library.books().len(),
        readers: library.readers().len(),
    }))
}
