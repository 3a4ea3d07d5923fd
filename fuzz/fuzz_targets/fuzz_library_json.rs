#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Anything that decodes must encode again
        if let Ok((books, readers)) = libris::JsonLibraryRepository::decode(content) {
            let library = libris::Library::from_parts(books, readers);
            let _ = libris::JsonLibraryRepository::encode(&library, false);
        }
    }
});
