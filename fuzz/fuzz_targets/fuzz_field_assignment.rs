#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let assignments: Vec<&str> = content.split('\n').collect();
        let _ = libris::BookUpdate::from_assignments(&assignments);
        let _ = libris::ReaderUpdate::from_assignments(&assignments);
    }
});
