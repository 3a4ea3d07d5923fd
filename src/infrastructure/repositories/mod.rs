//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod json_library;

pub use json_library::JsonLibraryRepository;
