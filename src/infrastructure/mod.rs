//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local)
//! - `repositories/` - Repository implementations (JSON library document)

pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use fs::LocalFs;
pub use repositories::JsonLibraryRepository;
