//! Application Layer
//!
//! Orchestrates the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Sessions
//!
//! - `LibrarySession` - Owns the working `Library` and loads/saves it through
//!   an injected `LibraryRepository`

pub mod session;

pub use session::LibrarySession;
