//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating sessions with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates sessions with proper dependencies (dependency injection)
//! - `output` - Output rendering abstractions
//!
//! ## Usage
//!
//! ```ignore
//! use libris::config::Config;
//! use libris::presentation::factory;
//!
//! let session = factory::open_session(&Config::default(), None)?;
//! println!("{}", session.library().total_books_report());
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{BookCommand, Cli, Commands, NewBook, NewReader, ReaderCommand, ReportCommand};
pub use factory::{create_repository, open_session};
pub use output::{
    create_renderer, CopiesScope, Event, JsonRenderer, LibraryRenderer, OutputFormat,
    ReturnStatus, TextRenderer,
};
