//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--data, --json, --verbose) are inherited by all subcommands
//! - Without a subcommand the binary opens the interactive menu

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Libris - library book, reader and loan records
#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'libris' without arguments for the interactive menu.")]
pub struct Cli {
    /// Data file to operate on (default from config: library.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Render results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add, remove, update and search books
    #[command(subcommand)]
    Book(BookCommand),

    /// Add, remove, update and search readers
    #[command(subcommand)]
    Reader(ReaderCommand),

    /// Lend a book to a reader
    Issue {
        /// Reader's card number
        card_number: String,

        /// Book title
        title: String,
    },

    /// Take a book back from a reader
    Return {
        /// Reader's card number
        card_number: String,

        /// Book title
        title: String,
    },

    /// Stock, loan and overdue reports
    #[command(subcommand)]
    Report(ReportCommand),

    /// Write the library to another file
    Save {
        /// Destination file
        #[arg(long, value_name = "PATH")]
        to: PathBuf,
    },

    /// Replace the library with the contents of another file
    Load {
        /// Source file
        #[arg(long, value_name = "PATH")]
        from: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum BookCommand {
    /// Add a book (duplicate titles are allowed)
    Add(NewBook),

    /// Remove every book with this title
    Remove {
        title: String,
    },

    /// Overwrite fields on every book with this title
    Update {
        title: String,

        /// Field assignment, e.g. --set copies=3 (title, author, year, genre, copies)
        #[arg(long = "set", value_name = "FIELD=VALUE", required = true)]
        assignments: Vec<String>,
    },

    /// List books whose fields all equal the given values
    Search {
        /// Criterion, e.g. --where genre=SciFi (title, author, year, genre, copies)
        #[arg(long = "where", value_name = "FIELD=VALUE")]
        criteria: Vec<String>,
    },

    /// List every book
    List,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,

    #[arg(long)]
    pub author: String,

    #[arg(long, allow_negative_numbers = true)]
    pub year: i32,

    #[arg(long)]
    pub genre: String,

    /// Copies available for lending
    #[arg(long, default_value_t = 1)]
    pub copies: i64,
}

#[derive(Subcommand, Debug)]
pub enum ReaderCommand {
    /// Register a reader (duplicate card numbers are allowed)
    Add(NewReader),

    /// Remove every reader with this card number
    Remove {
        card_number: String,
    },

    /// Overwrite fields on every reader with this card number
    Update {
        card_number: String,

        /// Field assignment, e.g. --set last_name=Byron (first_name, last_name, card_number)
        #[arg(long = "set", value_name = "FIELD=VALUE", required = true)]
        assignments: Vec<String>,
    },

    /// List readers whose fields all equal the given values
    Search {
        /// Criterion, e.g. --where last_name=Lovelace (first_name, last_name, card_number)
        #[arg(long = "where", value_name = "FIELD=VALUE")]
        criteria: Vec<String>,
    },

    /// List every reader
    List,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct NewReader {
    pub card_number: String,

    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ReportCommand {
    /// Available copies in one genre
    Genre {
        genre: String,
    },

    /// Available copies across the catalogue
    Total,

    /// Titles currently on loan to one reader
    Reader {
        card_number: String,
    },

    /// Every active loan
    Issued,

    /// Loans past the lending period
    Overdue,
}

impl Commands {
    /// Whether a successful run may change the library
    ///
    /// `return` only changes it when the reader held the title.
    pub fn mutates(&self) -> bool {
        match self {
            Commands::Book(cmd) => matches!(
                cmd,
                BookCommand::Add(_) | BookCommand::Remove { .. } | BookCommand::Update { .. }
            ),
            Commands::Reader(cmd) => matches!(
                cmd,
                ReaderCommand::Add(_) | ReaderCommand::Remove { .. } | ReaderCommand::Update { .. }
            ),
            Commands::Issue { .. } | Commands::Return { .. } | Commands::Load { .. } => true,
            Commands::Report(_) | Commands::Save { .. } => false,
        }
    }
}
