//! Libris CLI - library record manager
//!
//! Usage: libris [OPTIONS] [COMMAND]
//!
//! Commands:
//!   book     Add, remove, update and search books
//!   reader   Add, remove, update and search readers
//!   issue    Lend a book to a reader
//!   return   Take a book back from a reader
//!   report   Stock, loan and overdue reports
//!   save     Write the library to another file
//!   load     Replace the library with the contents of another file

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use libris::config::{Config, Verbosity};
use libris::presentation::{create_renderer, Cli, OutputFormat};

use commands::Context;

/// Initialize tracing subscriber for logging
///
/// `RUST_LOG` directives are layered over the default level derived from
/// the configured verbosity. Logs go to stderr so they never mix with
/// command output.
fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::builder()
        .with_default_directive(verbosity.level_filter().into())
        .from_env_lossy();

    // Only fails if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().ok();
    let (config, warnings) = Config::load_or_default(cwd.as_deref())?;

    init_tracing(config.output.verbosity.raised_by(cli.verbose));
    for warning in &warnings {
        warn!("{}", warning);
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format.into()
    };
    let ctx = Context {
        config,
        data_file: cli.data,
        renderer: create_renderer(format),
    };

    match cli.command {
        Some(command) => commands::run(command, &ctx),
        None => commands::interactive::cmd_interactive(&ctx),
    }
}
