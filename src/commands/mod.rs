//! Command handlers for the `libris` binary
//!
//! Every handler works on an already opened [`LibrarySession`] and returns
//! the rendered output, so the one-shot subcommands and the interactive menu
//! share them.

pub mod book;
pub mod interactive;
pub mod loan;
pub mod reader;
pub mod report;
pub mod storage;

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use libris::application::LibrarySession;
use libris::config::Config;
use libris::domain::entities::ReturnOutcome;
use libris::presentation::{factory, Commands, LibraryRenderer};

/// Everything a command needs besides its own arguments
pub struct Context {
    pub config: Config,
    /// `--data` override of `storage.data_file`
    pub data_file: Option<PathBuf>,
    pub renderer: Box<dyn LibraryRenderer>,
}

impl Context {
    pub fn open_session(&self) -> Result<LibrarySession> {
        let session = factory::open_session(&self.config, self.data_file.as_deref())
            .context("could not open the library data file")?;
        Ok(session)
    }
}

/// Run a single subcommand against the data file, saving it afterwards when
/// the command changed the library.
pub fn run(command: Commands, ctx: &Context) -> Result<()> {
    let mut session = ctx.open_session()?;

    let executed = execute(&mut session, command, ctx.renderer.as_ref())?;
    if executed.changed {
        session.commit()?;
    }

    println!("{}", executed.output);
    Ok(())
}

/// Rendered result of one command
#[derive(Debug)]
pub struct Executed {
    pub output: String,
    /// The library differs from what was loaded or last saved
    pub changed: bool,
}

/// Apply `command` to the session and render its result
pub fn execute(
    session: &mut LibrarySession,
    command: Commands,
    renderer: &dyn LibraryRenderer,
) -> Result<Executed> {
    let mut changed = command.mutates();
    let output = match command {
        Commands::Book(cmd) => book::cmd_book(session.library_mut(), cmd, renderer)?,
        Commands::Reader(cmd) => reader::cmd_reader(session.library_mut(), cmd, renderer)?,
        Commands::Issue { card_number, title } => {
            loan::cmd_issue(session.library_mut(), &card_number, &title, renderer)?
        }
        Commands::Return { card_number, title } => {
            let (outcome, output) =
                loan::cmd_return(session.library_mut(), &card_number, &title, renderer);
            changed = matches!(outcome, ReturnOutcome::Returned { .. });
            output
        }
        Commands::Report(cmd) => report::cmd_report(session.library(), cmd, renderer),
        Commands::Save { to } => storage::cmd_save(session, &to, renderer)?,
        Commands::Load { from } => storage::cmd_load(session, &from, renderer)?,
    };
    Ok(Executed { output, changed })
}
