//! Interactive menu
//!
//! The nine-item menu shown when `libris` runs on a terminal without a
//! subcommand. Each choice prompts for its inputs, then runs the same
//! handler the one-shot subcommand would. Errors are printed and the menu
//! comes back.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};
use is_terminal::IsTerminal;
use tracing::debug;

use libris::application::LibrarySession;
use libris::presentation::{
    create_repository, BookCommand, Commands, LibraryRenderer, NewBook, NewReader, ReaderCommand,
    ReportCommand,
};

use super::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddBook,
    RemoveBook,
    AddReader,
    RemoveReader,
    IssueBook,
    Load,
    Save,
    IssuedReport,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 9] = [
        MenuAction::AddBook,
        MenuAction::RemoveBook,
        MenuAction::AddReader,
        MenuAction::RemoveReader,
        MenuAction::IssueBook,
        MenuAction::Load,
        MenuAction::Save,
        MenuAction::IssuedReport,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::AddBook => "[1] Add a book",
            MenuAction::RemoveBook => "[2] Remove a book",
            MenuAction::AddReader => "[3] Add a reader",
            MenuAction::RemoveReader => "[4] Remove a reader",
            MenuAction::IssueBook => "[5] Issue a book",
            MenuAction::Load => "[6] Load data from a file",
            MenuAction::Save => "[7] Save data to a file",
            MenuAction::IssuedReport => "[8] Show issued books",
            MenuAction::Exit => "[9] Exit",
        }
    }
}

/// State of the menu loop between choices
pub struct MenuState {
    pub session: LibrarySession,
    /// Library changed since it was last loaded from or saved to the data file
    pub dirty: bool,
    /// Data file that existed but could not be read; never written over
    unreadable: Option<PathBuf>,
}

impl MenuState {
    pub fn new(session: LibrarySession) -> Self {
        Self {
            session,
            dirty: false,
            unreadable: None,
        }
    }

    /// Open the data file, or start empty if it cannot be read
    ///
    /// A data file that failed to load stays protected until it is loaded
    /// successfully, so the empty library never replaces it.
    pub fn open(ctx: &Context) -> Self {
        match ctx.open_session() {
            Ok(session) => Self::new(session),
            Err(err) => {
                eprintln!("Error: {:#}", err);
                eprintln!("Starting with an empty library.\n");
                let data_file = ctx
                    .data_file
                    .clone()
                    .unwrap_or_else(|| ctx.config.storage.data_file.clone());
                let session = LibrarySession::new(
                    create_repository(&ctx.config.storage),
                    data_file.clone(),
                    ctx.config.loan_policy(),
                );
                Self {
                    session,
                    dirty: false,
                    unreadable: Some(data_file),
                }
            }
        }
    }

    /// The data file could not be read and must be saved elsewhere
    pub fn data_file_unreadable(&self) -> bool {
        self.unreadable.is_some()
    }

    /// Run one menu command and track whether the data file is now stale
    pub fn apply(&mut self, command: Commands, renderer: &dyn LibraryRenderer) -> Result<String> {
        let data_file = self.session.data_file().to_path_buf();
        let (saves_data_file, loads_data_file) = match &command {
            Commands::Save { to } => (same_file(to, &data_file), false),
            Commands::Load { from } => (false, same_file(from, &data_file)),
            _ => (false, false),
        };
        if let (true, Some(path)) = (saves_data_file, &self.unreadable) {
            bail!(
                "'{}' could not be read; refusing to overwrite it. Save to another file instead.",
                path.display()
            );
        }

        let executed = super::execute(&mut self.session, command, renderer)?;
        if executed.changed {
            self.dirty = true;
        }
        if saves_data_file || loads_data_file {
            self.dirty = false;
        }
        if loads_data_file {
            self.unreadable = None;
        }
        Ok(executed.output)
    }
}

pub fn cmd_interactive(ctx: &Context) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        println!("No command provided.");
        println!("Try: `libris book list` or `libris --help`");
        return Ok(());
    }

    let mut state = MenuState::open(ctx);

    println!("Libris library manager\n");
    let items: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    loop {
        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&items)
            .default(0)
            .interact()?;
        let action = MenuAction::ALL[selection];
        debug!(?action, "menu selection");

        let Some(command) = prompt_command(action, state.session.data_file().to_path_buf())?
        else {
            confirm_unsaved(&mut state, ctx.renderer.as_ref())?;
            println!("Goodbye!");
            return Ok(());
        };
        match state.apply(command, ctx.renderer.as_ref()) {
            Ok(output) => println!("{}\n", output),
            Err(err) => eprintln!("Error: {:#}\n", err),
        }
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    a == b
        || matches!(
            (a.canonicalize(), b.canonicalize()),
            (Ok(a), Ok(b)) if a == b
        )
}

fn confirm_unsaved(state: &mut MenuState, renderer: &dyn LibraryRenderer) -> Result<()> {
    if !state.dirty {
        return Ok(());
    }

    let data_file = state.session.data_file().to_path_buf();
    let to = if state.data_file_unreadable() {
        let save_elsewhere = Confirm::new()
            .with_prompt(format!(
                "{} could not be read and will not be overwritten. Save changes to another file?",
                data_file.display()
            ))
            .default(false)
            .interact()?;
        if !save_elsewhere {
            return Ok(());
        }
        PathBuf::from(prompt_text("File to save to")?)
    } else {
        let save = Confirm::new()
            .with_prompt(format!("Save changes to {}?", data_file.display()))
            .default(true)
            .interact()?;
        if !save {
            return Ok(());
        }
        data_file
    };

    let output = state.apply(Commands::Save { to }, renderer)?;
    println!("{}", output);
    Ok(())
}

fn prompt_text(prompt: &str) -> Result<String> {
    Ok(Input::<String>::new().with_prompt(prompt).interact_text()?)
}

fn prompt_path(prompt: &str, default: PathBuf) -> Result<PathBuf> {
    let path = Input::<String>::new()
        .with_prompt(prompt)
        .default(default.display().to_string())
        .interact_text()?;
    Ok(PathBuf::from(path))
}

/// Ask for the inputs `action` needs; `None` means leave the menu
fn prompt_command(action: MenuAction, data_file: PathBuf) -> Result<Option<Commands>> {
    let command = match action {
        MenuAction::AddBook => Commands::Book(BookCommand::Add(NewBook {
            title: prompt_text("Title")?,
            author: prompt_text("Author")?,
            year: Input::<i32>::new()
                .with_prompt("Publication year")
                .interact_text()?,
            genre: prompt_text("Genre")?,
            copies: Input::<i64>::new()
                .with_prompt("Number of copies")
                .default(1)
                .interact_text()?,
        })),
        MenuAction::RemoveBook => Commands::Book(BookCommand::Remove {
            title: prompt_text("Title of the book to remove")?,
        }),
        MenuAction::AddReader => {
            let first_name = prompt_text("First name")?;
            let last_name = prompt_text("Last name")?;
            Commands::Reader(ReaderCommand::Add(NewReader {
                card_number: prompt_text("Card number")?,
                first_name,
                last_name,
            }))
        }
        MenuAction::RemoveReader => Commands::Reader(ReaderCommand::Remove {
            card_number: prompt_text("Card number of the reader to remove")?,
        }),
        MenuAction::IssueBook => Commands::Issue {
            card_number: prompt_text("Card number")?,
            title: prompt_text("Book title")?,
        },
        MenuAction::Load => Commands::Load {
            from: prompt_path("File to load", data_file)?,
        },
        MenuAction::Save => Commands::Save {
            to: prompt_path("File to save to", data_file)?,
        },
        MenuAction::IssuedReport => Commands::Report(ReportCommand::Issued),
        MenuAction::Exit => return Ok(None),
    };
    Ok(Some(command))
}
