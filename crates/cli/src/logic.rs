// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The single entry point from raw input to an updated model.

use studybook::{
    AddressBook, Command, CommandResult, CoreError, Model, TransitionResult, apply,
};
use studybook_domain::{EntityKind, Module, Person, Task};
use studybook_parser::{ParseError, parse_command};
use studybook_persistence::{JsonPersistence, PersistenceError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why a line of input produced no result.
#[derive(Debug, Error)]
pub enum LogicError {
    /// The input is not a well-formed command.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The command cannot be applied to the current model.
    #[error(transparent)]
    Command(#[from] CoreError),
    /// The model changed but could not be saved.
    #[error("Could not save data to file: {0}")]
    Storage(#[from] PersistenceError),
}

/// Owns the model and its storage, and runs commands against them.
#[derive(Debug)]
pub struct Logic {
    model: Model,
    storage: JsonPersistence,
    pending_listing: Option<EntityKind>,
}

impl Logic {
    /// Creates the logic, loading the stored address book.
    ///
    /// A missing or unreadable document starts an empty address book; an
    /// unreadable one is replaced on the next successful mutating command.
    #[must_use]
    pub fn new(storage: JsonPersistence) -> Self {
        let address_book: AddressBook = match storage.load() {
            Ok(Some(address_book)) => address_book,
            Ok(None) => {
                info!("No stored address book, starting empty");
                AddressBook::new()
            }
            Err(err) => {
                warn!(error = %err, "Could not load address book, starting empty");
                AddressBook::new()
            }
        };

        Self {
            model: Model::new(address_book),
            storage,
            pending_listing: None,
        }
    }

    /// Returns the current model.
    #[must_use]
    pub const fn model(&self) -> &Model {
        &self.model
    }

    /// Parses and applies one line of input.
    ///
    /// Commands that change data are saved immediately after the model is
    /// updated. A save failure is reported, but the model keeps the change.
    ///
    /// # Arguments
    ///
    /// * `input` - The raw line typed by the user
    ///
    /// # Returns
    ///
    /// * `Ok(CommandResult)` with the message to show
    /// * `Err(LogicError)` if the input could not be parsed, applied or saved
    ///
    /// # Errors
    ///
    /// Returns `LogicError::Parse` for malformed input, `LogicError::Command`
    /// when the model rejects the command, and `LogicError::Storage` when the
    /// updated address book could not be saved.
    pub fn execute(&mut self, input: &str) -> Result<CommandResult, LogicError> {
        debug!(input, "Executing command");
        self.pending_listing = None;

        let command: Command = parse_command(input)?;
        let mutating: bool = command.is_mutating();
        let listing: Option<EntityKind> = listed_kind(&command);
        let name: &'static str = command.name();

        let transition: TransitionResult = apply(&self.model, command).inspect_err(
            |err: &CoreError| debug!(command = name, error = %err, "Command rejected"),
        )?;
        self.model = transition.new_model;
        self.pending_listing = listing;

        if mutating {
            self.storage
                .save(&self.model.address_book().to_snapshot())
                .inspect_err(|err: &PersistenceError| {
                    warn!(command = name, error = %err, "Could not save address book");
                })?;
        }

        Ok(transition.result)
    }

    /// Renders the list shown by the last list or find command, once.
    pub fn take_listing(&mut self) -> Option<String> {
        self.pending_listing
            .take()
            .map(|kind: EntityKind| render_listing(&self.model, kind))
    }
}

/// Returns the collection a list or find command brings into view.
const fn listed_kind(command: &Command) -> Option<EntityKind> {
    match command {
        Command::ListPersons | Command::FindPersons { .. } => Some(EntityKind::Person),
        Command::ListModules | Command::FindModules { .. } => Some(EntityKind::Module),
        Command::ListTasks { .. } | Command::FindTasks { .. } => Some(EntityKind::Task),
        _ => None,
    }
}

/// Renders the displayed entries of one collection as a numbered list.
#[must_use]
pub fn render_listing(model: &Model, kind: EntityKind) -> String {
    let lines: Vec<String> = match kind {
        EntityKind::Person => model
            .filtered_persons()
            .iter()
            .map(|person: &&Person| person.to_string())
            .collect(),
        EntityKind::Module => model
            .filtered_modules()
            .iter()
            .map(|module: &&Module| module.summary())
            .collect(),
        EntityKind::Task => model
            .filtered_tasks()
            .iter()
            .map(|task: &&Task| render_task(task))
            .collect(),
    };

    if lines.is_empty() {
        return format!("(no {kind}s to show)");
    }
    lines
        .iter()
        .enumerate()
        .map(|(position, line): (usize, &String)| format!("{}. {line}", position + 1))
        .collect::<Vec<String>>()
        .join("\n")
}

fn render_task(task: &Task) -> String {
    let mut line: String = format!("[{}] {task}", if task.is_complete() { "X" } else { " " });
    if let Some(priority) = task.priority_tag() {
        line.push_str(&format!(" [{priority}]"));
    }
    if let Some(deadline) = task.deadline_tag() {
        line.push_str(&format!(" [due {deadline}]"));
    }
    line
}
