// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command words and the grammar of each command's arguments.

use crate::error::ParseError;
use crate::field::{
    parse_address, parse_deadline_tag, parse_email, parse_index, parse_keywords,
    parse_module_code, parse_module_credit, parse_module_name, parse_name, parse_phone,
    parse_priority_tag, parse_remark, parse_tags, parse_task_description, parse_task_status,
};
use crate::tokenizer::{
    ArgumentMultimap, PREFIX_ADDRESS, PREFIX_CREDIT, PREFIX_DEADLINE, PREFIX_DESCRIPTION,
    PREFIX_EMAIL, PREFIX_MODULE, PREFIX_NAME, PREFIX_PHONE, PREFIX_PRIORITY, PREFIX_REMARK,
    PREFIX_STATUS, PREFIX_TAG, Prefix, tokenize,
};
use std::collections::BTreeSet;
use studybook::{Command, EditTaskDescriptor};
use studybook_domain::{DeadlineTag, Index, Module, Person, PersonEdit, PriorityTag, Tag};
use tracing::debug;

/// Every command the grammar recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandWord {
    Add,
    Edit,
    Delete,
    Remark,
    List,
    Find,
    AddModule,
    DeleteModule,
    ListModules,
    FindModule,
    AddTask,
    EditTask,
    DeleteTask,
    Mark,
    Unmark,
    Tag,
    ListTasks,
    FindTask,
    Clear,
    Help,
    Exit,
}

impl CommandWord {
    /// Every command word, in the order help lists them.
    pub const ALL: [Self; 21] = [
        Self::Add,
        Self::Edit,
        Self::Delete,
        Self::Remark,
        Self::List,
        Self::Find,
        Self::AddModule,
        Self::DeleteModule,
        Self::ListModules,
        Self::FindModule,
        Self::AddTask,
        Self::EditTask,
        Self::DeleteTask,
        Self::Mark,
        Self::Unmark,
        Self::Tag,
        Self::ListTasks,
        Self::FindTask,
        Self::Clear,
        Self::Help,
        Self::Exit,
    ];

    /// Returns the word typed to invoke the command.
    #[must_use]
    pub const fn word(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Remark => "remark",
            Self::List => "list",
            Self::Find => "find",
            Self::AddModule => "add-module",
            Self::DeleteModule => "delete-module",
            Self::ListModules => "list-modules",
            Self::FindModule => "find-module",
            Self::AddTask => "add-task",
            Self::EditTask => "edit-task",
            Self::DeleteTask => "delete-task",
            Self::Mark => "mark",
            Self::Unmark => "unmark",
            Self::Tag => "tag",
            Self::ListTasks => "list-tasks",
            Self::FindTask => "find-task",
            Self::Clear => "clear",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }

    /// Returns the usage text shown when the arguments are malformed.
    #[must_use]
    pub const fn usage(&self) -> &'static str {
        match self {
            Self::Add => {
                "add: Adds a person to the address book. Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...\n\
                 Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 t/friends t/owesMoney"
            }
            Self::Edit => {
                "edit: Edits the details of the person identified by the index number used in the displayed person list. \
                 Existing values will be overwritten by the input values.\n\
                 Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...\n\
                 Example: edit 1 p/91234567 e/johndoe@example.com"
            }
            Self::Delete => {
                "delete: Deletes the person identified by the index number used in the displayed person list.\n\
                 Parameters: INDEX (must be a positive integer)\n\
                 Example: delete 1"
            }
            Self::Remark => {
                "remark: Edits the remark of the person identified by the index number used in the displayed person list. \
                 Existing remark will be overwritten by the input.\n\
                 Parameters: INDEX (must be a positive integer) r/[REMARK]\n\
                 Example: remark 1 r/Likes to swim."
            }
            Self::List => "list: Lists all persons.",
            Self::Find => {
                "find: Finds all persons whose names contain any of the specified keywords (case-insensitive) \
                 and displays them as a list with index numbers.\n\
                 Parameters: KEYWORD [MORE_KEYWORDS]...\n\
                 Example: find alice bob charlie"
            }
            Self::AddModule => {
                "add-module: Adds a module. Parameters: m/CODE n/NAME c/CREDIT\n\
                 Example: add-module m/CS2103T n/Software Engineering c/4"
            }
            Self::DeleteModule => {
                "delete-module: Deletes the module identified by the index number used in the displayed module list, \
                 together with its tasks.\n\
                 Parameters: INDEX (must be a positive integer)\n\
                 Example: delete-module 1"
            }
            Self::ListModules => "list-modules: Lists all modules.",
            Self::FindModule => {
                "find-module: Finds all modules whose code or name contains any of the specified keywords (case-insensitive).\n\
                 Parameters: KEYWORD [MORE_KEYWORDS]...\n\
                 Example: find-module CS2103T engineering"
            }
            Self::AddTask => {
                "add-task: Adds a task to an existing module. Parameters: m/CODE d/DESCRIPTION\n\
                 Example: add-task m/CS2103T d/Finish UG"
            }
            Self::EditTask => {
                "edit-task: Edits the task identified by the index number used in the displayed task list.\n\
                 Parameters: INDEX (must be a positive integer) [m/CODE] [d/DESCRIPTION]\n\
                 Example: edit-task 1 d/Finish DG"
            }
            Self::DeleteTask => {
                "delete-task: Deletes the task identified by the index number used in the displayed task list.\n\
                 Parameters: INDEX (must be a positive integer)\n\
                 Example: delete-task 1"
            }
            Self::Mark => {
                "mark: Marks the task identified by the index number used in the displayed task list as complete.\n\
                 Parameters: INDEX (must be a positive integer)\n\
                 Example: mark 1"
            }
            Self::Unmark => {
                "unmark: Marks the task identified by the index number used in the displayed task list as incomplete.\n\
                 Parameters: INDEX (must be a positive integer)\n\
                 Example: unmark 1"
            }
            Self::Tag => {
                "tag: Tags the task identified by the index number used in the displayed task list.\n\
                 Parameters: INDEX (must be a positive integer) [pr/PRIORITY] [dl/DEADLINE]\n\
                 Example: tag 1 pr/HIGH dl/14-03-2024"
            }
            Self::ListTasks => {
                "list-tasks: Lists all tasks, or only those with the given status.\n\
                 Parameters: [s/STATUS]\n\
                 Example: list-tasks s/incomplete"
            }
            Self::FindTask => {
                "find-task: Finds all tasks whose descriptions contain any of the specified keywords (case-insensitive).\n\
                 Parameters: KEYWORD [MORE_KEYWORDS]...\n\
                 Example: find-task tutorial"
            }
            Self::Clear => "clear: Clears all persons, modules and tasks.",
            Self::Help => "help: Shows program usage instructions.\nExample: help",
            Self::Exit => "exit: Exits the program.",
        }
    }

    /// Looks up a command word, matching case exactly.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|candidate: &Self| candidate.word() == word)
    }
}

impl std::fmt::Display for CommandWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.word())
    }
}

/// Returns the usage text of every command, one block per command.
#[must_use]
pub fn help_text() -> String {
    CommandWord::ALL
        .iter()
        .map(CommandWord::usage)
        .collect::<Vec<&str>>()
        .join("\n\n")
}

/// Parses one line of user input into a command.
///
/// The first whitespace-separated word selects the command; the rest of the
/// line is that command's arguments.
///
/// # Errors
///
/// Returns `ParseError::UnknownCommand` for an unrecognised command word,
/// `ParseError::InvalidCommandFormat` when the arguments break the command's
/// grammar, and a field error when a value fails its constraints.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed: &str = input.trim();
    let (word, arguments): (&str, &str) = trimmed
        .find(char::is_whitespace)
        .map_or((trimmed, ""), |split: usize| trimmed.split_at(split));

    if word.is_empty() {
        return Err(invalid_format(CommandWord::Help));
    }

    let Some(command_word) = CommandWord::from_word(word) else {
        debug!(word, "Unknown command word");
        return Err(ParseError::UnknownCommand);
    };

    parse_arguments(command_word, arguments).inspect_err(|err: &ParseError| {
        debug!(command = %command_word, error = %err, "Rejected command arguments");
    })
}

fn parse_arguments(command_word: CommandWord, arguments: &str) -> Result<Command, ParseError> {
    match command_word {
        CommandWord::Add => parse_add_person(arguments),
        CommandWord::Edit => parse_edit_person(arguments),
        CommandWord::Delete => Ok(Command::DeletePerson {
            index: parse_index_argument(arguments, command_word)?,
        }),
        CommandWord::Remark => parse_remark_command(arguments),
        CommandWord::List => Ok(Command::ListPersons),
        CommandWord::Find => Ok(Command::FindPersons {
            keywords: parse_keywords_argument(arguments, command_word)?,
        }),
        CommandWord::AddModule => parse_add_module(arguments),
        CommandWord::DeleteModule => Ok(Command::DeleteModule {
            index: parse_index_argument(arguments, command_word)?,
        }),
        CommandWord::ListModules => Ok(Command::ListModules),
        CommandWord::FindModule => Ok(Command::FindModules {
            keywords: parse_keywords_argument(arguments, command_word)?,
        }),
        CommandWord::AddTask => parse_add_task(arguments),
        CommandWord::EditTask => parse_edit_task(arguments),
        CommandWord::DeleteTask => Ok(Command::DeleteTask {
            index: parse_index_argument(arguments, command_word)?,
        }),
        CommandWord::Mark => Ok(Command::Mark {
            index: parse_index_argument(arguments, command_word)?,
        }),
        CommandWord::Unmark => Ok(Command::Unmark {
            index: parse_index_argument(arguments, command_word)?,
        }),
        CommandWord::Tag => parse_tag_task(arguments),
        CommandWord::ListTasks => parse_list_tasks(arguments),
        CommandWord::FindTask => Ok(Command::FindTasks {
            keywords: parse_keywords_argument(arguments, command_word)?,
        }),
        CommandWord::Clear => Ok(Command::Clear),
        CommandWord::Help => Ok(Command::Help),
        CommandWord::Exit => Ok(Command::Exit),
    }
}

const fn invalid_format(command_word: CommandWord) -> ParseError {
    ParseError::InvalidCommandFormat {
        usage: command_word.usage(),
    }
}

/// Parses arguments consisting of a single index.
fn parse_index_argument(arguments: &str, command_word: CommandWord) -> Result<Index, ParseError> {
    parse_index(arguments).map_err(|_| invalid_format(command_word))
}

fn parse_preamble_index(
    multimap: &ArgumentMultimap,
    command_word: CommandWord,
) -> Result<Index, ParseError> {
    parse_index(multimap.preamble()).map_err(|_| invalid_format(command_word))
}

fn parse_keywords_argument(
    arguments: &str,
    command_word: CommandWord,
) -> Result<Vec<String>, ParseError> {
    parse_keywords(arguments).ok_or_else(|| invalid_format(command_word))
}

/// Returns the value of a prefix that the caller has already checked is present.
fn required<'a>(
    multimap: &'a ArgumentMultimap,
    prefix: Prefix,
    command_word: CommandWord,
) -> Result<&'a str, ParseError> {
    multimap
        .value(prefix)
        .ok_or_else(|| invalid_format(command_word))
}

fn parse_add_person(arguments: &str) -> Result<Command, ParseError> {
    let multimap: ArgumentMultimap = tokenize(
        arguments,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_TAG,
        ],
    );
    if !multimap.are_present(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS])
        || !multimap.preamble().is_empty()
    {
        return Err(invalid_format(CommandWord::Add));
    }

    let person: Person = Person::new(
        parse_name(required(&multimap, PREFIX_NAME, CommandWord::Add)?)?,
        parse_phone(required(&multimap, PREFIX_PHONE, CommandWord::Add)?)?,
        parse_email(required(&multimap, PREFIX_EMAIL, CommandWord::Add)?)?,
        parse_address(required(&multimap, PREFIX_ADDRESS, CommandWord::Add)?)?,
        parse_tags(multimap.all_values(PREFIX_TAG))?,
    );
    Ok(Command::AddPerson { person })
}

/// A lone empty `t/` clears the tags; no `t/` at all leaves them untouched.
fn parse_tags_for_edit(tags: &[String]) -> Result<Option<BTreeSet<Tag>>, ParseError> {
    match tags {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_tags(tags).map(Some),
    }
}

fn parse_edit_person(arguments: &str) -> Result<Command, ParseError> {
    let multimap: ArgumentMultimap = tokenize(
        arguments,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_TAG,
        ],
    );
    let index: Index = parse_preamble_index(&multimap, CommandWord::Edit)?;

    let edit: PersonEdit = PersonEdit {
        name: multimap.value(PREFIX_NAME).map(parse_name).transpose()?,
        phone: multimap.value(PREFIX_PHONE).map(parse_phone).transpose()?,
        email: multimap.value(PREFIX_EMAIL).map(parse_email).transpose()?,
        address: multimap.value(PREFIX_ADDRESS).map(parse_address).transpose()?,
        tags: parse_tags_for_edit(multimap.all_values(PREFIX_TAG))?,
    };
    if !edit.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }

    Ok(Command::EditPerson { index, edit })
}

fn parse_remark_command(arguments: &str) -> Result<Command, ParseError> {
    let multimap: ArgumentMultimap = tokenize(arguments, &[PREFIX_REMARK]);
    let index: Index = parse_preamble_index(&multimap, CommandWord::Remark)?;
    let remark_text: &str = multimap.value(PREFIX_REMARK).unwrap_or_default();

    Ok(Command::Remark {
        index,
        remark: parse_remark(remark_text),
    })
}

fn parse_add_module(arguments: &str) -> Result<Command, ParseError> {
    let multimap: ArgumentMultimap =
        tokenize(arguments, &[PREFIX_MODULE, PREFIX_NAME, PREFIX_CREDIT]);
    if !multimap.are_present(&[PREFIX_MODULE, PREFIX_NAME, PREFIX_CREDIT])
        || !multimap.preamble().is_empty()
    {
        return Err(invalid_format(CommandWord::AddModule));
    }

    let module: Module = Module::new(
        parse_module_code(required(&multimap, PREFIX_MODULE, CommandWord::AddModule)?)?,
        parse_module_name(required(&multimap, PREFIX_NAME, CommandWord::AddModule)?)?,
        parse_module_credit(required(&multimap, PREFIX_CREDIT, CommandWord::AddModule)?)?,
    );
    Ok(Command::AddModule { module })
}

fn parse_add_task(arguments: &str) -> Result<Command, ParseError> {
    let multimap: ArgumentMultimap = tokenize(arguments, &[PREFIX_MODULE, PREFIX_DESCRIPTION]);
    if !multimap.are_present(&[PREFIX_MODULE, PREFIX_DESCRIPTION])
        || !multimap.preamble().is_empty()
    {
        return Err(invalid_format(CommandWord::AddTask));
    }

    Ok(Command::AddTask {
        module_code: parse_module_code(required(&multimap, PREFIX_MODULE, CommandWord::AddTask)?)?,
        description: parse_task_description(required(
            &multimap,
            PREFIX_DESCRIPTION,
            CommandWord::AddTask,
        )?)?,
    })
}

fn parse_edit_task(arguments: &str) -> Result<Command, ParseError> {
    let multimap: ArgumentMultimap = tokenize(arguments, &[PREFIX_MODULE, PREFIX_DESCRIPTION]);
    let index: Index = parse_preamble_index(&multimap, CommandWord::EditTask)?;

    let descriptor: EditTaskDescriptor = EditTaskDescriptor {
        module_code: multimap
            .value(PREFIX_MODULE)
            .map(parse_module_code)
            .transpose()?,
        description: multimap
            .value(PREFIX_DESCRIPTION)
            .map(parse_task_description)
            .transpose()?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }

    Ok(Command::EditTask { index, descriptor })
}

fn parse_tag_task(arguments: &str) -> Result<Command, ParseError> {
    let multimap: ArgumentMultimap = tokenize(arguments, &[PREFIX_PRIORITY, PREFIX_DEADLINE]);
    let index: Index = parse_preamble_index(&multimap, CommandWord::Tag)?;

    let priority_tag: Option<PriorityTag> = multimap
        .value(PREFIX_PRIORITY)
        .map(parse_priority_tag)
        .transpose()?;
    let deadline_tag: Option<DeadlineTag> = multimap
        .value(PREFIX_DEADLINE)
        .map(parse_deadline_tag)
        .transpose()?;
    if priority_tag.is_none() && deadline_tag.is_none() {
        return Err(ParseError::NoTagProvided);
    }

    Ok(Command::TagTask {
        index,
        priority_tag,
        deadline_tag,
    })
}

fn parse_list_tasks(arguments: &str) -> Result<Command, ParseError> {
    let multimap: ArgumentMultimap = tokenize(arguments, &[PREFIX_STATUS]);
    if !multimap.preamble().is_empty() {
        return Err(invalid_format(CommandWord::ListTasks));
    }

    Ok(Command::ListTasks {
        status: multimap
            .value(PREFIX_STATUS)
            .map(parse_task_status)
            .transpose()?,
    })
}
