// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stored forms of the address book.
//!
//! Every field is kept as plain text and re-validated through the domain
//! constructors on load, so a hand-edited file cannot smuggle in a value
//! the command layer would reject.

use crate::error::PersistenceError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use studybook::AddressBookSnapshot;
use studybook_domain::{
    Address, DeadlineTag, DomainError, Email, Module, ModuleCode, ModuleCredit, ModuleName, Name,
    Person, Phone, PriorityTag, Remark, Tag, Task, TaskDescription, TaskStatus,
    format_day_month_year, parse_day_month_year,
};
use time::Date;

/// Serializable representation of a `Person`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonData {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub remark: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<&Person> for PersonData {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name().value().to_string(),
            phone: person.phone().value().to_string(),
            email: person.email().value().to_string(),
            address: person.address().value().to_string(),
            remark: person.remark().value().to_string(),
            tags: person
                .tags()
                .iter()
                .map(|tag: &Tag| tag.value().to_string())
                .collect(),
        }
    }
}

impl PersonData {
    /// Rebuilds the person, validating every field.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::IllegalValue` for the first invalid field.
    pub fn to_model(&self) -> Result<Person, PersistenceError> {
        let tags: BTreeSet<Tag> = self
            .tags
            .iter()
            .map(|tag: &String| Tag::new(tag))
            .collect::<Result<BTreeSet<Tag>, DomainError>>()?;
        let person: Person = Person::new(
            Name::new(&self.name)?,
            Phone::new(&self.phone)?,
            Email::new(&self.email)?,
            Address::new(&self.address)?,
            tags,
        );
        Ok(person.with_remark(Remark::new(&self.remark)))
    }
}

/// Serializable representation of a `Module`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleData {
    pub code: String,
    pub name: String,
    pub credit: u8,
}

impl From<&Module> for ModuleData {
    fn from(module: &Module) -> Self {
        Self {
            code: module.code().value().to_string(),
            name: module.name().value().to_string(),
            credit: module.credit().value(),
        }
    }
}

impl ModuleData {
    /// Rebuilds the module, validating every field.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::IllegalValue` for the first invalid field.
    pub fn to_model(&self) -> Result<Module, PersistenceError> {
        Ok(Module::new(
            ModuleCode::new(&self.code)?,
            ModuleName::new(&self.name)?,
            ModuleCredit::new(&self.credit.to_string())?,
        ))
    }
}

/// Serializable representation of a `Task`.
///
/// The module is stored by code and resolved against the stored modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskData {
    pub module: String,
    pub description: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline_tag: Option<String>,
}

impl From<&Task> for TaskData {
    fn from(task: &Task) -> Self {
        Self {
            module: task.module().code().value().to_string(),
            description: task.description().value().to_string(),
            status: task.status().as_str().to_string(),
            priority_tag: task
                .priority_tag()
                .map(|priority: PriorityTag| priority.as_str().to_string()),
            deadline_tag: task
                .deadline_tag()
                .map(|deadline: DeadlineTag| format_day_month_year(deadline.date())),
        }
    }
}

impl TaskData {
    /// Rebuilds the task, taking its module from `modules`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::IllegalValue` for the first invalid field, or
    /// `PersistenceError::UnknownModule` if no module has the stored code.
    pub fn to_model(&self, modules: &[Module]) -> Result<Task, PersistenceError> {
        let code: ModuleCode = ModuleCode::new(&self.module)?;
        let description: TaskDescription = TaskDescription::new(&self.description)?;
        let module: Module = modules
            .iter()
            .find(|module: &&Module| module.code() == &code)
            .cloned()
            .ok_or_else(|| PersistenceError::UnknownModule {
                code: code.value().to_string(),
                description: description.value().to_string(),
            })?;
        let status: TaskStatus = self.status.parse::<TaskStatus>()?;
        let priority_tag: Option<PriorityTag> = self
            .priority_tag
            .as_deref()
            .map(str::parse::<PriorityTag>)
            .transpose()?;
        let deadline_tag: Option<DeadlineTag> = self
            .deadline_tag
            .as_deref()
            .map(parse_deadline)
            .transpose()?;

        Ok(Task::with_all(
            module,
            description,
            status,
            priority_tag,
            deadline_tag,
        ))
    }
}

fn parse_deadline(value: &str) -> Result<DeadlineTag, DomainError> {
    let date: Date = parse_day_month_year(value)
        .map_err(|_| DomainError::invalid("deadline tag", DeadlineTag::MESSAGE_CONSTRAINTS))?;
    DeadlineTag::new(date)
}

/// Serializable representation of the whole address book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBookData {
    #[serde(default)]
    pub persons: Vec<PersonData>,
    #[serde(default)]
    pub modules: Vec<ModuleData>,
    #[serde(default)]
    pub tasks: Vec<TaskData>,
}

impl From<&AddressBookSnapshot> for AddressBookData {
    fn from(snapshot: &AddressBookSnapshot) -> Self {
        Self {
            persons: snapshot.persons.iter().map(PersonData::from).collect(),
            modules: snapshot.modules.iter().map(ModuleData::from).collect(),
            tasks: snapshot.tasks.iter().map(TaskData::from).collect(),
        }
    }
}

impl AddressBookData {
    /// Rebuilds a snapshot, validating every stored entity.
    ///
    /// Duplicates are not checked here; the address book rejects them when
    /// the snapshot is loaded.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure encountered.
    pub fn to_snapshot(&self) -> Result<AddressBookSnapshot, PersistenceError> {
        let persons: Vec<Person> = self
            .persons
            .iter()
            .map(PersonData::to_model)
            .collect::<Result<Vec<Person>, PersistenceError>>()?;
        let modules: Vec<Module> = self
            .modules
            .iter()
            .map(ModuleData::to_model)
            .collect::<Result<Vec<Module>, PersistenceError>>()?;
        let tasks: Vec<Task> = self
            .tasks
            .iter()
            .map(|task: &TaskData| task.to_model(&modules))
            .collect::<Result<Vec<Task>, PersistenceError>>()?;

        Ok(AddressBookSnapshot {
            persons,
            modules,
            tasks,
        })
    }
}
