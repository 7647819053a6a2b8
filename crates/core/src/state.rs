// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::filter::{ModuleFilter, PersonFilter, TaskFilter};
use studybook_domain::{
    DistinctModuleList, DistinctTaskList, DomainError, Module, ModuleCode, Person, Task,
    UniquePersonList,
};

/// A plain copy of every collection, exchanged with the persistence adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBookSnapshot {
    /// All persons in display order.
    pub persons: Vec<Person>,
    /// All modules in display order.
    pub modules: Vec<Module>,
    /// All tasks in display order.
    pub tasks: Vec<Task>,
}

/// The three entity collections.
///
/// Every mutation goes through the owning list, which enforces uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: UniquePersonList,
    modules: DistinctModuleList,
    tasks: DistinctTaskList,
}

impl AddressBook {
    /// Creates an empty address book.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            persons: UniquePersonList::new(),
            modules: DistinctModuleList::new(),
            tasks: DistinctTaskList::new(),
        }
    }

    /// Creates an address book holding the contents of `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Duplicate` if any of the snapshot's collections
    /// contains two entries with the same identity.
    pub fn from_snapshot(snapshot: AddressBookSnapshot) -> Result<Self, DomainError> {
        let mut address_book: Self = Self::new();
        address_book.persons.set_all(snapshot.persons)?;
        address_book.modules.set_all(snapshot.modules)?;
        address_book.tasks.set_all(snapshot.tasks)?;
        Ok(address_book)
    }

    /// Copies every collection into a snapshot.
    #[must_use]
    pub fn to_snapshot(&self) -> AddressBookSnapshot {
        AddressBookSnapshot {
            persons: self.persons.as_slice().to_vec(),
            modules: self.modules.as_slice().to_vec(),
            tasks: self.tasks.as_slice().to_vec(),
        }
    }

    /// Returns the persons.
    #[must_use]
    pub const fn persons(&self) -> &UniquePersonList {
        &self.persons
    }

    /// Returns the modules.
    #[must_use]
    pub const fn modules(&self) -> &DistinctModuleList {
        &self.modules
    }

    /// Returns the tasks.
    #[must_use]
    pub const fn tasks(&self) -> &DistinctTaskList {
        &self.tasks
    }

    /// Returns true if a person with the same identity exists.
    #[must_use]
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    /// Returns true if a module with the same code exists.
    #[must_use]
    pub fn has_module(&self, module: &Module) -> bool {
        self.modules.contains(module)
    }

    /// Returns true if a task with the same identity exists.
    #[must_use]
    pub fn has_task(&self, task: &Task) -> bool {
        self.tasks.contains(task)
    }

    /// Returns the module with the given code.
    #[must_use]
    pub fn find_module(&self, code: &ModuleCode) -> Option<&Module> {
        self.modules.iter().find(|module: &&Module| module.code() == code)
    }

    pub(crate) fn add_person(&mut self, person: Person) -> Result<(), DomainError> {
        self.persons.add(person)
    }

    pub(crate) fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), DomainError> {
        self.persons.set(target, edited)
    }

    pub(crate) fn remove_person(&mut self, person: &Person) -> Result<(), DomainError> {
        self.persons.remove(person)
    }

    pub(crate) fn add_module(&mut self, module: Module) -> Result<(), DomainError> {
        self.modules.add(module)
    }

    /// Removes the module and every task belonging to it, returning the number of tasks removed.
    pub(crate) fn remove_module(&mut self, module: &Module) -> Result<usize, DomainError> {
        self.modules.remove(module)?;
        Ok(self
            .tasks
            .remove_where(|task: &Task| task.module().is_same_module(module)))
    }

    pub(crate) fn add_task(&mut self, task: Task) -> Result<(), DomainError> {
        self.tasks.add(task)
    }

    pub(crate) fn set_task(&mut self, target: &Task, edited: Task) -> Result<(), DomainError> {
        self.tasks.set(target, edited)
    }

    pub(crate) fn remove_task(&mut self, task: &Task) -> Result<(), DomainError> {
        self.tasks.remove(task)
    }
}

impl std::fmt::Display for AddressBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} persons, {} modules, {} tasks",
            self.persons.len(),
            self.modules.len(),
            self.tasks.len()
        )
    }
}

/// The address book together with the filters defining what is displayed.
///
/// Command indices are resolved against the filtered views, never against
/// the backing collections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    address_book: AddressBook,
    person_filter: PersonFilter,
    module_filter: ModuleFilter,
    task_filter: TaskFilter,
}

impl Model {
    /// Creates a model displaying every entry of `address_book`.
    #[must_use]
    pub const fn new(address_book: AddressBook) -> Self {
        Self {
            address_book,
            person_filter: PersonFilter::All,
            module_filter: ModuleFilter::All,
            task_filter: TaskFilter::All,
        }
    }

    /// Returns the underlying collections.
    #[must_use]
    pub const fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    /// Returns the active person filter.
    #[must_use]
    pub const fn person_filter(&self) -> &PersonFilter {
        &self.person_filter
    }

    /// Returns the active module filter.
    #[must_use]
    pub const fn module_filter(&self) -> &ModuleFilter {
        &self.module_filter
    }

    /// Returns the active task filter.
    #[must_use]
    pub const fn task_filter(&self) -> &TaskFilter {
        &self.task_filter
    }

    /// Returns the displayed persons in order.
    #[must_use]
    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.address_book
            .persons()
            .iter()
            .filter(|person: &&Person| self.person_filter.matches(person))
            .collect()
    }

    /// Returns the displayed modules in order.
    #[must_use]
    pub fn filtered_modules(&self) -> Vec<&Module> {
        self.address_book
            .modules()
            .iter()
            .filter(|module: &&Module| self.module_filter.matches(module))
            .collect()
    }

    /// Returns the displayed tasks in order.
    #[must_use]
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.address_book
            .tasks()
            .iter()
            .filter(|task: &&Task| self.task_filter.matches(task))
            .collect()
    }

    pub(crate) const fn address_book_mut(&mut self) -> &mut AddressBook {
        &mut self.address_book
    }

    pub(crate) fn set_person_filter(&mut self, filter: PersonFilter) {
        self.person_filter = filter;
    }

    pub(crate) fn set_module_filter(&mut self, filter: ModuleFilter) {
        self.module_filter = filter;
    }

    pub(crate) fn set_task_filter(&mut self, filter: TaskFilter) {
        self.task_filter = filter;
    }
}

/// What a command reports back to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// The message shown to the user.
    pub feedback: String,
    /// Whether help should be shown.
    pub show_help: bool,
    /// Whether the session should end.
    pub exit: bool,
}

impl CommandResult {
    /// Creates a result carrying only a message.
    #[must_use]
    pub const fn message(feedback: String) -> Self {
        Self {
            feedback,
            show_help: false,
            exit: false,
        }
    }
}

/// The result of a successful command.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The model after the command.
    pub new_model: Model,
    /// The outcome reported to the caller.
    pub result: CommandResult,
}
