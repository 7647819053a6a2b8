// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use studybook_domain::{
    DeadlineTag, Index, Module, ModuleCode, Person, PersonEdit, PriorityTag, Remark,
    TaskDescription, TaskStatus,
};

/// A sparse patch over a task's editable fields, as entered by the user.
///
/// The module is named by code and resolved against the module list when
/// the command is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTaskDescriptor {
    /// Code of the replacement module.
    pub module_code: Option<ModuleCode>,
    /// Replacement description.
    pub description: Option<TaskDescription>,
}

impl EditTaskDescriptor {
    /// Returns true if at least one field is present.
    #[must_use]
    pub const fn is_any_field_edited(&self) -> bool {
        self.module_code.is_some() || self.description.is_some()
    }
}

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes. Two commands are
/// equal when they are the same variant with equal arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a person to the address book.
    AddPerson {
        /// The person to add.
        person: Person,
    },
    /// Edit the displayed person at `index`.
    EditPerson {
        /// The displayed position of the person.
        index: Index,
        /// The fields to replace.
        edit: PersonEdit,
    },
    /// Delete the displayed person at `index`.
    DeletePerson {
        /// The displayed position of the person.
        index: Index,
    },
    /// Replace the remark of the displayed person at `index`.
    Remark {
        /// The displayed position of the person.
        index: Index,
        /// The new remark. An empty remark removes the existing one.
        remark: Remark,
    },
    /// Display every person.
    ListPersons,
    /// Display persons whose name contains any keyword.
    FindPersons {
        /// The keywords to match.
        keywords: Vec<String>,
    },
    /// Add a module.
    AddModule {
        /// The module to add.
        module: Module,
    },
    /// Delete the displayed module at `index` along with its tasks.
    DeleteModule {
        /// The displayed position of the module.
        index: Index,
    },
    /// Display every module.
    ListModules,
    /// Display modules matching any keyword.
    FindModules {
        /// The keywords to match.
        keywords: Vec<String>,
    },
    /// Add a task to an existing module.
    AddTask {
        /// The module the task belongs to.
        module_code: ModuleCode,
        /// What the task is.
        description: TaskDescription,
    },
    /// Edit the displayed task at `index`.
    EditTask {
        /// The displayed position of the task.
        index: Index,
        /// The fields to replace.
        descriptor: EditTaskDescriptor,
    },
    /// Delete the displayed task at `index`.
    DeleteTask {
        /// The displayed position of the task.
        index: Index,
    },
    /// Mark the displayed task at `index` as complete.
    Mark {
        /// The displayed position of the task.
        index: Index,
    },
    /// Mark the displayed task at `index` as incomplete.
    Unmark {
        /// The displayed position of the task.
        index: Index,
    },
    /// Attach tags to the displayed task at `index`.
    TagTask {
        /// The displayed position of the task.
        index: Index,
        /// The priority to attach, if any.
        priority_tag: Option<PriorityTag>,
        /// The deadline to attach, if any.
        deadline_tag: Option<DeadlineTag>,
    },
    /// Display tasks, optionally only those in the given state.
    ListTasks {
        /// The completion state to show, or every task if `None`.
        status: Option<TaskStatus>,
    },
    /// Display tasks whose description contains any keyword.
    FindTasks {
        /// The keywords to match.
        keywords: Vec<String>,
    },
    /// Remove every person, module and task.
    Clear,
    /// Show usage help.
    Help,
    /// End the session.
    Exit,
}

impl Command {
    /// Returns true if applying this command can change stored data.
    ///
    /// Filter changes do not count as stored data.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::AddPerson { .. }
                | Self::EditPerson { .. }
                | Self::DeletePerson { .. }
                | Self::Remark { .. }
                | Self::AddModule { .. }
                | Self::DeleteModule { .. }
                | Self::AddTask { .. }
                | Self::EditTask { .. }
                | Self::DeleteTask { .. }
                | Self::Mark { .. }
                | Self::Unmark { .. }
                | Self::TagTask { .. }
                | Self::Clear
        )
    }

    /// Returns the variant name, for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddPerson { .. } => "AddPerson",
            Self::EditPerson { .. } => "EditPerson",
            Self::DeletePerson { .. } => "DeletePerson",
            Self::Remark { .. } => "Remark",
            Self::ListPersons => "ListPersons",
            Self::FindPersons { .. } => "FindPersons",
            Self::AddModule { .. } => "AddModule",
            Self::DeleteModule { .. } => "DeleteModule",
            Self::ListModules => "ListModules",
            Self::FindModules { .. } => "FindModules",
            Self::AddTask { .. } => "AddTask",
            Self::EditTask { .. } => "EditTask",
            Self::DeleteTask { .. } => "DeleteTask",
            Self::Mark { .. } => "Mark",
            Self::Unmark { .. } => "Unmark",
            Self::TagTask { .. } => "TagTask",
            Self::ListTasks { .. } => "ListTasks",
            Self::FindTasks { .. } => "FindTasks",
            Self::Clear => "Clear",
            Self::Help => "Help",
            Self::Exit => "Exit",
        }
    }
}
