// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tasks belonging to modules.

use crate::error::{DomainError, EntityKind};
use crate::module::Module;
use crate::tag::{DeadlineTag, PriorityTag};
use crate::unique_list::ListItem;
use crate::validation::is_not_blank;
use crate::value::validated_string;
use std::str::FromStr;

validated_string! {
    /// What a task asks to be done.
    TaskDescription {
        field: "task description",
        constraints: "Task descriptions can take any values, and it should not be blank",
        validator: is_not_blank,
    }
}

/// Completion state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    /// Not yet done.
    #[default]
    Incomplete,
    /// Done.
    Complete,
}

impl TaskStatus {
    /// Describes the values this type accepts.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Task status should be either complete or incomplete";

    /// Returns true if `value` names a status, ignoring case.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        Self::from_str(value).is_ok()
    }

    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::Complete => "complete",
        }
    }

    /// Returns true for `Complete`.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl FromStr for TaskStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "incomplete" => Ok(Self::Incomplete),
            "complete" => Ok(Self::Complete),
            _ => Err(DomainError::invalid("task status", Self::MESSAGE_CONSTRAINTS)),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A unit of work for a module.
///
/// A task's identity is its module and description. Status and tags are
/// ignored by `is_same_task` but included in `==`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    module: Module,
    description: TaskDescription,
    status: TaskStatus,
    priority_tag: Option<PriorityTag>,
    deadline_tag: Option<DeadlineTag>,
}

impl Task {
    /// Creates a new incomplete, untagged task.
    #[must_use]
    pub const fn new(module: Module, description: TaskDescription) -> Self {
        Self {
            module,
            description,
            status: TaskStatus::Incomplete,
            priority_tag: None,
            deadline_tag: None,
        }
    }

    /// Creates a task with every field given.
    #[must_use]
    pub const fn with_all(
        module: Module,
        description: TaskDescription,
        status: TaskStatus,
        priority_tag: Option<PriorityTag>,
        deadline_tag: Option<DeadlineTag>,
    ) -> Self {
        Self {
            module,
            description,
            status,
            priority_tag,
            deadline_tag,
        }
    }

    /// Returns the module.
    #[must_use]
    pub const fn module(&self) -> &Module {
        &self.module
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the completion state.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns true if the task is complete.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.status.is_complete()
    }

    /// Returns the priority tag, if any.
    #[must_use]
    pub const fn priority_tag(&self) -> Option<PriorityTag> {
        self.priority_tag
    }

    /// Returns the deadline tag, if any.
    #[must_use]
    pub const fn deadline_tag(&self) -> Option<DeadlineTag> {
        self.deadline_tag
    }

    /// Returns true if both tasks share module code and description.
    #[must_use]
    pub fn is_same_task(&self, other: &Self) -> bool {
        self.module.is_same_module(&other.module) && self.description == other.description
    }

    /// Returns a completed copy of this task.
    #[must_use]
    pub fn mark(&self) -> Self {
        Self {
            status: TaskStatus::Complete,
            ..self.clone()
        }
    }

    /// Returns an incomplete copy of this task.
    #[must_use]
    pub fn unmark(&self) -> Self {
        Self {
            status: TaskStatus::Incomplete,
            ..self.clone()
        }
    }

    /// Returns a copy of this task carrying `tag`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PriorityTagAlreadyExists` if a priority tag is
    /// already attached.
    pub fn with_priority_tag(&self, tag: PriorityTag) -> Result<Self, DomainError> {
        if self.priority_tag.is_some() {
            return Err(DomainError::PriorityTagAlreadyExists);
        }
        Ok(Self {
            priority_tag: Some(tag),
            ..self.clone()
        })
    }

    /// Returns a copy of this task carrying `tag`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DeadlineTagAlreadyExists` if a deadline tag is
    /// already attached.
    pub fn with_deadline_tag(&self, tag: DeadlineTag) -> Result<Self, DomainError> {
        if self.deadline_tag.is_some() {
            return Err(DomainError::DeadlineTagAlreadyExists);
        }
        Ok(Self {
            deadline_tag: Some(tag),
            ..self.clone()
        })
    }

    /// Returns a copy of this task with every field present in `edit` applied.
    ///
    /// Status and tags are carried over.
    #[must_use]
    pub fn edit(&self, edit: &TaskEdit) -> Self {
        Self {
            module: edit.module.clone().unwrap_or_else(|| self.module.clone()),
            description: edit
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            ..self.clone()
        }
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}; Description: {}", self.module, self.description)
    }
}

impl ListItem for Task {
    const KIND: EntityKind = EntityKind::Task;

    fn is_same(&self, other: &Self) -> bool {
        self.is_same_task(other)
    }
}

/// A sparse patch over a task's editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    /// Replacement module.
    pub module: Option<Module>,
    /// Replacement description.
    pub description: Option<TaskDescription>,
}
