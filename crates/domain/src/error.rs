// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// The kind of entity held by a unique list.
///
/// Used to phrase duplicate and lookup failures for the right collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A contact in the address book.
    Person,
    /// A module in the module list.
    Module,
    /// A task in the task list.
    Task,
}

impl EntityKind {
    /// Returns the lowercase noun for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Module => "module",
            Self::Task => "task",
        }
    }

    /// Returns the name of the collection holding this kind.
    #[must_use]
    pub const fn container(&self) -> &'static str {
        match self {
            Self::Person => "address book",
            Self::Module => "module list",
            Self::Task => "task list",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value object was given a raw value failing its constraints.
    InvalidField {
        /// The field being constructed.
        field: &'static str,
        /// The fixed constraint description for the field.
        constraints: &'static str,
    },
    /// An entity with the same identity already exists in its collection.
    Duplicate(EntityKind),
    /// The entity to replace or remove is not in its collection.
    NotFound(EntityKind),
    /// The task already carries a priority tag.
    PriorityTagAlreadyExists,
    /// The task already carries a deadline tag.
    DeadlineTagAlreadyExists,
}

impl DomainError {
    /// Creates an `InvalidField` error.
    #[must_use]
    pub const fn invalid(field: &'static str, constraints: &'static str) -> Self {
        Self::InvalidField { field, constraints }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidField { constraints, .. } => write!(f, "{constraints}"),
            Self::Duplicate(kind) => {
                write!(f, "This {kind} already exists in the {}", kind.container())
            }
            Self::NotFound(kind) => {
                write!(f, "The {kind} could not be found in the {}", kind.container())
            }
            Self::PriorityTagAlreadyExists => write!(f, "This task already has a priority tag"),
            Self::DeadlineTagAlreadyExists => write!(f, "This task already has a deadline tag"),
        }
    }
}

impl std::error::Error for DomainError {}
