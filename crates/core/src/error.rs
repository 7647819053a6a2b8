// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use studybook_domain::{DomainError, EntityKind, ModuleCode};

/// Errors that can occur when a command is applied to the model.
///
/// Every variant is recoverable: the model is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The index does not address an entry of the displayed list.
    InvalidDisplayedIndex(EntityKind),
    /// A task refers to a module code absent from the module list.
    ModuleNotFound(ModuleCode),
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDisplayedIndex(kind) => {
                write!(f, "The {kind} index provided is invalid")
            }
            Self::ModuleNotFound(code) => {
                write!(f, "Module {code} does not exist in the module list")
            }
            Self::DomainViolation(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
