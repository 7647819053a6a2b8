// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the command-line grammar.

use studybook_domain::DomainError;

/// Reasons raw input cannot be turned into a command.
///
/// Every variant is raised before the model is consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The first word is not a known command word.
    UnknownCommand,
    /// The arguments do not follow the command's grammar.
    InvalidCommandFormat {
        /// The usage text of the command that was attempted.
        usage: &'static str,
    },
    /// An index is not a positive integer within range.
    InvalidIndex,
    /// A field value failed its constraints.
    Constraint(&'static str),
    /// A date does not match `dd-MM-yyyy` or names a day that does not exist.
    MalformedDate {
        /// The rejected text.
        input: String,
    },
    /// An edit command carried no field to change.
    NoFieldEdited,
    /// A tag command carried neither a priority nor a deadline.
    NoTagProvided,
    /// A domain rule other than a field constraint rejected the value.
    Domain(DomainError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand => write!(f, "Unknown command"),
            Self::InvalidCommandFormat { usage } => {
                write!(f, "Invalid command format! \n{usage}")
            }
            Self::InvalidIndex => write!(f, "Index is not a non-zero unsigned integer."),
            Self::Constraint(constraints) => write!(f, "{constraints}"),
            Self::MalformedDate { input } => {
                write!(f, "'{input}' is not a real calendar date in the format dd-MM-yyyy")
            }
            Self::NoFieldEdited => write!(f, "At least one field to edit must be provided."),
            Self::NoTagProvided => {
                write!(f, "At least one of a priority or a deadline tag must be provided.")
            }
            Self::Domain(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<DomainError> for ParseError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidField { constraints, .. } => Self::Constraint(constraints),
            other => Self::Domain(other),
        }
    }
}
