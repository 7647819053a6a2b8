// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tags attachable to a task. A task carries at most one of each kind.

use crate::date::format_day_month_year;
use crate::error::DomainError;
use std::str::FromStr;
use time::Date;

/// The priority of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PriorityTag {
    /// Needs attention first.
    High,
    /// Default urgency.
    Medium,
    /// Can wait.
    Low,
}

impl PriorityTag {
    /// Describes the values this type accepts.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Priority tags should be one of HIGH, MEDIUM or LOW";

    /// Returns true if `value` names a priority, ignoring case.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        Self::from_str(value).is_ok()
    }

    /// Returns the canonical uppercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl FromStr for PriorityTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HIGH" => Ok(Self::High),
            "MEDIUM" => Ok(Self::Medium),
            "LOW" => Ok(Self::Low),
            _ => Err(DomainError::invalid(
                "priority tag",
                Self::MESSAGE_CONSTRAINTS,
            )),
        }
    }
}

impl std::fmt::Display for PriorityTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The date a task is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeadlineTag {
    date: Date,
}

impl DeadlineTag {
    /// Describes the values this type accepts.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Deadlines should be a valid calendar date in the format dd-MM-yyyy, e.g. 14-03-2024";

    /// Returns true if `date` is acceptable as a deadline.
    ///
    /// Deadlines fall in a four-digit common-era year.
    #[must_use]
    pub const fn is_valid_deadline(date: Date) -> bool {
        let year: i32 = date.year();
        year >= 1 && year <= 9999
    }

    /// Creates a new `DeadlineTag`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidField` if the date is not a valid deadline.
    pub const fn new(date: Date) -> Result<Self, DomainError> {
        if !Self::is_valid_deadline(date) {
            return Err(DomainError::invalid("deadline", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self { date })
    }

    /// Returns the due date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }
}

impl std::fmt::Display for DeadlineTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_day_month_year(self.date))
    }
}
