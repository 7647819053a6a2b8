// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::date::{format_day_month_year, parse_day_month_year};
use crate::error::DomainError;
use crate::validation::is_not_blank;
use crate::value::validated_string;
use time::Date;

validated_string! {
    /// What an exam covers.
    ExamDescription {
        field: "exam description",
        constraints: "Exam descriptions can take any values, and it should not be blank",
        validator: is_not_blank,
    }
}

/// The day an exam is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExamDate {
    date: Date,
}

impl ExamDate {
    /// Describes the values this type accepts.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Exam dates should be a valid calendar date in the format dd-MM-yyyy";

    /// Returns true if `value` is a real `dd-MM-yyyy` date.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        parse_day_month_year(value).is_ok()
    }

    /// Creates a new `ExamDate` from its `dd-MM-yyyy` form.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidField` if the value is not a real date.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        parse_day_month_year(value)
            .map(|date: Date| Self { date })
            .map_err(|_| DomainError::invalid("exam date", Self::MESSAGE_CONSTRAINTS))
    }

    /// Returns the date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }
}

impl std::fmt::Display for ExamDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_day_month_year(self.date))
    }
}
