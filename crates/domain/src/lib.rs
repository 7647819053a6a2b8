// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod date;
mod error;
mod exam;
mod index;
mod module;
mod person;
mod tag;
mod task;
mod unique_list;
mod validation;
mod value;

#[cfg(test)]
mod tests;

pub use date::{format_day_month_year, parse_day_month_year};
pub use error::{DomainError, EntityKind};
pub use exam::{ExamDate, ExamDescription};
pub use index::Index;
pub use module::{Module, ModuleCode, ModuleCredit, ModuleName};
pub use person::{Address, Email, Name, Person, PersonEdit, Phone, Remark, Tag};
pub use tag::{DeadlineTag, PriorityTag};
pub use task::{Task, TaskDescription, TaskEdit, TaskStatus};
pub use unique_list::{DistinctModuleList, DistinctTaskList, ListItem, UniqueList, UniquePersonList};
pub use validation::is_non_zero_unsigned_integer;
