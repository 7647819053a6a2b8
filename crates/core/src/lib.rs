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

mod apply;
mod command;
mod error;
mod filter;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{EXIT_MESSAGE, SHOWING_HELP_MESSAGE, apply};
pub use command::{Command, EditTaskDescriptor};
pub use error::CoreError;
pub use filter::{ModuleFilter, PersonFilter, TaskFilter};
pub use state::{AddressBook, AddressBookSnapshot, CommandResult, Model, TransitionResult};
