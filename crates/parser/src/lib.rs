// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Textual command grammar for the Studybook command system.
//!
//! Raw input is split into a command word and prefixed arguments, each
//! argument is validated into its value object, and the result is a
//! `studybook::Command` ready to be applied. Nothing here touches the model.

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

mod command_parser;
mod error;
mod field;
mod tokenizer;

#[cfg(test)]
mod tests;

pub use command_parser::{CommandWord, help_text, parse_command};
pub use error::ParseError;
pub use field::{
    parse_address, parse_deadline_tag, parse_email, parse_index, parse_keywords,
    parse_module_code, parse_module_credit, parse_module_name, parse_name, parse_phone,
    parse_priority_tag, parse_remark, parse_tag, parse_tags, parse_task_description,
    parse_task_status,
};
pub use tokenizer::{
    ArgumentMultimap, PREFIX_ADDRESS, PREFIX_CREDIT, PREFIX_DEADLINE, PREFIX_DESCRIPTION,
    PREFIX_EMAIL, PREFIX_MODULE, PREFIX_NAME, PREFIX_PHONE, PREFIX_PRIORITY, PREFIX_REMARK,
    PREFIX_STATUS, PREFIX_TAG, Prefix, tokenize,
};
