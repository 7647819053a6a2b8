// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsers turning raw argument text into value objects.
//!
//! Every parser trims its input before validating it and reports the
//! field's fixed constraint message on failure.

use crate::error::ParseError;
use std::collections::BTreeSet;
use studybook_domain::{
    Address, DeadlineTag, Email, Index, ModuleCode, ModuleCredit, ModuleName, Name, Phone,
    PriorityTag, Remark, Tag, TaskDescription, TaskStatus,
    is_non_zero_unsigned_integer, parse_day_month_year,
};
use time::Date;

/// Parses a one-based index.
///
/// # Errors
///
/// Returns `ParseError::InvalidIndex` for zero, negative, non-numeric or
/// out of range input.
pub fn parse_index(one_based: &str) -> Result<Index, ParseError> {
    let trimmed: &str = one_based.trim();
    if !is_non_zero_unsigned_integer(trimmed) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

/// Parses a person's name.
///
/// # Errors
///
/// Returns `ParseError::Constraint` if the name is invalid.
pub fn parse_name(name: &str) -> Result<Name, ParseError> {
    Ok(Name::new(name.trim())?)
}

/// Parses a phone number.
///
/// # Errors
///
/// Returns `ParseError::Constraint` if the phone number is invalid.
pub fn parse_phone(phone: &str) -> Result<Phone, ParseError> {
    Ok(Phone::new(phone.trim())?)
}

/// Parses an email address.
///
/// # Errors
///
/// Returns `ParseError::Constraint` if the email is invalid.
pub fn parse_email(email: &str) -> Result<Email, ParseError> {
    Ok(Email::new(email.trim())?)
}

/// Parses a postal address.
///
/// # Errors
///
/// Returns `ParseError::Constraint` if the address is blank.
pub fn parse_address(address: &str) -> Result<Address, ParseError> {
    Ok(Address::new(address.trim())?)
}

/// Parses a single tag.
///
/// # Errors
///
/// Returns `ParseError::Constraint` if the tag is not alphanumeric.
pub fn parse_tag(tag: &str) -> Result<Tag, ParseError> {
    Ok(Tag::new(tag.trim())?)
}

/// Parses repeated tags into a set, dropping exact duplicates.
///
/// Stops at the first invalid tag.
///
/// # Errors
///
/// Returns `ParseError::Constraint` for the first invalid tag.
pub fn parse_tags<S: AsRef<str>>(tags: &[S]) -> Result<BTreeSet<Tag>, ParseError> {
    tags.iter().map(|tag: &S| parse_tag(tag.as_ref())).collect()
}

/// Parses a remark. Any text, including none, is accepted.
#[must_use]
pub fn parse_remark(remark: &str) -> Remark {
    Remark::new(remark.trim())
}

/// Parses a module code.
///
/// # Errors
///
/// Returns `ParseError::Constraint` if the code is malformed.
pub fn parse_module_code(code: &str) -> Result<ModuleCode, ParseError> {
    Ok(ModuleCode::new(code.trim())?)
}

/// Parses a module name.
///
/// # Errors
///
/// Returns `ParseError::Constraint` if the name is blank.
pub fn parse_module_name(name: &str) -> Result<ModuleName, ParseError> {
    Ok(ModuleName::new(name.trim())?)
}

/// Parses a module credit count.
///
/// # Errors
///
/// Returns `ParseError::Constraint` if the credit is not a whole number in range.
pub fn parse_module_credit(credit: &str) -> Result<ModuleCredit, ParseError> {
    Ok(ModuleCredit::new(credit.trim())?)
}

/// Parses a task description.
///
/// # Errors
///
/// Returns `ParseError::Constraint` if the description is blank.
pub fn parse_task_description(description: &str) -> Result<TaskDescription, ParseError> {
    Ok(TaskDescription::new(description.trim())?)
}

/// Parses a task status, ignoring case.
///
/// # Errors
///
/// Returns `ParseError::Constraint` unless the text is `complete` or `incomplete`.
pub fn parse_task_status(status: &str) -> Result<TaskStatus, ParseError> {
    Ok(status.trim().parse::<TaskStatus>()?)
}

/// Parses a priority tag, ignoring case.
///
/// # Errors
///
/// Returns `ParseError::Constraint` unless the text is `HIGH`, `MEDIUM` or `LOW`.
pub fn parse_priority_tag(priority: &str) -> Result<PriorityTag, ParseError> {
    Ok(priority.trim().parse::<PriorityTag>()?)
}

/// Parses a deadline in `dd-MM-yyyy` form.
///
/// Grammar and calendar failures are reported as `MalformedDate` before the
/// deadline's own range check is consulted.
///
/// # Errors
///
/// Returns `ParseError::MalformedDate` if the text is not a real date, or
/// `ParseError::Constraint` if the date is outside the accepted range.
pub fn parse_deadline_tag(deadline: &str) -> Result<DeadlineTag, ParseError> {
    let trimmed: &str = deadline.trim();
    let date: Date = parse_day_month_year(trimmed).map_err(|_| ParseError::MalformedDate {
        input: trimmed.to_string(),
    })?;
    DeadlineTag::new(date).map_err(|_| ParseError::Constraint(DeadlineTag::MESSAGE_CONSTRAINTS))
}

/// Splits search text into keywords.
///
/// Returns `None` when no keyword is present.
#[must_use]
pub fn parse_keywords(text: &str) -> Option<Vec<String>> {
    let keywords: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        None
    } else {
        Some(keywords)
    }
}
