// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Validation predicates backing the value objects.
//!
//! Each predicate is pure and operates on already-trimmed input.

/// Special characters permitted inside the local part of an email.
const EMAIL_SPECIAL_CHARACTERS: &[char] = &['+', '_', '.', '-'];

/// Returns true if the value contains a non-whitespace character.
#[must_use]
pub fn is_not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Returns true if the value is a valid person name.
///
/// Names contain only ASCII alphanumerics and spaces, and start with an
/// alphanumeric.
#[must_use]
pub fn is_valid_name(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() => {
            chars.all(|c: char| c.is_ascii_alphanumeric() || c == ' ')
        }
        _ => false,
    }
}

/// Returns true if the value is at least three ASCII digits.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    value.len() >= 3 && value.chars().all(|c: char| c.is_ascii_digit())
}

/// Returns true if the value is a well-formed `local-part@domain` email.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    is_valid_email_local_part(local) && is_valid_email_domain(domain)
}

fn is_valid_email_local_part(local: &str) -> bool {
    // Rule: alphanumerics and the listed specials, bounded by alphanumerics
    let (Some(first), Some(last)) = (local.chars().next(), local.chars().last()) else {
        return false;
    };
    first.is_ascii_alphanumeric()
        && last.is_ascii_alphanumeric()
        && local
            .chars()
            .all(|c: char| c.is_ascii_alphanumeric() || EMAIL_SPECIAL_CHARACTERS.contains(&c))
}

fn is_valid_email_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some(last) = labels.last() else {
        return false;
    };

    // Rule: the top-level label is at least two characters
    if last.chars().count() < 2 {
        return false;
    }

    labels.iter().all(|label: &&str| is_valid_domain_label(label))
}

fn is_valid_domain_label(label: &str) -> bool {
    let (Some(first), Some(last)) = (label.chars().next(), label.chars().last()) else {
        return false;
    };
    first.is_ascii_alphanumeric()
        && last.is_ascii_alphanumeric()
        && label
            .chars()
            .all(|c: char| c.is_ascii_alphanumeric() || c == '-')
}

/// Returns true if the value is a non-empty ASCII alphanumeric tag name.
#[must_use]
pub fn is_valid_tag_name(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c: char| c.is_ascii_alphanumeric())
}

/// Returns true if the value is a module code such as `CS2103T`.
///
/// A module code is 2-3 letters, then 4 digits, then an optional letter.
/// Case is not significant.
#[must_use]
pub fn is_valid_module_code(value: &str) -> bool {
    let prefix_len: usize = value
        .chars()
        .take_while(char::is_ascii_alphabetic)
        .count();
    if !(2..=3).contains(&prefix_len) {
        return false;
    }

    let rest: &str = &value[prefix_len..];
    let digits_len: usize = rest.chars().take_while(char::is_ascii_digit).count();
    if digits_len != 4 {
        return false;
    }

    let suffix: &str = &rest[digits_len..];
    suffix.is_empty()
        || (suffix.chars().count() == 1 && suffix.chars().all(|c: char| c.is_ascii_alphabetic()))
}

/// Returns true if the value parses as a credit count in `0..=max`.
#[must_use]
pub fn is_valid_module_credit(value: &str, max: u8) -> bool {
    !value.is_empty()
        && value.chars().all(|c: char| c.is_ascii_digit())
        && value.parse::<u8>().is_ok_and(|credit: u8| credit <= max)
}

/// Returns true if the value is a positive integer without sign that fits in an `i32`.
#[must_use]
pub fn is_non_zero_unsigned_integer(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|c: char| c.is_ascii_digit())
        && value
            .parse::<i32>()
            .is_ok_and(|parsed: i32| parsed > 0)
}
