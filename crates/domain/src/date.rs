// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Strict `dd-MM-yyyy` calendar dates.

use time::Date;
use time::error::ParseFromDescription;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Two-digit day, two-digit month, four-digit year.
const DAY_MONTH_YEAR: &[BorrowedFormatItem<'static>] =
    format_description!("[day]-[month]-[year]");

/// Parses `value` as a strict `dd-MM-yyyy` date.
///
/// Impossible dates such as `31-02-2024` are rejected rather than rolled
/// over into the following month.
///
/// # Errors
///
/// Returns the parse error if the text does not match the grammar or does
/// not denote a real calendar date.
pub fn parse_day_month_year(value: &str) -> Result<Date, time::error::Parse> {
    if !has_day_month_year_shape(value) {
        return Err(ParseFromDescription::InvalidLiteral.into());
    }
    Date::parse(value, DAY_MONTH_YEAR)
}

/// Exactly `dd-dd-dddd` in ASCII; `[year]` alone would also accept a sign.
fn has_day_month_year_shape(value: &str) -> bool {
    let bytes: &[u8] = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(position, byte): (usize, &u8)| {
            if position == 2 || position == 5 {
                *byte == b'-'
            } else {
                byte.is_ascii_digit()
            }
        })
}

/// Formats `date` as `dd-MM-yyyy`.
#[must_use]
pub fn format_day_month_year(date: Date) -> String {
    format!(
        "{:02}-{:02}-{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}
