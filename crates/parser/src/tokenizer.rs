// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Splitting an argument string into prefixed values.

use std::collections::BTreeMap;

/// A flag introducing an argument value, such as `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    /// Returns the flag text.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix("n/");
pub const PREFIX_PHONE: Prefix = Prefix("p/");
pub const PREFIX_EMAIL: Prefix = Prefix("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix("a/");
pub const PREFIX_TAG: Prefix = Prefix("t/");
pub const PREFIX_REMARK: Prefix = Prefix("r/");
pub const PREFIX_MODULE: Prefix = Prefix("m/");
pub const PREFIX_CREDIT: Prefix = Prefix("c/");
pub const PREFIX_DESCRIPTION: Prefix = Prefix("d/");
pub const PREFIX_STATUS: Prefix = Prefix("s/");
pub const PREFIX_PRIORITY: Prefix = Prefix("pr/");
pub const PREFIX_DEADLINE: Prefix = Prefix("dl/");

/// The values found for each prefix, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: BTreeMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Returns the text before the first prefix, trimmed.
    #[must_use]
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Returns the last value given for `prefix`.
    #[must_use]
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values: &Vec<String>| values.last())
            .map(String::as_str)
    }

    /// Returns every value given for `prefix`, in order.
    #[must_use]
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map_or(&[], Vec::as_slice)
    }

    /// Returns true if every one of `prefixes` has at least one value.
    #[must_use]
    pub fn are_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes
            .iter()
            .all(|prefix: &Prefix| self.values.contains_key(prefix))
    }
}

/// Splits `arguments` on the given prefixes.
///
/// A prefix is recognised only at the start of the string or after
/// whitespace, so `e/` inside `name/e/x` is part of a value. Values are
/// trimmed. Prefixes not listed are left inside the surrounding value.
#[must_use]
pub fn tokenize(arguments: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let padded: String = format!(" {arguments}");
    let mut positions: Vec<(usize, Prefix)> = Vec::new();

    for (offset, c) in padded.char_indices() {
        if !c.is_whitespace() {
            continue;
        }
        let start: usize = offset + c.len_utf8();
        if let Some(prefix) = prefixes
            .iter()
            .find(|prefix: &&Prefix| padded[start..].starts_with(prefix.as_str()))
        {
            positions.push((start, *prefix));
        }
    }

    let preamble_end: usize = positions
        .first()
        .map_or(padded.len(), |(start, _)| *start);
    let mut multimap: ArgumentMultimap = ArgumentMultimap {
        preamble: padded[..preamble_end].trim().to_string(),
        values: BTreeMap::new(),
    };

    for (position, (start, prefix)) in positions.iter().enumerate() {
        let value_start: usize = start + prefix.as_str().len();
        let value_end: usize = positions
            .get(position + 1)
            .map_or(padded.len(), |(next, _)| *next);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(padded[value_start..value_end].trim().to_string());
    }

    multimap
}
