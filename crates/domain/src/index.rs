// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A position in a displayed list.
///
/// Users see one-based positions; lookups use the zero-based form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    /// Creates an index from a zero-based position.
    #[must_use]
    pub const fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    /// Creates an index from a one-based position.
    ///
    /// Returns `None` for zero, which has no one-based meaning.
    #[must_use]
    pub const fn from_one_based(one_based: usize) -> Option<Self> {
        match one_based.checked_sub(1) {
            Some(zero_based) => Some(Self { zero_based }),
            None => None,
        }
    }

    /// Returns the zero-based position.
    #[must_use]
    pub const fn zero_based(&self) -> usize {
        self.zero_based
    }

    /// Returns the one-based position.
    #[must_use]
    pub const fn one_based(&self) -> usize {
        self.zero_based + 1
    }
}

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
