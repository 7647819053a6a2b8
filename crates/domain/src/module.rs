// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Modules and their value objects.

use crate::error::{DomainError, EntityKind};
use crate::unique_list::ListItem;
use crate::validation::{is_not_blank, is_valid_module_code, is_valid_module_credit};
use crate::value::validated_string;

/// A module code such as `CS2103T`.
///
/// Codes are normalized to uppercase so equality is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleCode {
    value: String,
}

impl ModuleCode {
    /// Describes the values this type accepts.
    pub const MESSAGE_CONSTRAINTS: &'static str = "Module codes should begin with 2 or 3 letters, followed by 4 digits and an optional letter suffix, e.g. CS2103T";

    /// Returns true if `value` is a well-formed module code in any case.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        is_valid_module_code(value)
    }

    /// Creates a new `ModuleCode`, normalizing it to uppercase.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidField` if the value is not a module code.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if !Self::is_valid(value) {
            return Err(DomainError::invalid("module code", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self {
            value: value.to_uppercase(),
        })
    }

    /// Returns the normalized code.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for ModuleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

validated_string! {
    /// The descriptive title of a module.
    ModuleName {
        field: "module name",
        constraints: "Module names can take any values, and it should not be blank",
        validator: is_not_blank,
    }
}

/// The credit weight of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleCredit {
    value: u8,
}

impl ModuleCredit {
    /// The largest credit count a module may carry.
    pub const MAX: u8 = 40;

    /// Describes the values this type accepts.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Module credits should be a non-negative integer no greater than 40";

    /// Returns true if `value` is a credit count within range.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        is_valid_module_credit(value, Self::MAX)
    }

    /// Creates a new `ModuleCredit` from its textual form.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidField` if the value is not a credit count in range.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if !Self::is_valid(value) {
            return Err(DomainError::invalid("module credit", Self::MESSAGE_CONSTRAINTS));
        }
        value
            .parse::<u8>()
            .map(|value: u8| Self { value })
            .map_err(|_| DomainError::invalid("module credit", Self::MESSAGE_CONSTRAINTS))
    }

    /// Returns the credit count.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }
}

impl std::fmt::Display for ModuleCredit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A module being taken.
///
/// Modules are identified by their code alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    code: ModuleCode,
    name: ModuleName,
    credit: ModuleCredit,
}

impl Module {
    /// Creates a new `Module`.
    #[must_use]
    pub const fn new(code: ModuleCode, name: ModuleName, credit: ModuleCredit) -> Self {
        Self { code, name, credit }
    }

    /// Returns the module code.
    #[must_use]
    pub const fn code(&self) -> &ModuleCode {
        &self.code
    }

    /// Returns the module name.
    #[must_use]
    pub const fn name(&self) -> &ModuleName {
        &self.name
    }

    /// Returns the credit weight.
    #[must_use]
    pub const fn credit(&self) -> ModuleCredit {
        self.credit
    }

    /// Returns true if both modules have the same code.
    #[must_use]
    pub fn is_same_module(&self, other: &Self) -> bool {
        self.code == other.code
    }

    /// Returns the one-line card form, e.g. `CS2103T: Software Engineering (4 MCs)`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}: {} ({} MCs)", self.code, self.name, self.credit)
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl ListItem for Module {
    const KIND: EntityKind = EntityKind::Module;

    fn is_same(&self, other: &Self) -> bool {
        self.is_same_module(other)
    }
}
