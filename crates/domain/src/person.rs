// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Contacts and their value objects.

use crate::error::EntityKind;
use crate::unique_list::ListItem;
use crate::validation::{
    is_not_blank, is_valid_email, is_valid_name, is_valid_phone, is_valid_tag_name,
};
use crate::value::validated_string;
use std::collections::BTreeSet;

validated_string! {
    /// A person's name.
    Name {
        field: "name",
        constraints: "Names should only contain alphanumeric characters and spaces, and it should not be blank",
        validator: is_valid_name,
    }
}

validated_string! {
    /// A person's phone number.
    Phone {
        field: "phone",
        constraints: "Phone numbers should only contain numbers, and it should be at least 3 digits long",
        validator: is_valid_phone,
    }
}

validated_string! {
    /// A person's email address.
    Email {
        field: "email",
        constraints: "Emails should be of the format local-part@domain and adhere to the following constraints:\n1. The local-part should only contain alphanumeric characters and these special characters, excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels separated by periods.\nThe domain name must:\n    - end with a domain label at least 2 characters long\n    - have each domain label start and end with alphanumeric characters\n    - have each domain label consist of alphanumeric characters, separated only by hyphens, if any.",
        validator: is_valid_email,
    }
}

validated_string! {
    /// A person's postal address.
    Address {
        field: "address",
        constraints: "Addresses can take any values, and it should not be blank",
        validator: is_not_blank,
    }
}

validated_string! {
    /// A free-form label attached to a person.
    Tag {
        field: "tag",
        constraints: "Tags names should be alphanumeric",
        validator: is_valid_tag_name,
    }
}

/// A free-form note on a person. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Remark {
    value: String,
}

impl Remark {
    /// Creates a new `Remark`. Any value is accepted.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the remark text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true if the remark holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Display for Remark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A contact in the address book.
///
/// Two persons are the *same person* when their names match, which is weaker
/// than full equality. Collections use the former for duplicate detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
    remark: Remark,
}

impl Person {
    /// Creates a new `Person` with an empty remark.
    #[must_use]
    pub const fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
            remark: Remark {
                value: String::new(),
            },
        }
    }

    /// Returns the name.
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the phone number.
    #[must_use]
    pub const fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the postal address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the tags in sorted order.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns the remark.
    #[must_use]
    pub const fn remark(&self) -> &Remark {
        &self.remark
    }

    /// Returns true if both persons have the same name.
    #[must_use]
    pub fn is_same_person(&self, other: &Self) -> bool {
        self.name == other.name
    }

    /// Returns a copy of this person carrying `remark`.
    #[must_use]
    pub fn with_remark(&self, remark: Remark) -> Self {
        Self {
            remark,
            ..self.clone()
        }
    }

    /// Returns a copy of this person with every field present in `edit` applied.
    ///
    /// The remark is always carried over.
    #[must_use]
    pub fn edit(&self, edit: &PersonEdit) -> Self {
        Self {
            name: edit.name.clone().unwrap_or_else(|| self.name.clone()),
            phone: edit.phone.clone().unwrap_or_else(|| self.phone.clone()),
            email: edit.email.clone().unwrap_or_else(|| self.email.clone()),
            address: edit.address.clone().unwrap_or_else(|| self.address.clone()),
            tags: edit.tags.clone().unwrap_or_else(|| self.tags.clone()),
            remark: self.remark.clone(),
        }
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Remark: {}; Tags: ",
            self.name, self.phone, self.email, self.address, self.remark
        )?;
        for tag in &self.tags {
            write!(f, "[{tag}]")?;
        }
        Ok(())
    }
}

impl ListItem for Person {
    const KIND: EntityKind = EntityKind::Person;

    fn is_same(&self, other: &Self) -> bool {
        self.is_same_person(other)
    }
}

/// A sparse patch over a person's editable fields.
///
/// Absent fields are left untouched by `Person::edit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonEdit {
    /// Replacement name.
    pub name: Option<Name>,
    /// Replacement phone number.
    pub phone: Option<Phone>,
    /// Replacement email address.
    pub email: Option<Email>,
    /// Replacement postal address.
    pub address: Option<Address>,
    /// Replacement tag set. `Some` of an empty set clears all tags.
    pub tags: Option<BTreeSet<Tag>>,
}

impl PersonEdit {
    /// Returns true if at least one field is present.
    #[must_use]
    pub const fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }
}
