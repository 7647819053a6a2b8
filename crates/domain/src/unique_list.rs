// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ordered collections that reject identity duplicates.
//!
//! Insertion order is preserved and replacement happens in place, so the
//! position of an element only changes when something before it is removed.

use crate::error::{DomainError, EntityKind};
use crate::module::Module;
use crate::person::Person;
use crate::task::Task;

/// An element that can be stored in a `UniqueList`.
pub trait ListItem: Clone + PartialEq {
    /// The kind reported in duplicate and lookup failures.
    const KIND: EntityKind;

    /// The identity predicate used for duplicate detection.
    ///
    /// This is weaker than `PartialEq`.
    fn is_same(&self, other: &Self) -> bool;
}

/// Contacts, unique by name.
pub type UniquePersonList = UniqueList<Person>;

/// Modules, unique by module code.
pub type DistinctModuleList = UniqueList<Module>;

/// Tasks, unique by module and description.
pub type DistinctTaskList = UniqueList<Task>;

/// An ordered sequence in which no two elements share an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: ListItem> UniqueList<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns true if an element with the same identity as `item` is present.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing: &T| existing.is_same(item))
    }

    /// Appends `item` to the end of the list.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Duplicate` if an element with the same identity exists.
    pub fn add(&mut self, item: T) -> Result<(), DomainError> {
        if self.contains(&item) {
            return Err(DomainError::Duplicate(T::KIND));
        }
        self.items.push(item);
        Ok(())
    }

    /// Replaces `target` with `edited` at the same position.
    ///
    /// `edited` may share its identity with `target` but not with any other element.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `target` is not in the list
    /// - `edited` has the identity of an element other than `target`
    pub fn set(&mut self, target: &T, edited: T) -> Result<(), DomainError> {
        let position: usize = self
            .position_of(target)
            .ok_or(DomainError::NotFound(T::KIND))?;

        let collides: bool = self
            .items
            .iter()
            .enumerate()
            .any(|(i, existing): (usize, &T)| i != position && existing.is_same(&edited));
        if collides {
            return Err(DomainError::Duplicate(T::KIND));
        }

        self.items[position] = edited;
        Ok(())
    }

    /// Removes `item` from the list.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if `item` is not in the list.
    pub fn remove(&mut self, item: &T) -> Result<(), DomainError> {
        let position: usize = self
            .position_of(item)
            .ok_or(DomainError::NotFound(T::KIND))?;
        self.items.remove(position);
        Ok(())
    }

    /// Removes every element matching `predicate`, returning how many were removed.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before: usize = self.items.len();
        self.items.retain(|item: &T| !predicate(item));
        before - self.items.len()
    }

    /// Replaces the entire contents with `items`.
    ///
    /// The replacement is all-or-nothing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Duplicate` if `items` contains two elements with
    /// the same identity. The list is left unchanged.
    pub fn set_all(&mut self, items: Vec<T>) -> Result<(), DomainError> {
        if !Self::are_unique(&items) {
            return Err(DomainError::Duplicate(T::KIND));
        }
        self.items = items;
        Ok(())
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the elements in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // Exact equality first so a target is located even when an earlier
    // element merely shares its identity.
    fn position_of(&self, target: &T) -> Option<usize> {
        self.items.iter().position(|existing: &T| existing == target)
    }

    fn are_unique(items: &[T]) -> bool {
        items.iter().enumerate().all(|(i, item): (usize, &T)| {
            items[i + 1..]
                .iter()
                .all(|other: &T| !item.is_same(other))
        })
    }
}

impl<'a, T: ListItem> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
