// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Studybook command system.
//!
//! The address book is stored as a single pretty-printed JSON document.
//! Storage is either a file or an in-memory buffer; both go through the same
//! serialization so tests exercise the real document format.
//!
//! Loading re-validates every stored value and rebuilds the collections
//! through their bulk setters, so a document holding an invalid field, a
//! duplicate entity or a task for an unknown module is rejected as a whole.

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
#![allow(clippy::multiple_crate_versions)]

mod data_models;
mod error;

#[cfg(test)]
mod tests;

pub use data_models::{AddressBookData, ModuleData, PersonData, TaskData};
pub use error::PersistenceError;

use std::path::{Path, PathBuf};
use studybook::{AddressBook, AddressBookSnapshot};
use tracing::{debug, info, warn};

/// Where the document lives.
#[derive(Debug)]
enum Storage {
    Memory(Option<String>),
    File(PathBuf),
}

/// Persistence adapter for address book snapshots.
///
/// Storage selection happens once at construction time and is transparent
/// to callers.
#[derive(Debug)]
pub struct JsonPersistence {
    storage: Storage,
}

impl JsonPersistence {
    /// Creates an adapter holding the document in memory.
    ///
    /// Nothing is stored until the first `save`.
    #[must_use]
    pub const fn new_in_memory() -> Self {
        Self {
            storage: Storage::Memory(None),
        }
    }

    /// Creates an adapter backed by the file at `path`.
    ///
    /// The file does not need to exist yet; it is created on the first `save`.
    #[must_use]
    pub fn new_with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            storage: Storage::File(path.into()),
        }
    }

    /// Returns the backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match &self.storage {
            Storage::Memory(_) => None,
            Storage::File(path) => Some(path),
        }
    }

    /// Loads the stored address book.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(address_book))` holding the stored collections in order
    /// * `Ok(None)` if nothing has been stored yet
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read, is not valid JSON,
    /// holds a value failing its constraints, holds duplicate entities, or
    /// holds a task whose module is not stored.
    pub fn load(&self) -> Result<Option<AddressBook>, PersistenceError> {
        let document: String = match &self.storage {
            Storage::Memory(None) => {
                debug!("No address book stored in memory");
                return Ok(None);
            }
            Storage::Memory(Some(document)) => document.clone(),
            Storage::File(path) => {
                if !path.exists() {
                    warn!(path = %path.display(), "Data file not found, starting empty");
                    return Ok(None);
                }
                std::fs::read_to_string(path).map_err(|source: std::io::Error| {
                    PersistenceError::Io {
                        path: path.clone(),
                        source,
                    }
                })?
            }
        };

        let data: AddressBookData = serde_json::from_str(&document)?;
        let address_book: AddressBook = AddressBook::from_snapshot(data.to_snapshot()?)?;
        info!(summary = %address_book, "Loaded address book");

        Ok(Some(address_book))
    }

    /// Stores `snapshot`, replacing whatever was stored before.
    ///
    /// The whole document is rewritten; missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized or written.
    pub fn save(&mut self, snapshot: &AddressBookSnapshot) -> Result<(), PersistenceError> {
        let data: AddressBookData = AddressBookData::from(snapshot);
        let document: String = serde_json::to_string_pretty(&data)?;

        match &mut self.storage {
            Storage::Memory(stored) => {
                *stored = Some(document);
                debug!("Saved address book in memory");
            }
            Storage::File(path) => {
                write_file(path, &document)?;
                info!(
                    path = %path.display(),
                    persons = snapshot.persons.len(),
                    modules = snapshot.modules.len(),
                    tasks = snapshot.tasks.len(),
                    "Saved address book"
                );
            }
        }

        Ok(())
    }
}

fn write_file(path: &Path, document: &str) -> Result<(), PersistenceError> {
    let io_error = |source: std::io::Error| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path
        .parent()
        .filter(|parent: &&Path| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    std::fs::write(path, document).map_err(io_error)
}
