// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_person, create_test_snapshot};
use crate::{JsonPersistence, PersistenceError};
use std::path::PathBuf;
use studybook::{AddressBook, AddressBookSnapshot};
use studybook_domain::{DomainError, EntityKind};

#[test]
fn test_in_memory_starts_empty() {
    let persistence: JsonPersistence = JsonPersistence::new_in_memory();

    assert!(persistence.load().unwrap().is_none());
    assert!(persistence.path().is_none());
}

#[test]
fn test_in_memory_round_trip() {
    let mut persistence: JsonPersistence = JsonPersistence::new_in_memory();
    let snapshot: AddressBookSnapshot = create_test_snapshot();

    persistence.save(&snapshot).unwrap();

    let loaded: AddressBook = persistence.load().unwrap().unwrap();
    assert_eq!(loaded.to_snapshot(), snapshot);
}

#[test]
fn test_save_replaces_previous_document() {
    let mut persistence: JsonPersistence = JsonPersistence::new_in_memory();
    persistence.save(&create_test_snapshot()).unwrap();

    persistence.save(&AddressBookSnapshot::default()).unwrap();

    assert_eq!(persistence.load().unwrap(), Some(AddressBook::new()));
}

#[test]
fn test_missing_file_loads_nothing() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let persistence: JsonPersistence =
        JsonPersistence::new_with_file(dir.path().join("addressbook.json"));

    assert!(persistence.load().unwrap().is_none());
}

#[test]
fn test_file_round_trip_creates_parent_directories() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("data").join("addressbook.json");
    let snapshot: AddressBookSnapshot = create_test_snapshot();

    let mut persistence: JsonPersistence = JsonPersistence::new_with_file(&path);
    persistence.save(&snapshot).unwrap();

    assert!(path.exists());
    let reopened: JsonPersistence = JsonPersistence::new_with_file(&path);
    let loaded: AddressBook = reopened.load().unwrap().unwrap();
    assert_eq!(loaded.to_snapshot(), snapshot);
}

#[test]
fn test_file_that_is_not_json_is_rejected() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("addressbook.json");
    std::fs::write(&path, "not json at all").unwrap();

    let result: Result<Option<AddressBook>, PersistenceError> =
        JsonPersistence::new_with_file(&path).load();

    assert!(matches!(result, Err(PersistenceError::Serialization(_))));
}

#[test]
fn test_file_with_duplicate_persons_is_rejected() {
    let mut persistence: JsonPersistence = JsonPersistence::new_in_memory();
    let snapshot: AddressBookSnapshot = AddressBookSnapshot {
        persons: vec![
            create_test_person("Alice Pauline"),
            create_test_person("Alice Pauline"),
        ],
        ..AddressBookSnapshot::default()
    };
    persistence.save(&snapshot).unwrap();

    let result: Result<Option<AddressBook>, PersistenceError> = persistence.load();

    assert!(matches!(
        result,
        Err(PersistenceError::IllegalValue(DomainError::Duplicate(
            EntityKind::Person
        )))
    ));
}

#[test]
fn test_io_error_names_the_file() {
    let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
    let persistence: JsonPersistence = JsonPersistence::new_with_file(dir.path());

    let err: PersistenceError = persistence.load().unwrap_err();

    assert!(matches!(err, PersistenceError::Io { .. }));
    assert!(
        err.to_string()
            .contains(&dir.path().display().to_string())
    );
}
