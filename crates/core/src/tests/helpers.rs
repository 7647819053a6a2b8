// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AddressBook, AddressBookSnapshot, Model};
use studybook_domain::{
    Address, Email, Index, Module, ModuleCode, ModuleCredit, ModuleName, Name, Person, Phone, Tag,
    Task, TaskDescription,
};
use std::collections::BTreeSet;

pub fn create_test_person(name: &str, phone: &str, tags: &[&str]) -> Person {
    let tags: BTreeSet<Tag> = tags.iter().map(|tag: &&str| Tag::new(tag).unwrap()).collect();
    Person::new(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new("someone@example.com").unwrap(),
        Address::new("311, Clementi Ave 2, #02-25").unwrap(),
        tags,
    )
}

pub fn create_test_module(code: &str, name: &str) -> Module {
    Module::new(
        ModuleCode::new(code).unwrap(),
        ModuleName::new(name).unwrap(),
        ModuleCredit::new("4").unwrap(),
    )
}

pub fn create_test_task(module: &Module, description: &str) -> Task {
    Task::new(module.clone(), TaskDescription::new(description).unwrap())
}

/// Three persons, two modules and three tasks.
pub fn create_typical_model() -> Model {
    let software: Module = create_test_module("CS2103T", "Software Engineering");
    let communication: Module = create_test_module("CS2101", "Effective Communication");
    let snapshot: AddressBookSnapshot = AddressBookSnapshot {
        persons: vec![
            create_test_person("Alice Pauline", "94351253", &["friends"]),
            create_test_person("Benson Meier", "98765432", &["owesMoney", "friends"]),
            create_test_person("Carl Kurz", "95352563", &[]),
        ],
        tasks: vec![
            create_test_task(&software, "Finish UG"),
            create_test_task(&software, "Finish DG"),
            create_test_task(&communication, "Prepare pitch"),
        ],
        modules: vec![software, communication],
    };
    Model::new(AddressBook::from_snapshot(snapshot).unwrap())
}

pub fn index(one_based: usize) -> Index {
    Index::from_one_based(one_based).unwrap()
}
