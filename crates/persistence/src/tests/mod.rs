// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod storage_tests;

use std::collections::BTreeSet;
use studybook::AddressBookSnapshot;
use studybook_domain::{
    Address, DeadlineTag, Email, Module, ModuleCode, ModuleCredit, ModuleName, Name, Person,
    Phone, PriorityTag, Remark, Tag, Task, TaskDescription, TaskStatus, parse_day_month_year,
};

pub fn create_test_person(name: &str) -> Person {
    let tags: BTreeSet<Tag> = [Tag::new("friends").unwrap()].into_iter().collect();
    Person::new(
        Name::new(name).unwrap(),
        Phone::new("94351253").unwrap(),
        Email::new("alice@example.com").unwrap(),
        Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
        tags,
    )
    .with_remark(Remark::new("Likes to swim."))
}

pub fn create_test_module(code: &str) -> Module {
    Module::new(
        ModuleCode::new(code).unwrap(),
        ModuleName::new("Software Engineering").unwrap(),
        ModuleCredit::new("4").unwrap(),
    )
}

/// Two persons, one module and two tasks, one of them completed and tagged.
pub fn create_test_snapshot() -> AddressBookSnapshot {
    let module: Module = create_test_module("CS2103T");
    let deadline: DeadlineTag =
        DeadlineTag::new(parse_day_month_year("14-03-2024").unwrap()).unwrap();
    AddressBookSnapshot {
        persons: vec![
            create_test_person("Alice Pauline"),
            create_test_person("Benson Meier"),
        ],
        tasks: vec![
            Task::new(module.clone(), TaskDescription::new("Finish UG").unwrap()),
            Task::with_all(
                module.clone(),
                TaskDescription::new("Finish DG").unwrap(),
                TaskStatus::Complete,
                Some(PriorityTag::High),
                Some(deadline),
            ),
        ],
        modules: vec![module],
    }
}
