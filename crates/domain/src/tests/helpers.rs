// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Address, Email, Module, ModuleCode, ModuleCredit, ModuleName, Name, Person, Phone, Tag, Task,
    TaskDescription,
};
use std::collections::BTreeSet;

pub fn create_test_person(name: &str) -> Person {
    let mut tags: BTreeSet<Tag> = BTreeSet::new();
    tags.insert(Tag::new("friends").unwrap());
    Person::new(
        Name::new(name).unwrap(),
        Phone::new("94351253").unwrap(),
        Email::new("alice@example.com").unwrap(),
        Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
        tags,
    )
}

pub fn create_test_module(code: &str) -> Module {
    Module::new(
        ModuleCode::new(code).unwrap(),
        ModuleName::new("Software Engineering").unwrap(),
        ModuleCredit::new("4").unwrap(),
    )
}

pub fn create_test_task(code: &str, description: &str) -> Task {
    Task::new(
        create_test_module(code),
        TaskDescription::new(description).unwrap(),
    )
}
