// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::logic::Logic;
use studybook_persistence::JsonPersistence;

/// A logic over empty in-memory storage with the given commands already run.
pub fn create_test_logic(commands: &[&str]) -> Logic {
    let mut logic: Logic = Logic::new(JsonPersistence::new_in_memory());
    for command in commands {
        logic.execute(command).unwrap();
    }
    logic
}

pub const ADD_ALICE: &str =
    "add n/Alice Pauline p/94351253 e/alice@example.com a/123, Jurong West Ave 6 t/friends";
pub const ADD_BENSON: &str =
    "add n/Benson Meier p/98765432 e/johnd@example.com a/311, Clementi Ave 2 t/owesMoney";
pub const ADD_MODULE: &str = "add-module m/CS2103T n/Software Engineering c/4";
pub const ADD_TASK: &str = "add-task m/cs2103t d/Finish UG";
