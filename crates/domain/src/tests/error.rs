// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, EntityKind, Phone};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::Duplicate(EntityKind::Person);
    assert_eq!(
        format!("{err}"),
        "This person already exists in the address book"
    );

    let err: DomainError = DomainError::Duplicate(EntityKind::Task);
    assert_eq!(format!("{err}"), "This task already exists in the task list");

    let err: DomainError = DomainError::Duplicate(EntityKind::Module);
    assert_eq!(
        format!("{err}"),
        "This module already exists in the module list"
    );

    let err: DomainError = DomainError::NotFound(EntityKind::Task);
    assert_eq!(
        format!("{err}"),
        "The task could not be found in the task list"
    );

    let err: DomainError = DomainError::PriorityTagAlreadyExists;
    assert_eq!(format!("{err}"), "This task already has a priority tag");

    let err: DomainError = DomainError::DeadlineTagAlreadyExists;
    assert_eq!(format!("{err}"), "This task already has a deadline tag");
}

#[test]
fn test_invalid_field_displays_constraints_only() {
    let err: DomainError = DomainError::invalid("phone", Phone::MESSAGE_CONSTRAINTS);
    assert_eq!(format!("{err}"), Phone::MESSAGE_CONSTRAINTS);
}
