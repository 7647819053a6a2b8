// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_module, create_test_task};
use crate::{
    DeadlineTag, DomainError, PriorityTag, Task, TaskDescription, TaskEdit, TaskStatus,
    parse_day_month_year,
};

fn create_test_deadline() -> DeadlineTag {
    DeadlineTag::new(parse_day_month_year("14-03-2024").unwrap()).unwrap()
}

#[test]
fn test_new_task_is_incomplete_and_untagged() {
    let task: Task = create_test_task("CS2103T", "Finish UG");

    assert_eq!(task.status(), TaskStatus::Incomplete);
    assert_eq!(task.priority_tag(), None);
    assert_eq!(task.deadline_tag(), None);
}

#[test]
fn test_task_display() {
    let task: Task = create_test_task("CS2103T", "Finish UG");
    assert_eq!(format!("{task}"), "CS2103T; Description: Finish UG");
}

#[test]
fn test_mark_then_unmark_restores_task() {
    let task: Task = create_test_task("CS2103T", "Finish UG")
        .with_priority_tag(PriorityTag::High)
        .unwrap();

    let marked: Task = task.mark();
    assert!(marked.is_complete());
    assert_eq!(marked.priority_tag(), Some(PriorityTag::High));
    assert_eq!(marked.unmark(), task);
}

#[test]
fn test_identity_ignores_status_and_tags() {
    let task: Task = create_test_task("CS2103T", "Finish UG");
    let marked: Task = task.mark().with_deadline_tag(create_test_deadline()).unwrap();

    assert!(task.is_same_task(&marked));
    assert_ne!(task, marked);
}

#[test]
fn test_identity_depends_on_module_and_description() {
    let task: Task = create_test_task("CS2103T", "Finish UG");

    assert!(!task.is_same_task(&create_test_task("CS2101", "Finish UG")));
    assert!(!task.is_same_task(&create_test_task("CS2103T", "Finish DG")));
}

#[test]
fn test_second_priority_tag_is_rejected() {
    let task: Task = create_test_task("CS2103T", "Finish UG");
    let tagged: Task = task.with_priority_tag(PriorityTag::Low).unwrap();

    assert_eq!(tagged.priority_tag(), Some(PriorityTag::Low));
    assert_eq!(
        tagged.with_priority_tag(PriorityTag::High),
        Err(DomainError::PriorityTagAlreadyExists)
    );
    assert_eq!(tagged.priority_tag(), Some(PriorityTag::Low));
}

#[test]
fn test_second_deadline_tag_is_rejected() {
    let tagged: Task = create_test_task("CS2103T", "Finish UG")
        .with_deadline_tag(create_test_deadline())
        .unwrap();

    assert_eq!(
        tagged.with_deadline_tag(create_test_deadline()),
        Err(DomainError::DeadlineTagAlreadyExists)
    );
}

#[test]
fn test_edit_replaces_present_fields_only() {
    let task: Task = create_test_task("CS2103T", "Finish UG")
        .mark()
        .with_priority_tag(PriorityTag::Medium)
        .unwrap();
    let edit: TaskEdit = TaskEdit {
        module: Some(create_test_module("CS2101")),
        description: None,
    };

    let edited: Task = task.edit(&edit);
    assert_eq!(edited.module().code().value(), "CS2101");
    assert_eq!(edited.description().value(), "Finish UG");
    assert!(edited.is_complete());
    assert_eq!(edited.priority_tag(), Some(PriorityTag::Medium));
}

#[test]
fn test_empty_edit_returns_equal_task() {
    let task: Task = create_test_task("CS2103T", "Finish UG");
    assert_eq!(task.edit(&TaskEdit::default()), task);
}

#[test]
fn test_with_all_round_trips_fields() {
    let deadline: DeadlineTag = create_test_deadline();
    let task: Task = Task::with_all(
        create_test_module("CS2103T"),
        TaskDescription::new("Finish UG").unwrap(),
        TaskStatus::Complete,
        Some(PriorityTag::High),
        Some(deadline),
    );

    assert!(task.is_complete());
    assert_eq!(task.deadline_tag(), Some(deadline));
}
