// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_person;
use crate::{Person, PersonEdit, Phone, Remark, Tag};
use std::collections::BTreeSet;

#[test]
fn test_same_person_with_different_phone() {
    let alice: Person = create_test_person("Alice Pauline");
    let edit: PersonEdit = PersonEdit {
        phone: Some(Phone::new("11111111").unwrap()),
        ..PersonEdit::default()
    };
    let edited: Person = alice.edit(&edit);

    assert!(alice.is_same_person(&edited));
    assert_ne!(alice, edited);
}

#[test]
fn test_different_name_is_different_person() {
    let alice: Person = create_test_person("Alice Pauline");
    let bob: Person = create_test_person("Bob Choo");

    assert!(!alice.is_same_person(&bob));
}

#[test]
fn test_empty_edit_returns_equal_person() {
    let alice: Person = create_test_person("Alice Pauline").with_remark(Remark::new("likes tea"));
    let edit: PersonEdit = PersonEdit::default();

    assert!(!edit.is_any_field_edited());
    assert_eq!(alice.edit(&edit), alice);
}

#[test]
fn test_edit_with_empty_tags_clears_tags() {
    let alice: Person = create_test_person("Alice Pauline");
    let edit: PersonEdit = PersonEdit {
        tags: Some(BTreeSet::new()),
        ..PersonEdit::default()
    };

    let edited: Person = alice.edit(&edit);
    assert!(edited.tags().is_empty());
    assert_eq!(edited.name(), alice.name());
}

#[test]
fn test_edit_keeps_remark() {
    let alice: Person = create_test_person("Alice Pauline").with_remark(Remark::new("likes tea"));
    let edit: PersonEdit = PersonEdit {
        phone: Some(Phone::new("999").unwrap()),
        ..PersonEdit::default()
    };

    assert_eq!(alice.edit(&edit).remark().value(), "likes tea");
}

#[test]
fn test_with_remark_changes_only_remark() {
    let alice: Person = create_test_person("Alice Pauline");
    let remarked: Person = alice.with_remark(Remark::new("random remark here"));

    assert_eq!(remarked.remark().value(), "random remark here");
    assert_eq!(remarked.name(), alice.name());
    assert_eq!(remarked.phone(), alice.phone());
    assert_eq!(remarked.email(), alice.email());
    assert_eq!(remarked.address(), alice.address());
    assert_eq!(remarked.tags(), alice.tags());
}

#[test]
fn test_person_display() {
    let mut alice: Person = create_test_person("Alice Pauline");
    let mut tags: BTreeSet<Tag> = alice.tags().clone();
    tags.insert(Tag::new("colleagues").unwrap());
    alice = alice.edit(&PersonEdit {
        tags: Some(tags),
        ..PersonEdit::default()
    });

    assert_eq!(
        format!("{alice}"),
        "Alice Pauline; Phone: 94351253; Email: alice@example.com; \
         Address: 123, Jurong West Ave 6, #08-111; Remark: ; Tags: [colleagues][friends]"
    );
}
