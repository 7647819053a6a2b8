// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CommandWord, ParseError, help_text, parse_command};
use std::collections::BTreeSet;
use studybook::{Command, EditTaskDescriptor};
use studybook_domain::{
    Address, Email, Index, Module, ModuleCode, ModuleCredit, ModuleName, Name, Person, PersonEdit,
    Phone, PriorityTag, Remark, Tag, TaskDescription, TaskStatus,
};

fn index(one_based: usize) -> Index {
    Index::from_one_based(one_based).unwrap()
}

fn invalid_format(command_word: CommandWord) -> ParseError {
    ParseError::InvalidCommandFormat {
        usage: command_word.usage(),
    }
}

#[test]
fn test_add_person() {
    let command: Command = parse_command(
        "add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 t/friends t/owesMoney",
    )
    .unwrap();

    let tags: BTreeSet<Tag> = [Tag::new("friends").unwrap(), Tag::new("owesMoney").unwrap()]
        .into_iter()
        .collect();
    let expected: Person = Person::new(
        Name::new("John Doe").unwrap(),
        Phone::new("98765432").unwrap(),
        Email::new("johnd@example.com").unwrap(),
        Address::new("311, Clementi Ave 2, #02-25").unwrap(),
        tags,
    );
    assert_eq!(command, Command::AddPerson { person: expected });
}

#[test]
fn test_add_person_repeated_name_takes_last() {
    let command: Command =
        parse_command("add n/Amy n/Bob p/111 e/bob@example.com a/Block 123").unwrap();

    let Command::AddPerson { person } = command else {
        panic!("expected an add command");
    };
    assert_eq!(person.name().value(), "Bob");
    assert!(person.tags().is_empty());
}

#[test]
fn test_add_person_missing_prefix_or_preamble() {
    assert_eq!(
        parse_command("add n/Bob p/111 e/bob@example.com"),
        Err(invalid_format(CommandWord::Add))
    );
    assert_eq!(
        parse_command("add junk n/Bob p/111 e/bob@example.com a/Block 123"),
        Err(invalid_format(CommandWord::Add))
    );
}

#[test]
fn test_add_person_invalid_field() {
    assert_eq!(
        parse_command("add n/Bob p/11a e/bob@example.com a/Block 123"),
        Err(ParseError::Constraint(Phone::MESSAGE_CONSTRAINTS))
    );
}

#[test]
fn test_edit_person_partial_fields() {
    let command: Command = parse_command("edit 2 p/91234567 e/johndoe@example.com").unwrap();

    assert_eq!(
        command,
        Command::EditPerson {
            index: index(2),
            edit: PersonEdit {
                phone: Some(Phone::new("91234567").unwrap()),
                email: Some(Email::new("johndoe@example.com").unwrap()),
                ..PersonEdit::default()
            },
        }
    );
}

#[test]
fn test_edit_person_empty_tag_clears_tags() {
    let command: Command = parse_command("edit 1 t/").unwrap();

    assert_eq!(
        command,
        Command::EditPerson {
            index: index(1),
            edit: PersonEdit {
                tags: Some(BTreeSet::new()),
                ..PersonEdit::default()
            },
        }
    );
}

#[test]
fn test_edit_person_rejects_missing_fields_and_bad_index() {
    assert_eq!(parse_command("edit 1"), Err(ParseError::NoFieldEdited));
    assert_eq!(
        parse_command("edit 0 n/Amy"),
        Err(invalid_format(CommandWord::Edit))
    );
    assert_eq!(
        parse_command("edit n/Amy"),
        Err(invalid_format(CommandWord::Edit))
    );
}

#[test]
fn test_index_commands() {
    assert_eq!(
        parse_command("delete 3").unwrap(),
        Command::DeletePerson { index: index(3) }
    );
    assert_eq!(
        parse_command("delete-module 1").unwrap(),
        Command::DeleteModule { index: index(1) }
    );
    assert_eq!(
        parse_command("delete-task  2 ").unwrap(),
        Command::DeleteTask { index: index(2) }
    );
    assert_eq!(
        parse_command("mark 1").unwrap(),
        Command::Mark { index: index(1) }
    );
    assert_eq!(
        parse_command("unmark 1").unwrap(),
        Command::Unmark { index: index(1) }
    );
    assert_eq!(
        parse_command("mark abc"),
        Err(invalid_format(CommandWord::Mark))
    );
    assert_eq!(
        parse_command("delete"),
        Err(invalid_format(CommandWord::Delete))
    );
}

#[test]
fn test_remark() {
    assert_eq!(
        parse_command("remark 2 r/random remark here").unwrap(),
        Command::Remark {
            index: index(2),
            remark: Remark::new("random remark here"),
        }
    );
    assert_eq!(
        parse_command("remark 1").unwrap(),
        Command::Remark {
            index: index(1),
            remark: Remark::new(""),
        }
    );
}

#[test]
fn test_find_commands_split_keywords() {
    assert_eq!(
        parse_command("find  Alice \t Bob").unwrap(),
        Command::FindPersons {
            keywords: vec![String::from("Alice"), String::from("Bob")],
        }
    );
    assert_eq!(
        parse_command("find-module cs2103t").unwrap(),
        Command::FindModules {
            keywords: vec![String::from("cs2103t")],
        }
    );
    assert_eq!(
        parse_command("find-task   "),
        Err(invalid_format(CommandWord::FindTask))
    );
}

#[test]
fn test_add_module() {
    let command: Command =
        parse_command("add-module m/cs2103t n/Software Engineering c/4").unwrap();

    assert_eq!(
        command,
        Command::AddModule {
            module: Module::new(
                ModuleCode::new("CS2103T").unwrap(),
                ModuleName::new("Software Engineering").unwrap(),
                ModuleCredit::new("4").unwrap(),
            ),
        }
    );
    assert_eq!(
        parse_command("add-module m/CS2103T n/Software Engineering"),
        Err(invalid_format(CommandWord::AddModule))
    );
    assert_eq!(
        parse_command("add-module m/C2103 n/Software Engineering c/4"),
        Err(ParseError::Constraint(ModuleCode::MESSAGE_CONSTRAINTS))
    );
}

#[test]
fn test_add_and_edit_task() {
    assert_eq!(
        parse_command("add-task m/CS2103T d/Finish UG").unwrap(),
        Command::AddTask {
            module_code: ModuleCode::new("CS2103T").unwrap(),
            description: TaskDescription::new("Finish UG").unwrap(),
        }
    );
    assert_eq!(
        parse_command("edit-task 1 d/Finish DG").unwrap(),
        Command::EditTask {
            index: index(1),
            descriptor: EditTaskDescriptor {
                module_code: None,
                description: Some(TaskDescription::new("Finish DG").unwrap()),
            },
        }
    );
    assert_eq!(parse_command("edit-task 1"), Err(ParseError::NoFieldEdited));
    assert_eq!(
        parse_command("add-task d/Finish UG"),
        Err(invalid_format(CommandWord::AddTask))
    );
}

#[test]
fn test_tag_task() {
    let Command::TagTask {
        index: tagged,
        priority_tag,
        deadline_tag,
    } = parse_command("tag 1 pr/high dl/14-03-2024").unwrap()
    else {
        panic!("expected a tag command");
    };

    assert_eq!(tagged, index(1));
    assert_eq!(priority_tag, Some(PriorityTag::High));
    assert_eq!(deadline_tag.unwrap().to_string(), "14-03-2024");

    assert_eq!(parse_command("tag 1"), Err(ParseError::NoTagProvided));
    assert!(matches!(
        parse_command("tag 1 dl/31-02-2024"),
        Err(ParseError::MalformedDate { .. })
    ));
}

#[test]
fn test_list_tasks_with_optional_status() {
    assert_eq!(
        parse_command("list-tasks").unwrap(),
        Command::ListTasks { status: None }
    );
    assert_eq!(
        parse_command("list-tasks s/COMPLETE").unwrap(),
        Command::ListTasks {
            status: Some(TaskStatus::Complete),
        }
    );
    assert_eq!(
        parse_command("list-tasks s/done"),
        Err(ParseError::Constraint(TaskStatus::MESSAGE_CONSTRAINTS))
    );
}

#[test]
fn test_argumentless_commands() {
    assert_eq!(parse_command("list").unwrap(), Command::ListPersons);
    assert_eq!(parse_command("list-modules").unwrap(), Command::ListModules);
    assert_eq!(parse_command("clear").unwrap(), Command::Clear);
    assert_eq!(parse_command("  help  ").unwrap(), Command::Help);
    assert_eq!(parse_command("exit").unwrap(), Command::Exit);
}

#[test]
fn test_unknown_and_empty_input() {
    assert_eq!(parse_command("unknownCommand"), Err(ParseError::UnknownCommand));
    assert_eq!(parse_command("LIST"), Err(ParseError::UnknownCommand));
    assert_eq!(parse_command("   "), Err(invalid_format(CommandWord::Help)));
    assert_eq!(ParseError::UnknownCommand.to_string(), "Unknown command");
}

#[test]
fn test_invalid_format_message_embeds_usage() {
    let message: String = invalid_format(CommandWord::Delete).to_string();

    assert!(message.starts_with("Invalid command format! \ndelete: "));
    assert!(message.ends_with("Example: delete 1"));
}

#[test]
fn test_every_command_word_round_trips() {
    for command_word in CommandWord::ALL {
        assert_eq!(CommandWord::from_word(command_word.word()), Some(command_word));
        assert!(help_text().contains(command_word.usage()));
    }
}
