// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, EditTaskDescriptor};
use crate::error::CoreError;
use crate::filter::{ModuleFilter, PersonFilter, TaskFilter};
use crate::state::{AddressBook, CommandResult, Model, TransitionResult};
use studybook_domain::{
    DeadlineTag, EntityKind, Index, Module, ModuleCode, Person, PersonEdit, PriorityTag, Remark,
    Task, TaskDescription, TaskEdit, TaskStatus,
};

/// Message returned by the help command.
pub const SHOWING_HELP_MESSAGE: &str = "Opened help window.";

/// Message returned by the exit command.
pub const EXIT_MESSAGE: &str = "Exiting Address Book as requested ...";

/// Applies a command to the current model, producing a new model and a result.
///
/// The current model is never modified. On failure nothing changes, so a
/// caller that discards the error keeps a consistent model.
///
/// # Arguments
///
/// * `model` - The current model (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new model and the result message
/// * `Err(CoreError)` if the command cannot be applied
///
/// # Errors
///
/// Returns an error if:
/// - An index does not address an entry of the displayed list
/// - The resulting entity would duplicate a different existing entity
/// - A task names a module that does not exist
/// - A task already carries the kind of tag being attached
pub fn apply(model: &Model, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::AddPerson { person } => add_person(model, person),
        Command::EditPerson { index, edit } => edit_person(model, index, &edit),
        Command::DeletePerson { index } => delete_person(model, index),
        Command::Remark { index, remark } => remark_person(model, index, remark),
        Command::ListPersons => {
            let mut new_model: Model = model.clone();
            new_model.set_person_filter(PersonFilter::All);
            Ok(transition(new_model, String::from("Listed all persons")))
        }
        Command::FindPersons { keywords } => {
            let mut new_model: Model = model.clone();
            new_model.set_person_filter(PersonFilter::NameContainsKeywords(keywords));
            let count: usize = new_model.filtered_persons().len();
            Ok(transition(new_model, format!("{count} persons listed!")))
        }
        Command::AddModule { module } => add_module(model, module),
        Command::DeleteModule { index } => delete_module(model, index),
        Command::ListModules => {
            let mut new_model: Model = model.clone();
            new_model.set_module_filter(ModuleFilter::All);
            Ok(transition(new_model, String::from("Listed all modules")))
        }
        Command::FindModules { keywords } => {
            let mut new_model: Model = model.clone();
            new_model.set_module_filter(ModuleFilter::ContainsKeywords(keywords));
            let count: usize = new_model.filtered_modules().len();
            Ok(transition(new_model, format!("{count} modules listed!")))
        }
        Command::AddTask {
            module_code,
            description,
        } => add_task(model, module_code, description),
        Command::EditTask { index, descriptor } => edit_task(model, index, descriptor),
        Command::DeleteTask { index } => delete_task(model, index),
        Command::Mark { index } => {
            let target: Task = resolve_task(model, index)?;
            let marked: Task = target.mark();
            replace_task(model, &target, marked, |task: &Task| format!("Marked Task: {task}"))
        }
        Command::Unmark { index } => {
            let target: Task = resolve_task(model, index)?;
            let unmarked: Task = target.unmark();
            replace_task(model, &target, unmarked, |task: &Task| {
                format!("Unmarked Task: {task}")
            })
        }
        Command::TagTask {
            index,
            priority_tag,
            deadline_tag,
        } => tag_task(model, index, priority_tag, deadline_tag),
        Command::ListTasks { status } => Ok(list_tasks(model, status)),
        Command::FindTasks { keywords } => {
            let mut new_model: Model = model.clone();
            new_model.set_task_filter(TaskFilter::DescriptionContainsKeywords(keywords));
            let count: usize = new_model.filtered_tasks().len();
            Ok(transition(new_model, format!("{count} tasks listed!")))
        }
        Command::Clear => Ok(transition(
            Model::new(AddressBook::new()),
            String::from("Address book has been cleared!"),
        )),
        Command::Help => Ok(TransitionResult {
            new_model: model.clone(),
            result: CommandResult {
                feedback: String::from(SHOWING_HELP_MESSAGE),
                show_help: true,
                exit: false,
            },
        }),
        Command::Exit => Ok(TransitionResult {
            new_model: model.clone(),
            result: CommandResult {
                feedback: String::from(EXIT_MESSAGE),
                show_help: false,
                exit: true,
            },
        }),
    }
}

fn transition(new_model: Model, feedback: String) -> TransitionResult {
    TransitionResult {
        new_model,
        result: CommandResult::message(feedback),
    }
}

/// Looks up the entry at `index` of a displayed list.
fn resolve<T: Clone>(displayed: &[&T], index: Index, kind: EntityKind) -> Result<T, CoreError> {
    displayed
        .get(index.zero_based())
        .map(|item: &&T| (*item).clone())
        .ok_or(CoreError::InvalidDisplayedIndex(kind))
}

fn resolve_person(model: &Model, index: Index) -> Result<Person, CoreError> {
    resolve(&model.filtered_persons(), index, EntityKind::Person)
}

fn resolve_module(model: &Model, index: Index) -> Result<Module, CoreError> {
    resolve(&model.filtered_modules(), index, EntityKind::Module)
}

fn resolve_task(model: &Model, index: Index) -> Result<Task, CoreError> {
    resolve(&model.filtered_tasks(), index, EntityKind::Task)
}

fn find_module(model: &Model, code: ModuleCode) -> Result<Module, CoreError> {
    model
        .address_book()
        .find_module(&code)
        .cloned()
        .ok_or(CoreError::ModuleNotFound(code))
}

fn add_person(model: &Model, person: Person) -> Result<TransitionResult, CoreError> {
    let mut new_model: Model = model.clone();
    let feedback: String = format!("New person added: {person}");
    new_model.address_book_mut().add_person(person)?;
    Ok(transition(new_model, feedback))
}

fn edit_person(model: &Model, index: Index, edit: &PersonEdit) -> Result<TransitionResult, CoreError> {
    let target: Person = resolve_person(model, index)?;
    let edited: Person = target.edit(edit);
    let feedback: String = format!("Edited Person: {edited}");

    let mut new_model: Model = model.clone();
    new_model.address_book_mut().set_person(&target, edited)?;
    new_model.set_person_filter(PersonFilter::All);
    Ok(transition(new_model, feedback))
}

fn delete_person(model: &Model, index: Index) -> Result<TransitionResult, CoreError> {
    let target: Person = resolve_person(model, index)?;

    let mut new_model: Model = model.clone();
    new_model.address_book_mut().remove_person(&target)?;
    Ok(transition(new_model, format!("Deleted Person: {target}")))
}

fn remark_person(model: &Model, index: Index, remark: Remark) -> Result<TransitionResult, CoreError> {
    let target: Person = resolve_person(model, index)?;
    let removing: bool = remark.is_empty();
    let edited: Person = target.with_remark(remark);
    let feedback: String = if removing {
        format!("Removed remark from Person: {edited}")
    } else {
        format!("Added remark to Person: {edited}")
    };

    let mut new_model: Model = model.clone();
    new_model.address_book_mut().set_person(&target, edited)?;
    Ok(transition(new_model, feedback))
}

fn add_module(model: &Model, module: Module) -> Result<TransitionResult, CoreError> {
    let mut new_model: Model = model.clone();
    let feedback: String = format!("New module added: {}", module.summary());
    new_model.address_book_mut().add_module(module)?;
    Ok(transition(new_model, feedback))
}

fn delete_module(model: &Model, index: Index) -> Result<TransitionResult, CoreError> {
    let target: Module = resolve_module(model, index)?;

    let mut new_model: Model = model.clone();
    let removed_tasks: usize = new_model.address_book_mut().remove_module(&target)?;
    let feedback: String = if removed_tasks == 0 {
        format!("Deleted Module: {}", target.summary())
    } else {
        format!(
            "Deleted Module: {} and its {removed_tasks} tasks",
            target.summary()
        )
    };
    Ok(transition(new_model, feedback))
}

fn add_task(
    model: &Model,
    module_code: ModuleCode,
    description: TaskDescription,
) -> Result<TransitionResult, CoreError> {
    let module: Module = find_module(model, module_code)?;
    let task: Task = Task::new(module, description);
    let feedback: String = format!("New task added: {task}");

    let mut new_model: Model = model.clone();
    new_model.address_book_mut().add_task(task)?;
    Ok(transition(new_model, feedback))
}

fn edit_task(
    model: &Model,
    index: Index,
    descriptor: EditTaskDescriptor,
) -> Result<TransitionResult, CoreError> {
    let target: Task = resolve_task(model, index)?;
    let module: Option<Module> = descriptor
        .module_code
        .map(|code: ModuleCode| find_module(model, code))
        .transpose()?;
    let edit: TaskEdit = TaskEdit {
        module,
        description: descriptor.description,
    };
    let edited: Task = target.edit(&edit);

    replace_task(model, &target, edited, |task: &Task| format!("Edited Task: {task}"))
}

fn delete_task(model: &Model, index: Index) -> Result<TransitionResult, CoreError> {
    let target: Task = resolve_task(model, index)?;

    let mut new_model: Model = model.clone();
    new_model.address_book_mut().remove_task(&target)?;
    Ok(transition(new_model, format!("Deleted Task: {target}")))
}

fn tag_task(
    model: &Model,
    index: Index,
    priority_tag: Option<PriorityTag>,
    deadline_tag: Option<DeadlineTag>,
) -> Result<TransitionResult, CoreError> {
    let target: Task = resolve_task(model, index)?;

    let mut tagged: Task = target.clone();
    if let Some(tag) = priority_tag {
        tagged = tagged.with_priority_tag(tag)?;
    }
    if let Some(tag) = deadline_tag {
        tagged = tagged.with_deadline_tag(tag)?;
    }

    replace_task(model, &target, tagged, |task: &Task| {
        format!("Tagged Task: {task}{}", describe_tags(task))
    })
}

fn describe_tags(task: &Task) -> String {
    let mut tags: String = String::new();
    if let Some(priority) = task.priority_tag() {
        tags.push_str(&format!(" [{priority}]"));
    }
    if let Some(deadline) = task.deadline_tag() {
        tags.push_str(&format!(" [due {deadline}]"));
    }
    tags
}

fn list_tasks(model: &Model, status: Option<TaskStatus>) -> TransitionResult {
    let mut new_model: Model = model.clone();
    let feedback: String = match status {
        Some(status) => {
            new_model.set_task_filter(TaskFilter::Status(status));
            format!("Listed all {status} tasks")
        }
        None => {
            new_model.set_task_filter(TaskFilter::All);
            String::from("Listed all tasks")
        }
    };
    transition(new_model, feedback)
}

/// Replaces `target` with `edited` through the task list and formats the result from `edited`.
fn replace_task<F>(
    model: &Model,
    target: &Task,
    edited: Task,
    describe: F,
) -> Result<TransitionResult, CoreError>
where
    F: FnOnce(&Task) -> String,
{
    let feedback: String = describe(&edited);

    let mut new_model: Model = model.clone();
    new_model.address_book_mut().set_task(target, edited)?;
    Ok(transition(new_model, feedback))
}
