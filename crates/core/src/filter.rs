// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Predicates selecting the displayed subset of each collection.
//!
//! Filters are plain data so that commands carrying them compare by value.

use studybook_domain::{Module, Person, Task, TaskStatus};

/// Selects which persons are displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonFilter {
    /// Every person.
    #[default]
    All,
    /// Persons whose name contains any of the keywords as a whole word.
    NameContainsKeywords(Vec<String>),
}

impl PersonFilter {
    /// Returns true if `person` is displayed under this filter.
    #[must_use]
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Self::All => true,
            Self::NameContainsKeywords(keywords) => {
                contains_any_word(person.name().value(), keywords)
            }
        }
    }
}

/// Selects which modules are displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModuleFilter {
    /// Every module.
    #[default]
    All,
    /// Modules whose code equals, or whose name contains, any keyword.
    ContainsKeywords(Vec<String>),
}

impl ModuleFilter {
    /// Returns true if `module` is displayed under this filter.
    #[must_use]
    pub fn matches(&self, module: &Module) -> bool {
        match self {
            Self::All => true,
            Self::ContainsKeywords(keywords) => {
                keywords
                    .iter()
                    .any(|keyword: &String| module.code().value().eq_ignore_ascii_case(keyword))
                    || contains_any_word(module.name().value(), keywords)
            }
        }
    }
}

/// Selects which tasks are displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TaskFilter {
    /// Every task.
    #[default]
    All,
    /// Tasks in the given completion state.
    Status(TaskStatus),
    /// Tasks whose description contains any of the keywords as a whole word.
    DescriptionContainsKeywords(Vec<String>),
}

impl TaskFilter {
    /// Returns true if `task` is displayed under this filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => task.status() == *status,
            Self::DescriptionContainsKeywords(keywords) => {
                contains_any_word(task.description().value(), keywords)
            }
        }
    }
}

/// Returns true if any keyword equals a whitespace-separated word of `sentence`, ignoring case.
fn contains_any_word(sentence: &str, keywords: &[String]) -> bool {
    let words: Vec<String> = sentence.split_whitespace().map(str::to_lowercase).collect();
    keywords.iter().any(|keyword: &String| {
        let keyword: String = keyword.to_lowercase();
        words.iter().any(|word: &String| *word == keyword)
    })
}
