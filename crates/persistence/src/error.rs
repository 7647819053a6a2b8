// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;
use studybook_domain::DomainError;
use thiserror::Error;

/// Errors that can occur while loading or saving the address book.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The data file could not be read or written.
    #[error("Could not access data file {}: {source}", .path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The stored document is not valid JSON for an address book.
    #[error("Data file is not a valid address book: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored value fails its constraints, or a collection holds duplicates.
    #[error("Illegal value in data file: {0}")]
    IllegalValue(#[from] DomainError),

    /// A stored task names a module that is not stored.
    #[error("Illegal value in data file: task '{description}' refers to unknown module {code}")]
    UnknownModule {
        /// The module code the task refers to.
        code: String,
        /// The task's description.
        description: String,
    },
}
