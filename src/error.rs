// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors at the document boundary.
//!
//! Ranking itself cannot fail. Everything here comes from materializing
//! documents: reading files, parsing payloads, and checking ids.

use std::path::PathBuf;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A document file or directory could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON payload did not match `{"documents": [{"id", "text"}]}`.
    #[error("invalid document payload: {0}")]
    Json(#[from] serde_json::Error),

    /// A document was given an empty id.
    #[error("document at position {index} has an empty id")]
    EmptyId { index: usize },

    /// Two documents in one call share an id.
    #[error("duplicate document id '{0}'")]
    DuplicateId(String),

    /// A directory entry's name is not valid UTF-8 and cannot be used as an id.
    #[error("file name is not valid UTF-8: {}", .0.display())]
    InvalidFileName(PathBuf),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
