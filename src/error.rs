//! Error types for post loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading posts from disk
#[derive(Error, Debug)]
pub enum PostError {
    /// Directory or file missing/unreadable
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Front matter is malformed or lacks a required field
    #[error("Invalid front-matter in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// No file backs the requested id
    #[error("Post not found: '{id}'")]
    NotFound { id: String },

    /// Two files in the posts directory map to the same id
    #[error("Duplicate post id '{id}': {} and {}", .first.display(), .second.display())]
    DuplicateId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },
}

impl PostError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PostError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        PostError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T, E = PostError> = std::result::Result<T, E>;
