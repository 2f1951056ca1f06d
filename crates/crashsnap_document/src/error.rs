//! Error types for the document crate.

use thiserror::Error;

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors that can occur while building a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// An intermediate path segment already holds a non-object value.
    #[error("path conflict at '{segment}' in '{path}': existing value is not an object")]
    PathConflict {
        /// The full dotted path being written.
        path: String,
        /// The segment that could not be descended into.
        segment: String,
    },

    /// The dotted path is empty or contains an empty segment.
    #[error("invalid path '{path}': empty segment")]
    InvalidPath {
        /// The offending path.
        path: String,
    },
}

impl DocumentError {
    /// Create a path conflict error.
    pub fn path_conflict(path: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::PathConflict {
            path: path.into(),
            segment: segment.into(),
        }
    }

    /// Create an invalid path error.
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }
}
