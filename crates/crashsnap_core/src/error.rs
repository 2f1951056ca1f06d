//! Error types for crashsnap core.

use crashsnap_storage::StorageError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The fixed-size block of a report file an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// The report header.
    Header,
    /// The report payload following the header.
    Payload,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header => f.write_str("header"),
            Self::Payload => f.write_str("payload"),
        }
    }
}

/// Errors that can occur while persisting or loading a report.
///
/// Rendering has no error kind of its own; it is total over any report
/// value.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The report file could not be opened or created.
    #[error("cannot open report file {path:?}: {source}")]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying storage failure.
        #[source]
        source: StorageError,
    },

    /// Fewer bytes than a block's fixed size were available.
    #[error("short read of report {block}: expected {expected} bytes, got {actual}")]
    ShortRead {
        /// Block being read.
        block: Block,
        /// Fixed size of the block.
        expected: usize,
        /// Bytes available.
        actual: usize,
    },

    /// Fewer bytes than a block's fixed size were written.
    #[error("short write of report {block}: expected {expected} bytes, wrote {written}")]
    ShortWrite {
        /// Block being written.
        block: Block,
        /// Fixed size of the block.
        expected: usize,
        /// Bytes written.
        written: usize,
    },

    /// The header names a format version this build cannot handle.
    #[error("unsupported report format version: {version}")]
    UnsupportedVersion {
        /// Version found in (or requested for) the header.
        version: i32,
    },

    /// A block has the right size but its contents break the layout rules.
    #[error("corrupted report: {message}")]
    Corrupted {
        /// Description of the corruption.
        message: String,
    },

    /// Any other storage backend error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl CoreError {
    /// Creates a corrupted report error.
    pub fn corrupted(message: impl Into<String>) -> Self {
        Self::Corrupted {
            message: message.into(),
        }
    }

    /// Creates an unsupported version error.
    pub fn unsupported_version(version: i32) -> Self {
        Self::UnsupportedVersion { version }
    }

    /// Maps a storage error raised while reading `block` of `expected` bytes.
    pub(crate) fn from_read(block: Block, expected: usize, err: StorageError) -> Self {
        match err.available() {
            Some(actual) => Self::ShortRead {
                block,
                expected,
                actual,
            },
            None => Self::Storage(err),
        }
    }

    /// Maps a storage error raised while writing `block`.
    pub(crate) fn from_write(block: Block, err: StorageError) -> Self {
        match err {
            StorageError::ShortWrite {
                expected, written, ..
            } => Self::ShortWrite {
                block,
                expected,
                written,
            },
            other => Self::Storage(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_past_end_becomes_short_read() {
        let err = CoreError::from_read(
            Block::Header,
            72,
            StorageError::ReadPastEnd {
                offset: 0,
                len: 72,
                size: 30,
            },
        );
        assert!(matches!(
            err,
            CoreError::ShortRead {
                block: Block::Header,
                expected: 72,
                actual: 30
            }
        ));
    }

    #[test]
    fn short_write_keeps_counts() {
        let err = CoreError::from_write(
            Block::Payload,
            StorageError::ShortWrite {
                offset: 72,
                expected: 100,
                written: 40,
            },
        );
        assert!(matches!(
            err,
            CoreError::ShortWrite {
                block: Block::Payload,
                expected: 100,
                written: 40
            }
        ));
        assert_eq!(
            err.to_string(),
            "short write of report payload: expected 100 bytes, wrote 40"
        );
    }
}
