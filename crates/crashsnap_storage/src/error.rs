//! Error types for storage operations.

use std::io;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Attempted to read beyond the end of storage.
    #[error("read beyond end of storage: offset {offset}, len {len}, size {size}")]
    ReadPastEnd {
        /// The requested read offset.
        offset: u64,
        /// The requested read length.
        len: usize,
        /// The current storage size.
        size: u64,
    },

    /// Fewer bytes than requested were accepted by the medium.
    ///
    /// The bytes that were written stay in place; the backend does not
    /// roll them back.
    #[error("short write at offset {offset}: wrote {written} of {expected} bytes")]
    ShortWrite {
        /// Offset where the block started.
        offset: u64,
        /// Size of the block that was being written.
        expected: usize,
        /// Bytes actually written.
        written: usize,
    },
}

impl StorageError {
    /// Returns how many bytes are available past `offset` for a failed read.
    ///
    /// Only meaningful for [`StorageError::ReadPastEnd`]; other errors
    /// return `None`.
    #[must_use]
    pub fn available(&self) -> Option<usize> {
        match self {
            Self::ReadPastEnd { offset, size, .. } => {
                Some(usize::try_from(size.saturating_sub(*offset)).unwrap_or(usize::MAX))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_bytes_for_read_past_end() {
        let err = StorageError::ReadPastEnd {
            offset: 10,
            len: 72,
            size: 40,
        };
        assert_eq!(err.available(), Some(30));
    }

    #[test]
    fn available_saturates_when_offset_beyond_size() {
        let err = StorageError::ReadPastEnd {
            offset: 50,
            len: 8,
            size: 40,
        };
        assert_eq!(err.available(), Some(0));
    }

    #[test]
    fn available_is_none_for_other_errors() {
        let err = StorageError::ShortWrite {
            offset: 0,
            expected: 10,
            written: 3,
        };
        assert_eq!(err.available(), None);
    }
}
