//! In-memory storage backend.

use crate::backend::StorageBackend;
use crate::error::{StorageError, StorageResult};
use parking_lot::RwLock;

/// An in-memory storage backend.
///
/// Suitable for unit tests, for building a report image in memory before
/// handing it elsewhere, and for simulating a medium that runs out of space
/// (see [`InMemoryBackend::with_limit`]).
///
/// # Example
///
/// ```rust
/// use crashsnap_storage::{StorageBackend, InMemoryBackend};
///
/// let mut backend = InMemoryBackend::new();
/// let offset = backend.append(b"test data").unwrap();
/// assert_eq!(offset, 0);
/// assert_eq!(backend.size().unwrap(), 9);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    data: RwLock<Vec<u8>>,
    limit: Option<usize>,
}

impl InMemoryBackend {
    /// Creates a new empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory backend with pre-existing data.
    ///
    /// Useful for feeding hand-built or truncated files to a reader.
    #[must_use]
    pub fn with_data(data: Vec<u8>) -> Self {
        Self {
            data: RwLock::new(data),
            limit: None,
        }
    }

    /// Creates an empty backend that accepts at most `limit` bytes in total.
    ///
    /// An append crossing the limit stores the bytes that fit and fails with
    /// [`StorageError::ShortWrite`].
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            data: RwLock::new(Vec::new()),
            limit: Some(limit),
        }
    }

    /// Returns a copy of all data in the backend.
    #[must_use]
    pub fn data(&self) -> Vec<u8> {
        self.data.read().clone()
    }

    /// Consumes the backend and returns its bytes.
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data.into_inner()
    }
}

impl StorageBackend for InMemoryBackend {
    fn read_at(&self, offset: u64, len: usize) -> StorageResult<Vec<u8>> {
        let data = self.data.read();
        let size = data.len() as u64;
        let offset_usize = offset as usize;
        let end = offset_usize.saturating_add(len);

        if offset > size || end > data.len() {
            return Err(StorageError::ReadPastEnd { offset, len, size });
        }

        Ok(data[offset_usize..end].to_vec())
    }

    fn append(&mut self, new_data: &[u8]) -> StorageResult<u64> {
        let mut data = self.data.write();
        let offset = data.len() as u64;

        let room = self
            .limit
            .map_or(usize::MAX, |limit| limit.saturating_sub(data.len()));
        let accepted = new_data.len().min(room);
        data.extend_from_slice(&new_data[..accepted]);

        if accepted < new_data.len() {
            return Err(StorageError::ShortWrite {
                offset,
                expected: new_data.len(),
                written: accepted,
            });
        }
        Ok(offset)
    }

    fn flush(&mut self) -> StorageResult<()> {
        Ok(())
    }

    fn size(&self) -> StorageResult<u64> {
        Ok(self.data.read().len() as u64)
    }

    fn sync(&mut self) -> StorageResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_new_is_empty() {
        let backend = InMemoryBackend::new();
        assert_eq!(backend.size().unwrap(), 0);
        assert!(backend.data().is_empty());
    }

    #[test]
    fn memory_append_returns_correct_offset() {
        let mut backend = InMemoryBackend::new();

        let offset1 = backend.append(b"hello").unwrap();
        assert_eq!(offset1, 0);

        let offset2 = backend.append(b" world").unwrap();
        assert_eq!(offset2, 5);

        assert_eq!(backend.size().unwrap(), 11);
    }

    #[test]
    fn memory_read_at_returns_correct_data() {
        let mut backend = InMemoryBackend::new();
        backend.append(b"hello world").unwrap();

        let data = backend.read_at(0, 5).unwrap();
        assert_eq!(&data, b"hello");

        let data = backend.read_at(6, 5).unwrap();
        assert_eq!(&data, b"world");
    }

    #[test]
    fn memory_read_at_extending_past_end_fails() {
        let mut backend = InMemoryBackend::new();
        backend.append(b"hello").unwrap();

        let result = backend.read_at(3, 10);
        assert!(matches!(result, Err(StorageError::ReadPastEnd { .. })));
    }

    #[test]
    fn memory_empty_append() {
        let mut backend = InMemoryBackend::new();
        let offset = backend.append(b"").unwrap();
        assert_eq!(offset, 0);
        assert_eq!(backend.size().unwrap(), 0);
    }

    #[test]
    fn memory_with_data() {
        let backend = InMemoryBackend::with_data(b"preloaded".to_vec());
        assert_eq!(backend.size().unwrap(), 9);
        assert_eq!(backend.read_at(0, 9).unwrap(), b"preloaded");
    }

    #[test]
    fn memory_limit_reports_short_write() {
        let mut backend = InMemoryBackend::with_limit(8);
        backend.append(b"12345").unwrap();

        let result = backend.append(b"6789");
        assert!(matches!(
            result,
            Err(StorageError::ShortWrite {
                offset: 5,
                expected: 4,
                written: 3
            })
        ));
        assert_eq!(backend.into_data(), b"12345678");
    }

    #[test]
    fn memory_flush_and_sync_succeed() {
        let mut backend = InMemoryBackend::new();
        backend.append(b"data").unwrap();
        assert!(backend.flush().is_ok());
        assert!(backend.sync().is_ok());
    }
}
