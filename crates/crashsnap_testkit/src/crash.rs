//! Interrupted-write testing.
//!
//! A crash report is usually written while the process is dying, so the
//! write can stop at any byte. This module simulates that and checks that
//! the reader reports a torn file instead of returning a report.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crashsnap_testkit::crash::TornWriteHarness;
//!
//! let results = TornWriteHarness::new(sample_report()).run_all();
//! assert!(results.iter().all(|r| r.passed));
//! ```

use crashsnap_core::{read_from, write_to, CoreError, Report, ReportHeader};
use crashsnap_storage::{InMemoryBackend, StorageBackend, StorageError, StorageResult};
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Result of one interrupted write.
#[derive(Debug, Clone)]
pub struct TornWriteResult {
    /// Whether the reader behaved as expected.
    pub passed: bool,
    /// Bytes that reached the medium before the interruption.
    pub crash_after: usize,
    /// Error returned by the reader, if any.
    pub read_error: Option<String>,
}

/// A storage backend wrapper that can simulate an interrupted process.
pub struct CrashableBackend {
    inner: Box<dyn StorageBackend>,
    crash_after_bytes: AtomicUsize,
    bytes_written: AtomicUsize,
    crashed: AtomicBool,
    fail_on_flush: AtomicBool,
}

impl CrashableBackend {
    /// Creates a new crashable backend wrapping an inner backend.
    pub fn new(inner: Box<dyn StorageBackend>) -> Self {
        Self {
            inner,
            crash_after_bytes: AtomicUsize::new(usize::MAX),
            bytes_written: AtomicUsize::new(0),
            crashed: AtomicBool::new(false),
            fail_on_flush: AtomicBool::new(false),
        }
    }

    /// Sets the backend to crash after writing the specified number of bytes.
    pub fn crash_after(&self, bytes: usize) {
        self.crash_after_bytes.store(bytes, Ordering::SeqCst);
    }

    /// Sets whether flush should fail.
    pub fn set_fail_on_flush(&self, fail: bool) {
        self.fail_on_flush.store(fail, Ordering::SeqCst);
    }

    /// Returns whether the backend has crashed.
    pub fn has_crashed(&self) -> bool {
        self.crashed.load(Ordering::SeqCst)
    }

    fn crash(&self, message: &str) -> StorageError {
        self.crashed.store(true, Ordering::SeqCst);
        StorageError::Io(io::Error::new(io::ErrorKind::Other, message.to_string()))
    }
}

impl StorageBackend for CrashableBackend {
    fn read_at(&self, offset: u64, len: usize) -> StorageResult<Vec<u8>> {
        self.inner.read_at(offset, len)
    }

    fn append(&mut self, bytes: &[u8]) -> StorageResult<u64> {
        let current = self.bytes_written.fetch_add(bytes.len(), Ordering::SeqCst);
        let crash_threshold = self.crash_after_bytes.load(Ordering::SeqCst);

        if current >= crash_threshold {
            return Err(self.crash("simulated crash during write"));
        }

        if current + bytes.len() > crash_threshold {
            let partial_len = crash_threshold - current;
            if partial_len > 0 {
                let _ = self.inner.append(&bytes[..partial_len]);
            }
            return Err(self.crash("simulated crash during partial write"));
        }

        self.inner.append(bytes)
    }

    fn flush(&mut self) -> StorageResult<()> {
        if self.fail_on_flush.load(Ordering::SeqCst) {
            return Err(self.crash("simulated crash during flush"));
        }
        self.inner.flush()
    }

    fn size(&self) -> StorageResult<u64> {
        self.inner.size()
    }

    fn sync(&mut self) -> StorageResult<()> {
        if self.fail_on_flush.load(Ordering::SeqCst) {
            return Err(self.crash("simulated crash during sync"));
        }
        self.inner.sync()
    }
}

/// Writes a report through a [`CrashableBackend`] that stops at a chosen
/// byte, then reads back what reached the medium.
pub struct TornWriteHarness {
    header: ReportHeader,
    report: Report,
}

impl TornWriteHarness {
    /// Creates a harness for `report` under a current header.
    pub fn new(report: Report) -> Self {
        Self {
            header: ReportHeader::current(""),
            report,
        }
    }

    /// Total bytes a complete write produces.
    pub fn file_len(&self) -> usize {
        let mut backend = InMemoryBackend::new();
        match write_to(&mut backend, &self.header, &self.report) {
            Ok(()) => backend.data().len(),
            Err(_) => 0,
        }
    }

    /// Interrupts the write after `crash_after` bytes and reads the result.
    ///
    /// The write must fail, and so must the read: a torn file never yields
    /// a report.
    pub fn run(&self, crash_after: usize) -> TornWriteResult {
        let mut backend = CrashableBackend::new(Box::new(InMemoryBackend::new()));
        backend.crash_after(crash_after);

        let write = write_to(&mut backend, &self.header, &self.report);
        let read = read_from(&backend);

        let read_error = read.as_ref().err().map(ToString::to_string);
        let passed = write.is_err()
            && backend.has_crashed()
            && matches!(
                read,
                Err(CoreError::ShortRead { .. }) | Err(CoreError::Corrupted { .. })
            );
        TornWriteResult {
            passed,
            crash_after,
            read_error,
        }
    }

    /// Interrupts the write at the given points.
    pub fn run_at(&self, points: impl IntoIterator<Item = usize>) -> Vec<TornWriteResult> {
        points.into_iter().map(|p| self.run(p)).collect()
    }

    /// Interrupts the write at the block boundaries and a spread of points
    /// inside each block.
    pub fn run_all(&self) -> Vec<TornWriteResult> {
        let header_len = ReportHeader::ENCODED_LEN;
        let file_len = self.file_len();
        let mut points = vec![0, 1, 4, 8, header_len - 1, header_len, header_len + 1];
        points.extend((header_len..file_len).step_by(4099));
        points.push(file_len.saturating_sub(1));
        self.run_at(points)
    }
}

/// Summarizes harness results as text.
pub fn summary(results: &[TornWriteResult]) -> String {
    let passed = results.iter().filter(|r| r.passed).count();
    let mut out = format!("{}/{} interrupted writes detected\n", passed, results.len());
    for r in results.iter().filter(|r| !r.passed) {
        out.push_str(&format!(
            "  missed crash after {} bytes: {:?}\n",
            r.crash_after, r.read_error
        ));
    }
    out
}
