//! # crashsnap storage
//!
//! Byte-store backends for crash report files.
//!
//! This crate is the lowest layer of crashsnap. Backends are **opaque byte
//! stores**: they read and append raw blocks and report exactly how much of
//! a block made it to (or came back from) the medium. They never interpret
//! report headers or payload layouts.
//!
//! ## Design Principles
//!
//! - Backends are simple byte stores (read, append, flush, sync)
//! - Short reads and short writes are reported, never retried or padded
//! - Must be `Send + Sync` so a backend can be handed across threads
//! - `crashsnap_core` owns all file format interpretation
//!
//! ## Available Backends
//!
//! - [`InMemoryBackend`] - For testing and in-process report buffers
//! - [`FileBackend`] - For report files on disk
//!
//! ## Example
//!
//! ```rust
//! use crashsnap_storage::{StorageBackend, InMemoryBackend};
//!
//! let mut backend = InMemoryBackend::new();
//! let offset = backend.append(b"header").unwrap();
//! let data = backend.read_at(offset, 6).unwrap();
//! assert_eq!(&data, b"header");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;

pub use backend::StorageBackend;
pub use error::{StorageError, StorageResult};
pub use file::FileBackend;
pub use memory::InMemoryBackend;
