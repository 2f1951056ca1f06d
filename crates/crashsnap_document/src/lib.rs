//! # crashsnap document
//!
//! Nested JSON document builder used to project crash reports into the
//! ingestion schema.
//!
//! This crate is a thin contract over `serde_json`:
//! - Create an object ([`Document`]) or an array ([`DocumentArray`])
//! - Set a value at a dotted path, creating intermediate objects lazily
//! - Append values to arrays
//! - Serialize to compact or pretty text
//!
//! Object keys keep their insertion order, so the rendered text is stable
//! for a given sequence of writes.
//!
//! ## Usage
//!
//! ```
//! use crashsnap_document::Document;
//!
//! let mut doc = Document::new();
//! doc.dotset("app.version", "1.2.0").unwrap();
//! doc.dotset("app.inForeground", true).unwrap();
//!
//! assert_eq!(doc.to_text(), r#"{"app":{"version":"1.2.0","inForeground":true}}"#);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod array;
mod document;
mod error;
mod path;

pub use array::DocumentArray;
pub use document::Document;
pub use error::{DocumentError, DocumentResult};
pub use path::DottedPath;

/// A single JSON value as stored in a document.
pub use serde_json::Value;
