//! # crashsnap core
//!
//! Crash report model, on-disk format and event rendering.
//!
//! This crate provides:
//! - The [`Report`] model with fixed-capacity sections ([`model`])
//! - The versioned binary layout of report files ([`format`])
//! - Writing and reading report files, with migration of older layouts
//!   ([`persist`])
//! - Rendering a report as the JSON event document ([`render`])
//!
//! ## Example
//!
//! ```rust
//! use crashsnap_core::{read_from, render, write_to, Report, ReportHeader};
//! use crashsnap_storage::InMemoryBackend;
//!
//! let mut report = Report::default();
//! report.exception.name.set("SIGSEGV");
//! report.app.active_screen.set("MainActivity");
//!
//! let mut backend = InMemoryBackend::new();
//! write_to(&mut backend, &ReportHeader::current("QP1A.190711.020"), &report).unwrap();
//!
//! let restored = read_from(&backend).unwrap();
//! assert_eq!(restored, report);
//!
//! let json = render(&restored);
//! assert!(json.starts_with(r#"{"context":"MainActivity""#));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
pub mod format;
pub mod model;
pub mod persist;
pub mod render;

pub use config::Config;
pub use error::{Block, CoreError, CoreResult};
pub use format::{ByteOrder, FormatVersion, ReportHeader, CURRENT_VERSION};
pub use model::{LegacyReport, Report, Severity};
pub use persist::{
    read_from, read_header_from, read_report_file, read_report_header, upgrade_report_file,
    write_legacy_report_file, write_legacy_to, write_report_file, write_to,
};
pub use render::{render, render_document, HandledState, Renderer, SignalHandledState};

/// Crate version, as reported by tooling.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
