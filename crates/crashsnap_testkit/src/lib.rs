//! # crashsnap Testkit
//!
//! Test utilities for crashsnap.
//!
//! This crate provides:
//! - Sample reports and temporary report directories
//! - Property-based test generators using proptest
//! - Interrupted-write simulation
//! - Fuzz testing harnesses
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crashsnap_testkit::prelude::*;
//!
//! #[test]
//! fn test_with_report_dir() {
//!     with_report_dir(|dir| {
//!         let path = dir.write_report("a.report", &sample_report()).unwrap();
//!         // ... read it back
//!     });
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod crash;
pub mod fixtures;
pub mod fuzz;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::crash::*;
    pub use crate::fixtures::*;
    pub use crate::fuzz::*;
    pub use crate::generators::*;
}

pub use fixtures::*;
pub use generators::*;
