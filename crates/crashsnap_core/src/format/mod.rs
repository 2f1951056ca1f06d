//! On-disk layout of report files.
//!
//! A report file is a [`ReportHeader`] followed by one payload block whose
//! layout is selected by the header's version:
//!
//! | Version | Payload |
//! |---|---|
//! | 1 | every section up to `handled_events` |
//! | 2 and above | version 1 plus `unhandled_events` |
//!
//! Both blocks have a fixed size. A file shorter than its layout needs is
//! truncated; bytes past the payload are ignored.

mod header;
mod layout;
mod sections;
mod v1;
mod v2;

pub use header::ReportHeader;
pub use layout::ByteOrder;

use crate::error::{CoreError, CoreResult};
use crate::model::{LegacyReport, Report};
use layout::{decode_block, encode_block, FixedLayout};
use std::fmt;

/// Format version written by this build.
pub const CURRENT_VERSION: i32 = 2;

/// Oldest format version this build reads.
pub const MIN_VERSION: i32 = 1;

/// Payload layouts known to this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatVersion {
    /// Predates the unhandled-event counter.
    V1,
    /// Current layout.
    V2,
}

impl FormatVersion {
    /// Selects the layout for a header version.
    ///
    /// Versions newer than [`CURRENT_VERSION`] are read with the current
    /// layout.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnsupportedVersion`] for versions below
    /// [`MIN_VERSION`].
    pub fn from_header_version(version: i32) -> CoreResult<Self> {
        match version {
            v if v < MIN_VERSION => Err(CoreError::unsupported_version(v)),
            1 => Ok(Self::V1),
            _ => Ok(Self::V2),
        }
    }

    /// Header version number for this layout.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
        }
    }

    /// Size of the payload block in bytes.
    #[must_use]
    pub const fn payload_len(self) -> usize {
        match self {
            Self::V1 => LegacyReport::ENCODED_LEN,
            Self::V2 => Report::ENCODED_LEN,
        }
    }

    /// Size of a whole file in this layout.
    #[must_use]
    pub const fn file_len(self) -> usize {
        ReportHeader::ENCODED_LEN + self.payload_len()
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.as_i32())
    }
}

/// Encodes a report in the current layout.
#[must_use]
pub fn encode_payload(report: &Report, order: ByteOrder) -> Vec<u8> {
    encode_block(report, order)
}

/// Encodes a report in the version 1 layout.
#[must_use]
pub fn encode_legacy_payload(report: &LegacyReport, order: ByteOrder) -> Vec<u8> {
    encode_block(report, order)
}

/// Decodes a current-layout payload.
///
/// # Errors
///
/// Returns [`CoreError::Corrupted`] if the block is malformed.
pub fn decode_payload(bytes: &[u8], order: ByteOrder) -> CoreResult<Report> {
    decode_block(bytes, order)
}

/// Decodes a version 1 payload.
///
/// # Errors
///
/// Returns [`CoreError::Corrupted`] if the block is malformed.
pub fn decode_legacy_payload(bytes: &[u8], order: ByteOrder) -> CoreResult<LegacyReport> {
    decode_block(bytes, order)
}
