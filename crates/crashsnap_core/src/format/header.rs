//! The report header: format version, payload byte order and OS build.

use super::layout::{ByteOrder, LayoutReader, LayoutWriter};
use super::{FormatVersion, CURRENT_VERSION};
use crate::error::{CoreError, CoreResult};
use crate::model::BoundedStr;

/// The fixed-size block at the start of every report file.
///
/// The header itself is always little-endian; `byte_order` describes the
/// numeric fields of the payload that follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeader {
    /// Format version of the payload.
    pub version: i32,
    /// Byte order of the payload's numeric fields.
    pub byte_order: ByteOrder,
    /// Build of the OS the report was captured on.
    pub os_build: BoundedStr<64>,
}

impl ReportHeader {
    /// Encoded size: version, big-endian flag, OS build.
    pub const ENCODED_LEN: usize = 4 + 4 + 64;

    /// Creates a header for the current format version.
    #[must_use]
    pub fn current(os_build: &str) -> Self {
        Self::new(CURRENT_VERSION, os_build)
    }

    /// Creates a header for an arbitrary version.
    #[must_use]
    pub fn new(version: i32, os_build: &str) -> Self {
        Self {
            version,
            byte_order: ByteOrder::Little,
            os_build: BoundedStr::new(os_build),
        }
    }

    /// Sets the payload byte order.
    #[must_use]
    pub const fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Returns the payload layout this header selects.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnsupportedVersion`] for versions below 1.
    pub fn format_version(&self) -> CoreResult<FormatVersion> {
        FormatVersion::from_header_version(self.version)
    }

    /// Encodes the header.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut w = LayoutWriter::with_capacity(Self::ENCODED_LEN, ByteOrder::Little);
        w.put_i32(self.version);
        w.put_i32(self.byte_order.as_flag());
        w.put_str(&self.os_build);
        debug_assert_eq!(w.len(), Self::ENCODED_LEN);
        w.into_bytes()
    }

    /// Decodes a header from exactly [`Self::ENCODED_LEN`] bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Corrupted`] if the block has the wrong size or
    /// the OS build string is malformed.
    pub fn decode(bytes: &[u8]) -> CoreResult<Self> {
        if bytes.len() != Self::ENCODED_LEN {
            return Err(CoreError::corrupted(format!(
                "header is {} bytes, expected {}",
                bytes.len(),
                Self::ENCODED_LEN
            )));
        }
        let mut r = LayoutReader::new(bytes, ByteOrder::Little);
        Ok(Self {
            version: r.get_i32()?,
            byte_order: ByteOrder::from_flag(r.get_i32()?),
            os_build: r.get_str()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout() {
        let header = ReportHeader::current("QP1A.190711.020");
        let bytes = header.encode();
        assert_eq!(bytes.len(), 72);
        assert_eq!(&bytes[0..4], &2i32.to_le_bytes());
        assert_eq!(&bytes[4..8], &0i32.to_le_bytes());
        assert_eq!(&bytes[8..23], b"QP1A.190711.020");
        assert!(bytes[23..].iter().all(|&b| b == 0));
    }

    #[test]
    fn header_round_trip() {
        let header = ReportHeader::new(1, "build").with_byte_order(ByteOrder::Big);
        assert_eq!(ReportHeader::decode(&header.encode()).unwrap(), header);
    }

    #[test]
    fn header_flag_stays_little_endian() {
        let bytes = ReportHeader::current("x").with_byte_order(ByteOrder::Big).encode();
        assert_eq!(&bytes[4..8], &[1, 0, 0, 0]);
    }

    #[test]
    fn wrong_size_is_corrupted() {
        assert!(ReportHeader::decode(&[0; 10]).is_err());
    }

    #[test]
    fn version_selection() {
        assert_eq!(ReportHeader::new(1, "").format_version().unwrap(), FormatVersion::V1);
        assert_eq!(ReportHeader::new(2, "").format_version().unwrap(), FormatVersion::V2);
        assert_eq!(ReportHeader::new(3, "").format_version().unwrap(), FormatVersion::V2);
        assert!(matches!(
            ReportHeader::new(0, "").format_version(),
            Err(CoreError::UnsupportedVersion { version: 0 })
        ));
    }
}
