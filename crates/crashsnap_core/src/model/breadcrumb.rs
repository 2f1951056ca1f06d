//! Breadcrumbs: timestamped events recorded before the crash.

use super::bounded::{BoundedStr, BoundedVec, CapacityExceeded, RingBuffer};
use super::{CRUMBS_MAX, CRUMB_METADATA_MAX};
use std::fmt;

/// Category of a breadcrumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum BreadcrumbType {
    /// An error was reported.
    #[default]
    Error = 0,
    /// A log message.
    Log = 1,
    /// Left manually by application code.
    Manual = 2,
    /// Navigation between screens.
    Navigation = 3,
    /// Process lifecycle change.
    Process = 4,
    /// Network request.
    Request = 5,
    /// Application state change.
    State = 6,
    /// User interaction.
    User = 7,
}

impl BreadcrumbType {
    /// Every breadcrumb type, in tag order.
    pub const ALL: [Self; 8] = [
        Self::Error,
        Self::Log,
        Self::Manual,
        Self::Navigation,
        Self::Process,
        Self::Request,
        Self::State,
        Self::User,
    ];

    /// Converts an on-disk tag to a type.
    #[must_use]
    pub fn from_tag(tag: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_tag() == tag)
    }

    /// Returns the on-disk tag.
    #[must_use]
    pub const fn as_tag(self) -> i32 {
        self as i32
    }

    /// Returns the name used in rendered documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Log => "log",
            Self::Manual => "manual",
            Self::Navigation => "navigation",
            Self::Process => "process",
            Self::Request => "request",
            Self::State => "state",
            Self::User => "user",
        }
    }
}

impl fmt::Display for BreadcrumbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key/value pair attached to a breadcrumb.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrumbMetadataPair {
    /// Key; never empty.
    pub key: BoundedStr<32>,
    /// Value.
    pub value: BoundedStr<64>,
}

/// A single breadcrumb.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breadcrumb {
    /// Short description.
    pub name: BoundedStr<64>,
    /// ISO-8601 timestamp as captured.
    pub timestamp: BoundedStr<37>,
    /// Category.
    pub crumb_type: BreadcrumbType,
    pub(crate) metadata: BoundedVec<CrumbMetadataPair, CRUMB_METADATA_MAX>,
}

impl Breadcrumb {
    /// Creates a breadcrumb without metadata.
    #[must_use]
    pub fn new(name: &str, timestamp: &str, crumb_type: BreadcrumbType) -> Self {
        Self {
            name: BoundedStr::new(name),
            timestamp: BoundedStr::new(timestamp),
            crumb_type,
            metadata: BoundedVec::new(),
        }
    }

    /// Attaches a key/value pair.
    ///
    /// An empty key marks the end of the list on disk, so pairs whose key is
    /// empty (after truncation) are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityExceeded`] when [`CRUMB_METADATA_MAX`] pairs are
    /// already attached.
    pub fn add_metadata(&mut self, key: &str, value: &str) -> Result<(), CapacityExceeded> {
        let key = BoundedStr::new(key);
        if key.is_empty() {
            return Ok(());
        }
        self.metadata.try_push(CrumbMetadataPair {
            key,
            value: BoundedStr::new(value),
        })
    }

    /// Builder form of [`Breadcrumb::add_metadata`]; pairs beyond capacity
    /// are dropped.
    #[must_use]
    pub fn with_metadata(mut self, key: &str, value: &str) -> Self {
        let _ = self.add_metadata(key, value);
        self
    }

    /// Iterates over the attached pairs in insertion order.
    pub fn metadata(&self) -> std::slice::Iter<'_, CrumbMetadataPair> {
        self.metadata.iter()
    }
}

/// The breadcrumb circular buffer carried by a report.
pub type BreadcrumbRing = RingBuffer<Breadcrumb, CRUMBS_MAX>;
