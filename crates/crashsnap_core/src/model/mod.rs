//! The crash report value and its sections.
//!
//! A [`Report`] is built once by the capture side, written once, read back
//! once and rendered once. It carries no behavior beyond construction
//! helpers; layouts live in [`crate::format`] and rendering in
//! [`crate::render`].
//!
//! Every string and list has a fixed capacity (see [`BoundedStr`],
//! [`BoundedVec`], [`RingBuffer`]), which is what makes the on-disk image a
//! fixed-size block per format version.

mod bounded;
mod breadcrumb;
mod exception;
mod info;
mod metadata;

pub use bounded::{BoundedStr, BoundedVec, CapacityExceeded, RingBuffer, RingError};
pub use breadcrumb::{Breadcrumb, BreadcrumbRing, BreadcrumbType, CrumbMetadataPair};
pub use exception::{Exception, StackFrame};
pub use info::{AppInfo, DeviceInfo, Notifier, UserInfo};
pub use metadata::{Metadata, MetadataEntry, MetadataValue};

use std::fmt;

/// Breadcrumb ring capacity.
pub const CRUMBS_MAX: usize = 30;

/// Key/value pairs per breadcrumb.
pub const CRUMB_METADATA_MAX: usize = 8;

/// Custom metadata entries per report.
pub const METADATA_MAX: usize = 128;

/// Stack frames per exception.
pub const FRAMES_MAX: usize = 192;

/// CPU ABIs per device.
pub const CPU_ABI_MAX: usize = 8;

/// Severity of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum Severity {
    /// The event terminated or broke the application.
    #[default]
    Error = 0,
    /// Something unexpected that the application survived.
    Warning = 1,
    /// Informational.
    Info = 2,
}

impl Severity {
    /// Converts an on-disk tag to a severity.
    #[must_use]
    pub fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            0 => Some(Self::Error),
            1 => Some(Self::Warning),
            2 => Some(Self::Info),
            _ => None,
        }
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
            Self::Warning => "warn",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A crash report in the current layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    /// Capturing library.
    pub notifier: Notifier,
    /// Application state.
    pub app: AppInfo,
    /// Device state.
    pub device: DeviceInfo,
    /// Attributed user.
    pub user: UserInfo,
    /// The fatal exception.
    pub exception: Exception,
    /// Custom metadata.
    pub metadata: Metadata,
    /// Breadcrumbs leading up to the crash.
    pub breadcrumbs: BreadcrumbRing,
    /// Context override; when empty the active screen is used.
    pub context: BoundedStr<64>,
    /// Severity.
    pub severity: Severity,
    /// Session identifier; empty when no session was running.
    pub session_id: BoundedStr<33>,
    /// Session start timestamp.
    pub session_start: BoundedStr<33>,
    /// Handled events recorded in the session.
    pub handled_events: i32,
    /// Unhandled events recorded in the session.
    pub unhandled_events: i32,
}

impl Report {
    /// Returns `true` if the report was captured during a session.
    #[must_use]
    pub fn has_session(&self) -> bool {
        !self.session_id.is_empty()
    }
}

/// A crash report in the version 1 layout.
///
/// Identical to [`Report`] except that it predates the unhandled-event
/// counter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacyReport {
    /// Capturing library.
    pub notifier: Notifier,
    /// Application state.
    pub app: AppInfo,
    /// Device state.
    pub device: DeviceInfo,
    /// Attributed user.
    pub user: UserInfo,
    /// The fatal exception.
    pub exception: Exception,
    /// Custom metadata.
    pub metadata: Metadata,
    /// Breadcrumbs leading up to the crash.
    pub breadcrumbs: BreadcrumbRing,
    /// Context override.
    pub context: BoundedStr<64>,
    /// Severity.
    pub severity: Severity,
    /// Session identifier.
    pub session_id: BoundedStr<33>,
    /// Session start timestamp.
    pub session_start: BoundedStr<33>,
    /// Handled events recorded in the session.
    pub handled_events: i32,
}

impl LegacyReport {
    /// Unhandled-event count assumed for every version 1 report: such files
    /// only ever held the single crash that produced them.
    pub const UNHANDLED_EVENTS: i32 = 1;
}

impl From<LegacyReport> for Report {
    fn from(legacy: LegacyReport) -> Self {
        Self {
            notifier: legacy.notifier,
            app: legacy.app,
            device: legacy.device,
            user: legacy.user,
            exception: legacy.exception,
            metadata: legacy.metadata,
            breadcrumbs: legacy.breadcrumbs,
            context: legacy.context,
            severity: legacy.severity,
            session_id: legacy.session_id,
            session_start: legacy.session_start,
            handled_events: legacy.handled_events,
            unhandled_events: LegacyReport::UNHANDLED_EVENTS,
        }
    }
}

impl From<Report> for LegacyReport {
    /// Drops the unhandled-event counter, producing what version 1 software
    /// would have captured.
    fn from(report: Report) -> Self {
        Self {
            notifier: report.notifier,
            app: report.app,
            device: report.device,
            user: report.user,
            exception: report.exception,
            metadata: report.metadata,
            breadcrumbs: report.breadcrumbs,
            context: report.context,
            severity: report.severity,
            session_id: report.session_id,
            session_start: report.session_start,
            handled_events: report.handled_events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_tags_and_names() {
        for severity in [Severity::Error, Severity::Warning, Severity::Info] {
            assert_eq!(Severity::from_tag(severity.as_tag()), Some(severity));
        }
        assert_eq!(Severity::from_tag(3), None);
        assert_eq!(Severity::Warning.as_str(), "warn");
        assert_eq!(Severity::Info.to_string(), "info");
    }

    #[test]
    fn legacy_conversion_defaults_unhandled_events() {
        let legacy = LegacyReport {
            handled_events: 4,
            session_id: BoundedStr::new("abc"),
            ..LegacyReport::default()
        };

        let report = Report::from(legacy);
        assert_eq!(report.handled_events, 4);
        assert_eq!(report.unhandled_events, 1);
        assert_eq!(report.session_id, "abc");
    }

    #[test]
    fn has_session() {
        let mut report = Report::default();
        assert!(!report.has_session());
        report.session_id.set("5a7b1c");
        assert!(report.has_session());
    }
}
