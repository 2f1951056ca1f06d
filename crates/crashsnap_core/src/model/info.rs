//! Notifier, application, device and user sections of a report.

use super::bounded::{BoundedStr, BoundedVec};
use super::CPU_ABI_MAX;

/// The library that captured the report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notifier {
    /// Notifier version.
    pub version: BoundedStr<16>,
    /// Notifier name.
    pub name: BoundedStr<64>,
    /// Notifier homepage.
    pub url: BoundedStr<64>,
}

/// Application state at the time of the crash.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppInfo {
    /// Application identifier.
    pub id: BoundedStr<64>,
    /// Release stage (`production`, `development`, ...).
    pub release_stage: BoundedStr<64>,
    /// Application type (`android`, ...).
    pub app_type: BoundedStr<32>,
    /// Human-readable version.
    pub version: BoundedStr<32>,
    /// Screen in the foreground when the crash happened.
    pub active_screen: BoundedStr<64>,
    /// Numeric version code.
    pub version_code: i32,
    /// Build UUID; may be empty.
    pub build_uuid: BoundedStr<64>,
    /// Milliseconds since the application started.
    pub duration: i64,
    /// Milliseconds spent in the foreground.
    pub duration_in_foreground: i64,
    /// Whether the application was in the foreground.
    pub in_foreground: bool,
    /// Whether the system reported low memory.
    pub low_memory: bool,
    /// Package name.
    pub package_name: BoundedStr<64>,
    /// Version name from the package manifest.
    pub version_name: BoundedStr<32>,
    /// Display name.
    pub name: BoundedStr<64>,
    /// Architecture of the native binary.
    pub binary_arch: BoundedStr<32>,
}

/// Device state at the time of the crash.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceInfo {
    /// Platform API level.
    pub api_level: i32,
    /// Battery level in `0.0..=1.0`.
    pub battery_level: f64,
    /// Device brand.
    pub brand: BoundedStr<64>,
    /// Supported CPU ABIs, most preferred first.
    pub cpu_abi: BoundedVec<BoundedStr<32>, CPU_ABI_MAX>,
    /// Screen density in dots per inch.
    pub dpi: i32,
    /// Whether the device is an emulator.
    pub emulator: bool,
    /// Screen orientation.
    pub orientation: BoundedStr<32>,
    /// Wall-clock time of the crash, seconds since the Unix epoch.
    pub time: i64,
    /// Device identifier.
    pub id: BoundedStr<64>,
    /// Whether the device is rooted.
    pub jailbroken: bool,
    /// Locale identifier.
    pub locale: BoundedStr<32>,
    /// Location services status.
    pub location_status: BoundedStr<32>,
    /// Manufacturer.
    pub manufacturer: BoundedStr<64>,
    /// Model.
    pub model: BoundedStr<64>,
    /// Network connectivity description.
    pub network_access: BoundedStr<64>,
    /// OS build identifier.
    pub os_build: BoundedStr<64>,
    /// OS version.
    pub os_version: BoundedStr<64>,
    /// Logical screen density.
    pub screen_density: f32,
    /// Screen resolution, `WIDTHxHEIGHT`.
    pub screen_resolution: BoundedStr<32>,
    /// Total memory in bytes.
    pub total_memory: i64,
}

/// The user the report is attributed to. Every field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInfo {
    /// User name.
    pub name: BoundedStr<64>,
    /// User email.
    pub email: BoundedStr<64>,
    /// User identifier.
    pub id: BoundedStr<64>,
}
