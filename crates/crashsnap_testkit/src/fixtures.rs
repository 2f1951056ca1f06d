//! Test fixtures and report file helpers.
//!
//! Provides fully populated sample reports and a temporary directory for
//! writing report files in tests.

use crashsnap_core::model::{Breadcrumb, BreadcrumbType, BoundedStr, StackFrame};
use crashsnap_core::{
    write_legacy_report_file, write_report_file, Config, CoreResult, LegacyReport, Report,
    ReportHeader, Severity,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// OS build recorded in fixture headers.
pub const SAMPLE_OS_BUILD: &str = "QP1A.190711.020";

/// Device time of the sample report: 2018-10-08T12:07:09Z.
pub const SAMPLE_DEVICE_TIME: i64 = 1_539_000_429;

/// Returns a report with every section populated.
pub fn sample_report() -> Report {
    let mut report = Report {
        severity: Severity::Error,
        session_id: BoundedStr::new("f1ab"),
        session_start: BoundedStr::new("2018-10-08T12:00:00Z"),
        handled_events: 2,
        unhandled_events: 1,
        ..Report::default()
    };

    report.notifier.name.set("crashsnap native");
    report.notifier.version.set("4.7.1");
    report.notifier.url.set("https://example.com/crashsnap");

    report.app.id.set("com.example.shop");
    report.app.release_stage.set("production");
    report.app.app_type.set("android");
    report.app.version.set("22.312.749.78.300.810.24.165");
    report.app.version_code = 57;
    report.app.active_screen.set("MainActivity");
    report.app.build_uuid.set("123e4567-e89b-12d3-a456-426655440000");
    report.app.duration = 6502;
    report.app.duration_in_foreground = 12;
    report.app.in_foreground = true;
    report.app.package_name.set("com.example.shop");
    report.app.version_name.set("22.312");
    report.app.name.set("Shop");
    report.app.binary_arch.set("arm64");

    report.device.api_level = 29;
    report.device.battery_level = 0.5;
    report.device.brand.set("google");
    let _ = report.device.cpu_abi.try_push(BoundedStr::new("arm64-v8a"));
    let _ = report.device.cpu_abi.try_push(BoundedStr::new("armeabi-v7a"));
    report.device.dpi = 420;
    report.device.orientation.set("portrait");
    report.device.time = SAMPLE_DEVICE_TIME;
    report.device.id.set("device-1");
    report.device.locale.set("en_US");
    report.device.location_status.set("cellular");
    report.device.manufacturer.set("Google");
    report.device.model.set("Pixel 3");
    report.device.network_access.set("wifi");
    report.device.os_build.set(SAMPLE_OS_BUILD);
    report.device.os_version.set("10");
    report.device.screen_density = 2.625;
    report.device.screen_resolution.set("2160x1080");
    report.device.total_memory = 3_887_000_000;

    report.user.id.set("fex");
    report.user.email.set("fenton@example.com");
    report.user.name.set("Fenton");

    report.exception.name.set("SIGSEGV");
    report.exception.message.set("Segmentation violation (invalid memory reference)");
    report.exception.exception_type.set("c");
    let mut top = StackFrame::at(0x7f8a_1b2c_3d4e);
    top.symbol_address = 0x7f8a_1b2c_3000;
    top.load_address = 0x7f8a_1b00_0000;
    top.line_number = 58;
    top.filename.set("libshop.so");
    top.method.set("crash_write_read_only");
    let _ = report.exception.frames.try_push(top);
    let _ = report.exception.frames.try_push(StackFrame::at(0x7f8a_1b2c_4000));

    let _ = report.metadata.add_text("account", "plan", "pro");
    let _ = report.metadata.add_number("account", "seats", 12.0);
    let _ = report.metadata.add_bool("flags", "beta", true);

    report.breadcrumbs.push(Breadcrumb::new(
        "Session start",
        "2018-10-08T12:00:00Z",
        BreadcrumbType::State,
    ));
    report.breadcrumbs.push(
        Breadcrumb::new("Checkout tapped", "2018-10-08T12:07:08Z", BreadcrumbType::User)
            .with_metadata("button", "checkout")
            .with_metadata("items", "3"),
    );

    report
}

/// Returns [`sample_report`] as version 1 software would have captured it.
pub fn sample_legacy_report() -> LegacyReport {
    LegacyReport::from(sample_report())
}

/// A temporary directory of report files, removed on drop.
pub struct TestReportDir {
    temp_dir: TempDir,
}

impl TestReportDir {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Returns the directory path.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Returns the path a file named `name` would have.
    pub fn file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Writes `report` in the current layout and returns its path.
    pub fn write_report(&self, name: &str, report: &Report) -> CoreResult<PathBuf> {
        let path = self.file(name);
        write_report_file(
            &path,
            &ReportHeader::current(SAMPLE_OS_BUILD),
            report,
            &Config::default(),
        )?;
        Ok(path)
    }

    /// Writes `report` in the version 1 layout and returns its path.
    pub fn write_legacy_report(&self, name: &str, report: &LegacyReport) -> CoreResult<PathBuf> {
        let path = self.file(name);
        write_legacy_report_file(
            &path,
            &ReportHeader::new(1, SAMPLE_OS_BUILD),
            report,
            &Config::default(),
        )?;
        Ok(path)
    }

    /// Writes arbitrary bytes and returns the path.
    pub fn write_raw(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.file(name);
        std::fs::write(&path, bytes).expect("Failed to write raw file");
        path
    }
}

impl Default for TestReportDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs a test with a temporary report directory.
pub fn with_report_dir<F, R>(f: F) -> R
where
    F: FnOnce(&TestReportDir) -> R,
{
    let dir = TestReportDir::new();
    f(&dir)
}
