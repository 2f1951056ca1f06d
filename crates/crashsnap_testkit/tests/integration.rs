//! Integration tests for report persistence and rendering.

use crashsnap_core::{
    read_report_file, read_report_header, render, render_document, upgrade_report_file,
    write_report_file, ByteOrder, Config, CoreError, FormatVersion, ReportHeader,
    CURRENT_VERSION,
};
use crashsnap_testkit::crash::{summary, TornWriteHarness};
use crashsnap_testkit::prelude::*;
use proptest::prelude::*;
use serde_json::{json, Value};

#[test]
fn written_report_renders_expected_event() {
    with_report_dir(|dir| {
        let path = dir.write_report("a.report", &sample_report()).unwrap();
        let report = read_report_file(&path).unwrap();
        let event: Value = serde_json::from_str(&render(&report)).unwrap();

        assert_eq!(event["context"], "MainActivity");
        assert_eq!(event["severity"], "error");
        assert_eq!(event["unhandled"], true);
        assert_eq!(event["severityReason"]["type"], "signal");
        assert_eq!(event["severityReason"]["attributes"]["signalType"], "SIGSEGV");
        assert_eq!(event["app"]["id"], "com.example.shop");
        assert_eq!(event["app"]["versionCode"], 57);
        assert_eq!(event["device"]["osName"], "android");
        assert_eq!(event["device"]["cpuAbi"], json!(["arm64-v8a", "armeabi-v7a"]));
        assert_eq!(event["device"]["runtimeVersions"]["androidApiLevel"], 29);
        assert_eq!(event["metaData"]["device"]["time"], "2018-10-08T12:07:09Z");
        assert_eq!(event["metaData"]["account"], json!({ "plan": "pro", "seats": 12.0 }));
        assert_eq!(event["metaData"]["flags"]["beta"], true);
        assert_eq!(event["user"]["email"], "fenton@example.com");
        assert_eq!(
            event["session"],
            json!({
                "startedAt": "2018-10-08T12:00:00Z",
                "id": "f1ab",
                "events": { "handled": 2, "unhandled": 1 }
            })
        );

        let frames = event["exceptions"][0]["stacktrace"].as_array().unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0]["method"], "crash_write_read_only");
        assert_eq!(frames[0]["file"], "libshop.so");
        assert_eq!(frames[1]["method"], "0x7f8a1b2c4000");
        assert!(frames[1].get("file").is_none());

        let crumbs = event["breadcrumbs"].as_array().unwrap();
        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[1]["type"], "user");
        assert_eq!(crumbs[1]["metaData"], json!({ "button": "checkout", "items": "3" }));
    });
}

#[test]
fn legacy_file_is_migrated_on_read_and_upgrade() {
    let dir = TestReportDir::new();
    let old = dir
        .write_legacy_report("old.report", &sample_legacy_report())
        .unwrap();
    let new = dir.file("new.report");

    let migrated = read_report_file(&old).unwrap();
    assert_eq!(migrated.unhandled_events, 1);
    assert_eq!(render_document(&migrated).dotget("session.events.unhandled"), Some(&json!(1)));

    let from = upgrade_report_file(&old, &new, &Config::default()).unwrap();
    assert_eq!(from, FormatVersion::V1);
    assert_eq!(read_report_header(&new).unwrap().version, CURRENT_VERSION);
    assert_eq!(
        std::fs::metadata(&new).unwrap().len(),
        FormatVersion::V2.file_len() as u64
    );
    assert_eq!(read_report_file(&new).unwrap(), migrated);
}

#[test]
fn big_endian_file_reads_back() {
    let dir = TestReportDir::new();
    let path = dir.file("be.report");
    let header = ReportHeader::current(SAMPLE_OS_BUILD).with_byte_order(ByteOrder::Big);
    write_report_file(&path, &header, &sample_report(), &Config::default()).unwrap();

    assert_eq!(read_report_header(&path).unwrap().byte_order, ByteOrder::Big);
    assert_eq!(read_report_file(&path).unwrap(), sample_report());
}

#[test]
fn overflowing_multibyte_text_is_cut_on_a_char_boundary() {
    let mut report = sample_report();
    report.exception.message.set(&"é".repeat(200));
    report.user.name.set(&"😀".repeat(20));

    let dir = TestReportDir::new();
    let path = dir.write_report("utf8.report", &report).unwrap();
    let read = read_report_file(&path).unwrap();
    assert_eq!(read.exception.message.as_str(), "é".repeat(127));
    assert_eq!(read.user.name.as_str(), "😀".repeat(15));

    let event: Value = serde_json::from_str(&render(&read)).unwrap();
    assert_eq!(event["exceptions"][0]["message"], json!("é".repeat(127)));
    assert_eq!(event["user"]["name"], json!("😀".repeat(15)));
}

#[test]
fn unsupported_and_truncated_files_are_rejected() {
    let dir = TestReportDir::new();

    let zero = dir.write_raw("v0.report", &ReportHeader::new(0, "").encode());
    assert!(matches!(
        read_report_file(&zero),
        Err(CoreError::UnsupportedVersion { version: 0 })
    ));

    let header_only = dir.write_raw("short.report", &ReportHeader::current("").encode());
    assert!(matches!(
        read_report_file(&header_only),
        Err(CoreError::ShortRead { .. })
    ));

    assert!(matches!(
        read_report_file(&dir.file("missing.report")),
        Err(CoreError::Open { .. })
    ));
}

#[test]
fn torn_writes_are_never_read_as_reports() {
    let results = TornWriteHarness::new(sample_report()).run_all();
    assert!(results.iter().all(|r| r.passed), "{}", summary(&results));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn generated_reports_survive_a_file(report in report_strategy(), order in byte_order_strategy()) {
        let dir = TestReportDir::new();
        let path = dir.file("p.report");
        let header = ReportHeader::current("").with_byte_order(order);
        write_report_file(&path, &header, &report, &Config::default()).unwrap();

        let read = read_report_file(&path).unwrap();
        prop_assert_eq!(&read, &report);
        prop_assert_eq!(render(&read), render(&report));
    }

    #[test]
    fn generated_legacy_reports_gain_one_unhandled_event(report in legacy_report_strategy()) {
        let dir = TestReportDir::new();
        let path = dir.write_legacy_report("l.report", &report).unwrap();

        let read = read_report_file(&path).unwrap();
        prop_assert_eq!(read.unhandled_events, 1);
        prop_assert_eq!(read.handled_events, report.handled_events);
        prop_assert_eq!(read.exception, report.exception);
        prop_assert_eq!(read.breadcrumbs, report.breadcrumbs);
    }
}
