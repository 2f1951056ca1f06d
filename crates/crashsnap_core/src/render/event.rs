//! Context, application, device, user, session and custom metadata fields.

use super::put;
use crate::model::{AppInfo, DeviceInfo, Metadata, MetadataValue, Report, UserInfo};
use chrono::DateTime;
use crashsnap_document::{Document, DocumentArray};

const OS_NAME: &str = "android";

const DEVICE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub(crate) fn context(report: &Report, doc: &mut Document) {
    let context = if report.context.is_empty() {
        &report.app.active_screen
    } else {
        &report.context
    };
    doc.set("context", context.as_str());
}

pub(crate) fn app(app: &AppInfo, doc: &mut Document) {
    put(doc, "app.version", app.version.as_str());
    put(doc, "app.id", app.id.as_str());
    put(doc, "app.type", app.app_type.as_str());
    put(doc, "app.releaseStage", app.release_stage.as_str());
    put(doc, "app.versionCode", app.version_code);
    if !app.build_uuid.is_empty() {
        put(doc, "app.buildUUID", app.build_uuid.as_str());
    }
    put(doc, "app.binaryArch", app.binary_arch.as_str());
    put(doc, "app.duration", app.duration);
    put(doc, "app.durationInForeground", app.duration_in_foreground);
    put(doc, "app.inForeground", app.in_foreground);
}

pub(crate) fn app_metadata(app: &AppInfo, doc: &mut Document) {
    put(doc, "metaData.app.packageName", app.package_name.as_str());
    put(doc, "metaData.app.versionName", app.version_name.as_str());
    put(doc, "metaData.app.activeScreen", app.active_screen.as_str());
    put(doc, "metaData.app.name", app.name.as_str());
    put(doc, "metaData.app.lowMemory", app.low_memory);
}

pub(crate) fn device(device: &DeviceInfo, doc: &mut Document) {
    put(doc, "device.osName", OS_NAME);
    put(doc, "device.id", device.id.as_str());
    put(doc, "device.osVersion", device.os_version.as_str());
    put(doc, "device.manufacturer", device.manufacturer.as_str());
    put(doc, "device.model", device.model.as_str());
    put(doc, "device.orientation", device.orientation.as_str());
    put(doc, "device.runtimeVersions.androidApiLevel", device.api_level);
    put(doc, "device.runtimeVersions.osBuild", device.os_build.as_str());
    put(
        doc,
        "device.cpuAbi",
        device.cpu_abi.iter().map(|abi| abi.as_str()).collect::<DocumentArray>(),
    );
    put(doc, "device.totalMemory", device.total_memory);
}

pub(crate) fn device_metadata(device: &DeviceInfo, doc: &mut Document) {
    put(doc, "metaData.device.brand", device.brand.as_str());
    put(doc, "metaData.device.emulator", device.emulator);
    put(doc, "metaData.device.jailbroken", device.jailbroken);
    put(doc, "metaData.device.locale", device.locale.as_str());
    put(doc, "metaData.device.locationStatus", device.location_status.as_str());
    put(doc, "metaData.device.networkAccess", device.network_access.as_str());
    put(doc, "metaData.device.dpi", device.dpi);
    put(doc, "metaData.device.screenDensity", f64::from(device.screen_density));
    put(doc, "metaData.device.screenResolution", device.screen_resolution.as_str());
    if let Some(time) = device_time(device.time) {
        put(doc, "metaData.device.time", time);
    }
}

/// Formats a positive epoch time as UTC; `None` when unset or out of range.
fn device_time(secs: i64) -> Option<String> {
    if secs <= 0 {
        return None;
    }
    DateTime::from_timestamp(secs, 0).map(|t| t.format(DEVICE_TIME_FORMAT).to_string())
}

pub(crate) fn custom_metadata(metadata: &Metadata, doc: &mut Document) {
    for entry in metadata.iter() {
        let path = format!("metaData.{}.{}", entry.section, entry.name);
        match &entry.value {
            MetadataValue::Bool(b) => put(doc, &path, *b),
            MetadataValue::Text(t) => put(doc, &path, t.as_str()),
            MetadataValue::Number(n) => put(doc, &path, *n),
        }
    }
}

pub(crate) fn user(user: &UserInfo, doc: &mut Document) {
    let fields = [
        ("user.name", &user.name),
        ("user.email", &user.email),
        ("user.id", &user.id),
    ];
    for (path, value) in fields {
        if !value.is_empty() {
            put(doc, path, value.as_str());
        }
    }
}

pub(crate) fn session(report: &Report, doc: &mut Document) {
    if !report.has_session() {
        return;
    }
    put(doc, "session.startedAt", report.session_start.as_str());
    put(doc, "session.id", report.session_id.as_str());
    put(doc, "session.events.handled", report.handled_events);
    put(doc, "session.events.unhandled", report.unhandled_events);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn app_fields() {
        let info = AppInfo {
            id: "com.example".into(),
            version_code: 12,
            build_uuid: "b-1".into(),
            duration: 1500,
            in_foreground: true,
            ..AppInfo::default()
        };
        let mut doc = Document::new();
        app(&info, &mut doc);

        assert_eq!(doc.dotget("app.id"), Some(&json!("com.example")));
        assert_eq!(doc.dotget("app.versionCode"), Some(&json!(12)));
        assert_eq!(doc.dotget("app.buildUUID"), Some(&json!("b-1")));
        assert_eq!(doc.dotget("app.duration"), Some(&json!(1500)));
        assert_eq!(doc.dotget("app.inForeground"), Some(&json!(true)));
    }

    #[test]
    fn device_fields() {
        let mut info = DeviceInfo {
            api_level: 30,
            os_build: "RQ3A".into(),
            screen_density: 2.625,
            total_memory: 8_000_000_000,
            ..DeviceInfo::default()
        };
        info.cpu_abi.try_push("arm64-v8a".into()).unwrap();
        info.cpu_abi.try_push("armeabi-v7a".into()).unwrap();

        let mut doc = Document::new();
        device(&info, &mut doc);
        device_metadata(&info, &mut doc);

        assert_eq!(doc.dotget("device.osName"), Some(&json!("android")));
        assert_eq!(doc.dotget("device.cpuAbi"), Some(&json!(["arm64-v8a", "armeabi-v7a"])));
        assert_eq!(doc.dotget("device.runtimeVersions.androidApiLevel"), Some(&json!(30)));
        assert_eq!(doc.dotget("device.runtimeVersions.osBuild"), Some(&json!("RQ3A")));
        assert_eq!(doc.dotget("device.totalMemory"), Some(&json!(8_000_000_000i64)));
        assert_eq!(doc.dotget("metaData.device.screenDensity"), Some(&json!(2.625)));
        assert!(!doc.contains("metaData.device.time"));
    }

    #[test]
    fn device_time_format() {
        assert_eq!(device_time(0), None);
        assert_eq!(device_time(-5), None);
        assert_eq!(device_time(1).as_deref(), Some("1970-01-01T00:00:01Z"));
        assert_eq!(device_time(i64::MAX), None);
    }

    #[test]
    fn custom_metadata_is_typed() {
        let mut metadata = Metadata::new();
        metadata.add_bool("flags", "beta", true).unwrap();
        metadata.add_text("account", "plan", "pro").unwrap();
        metadata.add_number("account", "seats", 12.5).unwrap();

        let mut doc = Document::new();
        custom_metadata(&metadata, &mut doc);
        assert_eq!(
            doc.get("metaData"),
            Some(&json!({
                "flags": { "beta": true },
                "account": { "plan": "pro", "seats": 12.5 }
            }))
        );
    }

    #[test]
    fn later_custom_metadata_wins() {
        let mut metadata = Metadata::new();
        metadata.add_text("account", "plan", "free").unwrap();
        metadata.add_text("account", "plan", "pro").unwrap();

        let mut doc = Document::new();
        custom_metadata(&metadata, &mut doc);
        assert_eq!(doc.dotget("metaData.account.plan"), Some(&json!("pro")));
    }

    #[test]
    fn empty_section_is_skipped() {
        let mut metadata = Metadata::new();
        metadata.add_bool("", "orphan", true).unwrap();

        let mut doc = Document::new();
        custom_metadata(&metadata, &mut doc);
        assert!(doc.is_empty());
    }

    #[test]
    fn user_fields_only_when_present() {
        let info = UserInfo {
            email: "a@example.com".into(),
            ..UserInfo::default()
        };
        let mut doc = Document::new();
        user(&info, &mut doc);
        assert_eq!(doc.get("user"), Some(&json!({ "email": "a@example.com" })));
    }
}
