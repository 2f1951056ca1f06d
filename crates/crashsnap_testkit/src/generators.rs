//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random reports that respect the
//! capacities of every section. Floats are always finite.

use crashsnap_core::model::{
    AppInfo, BoundedStr, BoundedVec, Breadcrumb, BreadcrumbRing, BreadcrumbType, DeviceInfo,
    Exception, Metadata, MetadataValue, Notifier, StackFrame, UserInfo, CPU_ABI_MAX,
    CRUMB_METADATA_MAX, FRAMES_MAX,
};
use crashsnap_core::{ByteOrder, LegacyReport, Report, Severity};
use proptest::prelude::*;

/// Strategy for text without NUL bytes, up to `max` characters.
///
/// Roughly half the characters are drawn from all of Unicode, so multibyte
/// text regularly overflows a field and is cut on a character boundary.
pub fn text_strategy(max: usize) -> impl Strategy<Value = String> {
    prop::string::string_regex(&format!("(?:[a-zA-Z0-9 ._:/-]|[^\\x00]){{0,{}}}", max))
        .expect("Invalid regex")
}

/// Strategy for a bounded string filled from [`text_strategy`].
pub fn bounded_str_strategy<const N: usize>() -> impl Strategy<Value = BoundedStr<N>> {
    text_strategy(N + 8).prop_map(|s| BoundedStr::new(&s))
}

/// Strategy for finite doubles.
pub fn finite_f64_strategy() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::ZERO
}

/// Strategy for a payload byte order.
pub fn byte_order_strategy() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![Just(ByteOrder::Little), Just(ByteOrder::Big)]
}

/// Strategy for a report severity.
pub fn severity_strategy() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Error),
        Just(Severity::Warning),
        Just(Severity::Info),
    ]
}

/// Strategy for the notifier section.
pub fn notifier_strategy() -> impl Strategy<Value = Notifier> {
    (bounded_str_strategy(), bounded_str_strategy(), bounded_str_strategy())
        .prop_map(|(version, name, url)| Notifier { version, name, url })
}

/// Strategy for the application section.
pub fn app_strategy() -> impl Strategy<Value = AppInfo> {
    (
        (
            bounded_str_strategy(),
            bounded_str_strategy(),
            bounded_str_strategy(),
            bounded_str_strategy(),
            bounded_str_strategy(),
        ),
        (any::<i32>(), bounded_str_strategy(), any::<i64>(), any::<i64>()),
        (any::<bool>(), any::<bool>()),
        (
            bounded_str_strategy(),
            bounded_str_strategy(),
            bounded_str_strategy(),
            bounded_str_strategy(),
        ),
    )
        .prop_map(
            |(
                (id, release_stage, app_type, version, active_screen),
                (version_code, build_uuid, duration, duration_in_foreground),
                (in_foreground, low_memory),
                (package_name, version_name, name, binary_arch),
            )| AppInfo {
                id,
                release_stage,
                app_type,
                version,
                active_screen,
                version_code,
                build_uuid,
                duration,
                duration_in_foreground,
                in_foreground,
                low_memory,
                package_name,
                version_name,
                name,
                binary_arch,
            },
        )
}

/// Strategy for the device section.
pub fn device_strategy() -> impl Strategy<Value = DeviceInfo> {
    (
        (
            any::<i32>(),
            finite_f64_strategy(),
            bounded_str_strategy(),
            prop::collection::vec(bounded_str_strategy::<32>(), 0..=CPU_ABI_MAX),
            any::<i32>(),
            any::<bool>(),
            bounded_str_strategy(),
        ),
        (
            any::<i64>(),
            bounded_str_strategy(),
            any::<bool>(),
            bounded_str_strategy(),
            bounded_str_strategy(),
            bounded_str_strategy(),
        ),
        (
            bounded_str_strategy(),
            bounded_str_strategy(),
            bounded_str_strategy(),
            bounded_str_strategy(),
            prop::num::f32::NORMAL | prop::num::f32::ZERO,
            bounded_str_strategy(),
            any::<i64>(),
        ),
    )
        .prop_map(
            |(
                (api_level, battery_level, brand, cpu_abi, dpi, emulator, orientation),
                (time, id, jailbroken, locale, location_status, manufacturer),
                (model, network_access, os_build, os_version, screen_density, screen_resolution, total_memory),
            )| DeviceInfo {
                api_level,
                battery_level,
                brand,
                cpu_abi: BoundedVec::from_iter_truncated(cpu_abi),
                dpi,
                emulator,
                orientation,
                time,
                id,
                jailbroken,
                locale,
                location_status,
                manufacturer,
                model,
                network_access,
                os_build,
                os_version,
                screen_density,
                screen_resolution,
                total_memory,
            },
        )
}

/// Strategy for the user section.
pub fn user_strategy() -> impl Strategy<Value = UserInfo> {
    (bounded_str_strategy(), bounded_str_strategy(), bounded_str_strategy())
        .prop_map(|(name, email, id)| UserInfo { name, email, id })
}

/// Strategy for a single stack frame.
pub fn stack_frame_strategy() -> impl Strategy<Value = StackFrame> {
    (
        any::<u64>(),
        any::<u64>(),
        any::<u64>(),
        any::<u64>(),
        bounded_str_strategy(),
        bounded_str_strategy(),
    )
        .prop_map(
            |(frame_address, symbol_address, load_address, line_number, filename, method)| {
                StackFrame {
                    frame_address,
                    symbol_address,
                    load_address,
                    line_number,
                    filename,
                    method,
                }
            },
        )
}

/// Strategy for the exception section, up to `max_frames` frames.
pub fn exception_strategy(max_frames: usize) -> impl Strategy<Value = Exception> {
    (
        bounded_str_strategy(),
        bounded_str_strategy(),
        bounded_str_strategy(),
        prop::collection::vec(stack_frame_strategy(), 0..=max_frames.min(FRAMES_MAX)),
    )
        .prop_map(|(name, message, exception_type, frames)| Exception {
            name,
            message,
            exception_type,
            frames: BoundedVec::from_iter_truncated(frames),
        })
}

/// Strategy for a metadata value.
pub fn metadata_value_strategy() -> impl Strategy<Value = MetadataValue> {
    prop_oneof![
        any::<bool>().prop_map(MetadataValue::Bool),
        bounded_str_strategy().prop_map(MetadataValue::Text),
        finite_f64_strategy().prop_map(MetadataValue::Number),
    ]
}

/// Strategy for custom metadata with up to `max_entries` entries.
pub fn metadata_strategy(max_entries: usize) -> impl Strategy<Value = Metadata> {
    prop::collection::vec(
        (text_strategy(40), text_strategy(40), metadata_value_strategy()),
        0..=max_entries,
    )
    .prop_map(|entries| {
        let mut metadata = Metadata::new();
        for (section, name, value) in entries {
            if metadata.add(&section, &name, value).is_err() {
                break;
            }
        }
        metadata
    })
}

/// Strategy for a breadcrumb type.
pub fn breadcrumb_type_strategy() -> impl Strategy<Value = BreadcrumbType> {
    prop::sample::select(BreadcrumbType::ALL.to_vec())
}

/// Strategy for a single breadcrumb.
pub fn breadcrumb_strategy() -> impl Strategy<Value = Breadcrumb> {
    (
        text_strategy(70),
        text_strategy(40),
        breadcrumb_type_strategy(),
        prop::collection::vec((text_strategy(40), text_strategy(70)), 0..=CRUMB_METADATA_MAX),
    )
        .prop_map(|(name, timestamp, crumb_type, pairs)| {
            let mut crumb = Breadcrumb::new(&name, &timestamp, crumb_type);
            for (key, value) in pairs {
                if crumb.add_metadata(&key, &value).is_err() {
                    break;
                }
            }
            crumb
        })
}

/// Strategy for a breadcrumb ring; pushes may wrap the ring.
pub fn breadcrumb_ring_strategy(max_pushes: usize) -> impl Strategy<Value = BreadcrumbRing> {
    prop::collection::vec(breadcrumb_strategy(), 0..=max_pushes).prop_map(|crumbs| {
        let mut ring = BreadcrumbRing::new();
        for crumb in crumbs {
            ring.push(crumb);
        }
        ring
    })
}

/// Strategy for a complete report.
///
/// Section sizes are kept small; capacity edges are covered by dedicated
/// tests.
pub fn report_strategy() -> impl Strategy<Value = Report> {
    (
        (
            notifier_strategy(),
            app_strategy(),
            device_strategy(),
            user_strategy(),
        ),
        (
            exception_strategy(8),
            metadata_strategy(8),
            breadcrumb_ring_strategy(40),
        ),
        (
            bounded_str_strategy(),
            severity_strategy(),
            bounded_str_strategy(),
            bounded_str_strategy(),
            any::<i32>(),
            any::<i32>(),
        ),
    )
        .prop_map(
            |(
                (notifier, app, device, user),
                (exception, metadata, breadcrumbs),
                (context, severity, session_id, session_start, handled_events, unhandled_events),
            )| Report {
                notifier,
                app,
                device,
                user,
                exception,
                metadata,
                breadcrumbs,
                context,
                severity,
                session_id,
                session_start,
                handled_events,
                unhandled_events,
            },
        )
}

/// Strategy for a complete version 1 report.
pub fn legacy_report_strategy() -> impl Strategy<Value = LegacyReport> {
    report_strategy().prop_map(LegacyReport::from)
}
