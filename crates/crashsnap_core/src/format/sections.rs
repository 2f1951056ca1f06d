//! Layouts of the report sections shared by every format version.

use super::layout::{FixedLayout, LayoutReader, LayoutWriter};
use crate::error::{CoreError, CoreResult};
use crate::model::{
    AppInfo, BoundedStr, BoundedVec, Breadcrumb, BreadcrumbRing, BreadcrumbType,
    CrumbMetadataPair, DeviceInfo, Exception, LegacyReport, Metadata, MetadataEntry,
    MetadataValue, Notifier, Report, RingBuffer, Severity, StackFrame, UserInfo,
    CPU_ABI_MAX, CRUMB_METADATA_MAX, FRAMES_MAX, METADATA_MAX,
};

impl<const N: usize> FixedLayout for BoundedStr<N> {
    const ENCODED_LEN: usize = N;

    fn encode(&self, w: &mut LayoutWriter) {
        w.put_str(self);
    }

    fn decode(r: &mut LayoutReader<'_>) -> CoreResult<Self> {
        r.get_str()
    }
}

/// Count, then every slot; unused slots are zero-filled.
impl<T: FixedLayout, const N: usize> FixedLayout for BoundedVec<T, N> {
    const ENCODED_LEN: usize = 4 + N * T::ENCODED_LEN;

    fn encode(&self, w: &mut LayoutWriter) {
        w.put_count(self.len());
        for item in self {
            item.encode(w);
        }
        w.put_zeros((N - self.len()) * T::ENCODED_LEN);
    }

    fn decode(r: &mut LayoutReader<'_>) -> CoreResult<Self> {
        let count = r.get_count(N)?;
        let items = (0..count)
            .map(|_| T::decode(r))
            .collect::<CoreResult<Vec<_>>>()?;
        r.skip((N - count) * T::ENCODED_LEN)?;
        Ok(Self::from_iter_truncated(items))
    }
}

/// Count, oldest slot, then every physical slot.
///
/// Slots outside the live window hold whatever the capture buffer last put
/// there. They are kept so the ring reassembles exactly, but a stale slot
/// that fails to decode becomes the default value instead of failing the
/// whole report.
impl<T, const N: usize> FixedLayout for RingBuffer<T, N>
where
    T: FixedLayout + Default + Clone,
{
    const ENCODED_LEN: usize = 4 + 4 + N * T::ENCODED_LEN;

    fn encode(&self, w: &mut LayoutWriter) {
        let (slots, count, first_index) = self.raw_parts();
        w.put_count(count);
        w.put_count(first_index);
        for slot in slots {
            slot.encode(w);
        }
    }

    fn decode(r: &mut LayoutReader<'_>) -> CoreResult<Self> {
        let count = r.get_count(N)?;
        let raw_first = r.get_i32()?;
        let first_index = match usize::try_from(raw_first) {
            Ok(index) if index < N => index,
            _ if count == 0 => 0,
            _ => {
                return Err(CoreError::corrupted(format!(
                    "ring first index {raw_first} outside 0..{N}"
                )))
            }
        };

        let mut slots = Vec::with_capacity(N);
        for index in 0..N {
            let raw = r.take(T::ENCODED_LEN)?;
            let mut slot = LayoutReader::new(raw, r.order());
            let live = (index + N - first_index) % N < count;
            slots.push(if live {
                T::decode(&mut slot)?
            } else {
                T::decode(&mut slot).unwrap_or_default()
            });
        }

        Self::from_raw_parts(slots, count, first_index)
            .map_err(|e| CoreError::corrupted(format!("breadcrumb ring: {e}")))
    }
}

impl FixedLayout for Notifier {
    const ENCODED_LEN: usize = 16 + 64 + 64;

    fn encode(&self, w: &mut LayoutWriter) {
        w.put_str(&self.version);
        w.put_str(&self.name);
        w.put_str(&self.url);
    }

    fn decode(r: &mut LayoutReader<'_>) -> CoreResult<Self> {
        Ok(Self {
            version: r.get_str()?,
            name: r.get_str()?,
            url: r.get_str()?,
        })
    }
}

impl FixedLayout for AppInfo {
    const ENCODED_LEN: usize =
        64 + 64 + 32 + 32 + 64 + 4 + 64 + 8 + 8 + 1 + 1 + 64 + 32 + 64 + 32;

    fn encode(&self, w: &mut LayoutWriter) {
        w.put_str(&self.id);
        w.put_str(&self.release_stage);
        w.put_str(&self.app_type);
        w.put_str(&self.version);
        w.put_str(&self.active_screen);
        w.put_i32(self.version_code);
        w.put_str(&self.build_uuid);
        w.put_i64(self.duration);
        w.put_i64(self.duration_in_foreground);
        w.put_bool(self.in_foreground);
        w.put_bool(self.low_memory);
        w.put_str(&self.package_name);
        w.put_str(&self.version_name);
        w.put_str(&self.name);
        w.put_str(&self.binary_arch);
    }

    fn decode(r: &mut LayoutReader<'_>) -> CoreResult<Self> {
        Ok(Self {
            id: r.get_str()?,
            release_stage: r.get_str()?,
            app_type: r.get_str()?,
            version: r.get_str()?,
            active_screen: r.get_str()?,
            version_code: r.get_i32()?,
            build_uuid: r.get_str()?,
            duration: r.get_i64()?,
            duration_in_foreground: r.get_i64()?,
            in_foreground: r.get_bool()?,
            low_memory: r.get_bool()?,
            package_name: r.get_str()?,
            version_name: r.get_str()?,
            name: r.get_str()?,
            binary_arch: r.get_str()?,
        })
    }
}

impl FixedLayout for DeviceInfo {
    const ENCODED_LEN: usize = 4
        + 8
        + 64
        + <BoundedVec<BoundedStr<32>, CPU_ABI_MAX>>::ENCODED_LEN
        + 4
        + 1
        + 32
        + 8
        + 64
        + 1
        + 32
        + 32
        + 64
        + 64
        + 64
        + 64
        + 64
        + 4
        + 32
        + 8;

    fn encode(&self, w: &mut LayoutWriter) {
        w.put_i32(self.api_level);
        w.put_f64(self.battery_level);
        w.put_str(&self.brand);
        self.cpu_abi.encode(w);
        w.put_i32(self.dpi);
        w.put_bool(self.emulator);
        w.put_str(&self.orientation);
        w.put_i64(self.time);
        w.put_str(&self.id);
        w.put_bool(self.jailbroken);
        w.put_str(&self.locale);
        w.put_str(&self.location_status);
        w.put_str(&self.manufacturer);
        w.put_str(&self.model);
        w.put_str(&self.network_access);
        w.put_str(&self.os_build);
        w.put_str(&self.os_version);
        w.put_f32(self.screen_density);
        w.put_str(&self.screen_resolution);
        w.put_i64(self.total_memory);
    }

    fn decode(r: &mut LayoutReader<'_>) -> CoreResult<Self> {
        Ok(Self {
            api_level: r.get_i32()?,
            battery_level: r.get_f64()?,
            brand: r.get_str()?,
            cpu_abi: BoundedVec::decode(r)?,
            dpi: r.get_i32()?,
            emulator: r.get_bool()?,
            orientation: r.get_str()?,
            time: r.get_i64()?,
            id: r.get_str()?,
            jailbroken: r.get_bool()?,
            locale: r.get_str()?,
            location_status: r.get_str()?,
            manufacturer: r.get_str()?,
            model: r.get_str()?,
            network_access: r.get_str()?,
            os_build: r.get_str()?,
            os_version: r.get_str()?,
            screen_density: r.get_f32()?,
            screen_resolution: r.get_str()?,
            total_memory: r.get_i64()?,
        })
    }
}

impl FixedLayout for UserInfo {
    const ENCODED_LEN: usize = 64 * 3;

    fn encode(&self, w: &mut LayoutWriter) {
        w.put_str(&self.name);
        w.put_str(&self.email);
        w.put_str(&self.id);
    }

    fn decode(r: &mut LayoutReader<'_>) -> CoreResult<Self> {
        Ok(Self {
            name: r.get_str()?,
            email: r.get_str()?,
            id: r.get_str()?,
        })
    }
}

impl FixedLayout for StackFrame {
    const ENCODED_LEN: usize = 8 * 4 + 256 + 256;

    fn encode(&self, w: &mut LayoutWriter) {
        w.put_u64(self.frame_address);
        w.put_u64(self.symbol_address);
        w.put_u64(self.load_address);
        w.put_u64(self.line_number);
        w.put_str(&self.filename);
        w.put_str(&self.method);
    }

    fn decode(r: &mut LayoutReader<'_>) -> CoreResult<Self> {
        Ok(Self {
            frame_address: r.get_u64()?,
            symbol_address: r.get_u64()?,
            load_address: r.get_u64()?,
            line_number: r.get_u64()?,
            filename: r.get_str()?,
            method: r.get_str()?,
        })
    }
}

impl FixedLayout for Exception {
    const ENCODED_LEN: usize = 64
        + 256
        + 32
        + <BoundedVec<StackFrame, FRAMES_MAX>>::ENCODED_LEN;

    fn encode(&self, w: &mut LayoutWriter) {
        w.put_str(&self.name);
        w.put_str(&self.message);
        w.put_str(&self.exception_type);
        self.frames.encode(w);
    }

    fn decode(r: &mut LayoutReader<'_>) -> CoreResult<Self> {
        Ok(Self {
            name: r.get_str()?,
            message: r.get_str()?,
            exception_type: r.get_str()?,
            frames: BoundedVec::decode(r)?,
        })
    }
}

const KIND_NONE: i32 = 0;
const KIND_BOOL: i32 = 1;
const KIND_TEXT: i32 = 2;
const KIND_NUMBER: i32 = 3;

/// One metadata slot: name, section, kind tag and a field for every kind.
const METADATA_SLOT_LEN: usize = 32 + 32 + 4 + 1 + 64 + 8;

fn encode_metadata_entry(entry: &MetadataEntry, w: &mut LayoutWriter) {
    let (kind, flag, text, number) = match &entry.value {
        MetadataValue::Bool(b) => (KIND_BOOL, *b, BoundedStr::default(), 0.0),
        MetadataValue::Text(t) => (KIND_TEXT, false, *t, 0.0),
        MetadataValue::Number(n) => (KIND_NUMBER, false, BoundedStr::default(), *n),
    };
    w.put_str(&entry.name);
    w.put_str(&entry.section);
    w.put_i32(kind);
    w.put_bool(flag);
    w.put_str::<64>(&text);
    w.put_f64(number);
}

/// Returns `None` for slots of kind none.
fn decode_metadata_entry(r: &mut LayoutReader<'_>) -> CoreResult<Option<MetadataEntry>> {
    let name = r.get_str()?;
    let section = r.get_str()?;
    let kind = r.get_i32()?;
    let flag = r.get_bool()?;
    let text = r.get_str()?;
    let number = r.get_f64()?;

    let value = match kind {
        KIND_NONE => return Ok(None),
        KIND_BOOL => MetadataValue::Bool(flag),
        KIND_TEXT => MetadataValue::Text(text),
        KIND_NUMBER => MetadataValue::Number(number),
        other => {
            return Err(CoreError::corrupted(format!(
                "unknown metadata kind {other} for {section}.{name}"
            )))
        }
    };
    Ok(Some(MetadataEntry {
        section,
        name,
        value,
    }))
}

impl FixedLayout for Metadata {
    const ENCODED_LEN: usize = 4 + METADATA_MAX * METADATA_SLOT_LEN;

    fn encode(&self, w: &mut LayoutWriter) {
        w.put_count(self.len());
        for entry in self.iter() {
            encode_metadata_entry(entry, w);
        }
        w.put_zeros((METADATA_MAX - self.len()) * METADATA_SLOT_LEN);
    }

    fn decode(r: &mut LayoutReader<'_>) -> CoreResult<Self> {
        let count = r.get_count(METADATA_MAX)?;
        let mut entries = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(entry) = decode_metadata_entry(r)? {
                entries.push(entry);
            }
        }
        r.skip((METADATA_MAX - count) * METADATA_SLOT_LEN)?;
        Ok(Self::from_entries(BoundedVec::from_iter_truncated(entries)))
    }
}

impl FixedLayout for CrumbMetadataPair {
    const ENCODED_LEN: usize = 32 + 64;

    fn encode(&self, w: &mut LayoutWriter) {
        w.put_str(&self.key);
        w.put_str(&self.value);
    }

    fn decode(r: &mut LayoutReader<'_>) -> CoreResult<Self> {
        Ok(Self {
            key: r.get_str()?,
            value: r.get_str()?,
        })
    }
}

fn decode_crumb_type(r: &mut LayoutReader<'_>) -> CoreResult<BreadcrumbType> {
    let tag = r.get_i32()?;
    BreadcrumbType::from_tag(tag)
        .ok_or_else(|| CoreError::corrupted(format!("unknown breadcrumb type {tag}")))
}

/// Pairs are terminated by the first empty key; a full list has no
/// terminator.
impl FixedLayout for Breadcrumb {
    const ENCODED_LEN: usize =
        64 + 37 + 4 + CRUMB_METADATA_MAX * CrumbMetadataPair::ENCODED_LEN;

    fn encode(&self, w: &mut LayoutWriter) {
        w.put_str(&self.name);
        w.put_str(&self.timestamp);
        w.put_i32(self.crumb_type.as_tag());
        for pair in &self.metadata {
            pair.encode(w);
        }
        w.put_zeros((CRUMB_METADATA_MAX - self.metadata.len()) * CrumbMetadataPair::ENCODED_LEN);
    }

    fn decode(r: &mut LayoutReader<'_>) -> CoreResult<Self> {
        let name = r.get_str()?;
        let timestamp = r.get_str()?;
        let crumb_type = decode_crumb_type(r)?;

        let mut pairs = Vec::new();
        let mut terminated = false;
        for _ in 0..CRUMB_METADATA_MAX {
            if terminated {
                r.skip(CrumbMetadataPair::ENCODED_LEN)?;
                continue;
            }
            let key: BoundedStr<32> = r.get_str()?;
            if key.is_empty() {
                terminated = true;
                r.skip(64)?;
                continue;
            }
            pairs.push(CrumbMetadataPair {
                key,
                value: r.get_str()?,
            });
        }

        Ok(Self {
            name,
            timestamp,
            crumb_type,
            metadata: BoundedVec::from_iter_truncated(pairs),
        })
    }
}

/// Borrowed view of the fields every format version stores, in order.
pub(crate) struct ReportBody<'a> {
    notifier: &'a Notifier,
    app: &'a AppInfo,
    device: &'a DeviceInfo,
    user: &'a UserInfo,
    exception: &'a Exception,
    metadata: &'a Metadata,
    breadcrumbs: &'a BreadcrumbRing,
    context: &'a BoundedStr<64>,
    severity: Severity,
    session_id: &'a BoundedStr<33>,
    session_start: &'a BoundedStr<33>,
    handled_events: i32,
}

/// Encoded size of [`ReportBody`].
pub(crate) const BODY_LEN: usize = Notifier::ENCODED_LEN
        + AppInfo::ENCODED_LEN
        + DeviceInfo::ENCODED_LEN
        + UserInfo::ENCODED_LEN
        + Exception::ENCODED_LEN
        + Metadata::ENCODED_LEN
        + BreadcrumbRing::ENCODED_LEN
        + 64
        + 4
        + 33
        + 33
        + 4;

impl ReportBody<'_> {
    pub(crate) fn encode(&self, w: &mut LayoutWriter) {
        self.notifier.encode(w);
        self.app.encode(w);
        self.device.encode(w);
        self.user.encode(w);
        self.exception.encode(w);
        self.metadata.encode(w);
        self.breadcrumbs.encode(w);
        w.put_str(self.context);
        w.put_i32(self.severity.as_tag());
        w.put_str(self.session_id);
        w.put_str(self.session_start);
        w.put_i32(self.handled_events);
    }

    /// Decodes the shared fields, which is exactly a version 1 report.
    pub(crate) fn decode(r: &mut LayoutReader<'_>) -> CoreResult<LegacyReport> {
        Ok(LegacyReport {
            notifier: Notifier::decode(r)?,
            app: AppInfo::decode(r)?,
            device: DeviceInfo::decode(r)?,
            user: UserInfo::decode(r)?,
            exception: Exception::decode(r)?,
            metadata: Metadata::decode(r)?,
            breadcrumbs: BreadcrumbRing::decode(r)?,
            context: r.get_str()?,
            severity: decode_severity(r)?,
            session_id: r.get_str()?,
            session_start: r.get_str()?,
            handled_events: r.get_i32()?,
        })
    }
}

fn decode_severity(r: &mut LayoutReader<'_>) -> CoreResult<Severity> {
    let tag = r.get_i32()?;
    Severity::from_tag(tag).ok_or_else(|| CoreError::corrupted(format!("unknown severity {tag}")))
}

impl<'a> From<&'a Report> for ReportBody<'a> {
    fn from(report: &'a Report) -> Self {
        Self {
            notifier: &report.notifier,
            app: &report.app,
            device: &report.device,
            user: &report.user,
            exception: &report.exception,
            metadata: &report.metadata,
            breadcrumbs: &report.breadcrumbs,
            context: &report.context,
            severity: report.severity,
            session_id: &report.session_id,
            session_start: &report.session_start,
            handled_events: report.handled_events,
        }
    }
}

impl<'a> From<&'a LegacyReport> for ReportBody<'a> {
    fn from(report: &'a LegacyReport) -> Self {
        Self {
            notifier: &report.notifier,
            app: &report.app,
            device: &report.device,
            user: &report.user,
            exception: &report.exception,
            metadata: &report.metadata,
            breadcrumbs: &report.breadcrumbs,
            context: &report.context,
            severity: report.severity,
            session_id: &report.session_id,
            session_start: &report.session_start,
            handled_events: report.handled_events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::layout::{decode_block, encode_block};
    use crate::format::ByteOrder;

    fn crumb(name: &str) -> Breadcrumb {
        Breadcrumb::new(name, "2024-01-01T00:00:00Z", BreadcrumbType::Manual)
    }

    #[test]
    fn section_sizes() {
        assert_eq!(Notifier::ENCODED_LEN, 144);
        assert_eq!(AppInfo::ENCODED_LEN, 534);
        assert_eq!(DeviceInfo::ENCODED_LEN, 874);
        assert_eq!(StackFrame::ENCODED_LEN, 544);
        assert_eq!(Breadcrumb::ENCODED_LEN, 873);
        assert_eq!(METADATA_SLOT_LEN, 141);
    }

    #[test]
    fn encoders_produce_declared_sizes() {
        let order = ByteOrder::Little;
        assert_eq!(encode_block(&Notifier::default(), order).len(), Notifier::ENCODED_LEN);
        assert_eq!(encode_block(&AppInfo::default(), order).len(), AppInfo::ENCODED_LEN);
        assert_eq!(encode_block(&DeviceInfo::default(), order).len(), DeviceInfo::ENCODED_LEN);
        assert_eq!(encode_block(&Exception::default(), order).len(), Exception::ENCODED_LEN);
        assert_eq!(encode_block(&Metadata::default(), order).len(), Metadata::ENCODED_LEN);
        assert_eq!(
            encode_block(&BreadcrumbRing::default(), order).len(),
            BreadcrumbRing::ENCODED_LEN
        );
    }

    #[test]
    fn device_round_trip_big_endian() {
        let mut device = DeviceInfo {
            api_level: 29,
            battery_level: 0.75,
            brand: "google".into(),
            screen_density: 2.625,
            time: 1_700_000_000,
            total_memory: 4 << 30,
            jailbroken: true,
            ..DeviceInfo::default()
        };
        device.cpu_abi.try_push("arm64-v8a".into()).unwrap();
        device.cpu_abi.try_push("armeabi-v7a".into()).unwrap();

        let bytes = encode_block(&device, ByteOrder::Big);
        let decoded: DeviceInfo = decode_block(&bytes, ByteOrder::Big).unwrap();
        assert_eq!(decoded, device);
    }

    #[test]
    fn bounded_vec_count_over_capacity_is_corrupted() {
        let mut bytes = encode_block(&Exception::default(), ByteOrder::Little);
        let count_at = 64 + 256 + 32;
        bytes[count_at..count_at + 4].copy_from_slice(&193i32.to_le_bytes());
        let err = decode_block::<Exception>(&bytes, ByteOrder::Little).unwrap_err();
        assert!(matches!(err, CoreError::Corrupted { .. }));
    }

    #[test]
    fn metadata_skips_kind_none_slots() {
        let mut metadata = Metadata::new();
        metadata.add_text("account", "plan", "pro").unwrap();
        metadata.add_number("account", "seats", 3.0).unwrap();
        let mut bytes = encode_block(&metadata, ByteOrder::Little);

        // Clear the kind tag of the first slot.
        let kind_at = 4 + 32 + 32;
        bytes[kind_at..kind_at + 4].copy_from_slice(&0i32.to_le_bytes());

        let decoded: Metadata = decode_block(&bytes, ByteOrder::Little).unwrap();
        let names: Vec<_> = decoded.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["seats"]);
    }

    #[test]
    fn metadata_unknown_kind_is_corrupted() {
        let mut metadata = Metadata::new();
        metadata.add_bool("flags", "beta", true).unwrap();
        let mut bytes = encode_block(&metadata, ByteOrder::Little);
        let kind_at = 4 + 32 + 32;
        bytes[kind_at..kind_at + 4].copy_from_slice(&9i32.to_le_bytes());
        assert!(decode_block::<Metadata>(&bytes, ByteOrder::Little).is_err());
    }

    #[test]
    fn breadcrumb_pairs_stop_at_empty_key() {
        let original = crumb("tap").with_metadata("a", "1").with_metadata("b", "2");
        let mut bytes = encode_block(&original, ByteOrder::Little);

        // Blank the first key: nothing after it is read.
        let pairs_at = 64 + 37 + 4;
        bytes[pairs_at] = 0;

        let decoded: Breadcrumb = decode_block(&bytes, ByteOrder::Little).unwrap();
        assert_eq!(decoded.metadata().count(), 0);
    }

    #[test]
    fn breadcrumb_full_metadata_round_trips() {
        let mut original = crumb("full");
        for i in 0..CRUMB_METADATA_MAX {
            original.add_metadata(&format!("k{i}"), &format!("v{i}")).unwrap();
        }
        let bytes = encode_block(&original, ByteOrder::Little);
        let decoded: Breadcrumb = decode_block(&bytes, ByteOrder::Little).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn ring_keeps_physical_slots() {
        let mut slots = vec![Breadcrumb::default(); crate::model::CRUMBS_MAX];
        slots[0] = crumb("STALE");
        slots[1] = crumb("A");
        slots[2] = crumb("B");
        let ring = BreadcrumbRing::from_raw_parts(slots, 2, 1).unwrap();

        let bytes = encode_block(&ring, ByteOrder::Little);
        let decoded: BreadcrumbRing = decode_block(&bytes, ByteOrder::Little).unwrap();
        assert_eq!(decoded, ring);
        let names: Vec<_> = decoded.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn ring_tolerates_garbage_in_stale_slots() {
        let mut ring = BreadcrumbRing::new();
        ring.push(crumb("live"));
        let mut bytes = encode_block(&ring, ByteOrder::Little);

        // Fill the second (stale) slot's name with bytes lacking a terminator.
        let slot_at = 8 + Breadcrumb::ENCODED_LEN;
        bytes[slot_at..slot_at + 64].fill(b'x');

        let decoded: BreadcrumbRing = decode_block(&bytes, ByteOrder::Little).unwrap();
        let names: Vec<_> = decoded.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["live"]);
    }

    #[test]
    fn ring_rejects_garbage_in_live_slots() {
        let mut ring = BreadcrumbRing::new();
        ring.push(crumb("live"));
        let mut bytes = encode_block(&ring, ByteOrder::Little);
        bytes[8..8 + 64].fill(b'x');
        assert!(decode_block::<BreadcrumbRing>(&bytes, ByteOrder::Little).is_err());
    }

    #[test]
    fn ring_rejects_first_index_out_of_range() {
        let mut ring = BreadcrumbRing::new();
        ring.push(crumb("live"));
        let mut bytes = encode_block(&ring, ByteOrder::Little);
        bytes[4..8].copy_from_slice(&30i32.to_le_bytes());
        assert!(decode_block::<BreadcrumbRing>(&bytes, ByteOrder::Little).is_err());
    }

    #[test]
    fn unknown_breadcrumb_type_is_corrupted() {
        let mut bytes = encode_block(&crumb("x"), ByteOrder::Little);
        let type_at = 64 + 37;
        bytes[type_at..type_at + 4].copy_from_slice(&42i32.to_le_bytes());
        assert!(decode_block::<Breadcrumb>(&bytes, ByteOrder::Little).is_err());
    }
}
