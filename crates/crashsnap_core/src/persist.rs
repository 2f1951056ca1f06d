//! Writing and reading report files.
//!
//! A report is written once, as a header block followed by a payload block,
//! and read back once. Reading accepts every supported format version and
//! always yields a current [`Report`]; version 1 files are migrated on the
//! way in.

use crate::config::Config;
use crate::error::{Block, CoreError, CoreResult};
use crate::format::{
    decode_legacy_payload, decode_payload, encode_legacy_payload, encode_payload, FormatVersion,
    ReportHeader, CURRENT_VERSION,
};
use crate::model::{LegacyReport, Report};
use crashsnap_storage::{FileBackend, StorageBackend};
use std::path::Path;
use tracing::{debug, trace};

/// Writes `header` and `report` to an empty backend.
///
/// The payload is encoded in the byte order the header declares.
///
/// # Errors
///
/// - [`CoreError::UnsupportedVersion`] if `header.version` is not
///   [`CURRENT_VERSION`]
/// - [`CoreError::ShortWrite`] if the medium accepted only part of a block
/// - [`CoreError::Storage`] for any other backend failure
pub fn write_to(
    backend: &mut dyn StorageBackend,
    header: &ReportHeader,
    report: &Report,
) -> CoreResult<()> {
    if header.version != CURRENT_VERSION {
        return Err(CoreError::unsupported_version(header.version));
    }
    let payload = encode_payload(report, header.byte_order);
    write_blocks(backend, header, &payload)
}

/// Writes a report in the version 1 layout, as software predating the
/// unhandled-event counter would have.
///
/// # Errors
///
/// As [`write_to`], except that `header.version` must be 1.
pub fn write_legacy_to(
    backend: &mut dyn StorageBackend,
    header: &ReportHeader,
    report: &LegacyReport,
) -> CoreResult<()> {
    if header.version != FormatVersion::V1.as_i32() {
        return Err(CoreError::unsupported_version(header.version));
    }
    let payload = encode_legacy_payload(report, header.byte_order);
    write_blocks(backend, header, &payload)
}

fn write_blocks(
    backend: &mut dyn StorageBackend,
    header: &ReportHeader,
    payload: &[u8],
) -> CoreResult<()> {
    let header_bytes = header.encode();
    backend
        .append(&header_bytes)
        .map_err(|e| CoreError::from_write(Block::Header, e))?;
    backend
        .append(payload)
        .map_err(|e| CoreError::from_write(Block::Payload, e))?;
    backend.flush()?;

    debug!(
        version = header.version,
        byte_order = %header.byte_order,
        payload_len = payload.len(),
        "wrote report"
    );
    Ok(())
}

/// Reads just the header block.
///
/// # Errors
///
/// - [`CoreError::ShortRead`] if fewer than [`ReportHeader::ENCODED_LEN`]
///   bytes are stored
/// - [`CoreError::Corrupted`] if the header is malformed
pub fn read_header_from(backend: &dyn StorageBackend) -> CoreResult<ReportHeader> {
    let bytes = backend
        .read_at(0, ReportHeader::ENCODED_LEN)
        .map_err(|e| CoreError::from_read(Block::Header, ReportHeader::ENCODED_LEN, e))?;
    ReportHeader::decode(&bytes)
}

/// Reads a report of any supported version.
///
/// Version 1 payloads are migrated: every shared field is kept and
/// `unhandled_events` becomes 1.
///
/// # Errors
///
/// - [`CoreError::ShortRead`] if either block is truncated
/// - [`CoreError::UnsupportedVersion`] if the header version is below 1
/// - [`CoreError::Corrupted`] if a block is malformed
pub fn read_from(backend: &dyn StorageBackend) -> CoreResult<Report> {
    let header = read_header_from(backend)?;
    let version = header.format_version()?;
    if header.version > CURRENT_VERSION {
        debug!(
            version = header.version,
            "header version is newer than this build, reading as {}",
            FormatVersion::V2
        );
    }

    let expected = version.payload_len();
    let offset = ReportHeader::ENCODED_LEN as u64;
    let bytes = backend
        .read_at(offset, expected)
        .map_err(|e| CoreError::from_read(Block::Payload, expected, e))?;

    let stored = backend.size()?;
    let file_len = version.file_len() as u64;
    if stored > file_len {
        debug!(
            trailing = stored - file_len,
            "ignoring bytes after the report payload"
        );
    }

    let report = match version {
        FormatVersion::V1 => {
            let legacy = decode_legacy_payload(&bytes, header.byte_order)?;
            debug!(
                unhandled_events = LegacyReport::UNHANDLED_EVENTS,
                "migrated v1 report to {}",
                FormatVersion::V2
            );
            Report::from(legacy)
        }
        FormatVersion::V2 => decode_payload(&bytes, header.byte_order)?,
    };

    trace!(
        %version,
        byte_order = %header.byte_order,
        frames = report.exception.frames.len(),
        breadcrumbs = report.breadcrumbs.len(),
        metadata = report.metadata.len(),
        "read report"
    );
    Ok(report)
}

/// Writes a report file at `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`CoreError::Open`] if the file cannot be created, otherwise as
/// [`write_to`].
pub fn write_report_file(
    path: &Path,
    header: &ReportHeader,
    report: &Report,
    config: &Config,
) -> CoreResult<()> {
    let mut backend = create_file(path, config)?;
    write_to(&mut backend, header, report)?;
    if config.sync_on_write {
        backend.sync()?;
        trace!(path = %backend.path().display(), "synced report file");
    }
    Ok(())
}

/// Writes a version 1 report file at `path`.
///
/// # Errors
///
/// As [`write_report_file`], except that `header.version` must be 1.
pub fn write_legacy_report_file(
    path: &Path,
    header: &ReportHeader,
    report: &LegacyReport,
    config: &Config,
) -> CoreResult<()> {
    let mut backend = create_file(path, config)?;
    write_legacy_to(&mut backend, header, report)?;
    if config.sync_on_write {
        backend.sync()?;
        trace!(path = %backend.path().display(), "synced report file");
    }
    Ok(())
}

fn create_file(path: &Path, config: &Config) -> CoreResult<FileBackend> {
    let created = if config.create_dirs {
        FileBackend::create_with_dirs(path)
    } else {
        FileBackend::create(path)
    };
    created.map_err(|source| CoreError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn open_file(path: &Path) -> CoreResult<FileBackend> {
    FileBackend::open_read_only(path).map_err(|source| CoreError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the report file at `path`.
///
/// # Errors
///
/// Returns [`CoreError::Open`] if the file cannot be opened, otherwise as
/// [`read_from`].
pub fn read_report_file(path: &Path) -> CoreResult<Report> {
    read_from(&open_file(path)?)
}

/// Reads only the header of the report file at `path`.
///
/// # Errors
///
/// Returns [`CoreError::Open`] if the file cannot be opened, otherwise as
/// [`read_header_from`].
pub fn read_report_header(path: &Path) -> CoreResult<ReportHeader> {
    read_header_from(&open_file(path)?)
}

/// Rewrites the report at `src` in the current layout at `dst`.
///
/// The OS build and byte order of the original header are kept. Returns the
/// version the source was stored in.
///
/// # Errors
///
/// Any error from reading `src` or writing `dst`.
pub fn upgrade_report_file(src: &Path, dst: &Path, config: &Config) -> CoreResult<FormatVersion> {
    let backend = open_file(src)?;
    let header = read_header_from(&backend)?;
    let from = header.format_version()?;
    let report = read_from(&backend)?;

    let upgraded = ReportHeader {
        version: CURRENT_VERSION,
        ..header
    };
    write_report_file(dst, &upgraded, &report, config)?;
    debug!(from = %from, src = %src.display(), dst = %dst.display(), "upgraded report");
    Ok(from)
}
