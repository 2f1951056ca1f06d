//! Inspect command implementation.

use crashsnap_core::{read_from, read_header_from, FormatVersion, Report, ReportHeader};
use crashsnap_storage::{FileBackend, StorageBackend};
use serde::Serialize;
use std::path::Path;

/// Report inspection result.
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// Report file path.
    pub path: String,
    /// File size in bytes.
    pub file_size: u64,
    /// Header version as stored.
    pub version: i32,
    /// Payload layout used to read the file.
    pub layout: String,
    /// Payload byte order.
    pub byte_order: String,
    /// OS build recorded in the header.
    pub os_build: String,
    /// Expected payload size in bytes.
    pub payload_len: usize,
    /// Exception class.
    pub exception: String,
    /// Number of stack frames.
    pub frames: usize,
    /// Number of custom metadata entries.
    pub metadata_entries: usize,
    /// Number of live breadcrumbs.
    pub breadcrumbs: usize,
    /// Session identifier, if the report belongs to a session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Runs the inspect command.
pub fn run(path: &Path, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let result = inspect(path)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            print_text_output(&result);
        }
    }

    Ok(())
}

/// Reads the report at `path` and summarizes it.
pub fn inspect(path: &Path) -> Result<InspectResult, Box<dyn std::error::Error>> {
    if !path.is_file() {
        return Err(format!("No report file found at {:?}", path).into());
    }

    let backend = FileBackend::open_read_only(path)?;
    let header = read_header_from(&backend)?;
    let layout = header.format_version()?;
    let report = read_from(&backend)?;

    Ok(summarize(path, backend.size()?, &header, &report, layout))
}

fn summarize(
    path: &Path,
    file_size: u64,
    header: &ReportHeader,
    report: &Report,
    layout: FormatVersion,
) -> InspectResult {
    InspectResult {
        path: path.display().to_string(),
        file_size,
        version: header.version,
        layout: layout.to_string(),
        byte_order: header.byte_order.to_string(),
        os_build: header.os_build.to_string(),
        payload_len: layout.payload_len(),
        exception: report.exception.name.to_string(),
        frames: report.exception.frames.len(),
        metadata_entries: report.metadata.len(),
        breadcrumbs: report.breadcrumbs.len(),
        session_id: report
            .has_session()
            .then(|| report.session_id.to_string()),
    }
}

fn print_text_output(result: &InspectResult) {
    println!("crashsnap Report Inspection");
    println!("===========================");
    println!();
    println!("Path: {}", result.path);
    println!("Size: {} bytes", format_size(result.file_size));
    println!();
    println!("Header:");
    println!("  Version:    {} (read as {})", result.version, result.layout);
    println!("  Byte order: {}", result.byte_order);
    println!("  OS build:   {}", result.os_build);
    println!("  Payload:    {} bytes", format_size(result.payload_len as u64));
    println!();
    println!("Contents:");
    println!("  Exception:        {}", result.exception);
    println!("  Stack frames:     {}", result.frames);
    println!("  Metadata entries: {}", result.metadata_entries);
    println!("  Breadcrumbs:      {}", result.breadcrumbs);
    match &result.session_id {
        Some(id) => println!("  Session:          {}", id),
        None => println!("  Session:          none"),
    }
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{}", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
