//! Upgrade command implementation.

use crashsnap_core::{upgrade_report_file, Config, FormatVersion, CURRENT_VERSION};
use std::path::Path;
use tracing::info;

/// Runs the upgrade command.
pub fn run(src: &Path, dst: &Path) -> Result<(), Box<dyn std::error::Error>> {
    info!("Upgrading {:?} to format v{}", src, CURRENT_VERSION);

    let from = upgrade_report_file(src, dst, &Config::default())?;

    if from == FormatVersion::V2 {
        println!("{} was already current; rewritten to {:?}", src.display(), dst);
    } else {
        println!(
            "Upgraded {} from {} to v{}: {:?}",
            src.display(),
            from,
            CURRENT_VERSION,
            dst
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crashsnap_core::{
        read_report_file, read_report_header, write_legacy_report_file, LegacyReport,
        ReportHeader,
    };
    use tempfile::tempdir;

    #[test]
    fn upgrades_legacy_file() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("old.report");
        let dst = dir.path().join("new.report");
        let legacy = LegacyReport {
            handled_events: 7,
            ..LegacyReport::default()
        };
        write_legacy_report_file(&src, &ReportHeader::new(1, ""), &legacy, &Config::default())
            .unwrap();

        run(&src, &dst).unwrap();

        assert_eq!(read_report_header(&dst).unwrap().version, CURRENT_VERSION);
        let report = read_report_file(&dst).unwrap();
        assert_eq!(report.handled_events, 7);
        assert_eq!(report.unhandled_events, 1);
    }

    #[test]
    fn unreadable_source_fails() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("junk.report");
        std::fs::write(&src, b"not a report").unwrap();
        assert!(run(&src, &dir.path().join("out.report")).is_err());
    }
}
