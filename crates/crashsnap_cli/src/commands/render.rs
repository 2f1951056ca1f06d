//! Render command implementation.

use crashsnap_core::{read_report_file, Config, Renderer};
use std::path::Path;
use tracing::info;

/// Runs the render command.
pub fn run(
    path: &Path,
    pretty: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = render_file(path, pretty)?;

    match output {
        Some(out) => {
            std::fs::write(out, text.as_bytes())?;
            info!("Rendered {:?} to {:?}", path, out);
        }
        None => println!("{}", text),
    }

    Ok(())
}

/// Reads the report at `path` and renders its event document.
pub fn render_file(path: &Path, pretty: bool) -> Result<String, Box<dyn std::error::Error>> {
    let report = read_report_file(path)?;
    let renderer = Renderer::from_config(&Config::new().pretty(pretty));
    Ok(renderer.render(&report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crashsnap_core::{write_report_file, Report, ReportHeader};
    use tempfile::tempdir;

    #[test]
    fn renders_report_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("r.report");
        let mut report = Report::default();
        report.context.set("Settings");
        write_report_file(&path, &ReportHeader::current(""), &report, &Config::default()).unwrap();

        let compact = render_file(&path, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(value["context"], "Settings");
        assert!(render_file(&path, true).unwrap().contains('\n'));
    }

    #[test]
    fn writes_output_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("r.report");
        let out = dir.path().join("r.json");
        write_report_file(
            &path,
            &ReportHeader::current(""),
            &Report::default(),
            &Config::default(),
        )
        .unwrap();

        run(&path, false, Some(&out)).unwrap();
        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.starts_with('{'));
    }
}
