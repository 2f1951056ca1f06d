//! Verify command implementation.

use crashsnap_core::read_report_file;
use std::path::{Path, PathBuf};

/// Verification result.
#[derive(Debug, Default)]
pub struct VerifyResult {
    /// Number of files checked.
    pub files_checked: usize,
    /// Number of readable reports.
    pub valid_reports: usize,
    /// Number of unreadable reports.
    pub invalid_reports: usize,
    /// One message per unreadable report.
    pub errors: Vec<String>,
}

impl VerifyResult {
    fn is_ok(&self) -> bool {
        self.invalid_reports == 0
    }
}

/// Runs the verify command.
pub fn run(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("Verifying reports in {:?}", dir);
    println!();

    let result = verify_dir(dir)?;
    for error in &result.errors {
        println!("  ✗ {}", error);
    }

    println!();
    println!("  Files checked:  {}", result.files_checked);
    println!("  Readable:       {}", result.valid_reports);
    println!("  Unreadable:     {}", result.invalid_reports);
    println!();

    if result.is_ok() {
        println!("✓ Report verification passed");
        Ok(())
    } else {
        println!("✗ Report verification failed");
        Err("Verification failed".into())
    }
}

/// Attempts to read every regular file in `dir`.
pub fn verify_dir(dir: &Path) -> Result<VerifyResult, Box<dyn std::error::Error>> {
    if !dir.is_dir() {
        return Err(format!("No report directory found at {:?}", dir).into());
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    let mut result = VerifyResult::default();
    for path in files {
        result.files_checked += 1;
        match read_report_file(&path) {
            Ok(_) => result.valid_reports += 1,
            Err(e) => {
                result.invalid_reports += 1;
                result.errors.push(format!("{}: {}", path.display(), e));
            }
        }
    }

    Ok(result)
}
