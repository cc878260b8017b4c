//! Writing the timestamped output artifact.

use std::fs;
use std::path::{Path, PathBuf};

use super::report::ValidationReport;
use crate::error::ArmvError;

/// Write the report to `output-<timestamp>.txt` under `output_path`.
///
/// The directory is created if it does not exist. Only called once a
/// terminal state was actually reached.
///
/// # Returns
/// * `Ok(PathBuf)` - Full path of the file written
/// * `Err` - If the directory or file cannot be written
pub fn write_report(output_path: &Path, report: &ValidationReport) -> Result<PathBuf, ArmvError> {
    fs::create_dir_all(output_path).map_err(|source| ArmvError::Output {
        path: output_path.display().to_string(),
        source,
    })?;

    let file_name = format!("output-{}.txt", report.timestamp.format("%Y-%m-%d-%H-%M-%S"));
    let full_path = output_path.join(file_name);

    fs::write(&full_path, &report.detail).map_err(|source| ArmvError::Output {
        path: full_path.display().to_string(),
        source,
    })?;

    log::info!("Report written to {}", full_path.display());
    Ok(full_path)
}
