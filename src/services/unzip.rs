use std::fs;
use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::ArchiveExtractor;

/// Extracts zip archives with the system `unzip` utility, overwriting
/// existing files.
#[derive(Debug, Clone, Default)]
pub struct UnzipExtractor;

impl ArchiveExtractor for UnzipExtractor {
    fn extract(&self, archive: &Path, dest: &Path) -> Result<(), AppError> {
        fs::create_dir_all(dest)?;

        let output = Command::new("unzip")
            .arg("-o")
            .arg(archive)
            .arg("-d")
            .arg(dest)
            .output()
            .map_err(|e| {
                AppError::sub_operation("unzip", format!("could not start 'unzip': {}", e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::sub_operation(
                "unzip",
                if stderr.is_empty() { "unknown error".to_string() } else { stderr },
            ));
        }

        Ok(())
    }
}
