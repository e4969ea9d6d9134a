use std::path::Path;

use crate::domain::AppError;

/// Unpacks a downloaded package archive into a directory.
pub trait ArchiveExtractor {
    fn extract(&self, archive: &Path, dest: &Path) -> Result<(), AppError>;
}
