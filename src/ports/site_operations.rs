use std::path::Path;

use crate::domain::{AppError, VersionSelector};

/// The independently-addressable sub-operations the workflow delegates to.
///
/// Each call blocks until the operation finishes and maps a non-zero outcome
/// to [`AppError::SubOperation`]; internals of the operations are not part
/// of this crate.
pub trait SiteOperations {
    /// Fetch the requested source tree into the site directory.
    fn download(
        &self,
        site: &str,
        version: &VersionSelector,
        clear_cache: bool,
    ) -> Result<(), AppError>;

    /// Create the site database and import the schema, optionally with a
    /// sample data set.
    fn install_database(&self, site: &str, sample_data: Option<&str>) -> Result<(), AppError>;

    /// Write the site's configuration file.
    fn configure(&self, site: &str) -> Result<(), AppError>;

    /// Symlink project directories into the site.
    fn symlink_projects(
        &self,
        site: &str,
        projects: &[String],
        www: &Path,
        projects_dir: &Path,
    ) -> Result<(), AppError>;

    /// Register symlinked projects as installed extensions.
    fn install_extensions(
        &self,
        site: &str,
        extensions: &[String],
        www: &Path,
    ) -> Result<(), AppError>;
}
