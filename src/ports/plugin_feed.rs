use std::path::Path;

use url::Url;

use crate::domain::AppError;

/// A downloadable plugin package selected from the remote update manifest.
#[derive(Debug, Clone)]
pub struct PluginPackage {
    pub url: Url,
    /// Version declared in the manifest, empty when absent.
    pub version: String,
}

impl PluginPackage {
    /// File name the package is cached under, taken from the download URL.
    pub fn file_name(&self) -> Option<&str> {
        self.url.path_segments().and_then(|segments| segments.last()).filter(|s| !s.is_empty())
    }
}

/// Remote source of the web-installer plugin.
pub trait PluginFeed {
    /// Fetch the update manifest and select the full zip package, if any.
    fn fetch_manifest(&self) -> Result<Option<PluginPackage>, AppError>;

    /// Download a package to `dest`, returning the number of bytes written.
    fn download_package(&self, package: &PluginPackage, dest: &Path) -> Result<u64, AppError>;
}
