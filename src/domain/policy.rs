//! Pure decision rules for the optional parts of the workflow.

use crate::domain::{Version, VersionSelector};

/// A database is only needed when a Joomla application is installed.
pub fn needs_database(version: &VersionSelector) -> bool {
    version.installs_joomla()
}

/// Configuration is only written when a Joomla application is installed.
pub fn needs_config(version: &VersionSelector) -> bool {
    version.installs_joomla()
}

/// Symlinking (and the matching extension install) runs only when projects
/// were requested.
pub fn needs_symlink(projects: &[String]) -> bool {
    !projects.is_empty()
}

/// The web-installer plugin ships with Joomla 3.2.0 and newer.
///
/// `latest` always qualifies. For a pinned release the version found in the
/// downloaded tree decides; when the tree version cannot be determined the
/// requested release number itself is compared instead. Branch names never
/// qualify.
pub fn needs_plugin_activation(version: &VersionSelector, installed: Option<&str>) -> bool {
    match version {
        VersionSelector::None => false,
        VersionSelector::Latest => true,
        VersionSelector::Release(requested) => {
            let effective = installed.unwrap_or(requested);
            Version::parse(effective).is_some_and(|v| v >= Version::from([3, 2, 0]))
        }
    }
}
