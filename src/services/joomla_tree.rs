//! Probes a downloaded Joomla tree for its release number.

use std::fs;
use std::path::Path;

/// Locations of the version class across the Joomla releases we provision.
const VERSION_FILES: &[&str] = &[
    "libraries/cms/version/version.php",
    "libraries/joomla/version.php",
    "includes/version.php",
];

/// Read the installed Joomla version (`RELEASE.DEV_LEVEL`, e.g. `3.4.1`)
/// from the site's source tree. Returns `None` when no version file is
/// present or it cannot be understood.
pub fn installed_version(target_dir: &Path) -> Option<String> {
    VERSION_FILES
        .iter()
        .filter_map(|rel| fs::read_to_string(target_dir.join(rel)).ok())
        .find_map(|source| scan_version(&source))
}

fn scan_version(source: &str) -> Option<String> {
    let release = constant_value(source, "RELEASE")?;
    match constant_value(source, "DEV_LEVEL") {
        Some(dev_level) => Some(format!("{}.{}", release, dev_level)),
        None => Some(release),
    }
}

/// Value of a `const NAME = '...'` (or `var $NAME = '...'`) declaration.
fn constant_value(source: &str, name: &str) -> Option<String> {
    source.lines().find_map(|line| {
        let idx = line.find(name)?;

        // Word boundaries, so RELEASE does not match RELDATE or
        // RELEASE_DATE-style names.
        let before = line[..idx].chars().next_back();
        if matches!(before, Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            return None;
        }
        let after = line[idx + name.len()..].chars().next();
        if matches!(after, Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            return None;
        }

        let rest = &line[idx + name.len()..];
        let rest = rest.trim_start();
        let rest = rest.strip_prefix('=')?.trim_start();
        let quote = rest.chars().next().filter(|c| *c == '\'' || *c == '"')?;
        let rest = &rest[1..];
        let end = rest.find(quote)?;
        Some(rest[..end].to_string())
    })
}
