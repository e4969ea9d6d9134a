//! Apache host-manager adapter.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::AppError;
use crate::ports::HostManager;

const DEFAULT_SITES_AVAILABLE: &str = "/etc/apache2/sites-available";

/// Installs rendered host files under `sites-available`, enables them via a
/// `sites-enabled` symlink, and reloads Apache.
#[derive(Debug, Clone)]
pub struct ApacheHostManager {
    sites_available: PathBuf,
    sites_enabled: PathBuf,
    reload_command: Vec<String>,
}

impl ApacheHostManager {
    /// Host manager for the machine's Apache installation. The
    /// `JSITE_APACHE_DIR` environment variable overrides the
    /// `sites-available` location.
    pub fn system() -> Self {
        let sites_available = env::var("JSITE_APACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SITES_AVAILABLE));
        Self::at(sites_available)
    }

    /// Host manager rooted at an explicit `sites-available` directory;
    /// `sites-enabled` is assumed to be its sibling.
    pub fn at(sites_available: PathBuf) -> Self {
        let sites_enabled = sites_available
            .parent()
            .map(|parent| parent.join("sites-enabled"))
            .unwrap_or_else(|| PathBuf::from("sites-enabled"));

        Self {
            sites_available,
            sites_enabled,
            reload_command: vec!["service".to_string(), "apache2".to_string(), "reload".to_string()],
        }
    }

    #[cfg(test)]
    fn with_reload_command(mut self, argv: &[&str]) -> Self {
        self.reload_command = argv.iter().map(|s| s.to_string()).collect();
        self
    }

    fn conf_path(&self, name: &str) -> PathBuf {
        self.sites_available.join(name)
    }
}

impl HostManager for ApacheHostManager {
    fn available(&self) -> bool {
        self.sites_available.is_dir()
    }

    fn install_conf(&self, name: &str, rendered: &Path) -> Result<(), AppError> {
        fs::copy(rendered, self.conf_path(name))?;
        Ok(())
    }

    fn enable_site(&self, name: &str) -> Result<(), AppError> {
        fs::create_dir_all(&self.sites_enabled)?;

        let link = self.sites_enabled.join(name);
        match std::os::unix::fs::symlink(self.conf_path(name), &link) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn reload(&self) -> Result<(), AppError> {
        let (program, args) = self
            .reload_command
            .split_first()
            .ok_or_else(|| AppError::config_error("empty reload command"))?;

        let output = Command::new(program).args(args).output().map_err(|e| {
            AppError::sub_operation("apache reload", format!("could not start '{}': {}", program, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::sub_operation(
                "apache reload",
                if stderr.is_empty() { "unknown error".to_string() } else { stderr },
            ));
        }

        Ok(())
    }
}
