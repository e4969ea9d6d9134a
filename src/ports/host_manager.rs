use std::path::Path;

use crate::domain::AppError;

/// Web-server side of virtual-host registration.
///
/// An unavailable host manager is a skip condition for the vhost step, not
/// an error.
pub trait HostManager {
    /// Whether a host-manager configuration directory is present on this
    /// machine.
    fn available(&self) -> bool;

    /// Install a rendered configuration file under the given name.
    fn install_conf(&self, name: &str, rendered: &Path) -> Result<(), AppError>;

    /// Enable an installed site configuration. Enabling an already-enabled
    /// site is not an error.
    fn enable_site(&self, name: &str) -> Result<(), AppError>;

    /// Reload the web server so the new host takes effect.
    fn reload(&self) -> Result<(), AppError>;
}
