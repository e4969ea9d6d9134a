use crate::domain::{AppError, SiteContext};

/// Descriptor row for a plugin added to the site's extension registry.
#[derive(Debug, Clone)]
pub struct PluginDescriptor {
    pub name: String,
    pub element: String,
    pub folder: String,
    pub version: String,
    pub description: String,
}

impl PluginDescriptor {
    /// The bundled web-installer plugin at the given manifest version.
    pub fn web_installer(version: &str) -> Self {
        Self {
            name: "plg_installer_webinstaller".to_string(),
            element: "webinstaller".to_string(),
            folder: "installer".to_string(),
            version: version.to_string(),
            description: "Web Installer".to_string(),
        }
    }
}

/// The site's extension registry (the `#__extensions` database table).
pub trait ExtensionRegistry {
    /// Insert one enabled-plugin row carrying the descriptor as manifest
    /// metadata.
    fn register_plugin(&self, site: &SiteContext, plugin: &PluginDescriptor)
    -> Result<(), AppError>;
}
