mod archive;
mod extension_registry;
mod host_manager;
mod plugin_feed;
mod site_operations;

pub use archive::ArchiveExtractor;
pub use extension_registry::{ExtensionRegistry, PluginDescriptor};
pub use host_manager::HostManager;
pub use plugin_feed::{PluginFeed, PluginPackage};
pub use site_operations::SiteOperations;
