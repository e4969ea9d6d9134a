use std::path::{Path, PathBuf};

use crate::ports::{
    ArchiveExtractor, ExtensionRegistry, HostManager, PluginFeed, SiteOperations,
};

/// Port bundle the provisioning steps run against.
///
/// Production code uses [`AppContext`]; tests implement this directly with
/// recording fakes.
pub trait Ports {
    type Operations: SiteOperations;
    type Hosts: HostManager;
    type Feed: PluginFeed;
    type Extractor: ArchiveExtractor;
    type Registry: ExtensionRegistry;

    fn operations(&self) -> &Self::Operations;
    fn host_manager(&self) -> &Self::Hosts;
    fn plugin_feed(&self) -> &Self::Feed;
    fn extractor(&self) -> &Self::Extractor;
    fn registry(&self) -> &Self::Registry;

    /// Cache shared across runs for downloaded plugin packages, keyed by
    /// file name.
    fn plugin_cache_dir(&self) -> &Path;
}

/// Application context holding the dependencies for one command execution.
pub struct AppContext<O, H, F, X, R> {
    operations: O,
    host_manager: H,
    plugin_feed: F,
    extractor: X,
    registry: R,
    plugin_cache_dir: PathBuf,
}

impl<O, H, F, X, R> AppContext<O, H, F, X, R>
where
    O: SiteOperations,
    H: HostManager,
    F: PluginFeed,
    X: ArchiveExtractor,
    R: ExtensionRegistry,
{
    pub fn new(
        operations: O,
        host_manager: H,
        plugin_feed: F,
        extractor: X,
        registry: R,
        plugin_cache_dir: PathBuf,
    ) -> Self {
        Self { operations, host_manager, plugin_feed, extractor, registry, plugin_cache_dir }
    }
}

impl<O, H, F, X, R> Ports for AppContext<O, H, F, X, R>
where
    O: SiteOperations,
    H: HostManager,
    F: PluginFeed,
    X: ArchiveExtractor,
    R: ExtensionRegistry,
{
    type Operations = O;
    type Hosts = H;
    type Feed = F;
    type Extractor = X;
    type Registry = R;

    fn operations(&self) -> &O {
        &self.operations
    }

    fn host_manager(&self) -> &H {
        &self.host_manager
    }

    fn plugin_feed(&self) -> &F {
        &self.plugin_feed
    }

    fn extractor(&self) -> &X {
        &self.extractor
    }

    fn registry(&self) -> &R {
        &self.registry
    }

    fn plugin_cache_dir(&self) -> &Path {
        &self.plugin_cache_dir
    }
}
