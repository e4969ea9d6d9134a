//! Recording fakes for the provisioning ports, shared by unit tests.

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use url::Url;

use crate::app::context::Ports;
use crate::domain::{AppError, SiteContext, VersionSelector};
use crate::ports::{
    ArchiveExtractor, ExtensionRegistry, HostManager, PluginDescriptor, PluginFeed, PluginPackage,
    SiteOperations,
};

pub(crate) fn fake_package(file_name: &str, version: &str) -> PluginPackage {
    PluginPackage {
        url: Url::parse(&format!("http://cdn.example.org/apps/{}", file_name)).unwrap(),
        version: version.to_string(),
    }
}

/// Records every sub-operation invocation as one line.
#[derive(Default)]
pub(crate) struct FakeOperations {
    calls: RefCell<Vec<String>>,
    fail_on: RefCell<Option<String>>,
    download_hook: RefCell<Option<Box<dyn Fn()>>>,
}

impl FakeOperations {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Make the named operation fail when invoked.
    pub(crate) fn fail_on(&self, operation: &str) {
        *self.fail_on.borrow_mut() = Some(operation.to_string());
    }

    /// Run a hook during the download call, e.g. to seed the fake tree.
    pub(crate) fn on_download(&self, hook: impl Fn() + 'static) {
        *self.download_hook.borrow_mut() = Some(Box::new(hook));
    }

    fn invoke(&self, operation: &str, call: String) -> Result<(), AppError> {
        self.calls.borrow_mut().push(call);
        if self.fail_on.borrow().as_deref() == Some(operation) {
            return Err(AppError::sub_operation(operation, "forced failure"));
        }
        Ok(())
    }
}

impl SiteOperations for FakeOperations {
    fn download(
        &self,
        site: &str,
        version: &VersionSelector,
        clear_cache: bool,
    ) -> Result<(), AppError> {
        let result = self.invoke(
            "site:download",
            format!("site:download {} {} clear={}", site, version, clear_cache),
        );
        if let Some(hook) = self.download_hook.borrow().as_ref() {
            hook();
        }
        result
    }

    fn install_database(&self, site: &str, sample_data: Option<&str>) -> Result<(), AppError> {
        let suffix = sample_data.map(|s| format!(" sample={}", s)).unwrap_or_default();
        self.invoke("site:database:install", format!("site:database:install {}{}", site, suffix))
    }

    fn configure(&self, site: &str) -> Result<(), AppError> {
        self.invoke("site:configure", format!("site:configure {}", site))
    }

    fn symlink_projects(
        &self,
        site: &str,
        projects: &[String],
        _www: &Path,
        _projects_dir: &Path,
    ) -> Result<(), AppError> {
        self.invoke("site:symlink", format!("site:symlink {} {}", site, projects.join(",")))
    }

    fn install_extensions(
        &self,
        site: &str,
        extensions: &[String],
        _www: &Path,
    ) -> Result<(), AppError> {
        self.invoke(
            "extension:install",
            format!("extension:install {} {}", site, extensions.join(",")),
        )
    }
}

/// Captures installed configuration contents at call time.
#[derive(Default)]
pub(crate) struct FakeHostManager {
    available: Cell<bool>,
    installed: RefCell<Vec<(String, String)>>,
    enabled: RefCell<Vec<String>>,
    reload_fails: Cell<bool>,
}

impl FakeHostManager {
    pub(crate) fn make_available(&self) {
        self.available.set(true);
    }

    pub(crate) fn fail_reload(&self) {
        self.reload_fails.set(true);
    }

    pub(crate) fn installed(&self) -> Vec<(String, String)> {
        self.installed.borrow().clone()
    }

    pub(crate) fn enabled(&self) -> Vec<String> {
        self.enabled.borrow().clone()
    }
}

impl HostManager for FakeHostManager {
    fn available(&self) -> bool {
        self.available.get()
    }

    fn install_conf(&self, name: &str, rendered: &Path) -> Result<(), AppError> {
        // The temp file is gone after the step returns; keep its content.
        let content = fs::read_to_string(rendered)?;
        self.installed.borrow_mut().push((name.to_string(), content));
        Ok(())
    }

    fn enable_site(&self, name: &str) -> Result<(), AppError> {
        self.enabled.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn reload(&self) -> Result<(), AppError> {
        if self.reload_fails.get() {
            return Err(AppError::sub_operation("apache reload", "forced failure"));
        }
        Ok(())
    }
}

/// Serves a canned manifest and package, counting fetches.
pub(crate) struct FakeFeed {
    manifest: RefCell<Option<PluginPackage>>,
    manifest_fails: Cell<bool>,
    package_bytes: RefCell<Vec<u8>>,
    manifest_fetches: Cell<usize>,
    downloads: Cell<usize>,
}

impl Default for FakeFeed {
    fn default() -> Self {
        Self {
            manifest: RefCell::new(None),
            manifest_fails: Cell::new(false),
            package_bytes: RefCell::new(b"PK\x03\x04fake-zip".to_vec()),
            manifest_fetches: Cell::new(0),
            downloads: Cell::new(0),
        }
    }
}

impl FakeFeed {
    pub(crate) fn set_manifest(&self, package: Option<PluginPackage>) {
        *self.manifest.borrow_mut() = package;
    }

    pub(crate) fn fail_manifest(&self) {
        self.manifest_fails.set(true);
    }

    pub(crate) fn set_package_bytes(&self, bytes: &[u8]) {
        *self.package_bytes.borrow_mut() = bytes.to_vec();
    }

    pub(crate) fn manifest_fetches(&self) -> usize {
        self.manifest_fetches.get()
    }

    pub(crate) fn downloads(&self) -> usize {
        self.downloads.get()
    }
}

impl PluginFeed for FakeFeed {
    fn fetch_manifest(&self) -> Result<Option<PluginPackage>, AppError> {
        self.manifest_fetches.set(self.manifest_fetches.get() + 1);
        if self.manifest_fails.get() {
            return Err(AppError::Manifest("connection refused".to_string()));
        }
        Ok(self.manifest.borrow().clone())
    }

    fn download_package(&self, _package: &PluginPackage, dest: &Path) -> Result<u64, AppError> {
        self.downloads.set(self.downloads.get() + 1);
        let bytes = self.package_bytes.borrow();
        fs::write(dest, &*bytes)?;
        Ok(bytes.len() as u64)
    }
}

#[derive(Default)]
pub(crate) struct FakeExtractor {
    extractions: RefCell<Vec<(PathBuf, PathBuf)>>,
}

impl FakeExtractor {
    pub(crate) fn extractions(&self) -> Vec<(PathBuf, PathBuf)> {
        self.extractions.borrow().clone()
    }
}

impl ArchiveExtractor for FakeExtractor {
    fn extract(&self, archive: &Path, dest: &Path) -> Result<(), AppError> {
        self.extractions.borrow_mut().push((archive.to_path_buf(), dest.to_path_buf()));
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeRegistry {
    rows: RefCell<Vec<PluginDescriptor>>,
}

impl FakeRegistry {
    pub(crate) fn registered(&self) -> usize {
        self.rows.borrow().len()
    }
}

impl ExtensionRegistry for FakeRegistry {
    fn register_plugin(
        &self,
        _site: &SiteContext,
        plugin: &PluginDescriptor,
    ) -> Result<(), AppError> {
        self.rows.borrow_mut().push(plugin.clone());
        Ok(())
    }
}

/// Full port bundle over recording fakes with an isolated cache directory.
pub(crate) struct FakePorts {
    pub(crate) operations: FakeOperations,
    pub(crate) hosts: FakeHostManager,
    pub(crate) feed: FakeFeed,
    pub(crate) extractor: FakeExtractor,
    pub(crate) registry: FakeRegistry,
    cache_root: TempDir,
}

impl FakePorts {
    pub(crate) fn new() -> Self {
        Self {
            operations: FakeOperations::default(),
            hosts: FakeHostManager::default(),
            feed: FakeFeed::default(),
            extractor: FakeExtractor::default(),
            registry: FakeRegistry::default(),
            cache_root: TempDir::new().expect("temp cache dir"),
        }
    }
}

impl Ports for FakePorts {
    type Operations = FakeOperations;
    type Hosts = FakeHostManager;
    type Feed = FakeFeed;
    type Extractor = FakeExtractor;
    type Registry = FakeRegistry;

    fn operations(&self) -> &FakeOperations {
        &self.operations
    }

    fn host_manager(&self) -> &FakeHostManager {
        &self.hosts
    }

    fn plugin_feed(&self) -> &FakeFeed {
        &self.feed
    }

    fn extractor(&self) -> &FakeExtractor {
        &self.extractor
    }

    fn registry(&self) -> &FakeRegistry {
        &self.registry
    }

    fn plugin_cache_dir(&self) -> &Path {
        self.cache_root.path()
    }
}
