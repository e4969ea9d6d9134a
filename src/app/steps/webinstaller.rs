use std::fs;

use crate::app::context::Ports;
use crate::app::steps::ProvisioningStep;
use crate::domain::{AppError, ProvisioningRequest, SiteContext, StepRun, policy};
use crate::ports::{ArchiveExtractor, ExtensionRegistry, PluginDescriptor, PluginFeed};
use crate::services::joomla_tree;

/// Best-effort activation of the bundled web-installer plugin.
///
/// Every failure in here degrades to a skip with a warning; site creation
/// never aborts over a missing enhancement.
pub struct WebInstallerStep;

impl WebInstallerStep {
    fn activate<C: Ports>(&self, ctx: &C, site: &SiteContext) -> Result<StepRun, AppError> {
        let Some(package) = ctx.plugin_feed().fetch_manifest()? else {
            return Ok(StepRun::skipped("no suitable package in the update manifest")
                .with_warning("The update manifest listed no installable web installer package."));
        };

        let Some(file_name) = package.file_name().map(str::to_string) else {
            return Ok(StepRun::skipped("manifest download entry has no file name"));
        };

        let cache_dir = ctx.plugin_cache_dir();
        fs::create_dir_all(cache_dir)?;

        let cached = cache_dir.join(&file_name);
        if !cached.exists() {
            let bytes = ctx.plugin_feed().download_package(&package, &cached)?;
            if bytes == 0 {
                let _ = fs::remove_file(&cached);
                return Ok(StepRun::skipped("downloaded package was empty")
                    .with_warning("The downloaded web installer package was empty."));
            }
        }

        let plugin_dir = site.target_dir().join("plugins").join("installer");
        ctx.extractor().extract(&cached, &plugin_dir)?;

        let descriptor = PluginDescriptor::web_installer(&package.version);
        ctx.registry().register_plugin(site, &descriptor)?;

        Ok(StepRun::success())
    }
}

impl<C: Ports> ProvisioningStep<C> for WebInstallerStep {
    fn name(&self) -> &'static str {
        "webinstaller"
    }

    fn run(
        &self,
        ctx: &C,
        request: &ProvisioningRequest,
        site: &SiteContext,
    ) -> Result<StepRun, AppError> {
        if !request.version.installs_joomla() {
            return Ok(StepRun::skipped("no Joomla version requested"));
        }

        let installed = joomla_tree::installed_version(site.target_dir());
        if !policy::needs_plugin_activation(&request.version, installed.as_deref()) {
            return Ok(StepRun::skipped("web installer requires Joomla 3.2.0 or newer"));
        }

        match self.activate(ctx, site) {
            Ok(run) => Ok(run),
            Err(err) => Ok(StepRun::skipped("web installer plugin not activated")
                .with_warning(format!("Failed to activate the web installer plugin: {}", err))),
        }
    }
}
