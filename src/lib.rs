//! jsite: provision local Joomla development sites in one command.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::env;
use std::path::PathBuf;

use app::AppContext;
use app::commands::create;
use services::{ApacheHostManager, HttpPluginFeed, JoomlaConsole, MysqlRegistry, UnzipExtractor};

pub use domain::{
    AppError, DatabaseLogin, ProvisioningRequest, SslOptions, StepOutcome, VersionSelector,
    WorkflowReport,
};

/// Create a site: download, database, configuration, virtual host,
/// project symlinks and the web-installer plugin, as requested.
///
/// The workflow is not transactional; on failure the returned error names
/// the step that failed and everything before it stays in place.
pub fn create_site(request: ProvisioningRequest) -> Result<WorkflowReport, AppError> {
    let ctx = AppContext::new(
        JoomlaConsole::new(),
        ApacheHostManager::system(),
        HttpPluginFeed::from_env()?,
        UnzipExtractor,
        MysqlRegistry,
        plugin_cache_dir(),
    );

    let report = create::execute(&ctx, &request)?;

    if request.version.installs_joomla() {
        println!("✅ Your new Joomla site has been created.");
        println!(
            "You can login using the following username and password combination: admin/admin."
        );
    }

    Ok(report)
}

/// Shared cache for downloaded plugin packages: `$HOME/.jsite/cache`.
fn plugin_cache_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| ".".to_string()))
        .join(".jsite")
        .join("cache")
}
