use std::path::{Path, PathBuf};

use crate::domain::{DatabaseLogin, ProvisioningRequest};

/// Per-run state derived from a request at the top of the workflow.
///
/// Owned by the orchestrator for the duration of one run; never shared
/// across concurrent runs for different sites.
#[derive(Debug, Clone)]
pub struct SiteContext {
    site: String,
    target_dir: PathBuf,
    www: PathBuf,
    database: String,
    login: DatabaseLogin,
}

impl SiteContext {
    pub fn resolve(request: &ProvisioningRequest) -> Self {
        let database = request
            .mysql_database
            .clone()
            .unwrap_or_else(|| derive_database_name(&request.site));

        Self {
            site: request.site.clone(),
            target_dir: request.www.join(&request.site),
            www: request.www.clone(),
            database,
            login: request.mysql_login.clone(),
        }
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    /// Directory the site is provisioned into (`<www>/<site>`).
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn www(&self) -> &Path {
        &self.www
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn login(&self) -> &DatabaseLogin {
        &self.login
    }
}

/// Database name for a site: `sites_<name>` with anything outside
/// `[A-Za-z0-9]` folded to an underscore.
fn derive_database_name(site: &str) -> String {
    let folded: String =
        site.chars().map(|c| if c.is_ascii_alphanumeric() { c } else { '_' }).collect();
    format!("sites_{}", folded)
}
