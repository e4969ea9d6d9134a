use std::path::PathBuf;

use crate::domain::ProvisioningRequest;

/// Everything the virtual-host templates need; derived from a request and
/// discarded once the configuration file is installed.
#[derive(Debug, Clone)]
pub struct VirtualHostSpec {
    pub site: String,
    pub ssl_enabled: bool,
    pub certificate: PathBuf,
    pub key: PathBuf,
    pub ssl_port: u16,
}

impl VirtualHostSpec {
    pub fn from_request(request: &ProvisioningRequest) -> Self {
        Self {
            site: request.site.clone(),
            ssl_enabled: !request.ssl.disabled,
            certificate: request.ssl.certificate.clone(),
            key: request.ssl.key.clone(),
            ssl_port: request.ssl.port,
        }
    }

    /// File name under the host manager's sites directory. The `1-` prefix
    /// keeps generated hosts sorted ahead of the distribution defaults.
    pub fn conf_name(&self) -> String {
        format!("1-{}.conf", self.site)
    }
}
