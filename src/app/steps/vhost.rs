use std::io::Write;

use tempfile::NamedTempFile;

use crate::app::context::Ports;
use crate::app::steps::ProvisioningStep;
use crate::domain::{AppError, ProvisioningRequest, SiteContext, StepOutcome, StepRun, VirtualHostSpec};
use crate::ports::HostManager;
use crate::services::vhost_template;

/// Render and register the Apache virtual host.
///
/// The rendered configuration goes through a named temp file so every exit
/// path, including a failed reload, leaves no stray file behind.
pub struct VirtualHostStep;

impl<C: Ports> ProvisioningStep<C> for VirtualHostStep {
    fn name(&self) -> &'static str {
        "vhost"
    }

    fn run(
        &self,
        ctx: &C,
        request: &ProvisioningRequest,
        _site: &SiteContext,
    ) -> Result<StepRun, AppError> {
        let hosts = ctx.host_manager();
        if !hosts.available() {
            return Ok(StepRun::skipped("no host manager present"));
        }

        let spec = VirtualHostSpec::from_request(request);
        let mut warnings = Vec::new();

        let mut with_ssl = false;
        if spec.ssl_enabled {
            if spec.certificate.is_file() && spec.key.is_file() {
                with_ssl = true;
            } else {
                warnings.push(
                    "SSL was not enabled for the site. One or more certificate files are missing."
                        .to_string(),
                );
            }
        }

        let rendered = vhost_template::render_host(&spec, with_ssl)?;

        let mut conf = NamedTempFile::new()?;
        conf.write_all(rendered.as_bytes())?;
        conf.flush()?;

        hosts.install_conf(&spec.conf_name(), conf.path())?;
        hosts.enable_site(&spec.conf_name())?;

        if let Err(err) = hosts.reload() {
            warnings.push(format!("Failed to reload the web server: {}", err));
        }

        Ok(StepRun { outcome: StepOutcome::Success, warnings })
    }
}
