use crate::app::context::Ports;
use crate::app::steps::ProvisioningStep;
use crate::domain::{AppError, ProvisioningRequest, SiteContext, StepRun, policy};
use crate::ports::SiteOperations;

/// Write the site's configuration file with the database credentials.
pub struct ConfigureStep;

impl<C: Ports> ProvisioningStep<C> for ConfigureStep {
    fn name(&self) -> &'static str {
        "configure"
    }

    fn run(
        &self,
        ctx: &C,
        request: &ProvisioningRequest,
        _site: &SiteContext,
    ) -> Result<StepRun, AppError> {
        if !policy::needs_config(&request.version) {
            return Ok(StepRun::skipped("no Joomla version requested"));
        }

        ctx.operations().configure(&request.site)?;
        Ok(StepRun::success())
    }
}
