use crate::app::context::Ports;
use crate::app::steps::ProvisioningStep;
use crate::domain::{AppError, ProvisioningRequest, SiteContext, StepRun, policy};
use crate::ports::SiteOperations;

/// Create the site database and import the schema.
pub struct DatabaseStep;

impl<C: Ports> ProvisioningStep<C> for DatabaseStep {
    fn name(&self) -> &'static str {
        "database"
    }

    fn run(
        &self,
        ctx: &C,
        request: &ProvisioningRequest,
        _site: &SiteContext,
    ) -> Result<StepRun, AppError> {
        if !policy::needs_database(&request.version) {
            return Ok(StepRun::skipped("no Joomla version requested"));
        }

        ctx.operations().install_database(&request.site, request.sample_data.as_deref())?;
        Ok(StepRun::success())
    }
}
