use crate::app::context::Ports;
use crate::app::steps::ProvisioningStep;
use crate::domain::{AppError, ProvisioningRequest, SiteContext, StepRun};
use crate::ports::SiteOperations;

/// Fetch the requested source tree. Runs for every version selector,
/// including `none`, which still prepares the bare site directory.
pub struct DownloadStep;

impl<C: Ports> ProvisioningStep<C> for DownloadStep {
    fn name(&self) -> &'static str {
        "download"
    }

    fn run(
        &self,
        ctx: &C,
        request: &ProvisioningRequest,
        _site: &SiteContext,
    ) -> Result<StepRun, AppError> {
        ctx.operations().download(&request.site, &request.version, request.clear_cache)?;
        Ok(StepRun::success())
    }
}
