use crate::app::context::Ports;
use crate::app::steps::ProvisioningStep;
use crate::domain::{AppError, ProvisioningRequest, SiteContext, StepRun, policy};
use crate::ports::SiteOperations;

/// Register the symlinked projects as installed extensions. Receives the
/// same project list, in the same order, as the symlink step.
pub struct ExtensionInstallStep;

impl<C: Ports> ProvisioningStep<C> for ExtensionInstallStep {
    fn name(&self) -> &'static str {
        "extensions"
    }

    fn run(
        &self,
        ctx: &C,
        request: &ProvisioningRequest,
        site: &SiteContext,
    ) -> Result<StepRun, AppError> {
        if !policy::needs_symlink(&request.symlink) {
            return Ok(StepRun::skipped("no projects to symlink"));
        }

        ctx.operations().install_extensions(&request.site, &request.symlink, site.www())?;
        Ok(StepRun::success())
    }
}
