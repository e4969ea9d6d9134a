use crate::app::context::Ports;
use crate::app::steps::ProvisioningStep;
use crate::domain::{AppError, ProvisioningRequest, SiteContext, StepRun, policy};
use crate::ports::SiteOperations;

/// Symlink development projects into the site.
pub struct SymlinkStep;

impl<C: Ports> ProvisioningStep<C> for SymlinkStep {
    fn name(&self) -> &'static str {
        "symlink"
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

        ctx.operations().symlink_projects(
            &request.site,
            &request.symlink,
            site.www(),
            &request.projects_dir,
        )?;
        Ok(StepRun::success())
    }
}
