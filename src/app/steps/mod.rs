//! The provisioning steps and the contract they share.

mod configure;
mod database;
mod download;
mod extensions;
mod symlink;
mod vhost;
mod webinstaller;

pub use configure::ConfigureStep;
pub use database::DatabaseStep;
pub use download::DownloadStep;
pub use extensions::ExtensionInstallStep;
pub use symlink::SymlinkStep;
pub use vhost::VirtualHostStep;
pub use webinstaller::WebInstallerStep;

use crate::app::context::Ports;
use crate::domain::{AppError, ProvisioningRequest, SiteContext, StepRun};

/// Uniform contract for one step of the site-creation workflow.
///
/// A step decides its own skip conditions and returns them as part of the
/// run; an `Err` halts the workflow.
pub trait ProvisioningStep<C: Ports> {
    fn name(&self) -> &'static str;

    fn run(
        &self,
        ctx: &C,
        request: &ProvisioningRequest,
        site: &SiteContext,
    ) -> Result<StepRun, AppError>;
}
