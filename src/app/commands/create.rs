//! The site-creation workflow.

use std::fs;

use crate::app::context::Ports;
use crate::app::steps::{
    ConfigureStep, DatabaseStep, DownloadStep, ExtensionInstallStep, ProvisioningStep,
    SymlinkStep, VirtualHostStep, WebInstallerStep,
};
use crate::domain::{AppError, ProvisioningRequest, SiteContext, WorkflowReport};

/// Execute the create command: run every provisioning step in order and
/// report what happened.
///
/// The workflow fails fast: the first failing step halts execution and its
/// error is returned. Steps already completed are not rolled back; the
/// workflow is deliberately not transactional.
pub fn execute<C: Ports>(ctx: &C, request: &ProvisioningRequest) -> Result<WorkflowReport, AppError> {
    if request.site.trim().is_empty() {
        return Err(AppError::config_error("Site name must not be empty"));
    }

    let site = SiteContext::resolve(request);

    // Checked once, before any mutating action, so an existing site is
    // never partially overwritten.
    if site.target_dir().exists() {
        return Err(AppError::SiteExists(request.site.clone()));
    }

    fs::create_dir_all(site.target_dir())?;

    let steps: Vec<Box<dyn ProvisioningStep<C>>> = vec![
        Box::new(DownloadStep),
        Box::new(DatabaseStep),
        Box::new(ConfigureStep),
        Box::new(VirtualHostStep),
        Box::new(SymlinkStep),
        Box::new(ExtensionInstallStep),
        Box::new(WebInstallerStep),
    ];

    let mut report = WorkflowReport::new(request.site.clone());
    for step in steps {
        let run = step.run(ctx, request, &site)?;
        for warning in &run.warnings {
            println!("⚠️  {}", warning);
        }
        report.record(step.name(), run);
    }

    Ok(report)
}
