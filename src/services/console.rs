//! `SiteOperations` adapter delegating to the Joomlatools console utility.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use crate::domain::{AppError, VersionSelector};
use crate::ports::SiteOperations;

/// Runs `joomla` console sub-commands (`site:download`, `site:configure`,
/// ...) as external processes with captured output and checked exit status.
#[derive(Debug, Clone)]
pub struct JoomlaConsole {
    binary: OsString,
}

impl JoomlaConsole {
    pub fn new() -> Self {
        Self { binary: OsString::from("joomla") }
    }

    fn run(&self, operation: &str, args: Vec<OsString>) -> Result<(), AppError> {
        let output = Command::new(&self.binary).args(&args).output().map_err(|e| {
            AppError::sub_operation(operation, format!("could not start the joomla console: {}", e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let details = if stderr.is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr
            };
            return Err(AppError::sub_operation(
                operation,
                if details.is_empty() { "unknown error".to_string() } else { details },
            ));
        }

        Ok(())
    }
}

impl Default for JoomlaConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteOperations for JoomlaConsole {
    fn download(
        &self,
        site: &str,
        version: &VersionSelector,
        clear_cache: bool,
    ) -> Result<(), AppError> {
        let mut args: Vec<OsString> =
            vec!["site:download".into(), site.into(), format!("--joomla={}", version).into()];
        if clear_cache {
            args.push("--clear-cache".into());
        }
        self.run("site:download", args)
    }

    fn install_database(&self, site: &str, sample_data: Option<&str>) -> Result<(), AppError> {
        let mut args: Vec<OsString> = vec!["site:database:install".into(), site.into()];
        if let Some(sample_data) = sample_data {
            args.push(format!("--sample-data={}", sample_data).into());
        }
        self.run("site:database:install", args)
    }

    fn configure(&self, site: &str) -> Result<(), AppError> {
        self.run("site:configure", vec!["site:configure".into(), site.into()])
    }

    fn symlink_projects(
        &self,
        site: &str,
        projects: &[String],
        www: &Path,
        projects_dir: &Path,
    ) -> Result<(), AppError> {
        let mut args: Vec<OsString> = vec!["site:symlink".into(), site.into()];
        args.extend(projects.iter().map(OsString::from));
        args.push(www_flag(www));
        let mut projects_flag = OsString::from("--projects-dir=");
        projects_flag.push(projects_dir);
        args.push(projects_flag);
        self.run("site:symlink", args)
    }

    fn install_extensions(
        &self,
        site: &str,
        extensions: &[String],
        www: &Path,
    ) -> Result<(), AppError> {
        let mut args: Vec<OsString> = vec!["extension:install".into(), site.into()];
        args.extend(extensions.iter().map(OsString::from));
        args.push(www_flag(www));
        self.run("extension:install", args)
    }
}

fn www_flag(www: &Path) -> OsString {
    let mut flag = OsString::from("--www=");
    flag.push(www);
    flag
}
