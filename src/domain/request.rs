use std::env;
use std::path::PathBuf;

use crate::domain::{AppError, VersionSelector};

/// SSL settings for the virtual host.
#[derive(Debug, Clone)]
pub struct SslOptions {
    /// Skip the SSL fragment entirely.
    pub disabled: bool,
    /// Full path to the signed certificate file.
    pub certificate: PathBuf,
    /// Full path to the private key file.
    pub key: PathBuf,
    /// Port on which the server listens for SSL requests.
    pub port: u16,
}

impl Default for SslOptions {
    fn default() -> Self {
        Self {
            disabled: false,
            certificate: PathBuf::from("/etc/apache2/ssl/server.crt"),
            key: PathBuf::from("/etc/apache2/ssl/server.key"),
            port: 443,
        }
    }
}

/// MySQL credentials used for the site's database.
#[derive(Debug, Clone)]
pub struct DatabaseLogin {
    pub user: String,
    pub password: Option<String>,
}

impl DatabaseLogin {
    /// Parse a `user:password` pair; the password part is optional.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let (user, password) = match raw.split_once(':') {
            Some((user, password)) => (user, Some(password.to_string())),
            None => (raw, None),
        };

        if user.is_empty() {
            return Err(AppError::config_error(format!(
                "Invalid MySQL login '{}': expected user:password",
                raw
            )));
        }

        Ok(Self { user: user.to_string(), password: password.filter(|p| !p.is_empty()) })
    }
}

impl Default for DatabaseLogin {
    fn default() -> Self {
        Self { user: "root".to_string(), password: Some("root".to_string()) }
    }
}

/// Immutable input for one site-creation run.
#[derive(Debug, Clone)]
pub struct ProvisioningRequest {
    /// Site name, also the directory name under the web root.
    pub site: String,
    /// Requested Joomla version.
    pub version: VersionSelector,
    /// Sample data set to load during database install.
    pub sample_data: Option<String>,
    /// Project names to symlink from the projects directory.
    pub symlink: Vec<String>,
    /// Refresh the cached list of available versions before downloading.
    pub clear_cache: bool,
    /// Directory holding custom projects.
    pub projects_dir: PathBuf,
    /// Web root under which sites are created.
    pub www: PathBuf,
    pub ssl: SslOptions,
    pub mysql_login: DatabaseLogin,
    /// Database name override; derived from the site name when absent.
    pub mysql_database: Option<String>,
}

impl ProvisioningRequest {
    pub fn new<S: Into<String>>(site: S, version: VersionSelector) -> Self {
        Self {
            site: site.into(),
            version,
            sample_data: None,
            symlink: Vec::new(),
            clear_cache: false,
            projects_dir: default_projects_dir(),
            www: PathBuf::from("/var/www"),
            ssl: SslOptions::default(),
            mysql_login: DatabaseLogin::default(),
            mysql_database: None,
        }
    }
}

/// Split a comma-separated `--symlink` value into project names.
pub fn parse_symlink_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Default projects directory: `$HOME/Projects`.
pub fn default_projects_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| ".".to_string())).join("Projects")
}
