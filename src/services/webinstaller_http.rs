//! HTTP plugin feed for the web-installer update manifest.

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use quick_xml::Reader;
use quick_xml::events::Event;
use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::{PluginFeed, PluginPackage};

/// Update manifest published for the web-installer plugin.
pub const DEFAULT_MANIFEST_URL: &str = "http://appscdn.joomla.org/webapps/jedapps/webinstaller.xml";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`HttpPluginFeed`].
#[derive(Debug, Clone)]
pub struct PluginFeedConfig {
    pub manifest_url: String,
    pub timeout_secs: u64,
}

impl Default for PluginFeedConfig {
    fn default() -> Self {
        Self { manifest_url: DEFAULT_MANIFEST_URL.to_string(), timeout_secs: DEFAULT_TIMEOUT_SECS }
    }
}

/// Fetches the update manifest and package over HTTP with a short timeout.
/// Activation is best-effort, so callers downgrade every error here to a
/// warning.
pub struct HttpPluginFeed {
    manifest_url: Url,
    client: Client,
}

impl HttpPluginFeed {
    pub fn new(config: &PluginFeedConfig) -> Result<Self, AppError> {
        let manifest_url = Url::parse(&config.manifest_url).map_err(|e| AppError::InvalidUrl {
            url: config.manifest_url.clone(),
            details: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { manifest_url, client })
    }

    /// Default configuration, with the manifest URL overridable through the
    /// `JSITE_MANIFEST_URL` environment variable.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = PluginFeedConfig::default();
        if let Ok(url) = env::var("JSITE_MANIFEST_URL") {
            config.manifest_url = url;
        }
        Self::new(&config)
    }
}

impl PluginFeed for HttpPluginFeed {
    fn fetch_manifest(&self) -> Result<Option<PluginPackage>, AppError> {
        let response = self
            .client
            .get(self.manifest_url.clone())
            .send()
            .map_err(|e| AppError::Manifest(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::Manifest(format!(
                "manifest request returned HTTP {}",
                response.status()
            )));
        }

        let body = response.text().map_err(|e| AppError::Manifest(e.to_string()))?;

        let Some(found) = parse_manifest(&body)? else {
            return Ok(None);
        };

        let url = Url::parse(&found.url)
            .map_err(|e| AppError::InvalidUrl { url: found.url, details: e.to_string() })?;

        Ok(Some(PluginPackage { url, version: found.version }))
    }

    fn download_package(&self, package: &PluginPackage, dest: &Path) -> Result<u64, AppError> {
        let mut response = self
            .client
            .get(package.url.clone())
            .send()
            .map_err(|e| AppError::Manifest(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::Manifest(format!(
                "package download returned HTTP {}",
                response.status()
            )));
        }

        let mut file = fs::File::create(dest)?;
        response.copy_to(&mut file).map_err(|e| AppError::Manifest(e.to_string()))
    }
}

struct ManifestEntry {
    url: String,
    version: String,
}

/// Pull the full zip download and the declared version out of an update
/// manifest. Returns `None` when no `type="full"` `format="zip"` entry is
/// present.
fn parse_manifest(xml: &str) -> Result<Option<ManifestEntry>, AppError> {
    let mut reader = Reader::from_str(xml);

    let mut url: Option<String> = None;
    let mut version: Option<String> = None;
    let mut in_version = false;
    let mut in_matching_download = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(tag)) => match tag.name().as_ref() {
                b"version" => in_version = true,
                b"downloadurl" => {
                    let mut is_full = false;
                    let mut is_zip = false;
                    for attribute in tag.attributes() {
                        let attribute = attribute.map_err(manifest_error)?;
                        let value = attribute.unescape_value().map_err(manifest_error)?;
                        match attribute.key.as_ref() {
                            b"type" => is_full = value == "full",
                            b"format" => is_zip = value == "zip",
                            _ => {}
                        }
                    }
                    in_matching_download = is_full && is_zip && url.is_none();
                }
                _ => {}
            },
            Ok(Event::Text(text)) => {
                let text = text.unescape().map_err(manifest_error)?;
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                if in_version && version.is_none() {
                    version = Some(text.to_string());
                } else if in_matching_download {
                    url = Some(text.to_string());
                }
            }
            Ok(Event::End(tag)) => match tag.name().as_ref() {
                b"version" => in_version = false,
                b"downloadurl" => in_matching_download = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(manifest_error(e)),
            Ok(_) => {}
        }
    }

    Ok(url.map(|url| ManifestEntry { url, version: version.unwrap_or_default() }))
}

fn manifest_error<E: std::fmt::Display>(err: E) -> AppError {
    AppError::Manifest(format!("malformed manifest: {}", err))
}
