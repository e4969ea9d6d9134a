//! Extension registry backed by the `mysql` command-line client.

use std::process::Command;

use serde_json::json;

use crate::domain::{AppError, SiteContext};
use crate::ports::{ExtensionRegistry, PluginDescriptor};

/// Inserts extension rows by invoking the `mysql` client with the site's
/// stored credentials.
#[derive(Debug, Clone, Default)]
pub struct MysqlRegistry;

impl ExtensionRegistry for MysqlRegistry {
    fn register_plugin(
        &self,
        site: &SiteContext,
        plugin: &PluginDescriptor,
    ) -> Result<(), AppError> {
        let statement = insert_statement(plugin);

        let mut command = Command::new("mysql");
        command.arg("-u").arg(&site.login().user);
        if let Some(password) = &site.login().password {
            command.arg(format!("-p{}", password));
        }
        command.arg(site.database()).arg("-e").arg(&statement);

        let output = command.output().map_err(|e| {
            AppError::sub_operation("mysql", format!("could not start 'mysql': {}", e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::sub_operation(
                "mysql",
                if stderr.is_empty() { "unknown error".to_string() } else { stderr },
            ));
        }

        Ok(())
    }
}

/// The literal INSERT registering a plugin, with the manifest metadata
/// embedded as a JSON blob in `manifest_cache`.
fn insert_statement(plugin: &PluginDescriptor) -> String {
    let manifest_cache = json!({
        "name": plugin.name,
        "type": "plugin",
        "version": plugin.version,
        "description": plugin.description,
    })
    .to_string();

    format!(
        "INSERT INTO `j_extensions` (`name`, `type`, `element`, `folder`, `enabled`, `access`, \
         `manifest_cache`) VALUES ('{}', 'plugin', '{}', '{}', 1, 1, '{}');",
        sql_escape(&plugin.name),
        sql_escape(&plugin.element),
        sql_escape(&plugin.folder),
        sql_escape(&manifest_cache)
    )
}

/// Escape a value for use inside a single-quoted SQL string literal.
fn sql_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
