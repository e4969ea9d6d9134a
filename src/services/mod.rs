mod apache;
mod console;
pub mod joomla_tree;
mod mysql;
mod unzip;
pub mod vhost_template;
mod webinstaller_http;

pub use apache::ApacheHostManager;
pub use console::JoomlaConsole;
pub use mysql::MysqlRegistry;
pub use unzip::UnzipExtractor;
pub use webinstaller_http::{DEFAULT_MANIFEST_URL, HttpPluginFeed, PluginFeedConfig};
