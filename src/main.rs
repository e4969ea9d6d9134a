use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jsite::domain::request::{default_projects_dir, parse_symlink_list};
use jsite::{AppError, DatabaseLogin, ProvisioningRequest, VersionSelector};

#[derive(Parser)]
#[command(name = "jsite")]
#[command(version)]
#[command(about = "Provision local Joomla development sites", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a Joomla site: download, database, vhost and extensions in one go
    Create {
        /// Name of the site, also its directory under the web root
        site: String,
        /// Joomla version: a release number (2, 3.2, ...), a branch name, or
        /// "none" for an empty virtual host
        #[arg(long, default_value = "latest")]
        joomla: String,
        /// Sample data to install (default|blog|brochure|learn|testing)
        #[arg(long)]
        sample_data: Option<String>,
        /// Comma-separated list of projects to symlink from the projects directory
        #[arg(long)]
        symlink: Option<String>,
        /// Refresh the cached list of available versions before downloading
        #[arg(long)]
        clear_cache: bool,
        /// Directory where your custom projects reside
        #[arg(long)]
        projects_dir: Option<PathBuf>,
        /// Web root under which sites are created
        #[arg(long, default_value = "/var/www")]
        www: PathBuf,
        /// Disable SSL for this site
        #[arg(long)]
        disable_ssl: bool,
        /// Full path to the signed certificate file
        #[arg(long, default_value = "/etc/apache2/ssl/server.crt")]
        ssl_crt: PathBuf,
        /// Full path to the private key file
        #[arg(long, default_value = "/etc/apache2/ssl/server.key")]
        ssl_key: PathBuf,
        /// Port on which the server will listen for SSL requests
        #[arg(long, default_value_t = 443)]
        ssl_port: u16,
        /// MySQL credentials in user:password format
        #[arg(long, default_value = "root:root")]
        mysql_login: String,
        /// Database name to use instead of the derived sites_<name>
        #[arg(long)]
        mysql_database: Option<String>,
    },
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Create {
            site,
            joomla,
            sample_data,
            symlink,
            clear_cache,
            projects_dir,
            www,
            disable_ssl,
            ssl_crt,
            ssl_key,
            ssl_port,
            mysql_login,
            mysql_database,
        } => {
            let mut request = ProvisioningRequest::new(site, VersionSelector::parse(&joomla));
            request.sample_data = sample_data;
            request.symlink = symlink.as_deref().map(parse_symlink_list).unwrap_or_default();
            request.clear_cache = clear_cache;
            request.projects_dir = projects_dir.unwrap_or_else(default_projects_dir);
            request.www = www;
            request.ssl.disabled = disable_ssl;
            request.ssl.certificate = ssl_crt;
            request.ssl.key = ssl_key;
            request.ssl.port = ssl_port;
            request.mysql_login = DatabaseLogin::parse(&mysql_login)?;
            request.mysql_database = mysql_database;

            jsite::create_site(request).map(|_| ())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
