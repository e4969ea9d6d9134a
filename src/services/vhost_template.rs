//! Virtual-host rendering backed by embedded minijinja templates.

use minijinja::{Environment, context};

use crate::domain::{AppError, VirtualHostSpec};

static VHOST_TEMPLATE: &str = include_str!("templates/vhost.conf");
static VHOST_SSL_TEMPLATE: &str = include_str!("templates/vhost.ssl.conf");

fn environment() -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);

    env.add_template("vhost", VHOST_TEMPLATE)
        .map_err(|e| template_error("vhost", &e))?;
    env.add_template("vhost.ssl", VHOST_SSL_TEMPLATE)
        .map_err(|e| template_error("vhost.ssl", &e))?;

    Ok(env)
}

fn template_error(name: &str, err: &minijinja::Error) -> AppError {
    AppError::Template { name: name.to_string(), details: err.to_string() }
}

/// Render the host configuration for a site.
///
/// With `with_ssl` the SSL fragment is appended after a blank line; the
/// caller decides based on whether the certificate files exist.
pub fn render_host(spec: &VirtualHostSpec, with_ssl: bool) -> Result<String, AppError> {
    let env = environment()?;

    let base = env
        .get_template("vhost")
        .and_then(|template| template.render(context! { site => spec.site }))
        .map_err(|e| template_error("vhost", &e))?;

    if !with_ssl {
        return Ok(base);
    }

    let ssl = env
        .get_template("vhost.ssl")
        .and_then(|template| {
            template.render(context! {
                site => spec.site,
                port => spec.ssl_port,
                certificate => spec.certificate.display().to_string(),
                key => spec.key.display().to_string(),
            })
        })
        .map_err(|e| template_error("vhost.ssl", &e))?;

    Ok(format!("{}\n\n{}", base.trim_end_matches('\n'), ssl))
}
