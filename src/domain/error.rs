use std::io;

use thiserror::Error;

/// Library-wide error type for jsite operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A directory for the site already exists.
    #[error("A site with name {0} already exists")]
    SiteExists(String),

    /// A delegated sub-operation reported failure.
    #[error("Failed to run {operation}: {details}")]
    SubOperation { operation: String, details: String },

    /// A virtual-host template could not be rendered.
    #[error("Failed to render template '{name}': {details}")]
    Template { name: String, details: String },

    /// The remote update manifest could not be fetched or understood.
    #[error("Update manifest error: {0}")]
    Manifest(String),

    /// A URL was malformed.
    #[error("Invalid URL '{url}': {details}")]
    InvalidUrl { url: String, details: String },
}

impl AppError {
    pub(crate) fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn sub_operation<S: Into<String>, D: Into<String>>(operation: S, details: D) -> Self {
        AppError::SubOperation { operation: operation.into(), details: details.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) | AppError::InvalidUrl { .. } => io::ErrorKind::InvalidInput,
            AppError::SiteExists(_) => io::ErrorKind::AlreadyExists,
            AppError::Template { .. } => io::ErrorKind::InvalidData,
            AppError::SubOperation { .. } | AppError::Manifest(_) => io::ErrorKind::Other,
        }
    }
}
