//! Error types for the Grafana client.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Grafana client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Failed to read a local file (dashboard template).
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dashboard template does not exist at the resolved path.
    #[error("Dashboard template not found: {0}")]
    TemplateNotFound(PathBuf),

    /// Template loading or rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from the Grafana API.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The client was built without an API key.
    #[error("API key is required")]
    MissingApiKey,
}

impl ClientError {
    /// Check if this error originated locally, before any request was issued.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Io { .. }
                | Self::TemplateNotFound(_)
                | Self::Template(_)
                | Self::InvalidUrl(_)
                | Self::MissingApiKey
        )
    }

    /// Check if this error is a non-success response from the remote API.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::ApiError { .. })
    }
}
