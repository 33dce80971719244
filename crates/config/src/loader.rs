//! Configuration loader.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from environment variables and direct builder methods.
//! - Build the final `Config` from loaded values, falling back to defaults.
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_CLUSTER, DEFAULT_DATA_SOURCE, DEFAULT_DOMAIN, DEFAULT_PACING_SECONDS, DEFAULT_PORT,
    DEFAULT_PROJECT_LIST_PATH, DEFAULT_SCHEME, DEFAULT_TEMPLATE_PATH, DEFAULT_TIMEOUT_SECONDS,
    MAX_TIMEOUT_SECONDS,
};
use crate::env::apply_env;
use crate::error::ConfigError;
use crate::types::{Config, GrafanaEndpoint};

/// Configuration loader that builds config from environment variables and
/// CLI overrides.
#[derive(Default)]
pub struct ConfigLoader {
    cluster: Option<String>,
    api_key: Option<SecretString>,
    data_source: Option<String>,
    template_path: Option<PathBuf>,
    project_list_path: Option<PathBuf>,
    dingtalk_url: Option<String>,
    scheme: Option<String>,
    domain: Option<String>,
    port: Option<u16>,
    pacing: Option<Duration>,
    timeout: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent
    /// secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the cluster name.
    pub fn with_cluster(mut self, cluster: String) -> Self {
        self.cluster = Some(cluster);
        self
    }

    /// Set the Grafana API key.
    pub fn with_api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set the data source name bound into the dashboard template.
    pub fn with_data_source(mut self, data_source: String) -> Self {
        self.data_source = Some(data_source);
        self
    }

    /// Set the dashboard template path.
    pub fn with_template_path(mut self, path: PathBuf) -> Self {
        self.template_path = Some(path);
        self
    }

    /// Set the project list path.
    pub fn with_project_list_path(mut self, path: PathBuf) -> Self {
        self.project_list_path = Some(path);
        self
    }

    /// Set the DingTalk webhook URL.
    pub fn with_dingtalk_url(mut self, url: String) -> Self {
        self.dingtalk_url = Some(url);
        self
    }

    /// Set the endpoint scheme.
    pub fn with_scheme(mut self, scheme: String) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Set the endpoint domain suffix.
    pub fn with_domain(mut self, domain: String) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Set the endpoint port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the pacing delay between dashboard uploads.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = Some(pacing);
        self
    }

    /// Set the outbound request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let endpoint = GrafanaEndpoint {
            scheme: self.scheme.unwrap_or_else(|| DEFAULT_SCHEME.to_string()),
            cluster: self.cluster.unwrap_or_else(|| DEFAULT_CLUSTER.to_string()),
            domain: self.domain.unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
            port: self.port.unwrap_or(DEFAULT_PORT),
        };
        validate_endpoint(&endpoint)?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS));
        Self::validate_timeout(timeout)?;

        Ok(Config {
            endpoint,
            api_key: self
                .api_key
                .unwrap_or_else(|| SecretString::new(String::new().into())),
            data_source: self
                .data_source
                .unwrap_or_else(|| DEFAULT_DATA_SOURCE.to_string()),
            template_path: self
                .template_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_PATH)),
            project_list_path: self
                .project_list_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECT_LIST_PATH)),
            dingtalk_url: self.dingtalk_url.unwrap_or_default(),
            pacing: self
                .pacing
                .unwrap_or(Duration::from_secs(DEFAULT_PACING_SECONDS)),
            timeout,
        })
    }

    fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
        let secs = timeout.as_secs();
        if secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }
        if secs > MAX_TIMEOUT_SECONDS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECONDS
                ),
            });
        }
        Ok(())
    }

    // Internal setters for use by env.rs

    pub(crate) fn set_cluster(&mut self, cluster: Option<String>) {
        self.cluster = cluster;
    }

    pub(crate) fn set_api_key(&mut self, key: Option<SecretString>) {
        self.api_key = key;
    }

    pub(crate) fn set_data_source(&mut self, data_source: Option<String>) {
        self.data_source = data_source;
    }

    pub(crate) fn set_template_path(&mut self, path: Option<PathBuf>) {
        self.template_path = path;
    }

    pub(crate) fn set_project_list_path(&mut self, path: Option<PathBuf>) {
        self.project_list_path = path;
    }

    pub(crate) fn set_dingtalk_url(&mut self, url: Option<String>) {
        self.dingtalk_url = url;
    }

    pub(crate) fn set_scheme(&mut self, scheme: Option<String>) {
        self.scheme = scheme;
    }

    pub(crate) fn set_domain(&mut self, domain: Option<String>) {
        self.domain = domain;
    }

    pub(crate) fn set_port(&mut self, port: Option<u16>) {
        self.port = port;
    }

    pub(crate) fn set_pacing(&mut self, pacing: Option<Duration>) {
        self.pacing = pacing;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }
}

/// Validates the assembled endpoint parses as an absolute http(s) URL.
fn validate_endpoint(endpoint: &GrafanaEndpoint) -> Result<(), ConfigError> {
    let base_url = endpoint.base_url();

    if endpoint.scheme != "http" && endpoint.scheme != "https" {
        return Err(ConfigError::InvalidEndpoint {
            url: base_url,
            message: format!("scheme must be http or https, got: {}", endpoint.scheme),
        });
    }

    let parsed = url::Url::parse(&base_url).map_err(|e| ConfigError::InvalidEndpoint {
        url: base_url.clone(),
        message: e.to_string(),
    })?;

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidEndpoint {
            url: base_url,
            message: "host is required".to_string(),
        });
    }

    Ok(())
}
