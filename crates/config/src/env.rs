//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse environment variables for the provisioning configuration.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::loader::ConfigLoader;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub(crate) fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(cluster) = env_var_or_none("CLUSTER") {
        loader.set_cluster(Some(cluster));
    }
    if let Some(key) = env_var_or_none("API_KEY") {
        loader.set_api_key(Some(SecretString::new(key.into())));
    }
    if let Some(data_source) = env_var_or_none("DATA_SOURCE") {
        loader.set_data_source(Some(data_source));
    }
    if let Some(path) = env_var_or_none("TEMPLATE_PATH") {
        loader.set_template_path(Some(PathBuf::from(path)));
    }
    if let Some(url) = env_var_or_none("DINGTALK_URL") {
        loader.set_dingtalk_url(Some(url));
    }
    if let Some(path) = env_var_or_none("PROJECT_LIST") {
        loader.set_project_list_path(Some(PathBuf::from(path)));
    }
    if let Some(scheme) = env_var_or_none("GRAFANA_SCHEME") {
        loader.set_scheme(Some(scheme));
    }
    if let Some(domain) = env_var_or_none("GRAFANA_DOMAIN") {
        loader.set_domain(Some(domain));
    }
    if let Some(port) = env_var_or_none("GRAFANA_PORT") {
        let port: u16 = port.parse().map_err(|_| ConfigError::InvalidValue {
            var: "GRAFANA_PORT".to_string(),
            message: "must be a port number".to_string(),
        })?;
        loader.set_port(Some(port));
    }
    if let Some(pacing) = env_var_or_none("PACING_SECONDS") {
        let secs: u64 = pacing.parse().map_err(|_| ConfigError::InvalidValue {
            var: "PACING_SECONDS".to_string(),
            message: "must be a non-negative number of seconds".to_string(),
        })?;
        loader.set_pacing(Some(Duration::from_secs(secs)));
    }
    if let Some(timeout) = env_var_or_none("HTTP_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: "HTTP_TIMEOUT".to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }

    Ok(())
}
