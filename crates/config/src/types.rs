//! Configuration types for the provisioning run.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

/// The Grafana endpoint, assembled once at startup.
///
/// Replaces an ad-hoc base-URL string with a placeholder token: the cluster
/// name is a first-class field and the base URL is derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrafanaEndpoint {
    pub scheme: String,
    pub cluster: String,
    pub domain: String,
    pub port: u16,
}

impl GrafanaEndpoint {
    /// The base URL all provisioning requests are issued against,
    /// e.g. `http://grafana.k8s-platform.yourdomain.com:3000`.
    pub fn base_url(&self) -> String {
        format!(
            "{}://grafana.{}.{}:{}",
            self.scheme, self.cluster, self.domain, self.port
        )
    }
}

/// Immutable configuration for a single provisioning run.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: GrafanaEndpoint,
    /// Raw Authorization header value for all Grafana API calls. Never logged.
    pub api_key: SecretString,
    /// Data source name bound into the dashboard template.
    pub data_source: String,
    pub template_path: PathBuf,
    pub project_list_path: PathBuf,
    /// Webhook target for the DingTalk alert channel.
    pub dingtalk_url: String,
    /// Delay inserted between successive dashboard uploads.
    pub pacing: Duration,
    /// Outbound request timeout.
    pub timeout: Duration,
}

impl Config {
    pub fn base_url(&self) -> String {
        self.endpoint.base_url()
    }

    pub fn cluster(&self) -> &str {
        &self.endpoint.cluster
    }
}
