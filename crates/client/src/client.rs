//! Main Grafana administration API client.

use secrecy::{ExposeSecret, SecretString};
use std::path::Path;
use std::time::Duration;

use grafana_config::Config;

use crate::endpoints;
use crate::error::{ClientError, Result};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for creating a new GrafanaClient.
pub struct GrafanaClientBuilder {
    base_url: Option<String>,
    api_key: Option<SecretString>,
    timeout: Duration,
}

impl Default for GrafanaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GrafanaClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Grafana instance.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API key sent as the Authorization header value.
    pub fn api_key(mut self, key: SecretString) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the client.
    pub fn build(self) -> Result<GrafanaClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let api_key = self.api_key.ok_or(ClientError::MissingApiKey)?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(GrafanaClient {
            http,
            base_url,
            api_key,
        })
    }
}

/// Grafana administration API client.
///
/// Provides the three provisioning operations: data source creation,
/// dashboard upload and notification channel creation. Each call is
/// stateless and independent; ordering across operations is the caller's
/// concern.
#[derive(Debug)]
pub struct GrafanaClient {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl GrafanaClient {
    /// Create a new client builder.
    pub fn builder() -> GrafanaClientBuilder {
        GrafanaClientBuilder::new()
    }

    /// Build a client from the run configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::builder()
            .base_url(config.base_url())
            .api_key(config.api_key.clone())
            .timeout(config.timeout)
            .build()
    }

    /// Register the `<cluster>-influxdb` data source.
    pub async fn create_influxdb_datasource(&self, cluster: &str) -> Result<String> {
        endpoints::create_influxdb_datasource(
            &self.http,
            &self.base_url,
            self.api_key.expose_secret(),
            cluster,
        )
        .await
    }

    /// Render the dashboard template for a project and upload it.
    pub async fn create_dashboard(
        &self,
        cluster: &str,
        project: &str,
        data_source: &str,
        template_path: &Path,
    ) -> Result<String> {
        endpoints::create_dashboard(
            &self.http,
            &self.base_url,
            self.api_key.expose_secret(),
            cluster,
            project,
            data_source,
            template_path,
        )
        .await
    }

    /// Register the `<cluster>-dingtalk` alert notification channel.
    pub async fn create_dingtalk_channel(
        &self,
        cluster: &str,
        dingtalk_url: &str,
    ) -> Result<String> {
        endpoints::create_dingtalk_channel(
            &self.http,
            &self.base_url,
            self.api_key.expose_secret(),
            cluster,
            dingtalk_url,
        )
        .await
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_key(value: &str) -> SecretString {
        SecretString::new(value.to_string().into())
    }

    #[test]
    fn test_client_builder() {
        let client = GrafanaClient::builder()
            .base_url("http://grafana.c1.yourdomain.com:3000".to_string())
            .api_key(api_key("Bearer test-key"))
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://grafana.c1.yourdomain.com:3000");
    }

    #[test]
    fn test_client_builder_missing_base_url() {
        let client = GrafanaClient::builder().api_key(api_key("k")).build();
        assert!(matches!(client.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_client_builder_missing_api_key() {
        let client = GrafanaClient::builder()
            .base_url("http://localhost:3000".to_string())
            .build();
        assert!(matches!(client.unwrap_err(), ClientError::MissingApiKey));
    }

    #[test]
    fn test_client_builder_normalizes_base_url() {
        let client = GrafanaClient::builder()
            .base_url("http://localhost:3000//".to_string())
            .api_key(api_key(""))
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_from_config() {
        let config = grafana_config::ConfigLoader::new()
            .with_cluster("c1".to_string())
            .with_api_key("Bearer key".to_string())
            .build()
            .unwrap();

        let client = GrafanaClient::from_config(&config).unwrap();
        assert_eq!(
            client.base_url(),
            "http://grafana.c1.yourdomain.com:3000"
        );
    }
}
