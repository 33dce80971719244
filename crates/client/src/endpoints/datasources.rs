//! Data source provisioning endpoint.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::request::post_json;
use crate::error::Result;
use crate::models::CreateDatasourceRequest;

/// Register the `<cluster>-influxdb` data source.
///
/// Returns the response body text on success. Re-runs are not idempotent:
/// Grafana rejects duplicate names, which surfaces as `ApiError`.
pub async fn create_influxdb_datasource(
    client: &Client,
    base_url: &str,
    api_key: &str,
    cluster: &str,
) -> Result<String> {
    let url = format!("{}/api/datasources", base_url);
    let request = CreateDatasourceRequest::influxdb(cluster);

    debug!(name = %request.name, "creating InfluxDB data source");

    post_json(client, &url, api_key, &request).await
}
