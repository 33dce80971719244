//! Dashboard provisioning endpoint.

use reqwest::Client;
use std::path::Path;
use tracing::debug;

use crate::endpoints::request::post_rendered;
use crate::error::Result;
use crate::template::render_dashboard;

/// Render the dashboard template for a project and upload it.
///
/// If rendering fails no request is issued: uploading an empty dashboard
/// body would always be rejected by Grafana, so the template error is
/// returned instead.
pub async fn create_dashboard(
    client: &Client,
    base_url: &str,
    api_key: &str,
    cluster: &str,
    project: &str,
    data_source: &str,
    template_path: &Path,
) -> Result<String> {
    let url = format!("{}/api/dashboards/db", base_url);
    let body = render_dashboard(template_path, cluster, project, data_source)?;

    debug!(%project, template = %template_path.display(), "uploading dashboard");

    post_rendered(client, &url, api_key, body).await
}
