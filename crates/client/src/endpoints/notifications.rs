//! Alert notification channel provisioning endpoint.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::request::post_json;
use crate::error::Result;
use crate::models::CreateNotificationRequest;

/// Register the `<cluster>-dingtalk` alert notification channel.
pub async fn create_dingtalk_channel(
    client: &Client,
    base_url: &str,
    api_key: &str,
    cluster: &str,
    dingtalk_url: &str,
) -> Result<String> {
    let url = format!("{}/api/alert-notifications", base_url);
    let request = CreateNotificationRequest::dingtalk(cluster, dingtalk_url);

    debug!(name = %request.name, "creating DingTalk notification channel");

    post_json(client, &url, api_key, &request).await
}
