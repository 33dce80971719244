//! Request body models for the Grafana administration API.

use serde::Serialize;

/// Body for `POST /api/datasources`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDatasourceRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub datasource_type: String,
    pub url: String,
    pub access: String,
    pub basic_auth: bool,
}

impl CreateDatasourceRequest {
    /// The InfluxDB data source registered for a cluster: a proxy-access
    /// connection to the in-cluster monitoring InfluxDB instance.
    pub fn influxdb(cluster: &str) -> Self {
        Self {
            name: format!("{cluster}-influxdb"),
            datasource_type: "influxDB".to_string(),
            url: "http://monitoring-influxdb:8086".to_string(),
            access: "proxy".to_string(),
            basic_auth: false,
        }
    }
}

/// Body for `POST /api/alert-notifications`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub channel_type: String,
    pub is_default: bool,
    pub settings: NotificationSettings,
}

/// Channel-specific settings for a notification channel.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationSettings {
    pub addresses: String,
}

impl CreateNotificationRequest {
    /// The DingTalk alert channel registered for a cluster, marked as the
    /// default delivery target.
    pub fn dingtalk(cluster: &str, webhook_url: &str) -> Self {
        Self {
            name: format!("{cluster}-dingtalk"),
            channel_type: "dingding".to_string(),
            is_default: true,
            settings: NotificationSettings {
                addresses: webhook_url.to_string(),
            },
        }
    }
}
