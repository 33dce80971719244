//! The provisioning sequence.
//!
//! Best-effort batch: each operation's outcome is logged and counted, and a
//! failure never stops the remaining operations. Calls are strictly
//! sequential; the only timing control is the pacing delay between
//! successive dashboard uploads.

use grafana_client::GrafanaClient;
use grafana_config::Config;
use tracing::{error, info};

/// Outcome of a provisioning run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProvisionSummary {
    pub attempted: usize,
    pub failed: usize,
}

impl ProvisionSummary {
    fn record<E: std::fmt::Display>(&mut self, operation: &str, result: Result<String, E>) {
        self.attempted += 1;
        match result {
            Ok(body) => info!(%operation, response = %body, "operation succeeded"),
            Err(e) => {
                self.failed += 1;
                error!(%operation, error = %e, "operation failed");
            }
        }
    }
}

/// Run the full provisioning sequence: one data source, one dashboard per
/// project (paced), one notification channel.
pub async fn run(config: &Config, client: &GrafanaClient, projects: &[String]) -> ProvisionSummary {
    let mut summary = ProvisionSummary::default();
    let cluster = config.cluster();

    summary.record(
        "create data source",
        client.create_influxdb_datasource(cluster).await,
    );

    for (index, project) in projects.iter().enumerate() {
        if index > 0 {
            tokio::time::sleep(config.pacing).await;
        }
        summary.record(
            "create dashboard",
            client
                .create_dashboard(cluster, project, &config.data_source, &config.template_path)
                .await,
        );
    }

    summary.record(
        "create notification channel",
        client
            .create_dingtalk_channel(cluster, &config.dingtalk_url)
            .await,
    );

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::Duration;

    use grafana_config::ConfigLoader;
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(template_path: PathBuf) -> Config {
        ConfigLoader::new()
            .with_cluster("c1".to_string())
            .with_api_key("Bearer test-key".to_string())
            .with_data_source("c1-influxdb".to_string())
            .with_template_path(template_path)
            .with_dingtalk_url("https://x".to_string())
            .with_pacing(Duration::from_secs(0))
            .build()
            .unwrap()
    }

    fn test_client(config: &Config, base_url: String) -> GrafanaClient {
        GrafanaClient::builder()
            .base_url(base_url)
            .api_key(config.api_key.clone())
            .build()
            .unwrap()
    }

    fn write_template(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("dashboard.template");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(br#"{"dashboard":{"title":"{{ cluster_name }}-{{ project_name }}","datasource":"{{ datasource }}"}}"#)
            .unwrap();
        path
    }

    #[tokio::test]
    async fn test_run_issues_operations_in_fixed_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .expect(4)
            .mount(&mock_server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = test_config(write_template(&dir));
        let client = test_client(&config, mock_server.uri());
        let projects = vec!["app1".to_string(), "app2".to_string()];

        let summary = run(&config, &client, &projects).await;

        assert_eq!(summary.attempted, 4);
        assert_eq!(summary.failed, 0);

        let requests = mock_server.received_requests().await.unwrap();
        let paths: Vec<_> = requests.iter().map(|r| r.url.path().to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "/api/datasources",
                "/api/dashboards/db",
                "/api/dashboards/db",
                "/api/alert-notifications",
            ]
        );
    }

    #[tokio::test]
    async fn test_run_continues_past_failures() {
        let mock_server = MockServer::start().await;

        // Every request is rejected; the driver must still attempt all four.
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})),
            )
            .expect(4)
            .mount(&mock_server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = test_config(write_template(&dir));
        let client = test_client(&config, mock_server.uri());
        let projects = vec!["app1".to_string(), "app2".to_string()];

        let summary = run(&config, &client, &projects).await;

        assert_eq!(summary.attempted, 4);
        assert_eq!(summary.failed, 4);
    }

    #[tokio::test]
    async fn test_run_with_missing_template_skips_dashboard_uploads() {
        let mock_server = MockServer::start().await;

        // Only the data source and notification channel requests arrive.
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .expect(2)
            .mount(&mock_server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path().join("nonexistent.template"));
        let client = test_client(&config, mock_server.uri());
        let projects = vec!["app1".to_string()];

        let summary = run(&config, &client, &projects).await;

        assert_eq!(summary.attempted, 3);
        assert_eq!(summary.failed, 1);
    }

    #[tokio::test]
    async fn test_run_paces_between_successive_dashboard_uploads() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .expect(5)
            .mount(&mock_server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(write_template(&dir));
        config.pacing = Duration::from_millis(300);
        let client = test_client(&config, mock_server.uri());
        let projects = vec!["app1".to_string(), "app2".to_string(), "app3".to_string()];

        // Three uploads, two gaps: the run must take at least two pacing
        // delays end to end.
        let start = std::time::Instant::now();
        let summary = run(&config, &client, &projects).await;
        let elapsed = start.elapsed();

        assert_eq!(summary.attempted, 5);
        assert_eq!(summary.failed, 0);
        assert!(
            elapsed >= Duration::from_millis(600),
            "expected at least two pacing delays, run took {elapsed:?}"
        );
    }

    #[tokio::test]
    async fn test_run_does_not_pace_around_a_single_dashboard_upload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .expect(3)
            .mount(&mock_server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(write_template(&dir));
        // Long enough that a stray sleep before the first upload or after
        // the last one would blow the bound.
        config.pacing = Duration::from_secs(30);
        let client = test_client(&config, mock_server.uri());
        let projects = vec!["app1".to_string()];

        let start = std::time::Instant::now();
        let summary = run(&config, &client, &projects).await;
        let elapsed = start.elapsed();

        assert_eq!(summary.attempted, 3);
        assert_eq!(summary.failed, 0);
        assert!(
            elapsed < Duration::from_secs(30),
            "a single upload must not trigger the pacing delay, run took {elapsed:?}"
        );
    }

    #[tokio::test]
    async fn test_run_with_no_projects_skips_dashboards() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .expect(2)
            .mount(&mock_server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = test_config(write_template(&dir));
        let client = test_client(&config, mock_server.uri());

        let summary = run(&config, &client, &[]).await;

        assert_eq!(summary.attempted, 2);
        assert_eq!(summary.failed, 0);
    }
}
