//! CLI argument definitions and parsing.
//!
//! Flags are overrides only: environment variables are read by the config
//! loader in `grafana-config`, which treats empty/whitespace-only values as
//! unset and trims the rest. Keeping env handling in one place means every
//! variable gets the same normalization and error reporting.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grafana-provision")]
#[command(about = "Provision Grafana data sources, dashboards and alert channels", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  CLUSTER=k8s-platform API_KEY=\"Bearer $KEY\" grafana-provision\n  grafana-provision --cluster k8s-testing --project-list ./project\n  grafana-provision --pacing-seconds 2 --dingtalk-url https://oapi.dingtalk.com/robot/send?access_token=...\n"
)]
pub struct Cli {
    /// Cluster name substituted into the endpoint URL and resource names
    /// (env: CLUSTER)
    #[arg(long)]
    pub cluster: Option<String>,

    /// API key sent verbatim as the Authorization header value (env: API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Data source name bound into the dashboard template (env: DATA_SOURCE)
    #[arg(long)]
    pub data_source: Option<String>,

    /// Path to the dashboard template file (env: TEMPLATE_PATH)
    #[arg(long, value_name = "FILE")]
    pub template_path: Option<PathBuf>,

    /// DingTalk webhook URL for the alert notification channel
    /// (env: DINGTALK_URL)
    #[arg(long)]
    pub dingtalk_url: Option<String>,

    /// Path to the newline-delimited project list file (env: PROJECT_LIST)
    #[arg(long, value_name = "FILE")]
    pub project_list: Option<PathBuf>,

    /// Endpoint scheme, http or https (env: GRAFANA_SCHEME)
    #[arg(long)]
    pub scheme: Option<String>,

    /// Endpoint domain suffix, grafana.<cluster>.<domain> (env: GRAFANA_DOMAIN)
    #[arg(long)]
    pub domain: Option<String>,

    /// Endpoint port (env: GRAFANA_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Delay in seconds between successive dashboard uploads
    /// (env: PACING_SECONDS)
    #[arg(long)]
    pub pacing_seconds: Option<u64>,

    /// Outbound request timeout in seconds (env: HTTP_TIMEOUT)
    #[arg(long)]
    pub timeout: Option<u64>,
}
