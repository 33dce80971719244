//! grafana-provision - one-shot Grafana provisioning CLI.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load the project list and run the provisioning sequence.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE `build_config` so `.env` values are
//!   visible when the loader reads the environment.
//! - Environment variables are read only by the config loader (empty or
//!   whitespace-only values treated as unset, values trimmed, numerics
//!   validated); CLI flags override whatever the environment provided.
//! - Per-operation failures are logged, never surfaced as exit status; the
//!   process exits non-zero only for configuration errors raised before any
//!   provisioning begins.

mod args;
mod driver;
mod projects;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use args::Cli;
use grafana_client::GrafanaClient;
use grafana_config::{Config, ConfigLoader};

fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new()
        .from_env()
        .context("failed to load configuration from environment")?;

    // CLI overrides (highest priority)
    if let Some(ref cluster) = cli.cluster {
        loader = loader.with_cluster(cluster.clone());
    }
    if let Some(ref key) = cli.api_key {
        loader = loader.with_api_key(key.clone());
    }
    if let Some(ref data_source) = cli.data_source {
        loader = loader.with_data_source(data_source.clone());
    }
    if let Some(ref path) = cli.template_path {
        loader = loader.with_template_path(path.clone());
    }
    if let Some(ref url) = cli.dingtalk_url {
        loader = loader.with_dingtalk_url(url.clone());
    }
    if let Some(ref path) = cli.project_list {
        loader = loader.with_project_list_path(path.clone());
    }
    if let Some(ref scheme) = cli.scheme {
        loader = loader.with_scheme(scheme.clone());
    }
    if let Some(ref domain) = cli.domain {
        loader = loader.with_domain(domain.clone());
    }
    if let Some(port) = cli.port {
        loader = loader.with_port(port);
    }
    if let Some(secs) = cli.pacing_seconds {
        loader = loader.with_pacing(std::time::Duration::from_secs(secs));
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(secs));
    }

    loader.build().context("invalid configuration")
}

#[tokio::main]
async fn main() {
    // Load .env BEFORE build_config so the loader sees .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(1);
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let config = match build_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };

    let client = match GrafanaClient::from_config(&config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build client: {}", e);
            std::process::exit(1);
        }
    };

    let project_list = projects::load_projects(&config.project_list_path);
    info!(
        cluster = config.cluster(),
        base_url = %client.base_url(),
        projects = ?project_list,
        "starting provisioning run"
    );

    let summary = driver::run(&config, &client, &project_list).await;

    if summary.failed > 0 {
        // Per-operation failures are reported but never change the exit
        // status: partial provisioning is expected and non-fatal.
        warn!(
            attempted = summary.attempted,
            failed = summary.failed,
            "provisioning finished with failures"
        );
    } else {
        info!(attempted = summary.attempted, "provisioning finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(args)
    }

    #[test]
    #[serial]
    fn test_blank_env_var_is_treated_as_unset() {
        temp_env::with_vars([("CLUSTER", Some("  "))], || {
            let config = build_config(&parse(&["grafana-provision"])).unwrap();
            assert_eq!(config.cluster(), "your_cluster");
        });
    }

    #[test]
    #[serial]
    fn test_env_var_value_is_trimmed() {
        temp_env::with_vars([("CLUSTER", Some(" k8s-env "))], || {
            let config = build_config(&parse(&["grafana-provision"])).unwrap();
            assert_eq!(config.cluster(), "k8s-env");
        });
    }

    #[test]
    #[serial]
    fn test_flag_overrides_env_var() {
        temp_env::with_vars([("CLUSTER", Some("k8s-env"))], || {
            let config =
                build_config(&parse(&["grafana-provision", "--cluster", "k8s-cli"])).unwrap();
            assert_eq!(config.cluster(), "k8s-cli");
        });
    }

    #[test]
    #[serial]
    fn test_invalid_numeric_env_var_names_the_variable() {
        temp_env::with_vars([("GRAFANA_PORT", Some("not-a-port"))], || {
            let err = build_config(&parse(&["grafana-provision"])).unwrap_err();
            assert!(format!("{:#}", err).contains("GRAFANA_PORT"));
        });
    }
}
