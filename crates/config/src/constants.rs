//! Default configuration values.
//!
//! All defaults mirror what the tool falls back to when the corresponding
//! environment variable or CLI flag is absent.

/// Default cluster name substituted into the endpoint URL and resource names.
pub const DEFAULT_CLUSTER: &str = "your_cluster";

/// Default data source name bound into the dashboard template.
pub const DEFAULT_DATA_SOURCE: &str = "your-influxdb";

/// Default dashboard template location.
pub const DEFAULT_TEMPLATE_PATH: &str = "./yaml/dashboard.template";

/// Default project list file location.
pub const DEFAULT_PROJECT_LIST_PATH: &str = "./project";

/// Default endpoint scheme.
pub const DEFAULT_SCHEME: &str = "http";

/// Default endpoint domain suffix.
pub const DEFAULT_DOMAIN: &str = "yourdomain.com";

/// Default Grafana HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default delay between successive dashboard uploads, in seconds.
pub const DEFAULT_PACING_SECONDS: u64 = 1;

/// Default outbound request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Upper bound for the configured request timeout.
pub const MAX_TIMEOUT_SECONDS: u64 = 600;
