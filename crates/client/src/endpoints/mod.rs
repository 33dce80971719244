//! Grafana administration API endpoint implementations.

mod dashboards;
mod datasources;
mod notifications;
mod request;

pub use dashboards::create_dashboard;
pub use datasources::create_influxdb_datasource;
pub use notifications::create_dingtalk_channel;
