//! Grafana HTTP administration API client.
//!
//! This crate provides a small client for provisioning Grafana resources:
//! InfluxDB data sources, templated dashboards and DingTalk alert
//! notification channels.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod template;

pub use client::{GrafanaClient, GrafanaClientBuilder};
pub use error::{ClientError, Result};
pub use models::{CreateDatasourceRequest, CreateNotificationRequest, NotificationSettings};
