//! Configuration management for the Grafana provisioning tool.
//!
//! This crate provides types and loaders for building the provisioning
//! configuration from environment variables, `.env` files and CLI overrides.

pub mod constants;
mod env;
mod error;
mod loader;
mod types;

pub use env::env_var_or_none;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use types::{Config, GrafanaEndpoint};
