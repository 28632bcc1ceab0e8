//! yaks-config: run configuration for YAKS test runs
//!
//! Builds a [`RunConfig`] from fixed defaults and overlays whatever an
//! optional YAML file on disk sets. A missing file is not an error.

pub mod config;
pub mod domain;

pub use config::{load_config, load_defaults, ConfigError, ConfigResult};
pub use domain::{Config, NamespaceConfig, RunConfig};
