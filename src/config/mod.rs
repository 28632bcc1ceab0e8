//! Configuration loading
//!
//! Defaults first, then whatever the YAML file sets (File > Defaults).

pub mod error;
pub mod loader;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, load_defaults, DEFAULT_CONFIG_FILE};
