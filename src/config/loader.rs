//! Config file loading

use super::error::{ConfigError, ConfigResult};
use crate::domain::RunConfig;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

/// File name the CLI looks for when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "yaks-config.yaml";

/// The fixed defaults every load starts from.
pub fn load_defaults() -> RunConfig {
    RunConfig::default()
}

/// Load a run configuration, overlaying `path` on top of the defaults.
///
/// A file that does not exist yields the defaults. Any other read failure,
/// and any content that does not parse, is returned as an error.
pub fn load_config<P: AsRef<Path>>(path: P) -> ConfigResult<RunConfig> {
    let path = path.as_ref();

    let data = match fs::read(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            return Ok(load_defaults());
        }
        Err(source) => return Err(ConfigError::Read { path: path.to_path_buf(), source }),
    };

    let config = parse_yaml_config(&data, path)?;
    tracing::debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

fn parse_yaml_config(data: &[u8], path: &Path) -> ConfigResult<RunConfig> {
    let parse_error = |source| ConfigError::Parse { path: path.to_path_buf(), source };

    // Only the first document counts; anything after a later `---` is ignored
    let Some(document) = serde_yaml::Deserializer::from_slice(data).next() else {
        return Ok(load_defaults());
    };

    // Parse to generic value first so null entries can fall back to defaults
    let mut raw = serde_yaml::Value::deserialize(document).map_err(parse_error)?;
    if raw.is_null() {
        return Ok(load_defaults());
    }
    if let serde_yaml::Value::Mapping(map) = &mut raw {
        drop_null_entries(map);
        if let Some(serde_yaml::Value::Mapping(config)) = map.get_mut("config") {
            drop_null_entries(config);
        }
    }

    serde_yaml::from_value(raw).map_err(parse_error)
}

/// A key set to null keeps its default, same as a key that is not there.
fn drop_null_entries(map: &mut serde_yaml::Mapping) {
    map.retain(|_, value| !value.is_null());
}
