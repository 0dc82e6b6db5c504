// src/data.rs

use crate::config::AppConfig;
use crate::error::ConfigError;

const DEFAULT_CONFIG: &str = include_str!("data/default_config.yaml");

/// Parses the configuration embedded in the binary.
pub fn read_default_config() -> Result<AppConfig, ConfigError> {
    Ok(serde_yaml::from_str(DEFAULT_CONFIG)?)
}
