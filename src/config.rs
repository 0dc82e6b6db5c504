use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::data::read_default_config;
use crate::error::ConfigError;
use crate::model::{CategoryChoice, DifficultyChoice};

#[cfg(not(target_arch = "wasm32"))]
pub const CONFIG_ENV_VAR: &str = "TRIVIA_QUIZ_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub history: HistoryConfig,
    pub defaults: SettingsDefaults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub questions_url: String,
    pub categories_url: String,
    /// Only enforced natively; the browser applies its own fetch limits.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    pub storage_key: String,
    /// Directory holding `<storage_key>.json` on native targets.
    pub directory: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsDefaults {
    pub amount: u32,
    pub category: CategoryChoice,
    pub difficulty: DifficultyChoice,
}

impl AppConfig {
    /// Embedded defaults, overlaid with the file named in `TRIVIA_QUIZ_CONFIG` if set.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => {
                log::info!("loading config override from {path}");
                let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
                Self::with_overrides(&text)
            }
            _ => read_default_config(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, ConfigError> {
        read_default_config()
    }

    /// Applies a partial YAML document on top of the embedded defaults.
    pub fn with_overrides(yaml: &str) -> Result<Self, ConfigError> {
        let mut base = serde_yaml::to_value(read_default_config()?)?;
        let overlay: Value = serde_yaml::from_str(yaml)?;
        merge_values(&mut base, overlay);
        Ok(serde_yaml::from_value(base)?)
    }
}

fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        // An empty document overrides nothing.
        (_, Value::Null) => {}
        (slot, value) => *slot = value,
    }
}
