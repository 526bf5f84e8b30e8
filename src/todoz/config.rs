use crate::error::{Result, TodozError};
use crate::model::Filter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_ADD_DELAY_MS: &str = "add-delay-ms";
pub const KEY_DEFAULT_FILTER: &str = "default-filter";

/// Configuration for todoz, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodozConfig {
    /// Artificial pause before a new todo is added, in milliseconds
    #[serde(default)]
    pub add_delay_ms: u64,

    /// Filter used by `list` when none is given
    #[serde(default)]
    pub default_filter: Filter,
}

impl TodozConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodozError::Io)?;
        let config: TodozConfig =
            serde_json::from_str(&content).map_err(TodozError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TodozError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TodozError::Serialization)?;
        fs::write(config_path, content).map_err(TodozError::Io)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[KEY_ADD_DELAY_MS, KEY_DEFAULT_FILTER]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_ADD_DELAY_MS => Some(self.add_delay_ms.to_string()),
            KEY_DEFAULT_FILTER => Some(self.default_filter.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            KEY_ADD_DELAY_MS => {
                self.add_delay_ms = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid value for {}: {}", key, value))?;
            }
            KEY_DEFAULT_FILTER => {
                self.default_filter = value.parse()?;
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}
