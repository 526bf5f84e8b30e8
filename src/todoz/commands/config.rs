use crate::commands::{CmdMessage, CmdResult};
use crate::config::TodozConfig;
use crate::error::{Result, TodozError};
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut config = load_or_default(config_dir, &mut result)?;

    match action {
        ConfigAction::ShowAll => Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => {
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result.with_config(config))
        }
    }
}

/// An unparseable config file reads as defaults; a `Set` then replaces it.
fn load_or_default(config_dir: &Path, result: &mut CmdResult) -> Result<TodozConfig> {
    match TodozConfig::load(config_dir) {
        Err(TodozError::Serialization(e)) => {
            warn!(error = %e, "config file is unreadable, using defaults");
            result.add_message(CmdMessage::warning(format!(
                "Config file is unreadable ({}), showing defaults",
                e
            )));
            Ok(TodozConfig::default())
        }
        other => other,
    }
}
