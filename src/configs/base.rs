use serde::{Deserialize, Serialize};

use crate::common::types::AnyResult;
use crate::configs::*;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub logging: Option<LoggingConfig>,
}

impl Config {
    /// Reads `config.toml`, falling back to `config.default.toml`. Rooms are
    /// ephemeral so there is nothing else to load at startup.
    pub fn load() -> AnyResult<Self> {
        let config_path = if std::path::Path::new("config.toml").exists() {
            "config.toml"
        } else if std::path::Path::new("config.default.toml").exists() {
            "config.default.toml"
        } else {
            return Err("config.toml or config.default.toml not found".into());
        };

        let config_str = std::fs::read_to_string(config_path)?;
        if config_str.is_empty() {
            return Err(format!("{} is empty", config_path).into());
        }

        let config: Config = toml::from_str(&config_str)?;
        Ok(config)
    }
}
