use common::config::Validate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{ConfigManager, FileContentConfigProvider, GameConfig, WindowConfig, YamlConfigSerializer};

pub const CONFIG_FILE: &str = "snake_desktop_client_config.yaml";

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE)))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
    pub window: WindowConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.window.validate()?;
        Ok(())
    }
}
