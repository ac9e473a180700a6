use common::config::Validate;
use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, GameConfig, LogConfig, YamlConfigSerializer};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_client_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.log.validate()?;
        Ok(())
    }
}
