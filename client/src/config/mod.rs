mod config;
mod game_config;
mod log_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use config::{Config, DEFAULT_CONFIG_FILE, get_config_manager};
pub use game_config::GameConfig;
pub use log_config::LogConfig;
