mod game_config;
mod main_config;
mod window_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use game_config::GameConfig;
pub use main_config::{get_config_manager, Config};
pub use window_config::WindowConfig;
