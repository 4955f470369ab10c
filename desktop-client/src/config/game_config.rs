use std::time::Duration;

use common::config::Validate;
use common::games::snake::SnakeSessionSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub grid_size: u32,
    pub initial_tick_interval_ms: u32,
    pub speed_step_ms: u32,
    pub min_tick_interval_ms: u32,
    pub food_value: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            initial_tick_interval_ms: 150,
            speed_step_ms: 5,
            min_tick_interval_ms: 50,
            food_value: 10,
        }
    }
}

impl From<&GameConfig> for SnakeSessionSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            grid_size: config.grid_size as usize,
            initial_tick_interval: Duration::from_millis(config.initial_tick_interval_ms as u64),
            speed_step: Duration::from_millis(config.speed_step_ms as u64),
            min_tick_interval: Duration::from_millis(config.min_tick_interval_ms as u64),
            food_value: config.food_value,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        SnakeSessionSettings::from(self).validate()
    }
}
