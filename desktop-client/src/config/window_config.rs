use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    /// Side length of the square board in logical pixels.
    pub board_pixels: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { board_pixels: 400 }
    }
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if !(200..=2000).contains(&self.board_pixels) {
            return Err("board_pixels must be between 200 and 2000".to_string());
        }
        Ok(())
    }
}
