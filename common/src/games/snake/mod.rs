mod game_state;
mod settings;
mod snake;
mod types;

pub use game_state::{GameSnapshot, SnakeGameState, TickOutcome, MAX_FOOD_PLACEMENT_ATTEMPTS};
pub use settings::{SnakeSessionSettings, INITIAL_SNAKE_LENGTH};
pub use snake::Snake;
pub use types::{Direction, GameEndReason, Point};
