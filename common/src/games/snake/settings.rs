use std::time::Duration;

pub const INITIAL_SNAKE_LENGTH: usize = 3;

const MIN_GRID_SIZE: usize = 5;
const MAX_GRID_SIZE: usize = 100;
const MIN_TICK_INTERVAL_FLOOR: Duration = Duration::from_millis(10);
const MAX_TICK_INTERVAL: Duration = Duration::from_millis(5000);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeSessionSettings {
    /// Cells per side of the square grid.
    pub grid_size: usize,
    pub initial_tick_interval: Duration,
    /// How much faster each eaten food makes the game.
    pub speed_step: Duration,
    pub min_tick_interval: Duration,
    pub food_value: u32,
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            grid_size: 20,
            initial_tick_interval: Duration::from_millis(150),
            speed_step: Duration::from_millis(5),
            min_tick_interval: Duration::from_millis(50),
            food_value: 10,
        }
    }
}

impl SnakeSessionSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(format!(
                "Grid size must be between {} and {}",
                MIN_GRID_SIZE, MAX_GRID_SIZE
            ));
        }
        if self.min_tick_interval < MIN_TICK_INTERVAL_FLOOR {
            return Err(format!(
                "Minimum tick interval must be at least {}ms",
                MIN_TICK_INTERVAL_FLOOR.as_millis()
            ));
        }
        if self.initial_tick_interval > MAX_TICK_INTERVAL {
            return Err(format!(
                "Initial tick interval must not exceed {}ms",
                MAX_TICK_INTERVAL.as_millis()
            ));
        }
        if self.initial_tick_interval < self.min_tick_interval {
            return Err("Initial tick interval must not be below the minimum tick interval".to_string());
        }
        if self.food_value == 0 {
            return Err("Food value must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Interval after one more food has been eaten, never below the floor.
    pub fn next_tick_interval(&self, current: Duration) -> Duration {
        current
            .saturating_sub(self.speed_step)
            .max(self.min_tick_interval)
    }
}
