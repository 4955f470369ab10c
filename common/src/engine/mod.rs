mod broadcaster;
mod driver;

pub use broadcaster::{GameBroadcaster, GameOverNotification};
pub use driver::{DriverCommand, DriverHandle, DriverState, SnakeDriver};
