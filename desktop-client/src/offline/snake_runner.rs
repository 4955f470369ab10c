use tokio::sync::mpsc;

use common::engine::{DriverCommand, DriverHandle, SnakeDriver};
use common::games::SessionRng;
use common::games::snake::{SnakeGameState, SnakeSessionSettings};
use common::log;

use crate::state::SharedState;
use super::LocalBroadcaster;

/// Starts the driver on its own single-threaded runtime and returns the input handle.
pub fn spawn_snake_game(
    shared_state: SharedState,
    settings: SnakeSessionSettings,
    seed: u64,
) -> DriverHandle {
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                log!("Failed to start game runtime: {}", e);
                return;
            }
        };
        runtime.block_on(run_snake_game(shared_state, settings, seed, command_rx));
    });

    DriverHandle::new(command_tx)
}

pub async fn run_snake_game(
    shared_state: SharedState,
    settings: SnakeSessionSettings,
    seed: u64,
    command_rx: mpsc::UnboundedReceiver<DriverCommand>,
) -> SnakeGameState {
    let game_state = SnakeGameState::new(settings, SessionRng::new(seed));
    let broadcaster = LocalBroadcaster::new(shared_state);
    SnakeDriver::new(game_state, broadcaster).run(command_rx).await
}
