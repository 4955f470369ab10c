use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use crate::games::snake::{Direction, SnakeGameState, TickOutcome};
use crate::log;
use super::{GameBroadcaster, GameOverNotification};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverCommand {
    Turn(Direction),
    Restart,
    Shutdown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Stopped,
}

/// Cloneable input side of a running driver.
#[derive(Clone)]
pub struct DriverHandle {
    command_tx: mpsc::UnboundedSender<DriverCommand>,
}

impl DriverHandle {
    pub fn new(command_tx: mpsc::UnboundedSender<DriverCommand>) -> Self {
        Self { command_tx }
    }

    /// Returns `false` once the driver has exited.
    pub fn send(&self, command: DriverCommand) -> bool {
        self.command_tx.send(command).is_ok()
    }

    pub fn turn(&self, direction: Direction) -> bool {
        self.send(DriverCommand::Turn(direction))
    }

    pub fn restart(&self) -> bool {
        self.send(DriverCommand::Restart)
    }

    pub fn shutdown(&self) -> bool {
        self.send(DriverCommand::Shutdown)
    }
}

/// Owns the game state and advances it on a timer whose period tracks the game speed.
pub struct SnakeDriver<B: GameBroadcaster> {
    game_state: SnakeGameState,
    broadcaster: B,
    state: DriverState,
}

fn arm_ticker(period: Duration) -> Interval {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

fn state_for(game_state: &SnakeGameState) -> DriverState {
    if game_state.is_game_over() {
        DriverState::Stopped
    } else {
        DriverState::Running
    }
}

impl<B: GameBroadcaster> SnakeDriver<B> {
    pub fn new(game_state: SnakeGameState, broadcaster: B) -> Self {
        let state = state_for(&game_state);
        Self {
            game_state,
            broadcaster,
            state,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Runs until `Shutdown` arrives or every command sender is dropped, then hands the state back.
    pub async fn run(
        mut self,
        mut command_rx: mpsc::UnboundedReceiver<DriverCommand>,
    ) -> SnakeGameState {
        let mut ticker = arm_ticker(self.game_state.tick_interval());
        self.broadcaster
            .broadcast_state(self.game_state.snapshot())
            .await;

        loop {
            tokio::select! {
                _ = ticker.tick(), if self.state == DriverState::Running => {
                    if let Some(period) = self.on_tick().await {
                        ticker = arm_ticker(period);
                    }
                }
                command = command_rx.recv() => {
                    match command {
                        Some(DriverCommand::Turn(direction)) => {
                            self.game_state.set_pending_direction(direction);
                        }
                        Some(DriverCommand::Restart) => {
                            self.game_state.reset();
                            self.state = state_for(&self.game_state);
                            ticker = arm_ticker(self.game_state.tick_interval());
                            self.broadcaster
                                .broadcast_state(self.game_state.snapshot())
                                .await;
                        }
                        Some(DriverCommand::Shutdown) | None => break,
                    }
                }
            }
        }

        log!(
            "Driver shut down at tick {} with score {}",
            self.game_state.tick(),
            self.game_state.score()
        );
        self.game_state
    }

    /// Returns the new period when this tick changed the speed.
    async fn on_tick(&mut self) -> Option<Duration> {
        let previous_interval = self.game_state.tick_interval();
        let outcome = self.game_state.update();

        self.broadcaster
            .broadcast_state(self.game_state.snapshot())
            .await;

        match outcome {
            TickOutcome::Moved | TickOutcome::Ate => {
                let current_interval = self.game_state.tick_interval();
                (current_interval != previous_interval).then_some(current_interval)
            }
            TickOutcome::GameOver(reason) => {
                self.state = DriverState::Stopped;
                let notification = GameOverNotification {
                    score: self.game_state.score(),
                    reason,
                    ticks: self.game_state.tick(),
                    snake_length: self.game_state.snake().len(),
                };
                self.broadcaster.broadcast_game_over(notification).await;
                None
            }
            TickOutcome::Finished => {
                self.state = DriverState::Stopped;
                None
            }
        }
    }
}
