use std::future::Future;

use crate::games::snake::{GameEndReason, GameSnapshot};

/// Render side of the driver: receives a snapshot after every tick and once per (re)start.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOverNotification {
    pub score: u32,
    pub reason: GameEndReason,
    pub ticks: u64,
    pub snake_length: usize,
}
