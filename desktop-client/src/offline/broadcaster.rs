use common::engine::{GameBroadcaster, GameOverNotification};
use common::games::snake::GameSnapshot;
use common::log;

use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: GameSnapshot) {
        self.shared_state.update_snapshot(snapshot);
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        log!(
            "Game over ({}), score {} in {} ticks",
            notification.reason,
            notification.score,
            notification.ticks
        );
        self.shared_state.set_game_over(notification);
    }
}
