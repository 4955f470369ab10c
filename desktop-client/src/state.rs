use std::sync::{Arc, Mutex};

use common::engine::GameOverNotification;
use common::games::snake::GameSnapshot;
use eframe::egui;

/// Latest frame published by the driver plus what the UI needs to wake up on it.
pub struct SharedState {
    snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    game_over: Arc<Mutex<Option<GameOverNotification>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(None)),
            game_over: Arc::new(Mutex::new(None)),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn update_snapshot(&self, snapshot: GameSnapshot) {
        if !snapshot.is_game_over() {
            *self.game_over.lock().unwrap() = None;
        }
        *self.snapshot.lock().unwrap() = Some(snapshot);
        self.request_repaint();
    }

    pub fn get_snapshot(&self) -> Option<GameSnapshot> {
        self.snapshot.lock().unwrap().clone()
    }

    pub fn set_game_over(&self, notification: GameOverNotification) {
        *self.game_over.lock().unwrap() = Some(notification);
        self.request_repaint();
    }

    pub fn get_game_over(&self) -> Option<GameOverNotification> {
        *self.game_over.lock().unwrap()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *self.context.lock().unwrap() = Some(ctx);
    }

    pub fn has_context(&self) -> bool {
        self.context.lock().unwrap().is_some()
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.context.lock().unwrap().as_ref() {
            ctx.request_repaint();
        }
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            snapshot: Arc::clone(&self.snapshot),
            game_over: Arc::clone(&self.game_over),
            context: Arc::clone(&self.context),
        }
    }
}
