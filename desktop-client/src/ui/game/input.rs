use common::games::snake::Direction;
use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Turn(Direction),
    Restart,
}

const WATCHED_KEYS: [egui::Key; 9] = [
    egui::Key::ArrowUp,
    egui::Key::ArrowDown,
    egui::Key::ArrowLeft,
    egui::Key::ArrowRight,
    egui::Key::W,
    egui::Key::S,
    egui::Key::A,
    egui::Key::D,
    egui::Key::Space,
];

/// Space only restarts once the game is over.
pub fn action_for_key(key: egui::Key, game_over: bool) -> Option<InputAction> {
    match key {
        egui::Key::ArrowUp | egui::Key::W => Some(InputAction::Turn(Direction::Up)),
        egui::Key::ArrowDown | egui::Key::S => Some(InputAction::Turn(Direction::Down)),
        egui::Key::ArrowLeft | egui::Key::A => Some(InputAction::Turn(Direction::Left)),
        egui::Key::ArrowRight | egui::Key::D => Some(InputAction::Turn(Direction::Right)),
        egui::Key::Space if game_over => Some(InputAction::Restart),
        _ => None,
    }
}

pub fn collect_actions(ctx: &egui::Context, game_over: bool) -> Vec<InputAction> {
    ctx.input(|i| {
        WATCHED_KEYS
            .iter()
            .filter(|key| i.key_pressed(**key))
            .filter_map(|key| action_for_key(*key, game_over))
            .collect()
    })
}
