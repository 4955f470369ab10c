use common::engine::{DriverHandle, GameOverNotification};
use common::games::snake::{Direction, GameSnapshot};
use eframe::egui;

use crate::state::SharedState;
use super::game::board;
use super::game::input::{self, InputAction};

pub struct SnakeApp {
    shared_state: SharedState,
    driver: DriverHandle,
    board_pixels: f32,
}

impl SnakeApp {
    pub fn new(shared_state: SharedState, driver: DriverHandle, board_pixels: f32) -> Self {
        Self {
            shared_state,
            driver,
            board_pixels,
        }
    }

    fn apply(&self, action: InputAction) {
        match action {
            InputAction::Turn(direction) => {
                self.driver.turn(direction);
            }
            InputAction::Restart => {
                self.driver.restart();
            }
        }
    }

    fn render_board(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        ui.heading(format!("Score: {}", snapshot.score));
        ui.label(format!(
            "Length: {}   Tick interval: {}ms",
            snapshot.snake.len(),
            snapshot.tick_interval.as_millis()
        ));
        ui.add_space(6.0);

        let (response, painter) = ui.allocate_painter(
            egui::Vec2::splat(self.board_pixels),
            egui::Sense::hover(),
        );
        board::paint_board(&painter, response.rect, snapshot);
    }

    fn render_controls(&self, ui: &mut egui::Ui) {
        let button_size = egui::vec2(64.0, 28.0);
        let mut clicked = None;

        ui.vertical_centered(|ui| {
            if ui.add_sized(button_size, egui::Button::new("Up")).clicked() {
                clicked = Some(InputAction::Turn(Direction::Up));
            }
        });
        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() - button_size.x * 3.0).max(0.0) / 2.0);
            if ui.add_sized(button_size, egui::Button::new("Left")).clicked() {
                clicked = Some(InputAction::Turn(Direction::Left));
            }
            if ui.add_sized(button_size, egui::Button::new("Down")).clicked() {
                clicked = Some(InputAction::Turn(Direction::Down));
            }
            if ui.add_sized(button_size, egui::Button::new("Right")).clicked() {
                clicked = Some(InputAction::Turn(Direction::Right));
            }
        });
        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            if ui.button("Restart").clicked() {
                clicked = Some(InputAction::Restart);
            }
            ui.label("Arrow keys or WASD to steer");
        });

        if let Some(action) = clicked {
            self.apply(action);
        }
    }

    fn render_game_over(&self, ctx: &egui::Context, notification: &GameOverNotification) {
        let mut restart = false;

        egui::Window::new("Game Over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(
                        egui::RichText::new(format!("Final Score: {}", notification.score))
                            .color(egui::Color32::RED)
                            .size(24.0),
                    );
                    ui.label(format!("The snake {}.", notification.reason));
                    ui.label(format!(
                        "Length {} after {} ticks",
                        notification.snake_length, notification.ticks
                    ));
                    ui.add_space(10.0);
                    if ui.button("Play Again").clicked() {
                        restart = true;
                    }
                    ui.label("or press Space");
                });
            });

        if restart {
            self.apply(InputAction::Restart);
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            self.driver.shutdown();
        }

        let snapshot = self.shared_state.get_snapshot();
        let game_over = snapshot.as_ref().is_some_and(|s| s.is_game_over());

        for action in input::collect_actions(ctx, game_over) {
            self.apply(action);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| match &snapshot {
                Some(snapshot) => self.render_board(ui, snapshot),
                None => {
                    ui.heading("Starting game...");
                    ui.spinner();
                }
            });
            ui.add_space(10.0);
            self.render_controls(ui);
        });

        if let Some(notification) = self.shared_state.get_game_over() {
            self.render_game_over(ctx, &notification);
        }
    }
}
