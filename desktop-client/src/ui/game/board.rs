use common::games::snake::{GameEndReason, GameSnapshot, Point};
use eframe::egui;

pub const BACKGROUND_COLOR: egui::Color32 = egui::Color32::from_rgb(0xF5, 0xF5, 0xF5);
pub const HEAD_COLOR: egui::Color32 = egui::Color32::from_rgb(0x2E, 0x7D, 0x32);
pub const BODY_COLOR: egui::Color32 = egui::Color32::from_rgb(0x4C, 0xAF, 0x50);
pub const FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(0xF4, 0x43, 0x36);

/// Gap left between neighbouring snake cells, in points.
const CELL_GAP: f32 = 1.0;

pub fn cell_size(board: egui::Rect, grid_size: usize) -> egui::Vec2 {
    let cells = grid_size.max(1) as f32;
    egui::vec2(board.width() / cells, board.height() / cells)
}

pub fn cell_rect(board: egui::Rect, grid_size: usize, cell: Point) -> egui::Rect {
    let size = cell_size(board, grid_size);
    let min = egui::pos2(
        board.min.x + cell.x as f32 * size.x,
        board.min.y + cell.y as f32 * size.y,
    );
    egui::Rect::from_min_size(min, size - egui::Vec2::splat(CELL_GAP))
}

/// Centre and radius of the food disc for `cell`.
pub fn food_circle(board: egui::Rect, grid_size: usize, cell: Point) -> (egui::Pos2, f32) {
    let size = cell_size(board, grid_size);
    let center = egui::pos2(
        board.min.x + cell.x as f32 * size.x + size.x / 2.0,
        board.min.y + cell.y as f32 * size.y + size.y / 2.0,
    );
    (center, size.x / 2.0)
}

/// Food cell to draw. A board-full ending leaves the food under the head, so none is shown.
pub fn visible_food(snapshot: &GameSnapshot) -> Option<Point> {
    match snapshot.game_end_reason {
        Some(GameEndReason::BoardFull) => None,
        _ => Some(snapshot.food),
    }
}

pub fn paint_board(painter: &egui::Painter, board: egui::Rect, snapshot: &GameSnapshot) {
    painter.rect_filled(board, 0.0, BACKGROUND_COLOR);

    for (i, segment) in snapshot.snake.iter().enumerate() {
        let color = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
        painter.rect_filled(cell_rect(board, snapshot.grid_size, *segment), 0.0, color);
    }

    if let Some(food) = visible_food(snapshot) {
        let (center, radius) = food_circle(board, snapshot.grid_size, food);
        painter.circle_filled(center, radius, FOOD_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(400.0, 400.0))
    }

    #[test]
    fn test_cell_size_divides_board() {
        assert_eq!(cell_size(board(), 20), egui::vec2(20.0, 20.0));
    }

    #[test]
    fn test_cell_rect_is_offset_and_gapped() {
        let rect = cell_rect(board(), 20, Point::new(2, 3));
        assert_eq!(rect.min, egui::pos2(50.0, 80.0));
        assert_eq!(rect.size(), egui::vec2(19.0, 19.0));
    }

    #[test]
    fn test_last_cell_stays_inside_board() {
        let rect = cell_rect(board(), 20, Point::new(19, 19));
        assert!(board().contains_rect(rect));
    }

    fn snapshot_with(game_end_reason: Option<GameEndReason>) -> GameSnapshot {
        GameSnapshot {
            grid_size: 5,
            snake: vec![Point::new(2, 2), Point::new(1, 2)],
            food: Point::new(2, 2),
            direction: common::games::snake::Direction::Right,
            score: 10,
            tick_interval: std::time::Duration::from_millis(145),
            tick: 1,
            game_end_reason,
        }
    }

    #[test]
    fn test_food_hidden_after_board_full() {
        assert_eq!(visible_food(&snapshot_with(Some(GameEndReason::BoardFull))), None);
        assert_eq!(
            visible_food(&snapshot_with(Some(GameEndReason::WallCollision))),
            Some(Point::new(2, 2))
        );
        assert_eq!(visible_food(&snapshot_with(None)), Some(Point::new(2, 2)));
    }

    #[test]
    fn test_food_circle_is_centered_in_cell() {
        let (center, radius) = food_circle(board(), 20, Point::new(0, 1));
        assert_eq!(center, egui::pos2(20.0, 50.0));
        assert_eq!(radius, 10.0);
    }
}
