use std::time::Duration;

use crate::games::SessionRng;
use crate::log;
use super::settings::{SnakeSessionSettings, INITIAL_SNAKE_LENGTH};
use super::snake::Snake;
use super::types::{Direction, GameEndReason, Point};

/// Random draws before food placement falls back to scanning the free cells.
pub const MAX_FOOD_PLACEMENT_ATTEMPTS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    GameOver(GameEndReason),
    /// The game was already over, nothing changed.
    Finished,
}

/// Read-only copy of everything a renderer needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid_size: usize,
    pub snake: Vec<Point>,
    pub food: Point,
    pub direction: Direction,
    pub score: u32,
    pub tick_interval: Duration,
    pub tick: u64,
    pub game_end_reason: Option<GameEndReason>,
}

impl GameSnapshot {
    pub fn is_game_over(&self) -> bool {
        self.game_end_reason.is_some()
    }

    pub fn head(&self) -> Option<Point> {
        self.snake.first().copied()
    }
}

pub struct SnakeGameState {
    settings: SnakeSessionSettings,
    rng: SessionRng,
    snake: Snake,
    food: Point,
    direction: Direction,
    pending_direction: Direction,
    score: u32,
    tick_interval: Duration,
    tick: u64,
    game_end_reason: Option<GameEndReason>,
}

impl SnakeGameState {
    /// `settings` must already pass `SnakeSessionSettings::validate`.
    pub fn new(settings: SnakeSessionSettings, rng: SessionRng) -> Self {
        debug_assert!(settings.validate().is_ok(), "invalid snake settings");
        let tick_interval = settings.initial_tick_interval;
        let mut state = Self {
            settings,
            rng,
            snake: Snake::from_body([Point::new(0, 0)]),
            food: Point::new(0, 0),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            score: 0,
            tick_interval,
            tick: 0,
            game_end_reason: None,
        };
        state.reset();
        state
    }

    /// Starts a fresh run; abandons the current one if it is still going.
    pub fn reset(&mut self) {
        let grid_size = self.settings.grid_size;
        let center = grid_size / 2;

        self.snake = Snake::new(
            Point::new(center, center),
            Direction::Right,
            INITIAL_SNAKE_LENGTH,
            grid_size,
        );
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.tick_interval = self.settings.initial_tick_interval;
        self.tick = 0;
        self.game_end_reason = None;

        if !self.regenerate_food() {
            self.game_end_reason = Some(GameEndReason::BoardFull);
        }

        log!(
            "New game on {}x{} grid (seed {}), food at ({}, {})",
            grid_size,
            grid_size,
            self.rng.seed(),
            self.food.x,
            self.food.y
        );
    }

    /// Queues a turn for the next tick. Reversing into the current direction is ignored.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if self.is_game_over() || direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    pub fn update(&mut self) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Finished;
        }

        self.direction = self.pending_direction;

        let Some(next_head) = self.snake.head().step(self.direction, self.settings.grid_size) else {
            return self.end_game(GameEndReason::WallCollision);
        };

        // Checked against the body before the tail moves, so chasing the tail is fatal too.
        if self.snake.contains(&next_head) {
            return self.end_game(GameEndReason::SelfCollision);
        }

        self.snake.push_head(next_head);
        self.tick += 1;

        if next_head != self.food {
            self.snake.pop_tail();
            return TickOutcome::Moved;
        }

        self.score = self.score.saturating_add(self.settings.food_value);
        self.tick_interval = self.settings.next_tick_interval(self.tick_interval);
        log!(
            "Ate food at ({}, {}). Score: {}, tick interval: {}ms",
            next_head.x,
            next_head.y,
            self.score,
            self.tick_interval.as_millis()
        );

        if !self.regenerate_food() {
            return self.end_game(GameEndReason::BoardFull);
        }
        TickOutcome::Ate
    }

    /// Moves the food to a random free cell. Returns `false` when the snake covers the grid.
    pub fn regenerate_food(&mut self) -> bool {
        match self.find_free_cell() {
            Some(cell) => {
                self.food = cell;
                true
            }
            None => false,
        }
    }

    fn find_free_cell(&mut self) -> Option<Point> {
        let grid_size = self.settings.grid_size;

        for _ in 0..MAX_FOOD_PLACEMENT_ATTEMPTS {
            let candidate = Point::new(
                self.rng.random_range(0..grid_size),
                self.rng.random_range(0..grid_size),
            );
            if !self.snake.contains(&candidate) {
                return Some(candidate);
            }
        }

        let free_cells: Vec<Point> = (0..grid_size)
            .flat_map(|y| (0..grid_size).map(move |x| Point::new(x, y)))
            .filter(|cell| !self.snake.contains(cell))
            .collect();

        if free_cells.is_empty() {
            return None;
        }
        Some(free_cells[self.rng.random_range(0..free_cells.len())])
    }

    fn end_game(&mut self, reason: GameEndReason) -> TickOutcome {
        self.game_end_reason = Some(reason);
        log!(
            "Game over: snake {} after {} ticks. Final score: {}",
            reason,
            self.tick,
            self.score
        );
        TickOutcome::GameOver(reason)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_end_reason.is_some()
    }

    pub fn settings(&self) -> &SnakeSessionSettings {
        &self.settings
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid_size: self.settings.grid_size,
            snake: self.snake.body.iter().copied().collect(),
            food: self.food,
            direction: self.direction,
            score: self.score,
            tick_interval: self.tick_interval,
            tick: self.tick,
            game_end_reason: self.game_end_reason,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_layout(
        settings: SnakeSessionSettings,
        seed: u64,
        body: &[(usize, usize)],
        direction: Direction,
        food: (usize, usize),
    ) -> Self {
        let mut state = Self::new(settings, SessionRng::new(seed));
        state.snake = Snake::from_body(body.iter().map(|&(x, y)| Point::new(x, y)));
        state.direction = direction;
        state.pending_direction = direction;
        state.food = Point::new(food.0, food.1);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(state: &SnakeGameState) -> Vec<(usize, usize)> {
        state.snake().body.iter().map(|p| (p.x, p.y)).collect()
    }

    fn default_layout(body: &[(usize, usize)], direction: Direction, food: (usize, usize)) -> SnakeGameState {
        SnakeGameState::with_layout(SnakeSessionSettings::default(), 42, body, direction, food)
    }

    /// Cells of a 5x5 grid in boustrophedon order; consecutive cells are adjacent.
    fn serpentine_5x5() -> Vec<(usize, usize)> {
        (0..5)
            .flat_map(|y| {
                let row: Vec<(usize, usize)> = if y % 2 == 0 {
                    (0..5).map(|x| (x, y)).collect()
                } else {
                    (0..5).rev().map(|x| (x, y)).collect()
                };
                row
            })
            .collect()
    }

    #[test]
    fn test_new_game_initial_state() {
        let state = SnakeGameState::new(SnakeSessionSettings::default(), SessionRng::new(1));
        assert_eq!(body_of(&state), vec![(10, 10), (9, 10), (8, 10)]);
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.pending_direction(), Direction::Right);
        assert_eq!(state.score(), 0);
        assert_eq!(state.tick_interval(), Duration::from_millis(150));
        assert_eq!(state.tick(), 0);
        assert!(!state.is_game_over());
        assert!(!state.snake().contains(&state.food()));
        assert!(state.food().x < 20 && state.food().y < 20);
    }

    #[test]
    #[should_panic(expected = "invalid snake settings")]
    fn test_new_rejects_invalid_settings() {
        let settings = SnakeSessionSettings { grid_size: 0, ..Default::default() };
        SnakeGameState::new(settings, SessionRng::new(1));
    }

    #[test]
    fn test_move_without_food_keeps_length() {
        let mut state = default_layout(&[(10, 10), (9, 10), (8, 10)], Direction::Right, (0, 0));
        assert_eq!(state.update(), TickOutcome::Moved);
        assert_eq!(body_of(&state), vec![(11, 10), (10, 10), (9, 10)]);
        assert!(!state.snake().contains(&Point::new(8, 10)));
        assert_eq!(state.score(), 0);
        assert_eq!(state.tick(), 1);
    }

    #[test]
    fn test_eating_food_grows_and_scores() {
        let mut state = default_layout(&[(10, 10), (9, 10), (8, 10)], Direction::Right, (11, 10));
        assert_eq!(state.update(), TickOutcome::Ate);
        assert_eq!(body_of(&state), vec![(11, 10), (10, 10), (9, 10), (8, 10)]);
        assert_eq!(state.score(), 10);
        assert_eq!(state.tick_interval(), Duration::from_millis(145));
        assert_ne!(state.food(), Point::new(11, 10));
        assert!(!state.snake().contains(&state.food()));
    }

    #[test]
    fn test_wall_collision_leaves_snake_untouched() {
        let mut state = default_layout(&[(0, 5), (1, 5), (2, 5)], Direction::Left, (10, 10));
        let before = body_of(&state);
        assert_eq!(
            state.update(),
            TickOutcome::GameOver(GameEndReason::WallCollision)
        );
        assert!(state.is_game_over());
        assert_eq!(body_of(&state), before);
        assert_eq!(state.score(), 0);
        assert_eq!(state.tick(), 0);
    }

    #[test]
    fn test_wall_collision_on_far_edges() {
        let mut bottom = default_layout(&[(4, 19), (4, 18), (4, 17)], Direction::Down, (0, 0));
        assert_eq!(
            bottom.update(),
            TickOutcome::GameOver(GameEndReason::WallCollision)
        );

        let mut right = default_layout(&[(19, 4), (18, 4), (17, 4)], Direction::Right, (0, 0));
        assert_eq!(
            right.update(),
            TickOutcome::GameOver(GameEndReason::WallCollision)
        );

        let mut top = default_layout(&[(4, 0), (4, 1), (4, 2)], Direction::Up, (0, 0));
        assert_eq!(
            top.update(),
            TickOutcome::GameOver(GameEndReason::WallCollision)
        );
    }

    #[test]
    fn test_self_collision_with_body() {
        let mut state = default_layout(
            &[(5, 5), (5, 6), (6, 6), (6, 5), (6, 4)],
            Direction::Up,
            (0, 0),
        );
        assert!(state.set_pending_direction(Direction::Right));
        let before = body_of(&state);
        assert_eq!(
            state.update(),
            TickOutcome::GameOver(GameEndReason::SelfCollision)
        );
        assert_eq!(body_of(&state), before);
    }

    #[test]
    fn test_moving_onto_current_tail_is_a_collision() {
        // The tail would vacate (6, 5) this tick, but the check runs against the pre-move body.
        let mut state = default_layout(
            &[(5, 5), (5, 6), (6, 6), (6, 5)],
            Direction::Up,
            (0, 0),
        );
        assert!(state.set_pending_direction(Direction::Right));
        assert_eq!(
            state.update(),
            TickOutcome::GameOver(GameEndReason::SelfCollision)
        );
        assert_eq!(body_of(&state), vec![(5, 5), (5, 6), (6, 6), (6, 5)]);
    }

    #[test]
    fn test_pending_direction_applies_on_next_tick() {
        let mut state = default_layout(&[(5, 5), (4, 5), (3, 5)], Direction::Left, (0, 0));
        assert!(state.set_pending_direction(Direction::Down));
        assert_eq!(state.direction(), Direction::Left);
        assert_eq!(state.update(), TickOutcome::Moved);
        assert_eq!(state.direction(), Direction::Down);
        assert_eq!(state.snake().head(), Point::new(5, 6));
    }

    #[test]
    fn test_reverse_request_is_ignored() {
        let mut state = default_layout(&[(10, 10), (9, 10), (8, 10)], Direction::Right, (0, 0));
        assert!(!state.set_pending_direction(Direction::Left));
        assert_eq!(state.pending_direction(), Direction::Right);
        state.update();
        assert_eq!(state.snake().head(), Point::new(11, 10));
    }

    #[test]
    fn test_reverse_checked_against_current_not_pending() {
        let mut state = default_layout(&[(10, 10), (9, 10), (8, 10)], Direction::Right, (0, 0));
        assert!(state.set_pending_direction(Direction::Up));
        assert!(!state.set_pending_direction(Direction::Left));
        assert_eq!(state.pending_direction(), Direction::Up);
    }

    #[test]
    fn test_last_valid_request_wins() {
        let mut state = default_layout(&[(10, 10), (9, 10), (8, 10)], Direction::Right, (0, 0));
        assert!(state.set_pending_direction(Direction::Up));
        assert!(state.set_pending_direction(Direction::Down));
        state.update();
        assert_eq!(state.snake().head(), Point::new(10, 11));
    }

    #[test]
    fn test_speed_is_floored() {
        let settings = SnakeSessionSettings {
            initial_tick_interval: Duration::from_millis(55),
            speed_step: Duration::from_millis(10),
            min_tick_interval: Duration::from_millis(50),
            ..Default::default()
        };
        let mut state = SnakeGameState::with_layout(
            settings,
            3,
            &[(10, 10), (9, 10), (8, 10)],
            Direction::Right,
            (11, 10),
        );
        assert_eq!(state.update(), TickOutcome::Ate);
        assert_eq!(state.tick_interval(), Duration::from_millis(50));

        state.food = Point::new(12, 10);
        assert_eq!(state.update(), TickOutcome::Ate);
        assert_eq!(state.tick_interval(), Duration::from_millis(50));
        assert_eq!(state.score(), 20);
    }

    #[test]
    fn test_update_after_game_over_is_noop() {
        let mut state = default_layout(&[(0, 5), (1, 5), (2, 5)], Direction::Left, (10, 10));
        state.update();
        let snapshot = state.snapshot();
        assert_eq!(state.update(), TickOutcome::Finished);
        assert_eq!(state.snapshot(), snapshot);
        assert!(!state.set_pending_direction(Direction::Up));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = default_layout(&[(10, 10), (9, 10), (8, 10)], Direction::Right, (11, 10));
        state.update();
        state.set_pending_direction(Direction::Up);
        for _ in 0..20 {
            state.update();
        }
        assert!(state.is_game_over());

        state.reset();
        assert_eq!(body_of(&state), vec![(10, 10), (9, 10), (8, 10)]);
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.pending_direction(), Direction::Right);
        assert_eq!(state.score(), 0);
        assert_eq!(state.tick_interval(), Duration::from_millis(150));
        assert_eq!(state.tick(), 0);
        assert!(!state.is_game_over());
        assert!(!state.snake().contains(&state.food()));
    }

    #[test]
    fn test_reset_mid_game_abandons_the_run() {
        let mut state = default_layout(&[(10, 10), (9, 10), (8, 10)], Direction::Right, (11, 10));
        assert_eq!(state.update(), TickOutcome::Ate);
        state.food = Point::new(0, 0);
        assert!(state.set_pending_direction(Direction::Down));
        assert_eq!(state.update(), TickOutcome::Moved);
        assert_eq!(state.score(), 10);
        assert_eq!(state.tick_interval(), Duration::from_millis(145));
        assert!(!state.is_game_over());

        state.reset();
        assert_eq!(body_of(&state), vec![(10, 10), (9, 10), (8, 10)]);
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.pending_direction(), Direction::Right);
        assert_eq!(state.score(), 0);
        assert_eq!(state.tick_interval(), Duration::from_millis(150));
        assert_eq!(state.tick(), 0);
        assert!(!state.is_game_over());
        assert!(!state.snake().contains(&state.food()));

        state.update();
        assert_eq!(state.snake().head(), Point::new(11, 10));
    }

    #[test]
    fn test_regenerate_food_finds_last_free_cell() {
        let path = serpentine_5x5();
        let settings = SnakeSessionSettings { grid_size: 5, ..Default::default() };
        let body: Vec<(usize, usize)> = path[..24].iter().rev().copied().collect();
        let mut state = SnakeGameState::with_layout(settings, 9, &body, Direction::Right, (0, 0));

        assert!(state.regenerate_food());
        assert_eq!(state.food(), Point::new(4, 4));
    }

    #[test]
    fn test_filling_the_board_ends_the_game() {
        let path = serpentine_5x5();
        let settings = SnakeSessionSettings { grid_size: 5, ..Default::default() };
        let body: Vec<(usize, usize)> = path[..24].iter().rev().copied().collect();
        let mut state = SnakeGameState::with_layout(settings, 9, &body, Direction::Right, (4, 4));

        assert_eq!(
            state.update(),
            TickOutcome::GameOver(GameEndReason::BoardFull)
        );
        assert_eq!(state.snake().len(), 25);
        assert_eq!(state.score(), 10);
    }

    #[test]
    fn test_random_play_keeps_invariants() {
        let settings = SnakeSessionSettings::default();

        for seed in 0..20 {
            let mut state = SnakeGameState::new(settings.clone(), SessionRng::new(seed));
            let mut steering = SessionRng::new(seed + 1000);

            for _ in 0..300 {
                let turn = Direction::ALL[steering.random_range(0..4usize)];
                state.set_pending_direction(turn);

                let before = state.snapshot();
                let outcome = state.update();
                let after = state.snapshot();

                match outcome {
                    TickOutcome::Moved => {
                        assert_eq!(after.snake.len(), before.snake.len());
                        assert_eq!(after.snake[1..], before.snake[..before.snake.len() - 1]);
                        assert!(!after.snake.contains(before.snake.last().unwrap()));
                        assert_eq!(after.score, before.score);
                    }
                    TickOutcome::Ate => {
                        assert_eq!(after.snake.len(), before.snake.len() + 1);
                        assert_eq!(after.snake[0], before.food);
                        assert_eq!(after.score, before.score + settings.food_value);
                        assert_eq!(
                            after.tick_interval,
                            settings.next_tick_interval(before.tick_interval)
                        );
                        assert!(!after.snake.contains(&after.food));
                    }
                    TickOutcome::GameOver(_) => {
                        assert_eq!(after.snake, before.snake);
                        assert_eq!(after.score, before.score);
                        break;
                    }
                    TickOutcome::Finished => unreachable!("game over ends the loop"),
                }

                let head = after.snake[0];
                let expected_head = before.snake[0].step(after.direction, settings.grid_size);
                assert_eq!(Some(head), expected_head);

                let unique: std::collections::HashSet<_> = after.snake.iter().collect();
                assert_eq!(unique.len(), after.snake.len());
                for pair in after.snake.windows(2) {
                    let dx = pair[0].x.abs_diff(pair[1].x);
                    let dy = pair[0].y.abs_diff(pair[1].y);
                    assert_eq!(dx + dy, 1);
                }
            }
        }
    }
}
