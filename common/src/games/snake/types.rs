#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Neighbour one cell away, or `None` when that would leave a `grid_size` square grid.
    pub fn step(&self, direction: Direction, grid_size: usize) -> Option<Point> {
        match direction {
            Direction::Up => self.y.checked_sub(1).map(|y| Point::new(self.x, y)),
            Direction::Down => (self.y + 1 < grid_size).then(|| Point::new(self.x, self.y + 1)),
            Direction::Left => self.x.checked_sub(1).map(|x| Point::new(x, self.y)),
            Direction::Right => (self.x + 1 < grid_size).then(|| Point::new(self.x + 1, self.y)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEndReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell, so no food can be placed.
    BoardFull,
}

impl std::fmt::Display for GameEndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            GameEndReason::WallCollision => "hit the wall",
            GameEndReason::SelfCollision => "ran into itself",
            GameEndReason::BoardFull => "filled the board",
        };
        f.write_str(text)
    }
}
