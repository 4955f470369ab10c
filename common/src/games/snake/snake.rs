use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

/// Body is head-first; `body_set` mirrors it for occupancy checks.
#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub body_set: HashSet<Point>,
}

impl Snake {
    /// Lays `length` segments from `head` backwards, away from `direction`.
    /// Stops early at the grid edge; the head is always present.
    pub fn new(head: Point, direction: Direction, length: usize, grid_size: usize) -> Self {
        let behind = direction.opposite();
        let mut body = VecDeque::with_capacity(length);
        body.push_back(head);

        let mut current = head;
        while body.len() < length {
            match current.step(behind, grid_size) {
                Some(next) => {
                    body.push_back(next);
                    current = next;
                }
                None => break,
            }
        }

        Self::from_body(body)
    }

    pub fn from_body(body: impl IntoIterator<Item = Point>) -> Self {
        let body: VecDeque<Point> = body.into_iter().collect();
        let body_set = body.iter().copied().collect();
        Self { body, body_set }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Option<Point> {
        self.body.back().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn push_head(&mut self, head: Point) {
        self.body.push_front(head);
        self.body_set.insert(head);
    }

    pub fn pop_tail(&mut self) -> Option<Point> {
        let tail = self.body.pop_back()?;
        self.body_set.remove(&tail);
        Some(tail)
    }
}
