use std::collections::VecDeque;

use super::grid::{Direction, Point};

/// Where a freshly spawned player snake sits: head at (3,5) pointing right,
/// well inside the spawn-safe corner.
pub const SPAWN_HEAD: Point = Point { x: 3, y: 5 };
pub const SPAWN_LENGTH: usize = 3;

/// One snake body, head first. The body is a plain deque rather than a
/// deque-plus-set pair: the competitive mode lets bodies overlap themselves
/// and each other, so cell occupancy is not a set and membership checks scan
/// the (short) body instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Point>,
    pub direction: Direction,
}

impl Snake {
    /// Builds a snake whose body trails opposite to `direction` from `head`.
    /// The caller is responsible for keeping the whole body on the field.
    pub fn spawn(head: Point, direction: Direction, length: usize) -> Self {
        let mut body = VecDeque::with_capacity(length);
        body.push_back(head);

        for i in 1..length {
            let prev = body[i - 1];
            let segment = match direction {
                Direction::Up => Point::new(prev.x, prev.y + 1),
                Direction::Down => Point::new(prev.x, prev.y - 1),
                Direction::Left => Point::new(prev.x + 1, prev.y),
                Direction::Right => Point::new(prev.x - 1, prev.y),
            };
            body.push_back(segment);
        }

        Self { body, direction }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("snake body is never empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    /// True when `point` lies on the body behind the head. Moving onto the
    /// current tail cell counts: the tail only vacates after the new head is
    /// placed.
    pub fn hits_body(&self, point: Point) -> bool {
        self.body.iter().skip(1).any(|&cell| cell == point)
    }

    pub(crate) fn push_head(&mut self, point: Point) {
        self.body.push_front(point);
    }

    pub(crate) fn pop_tail(&mut self) {
        self.body.pop_back();
    }
}
