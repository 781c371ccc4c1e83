use super::grid::{Direction, FieldSize, Point};
use super::obstacles::ObstacleField;
use super::rng::SessionRng;
use super::snake::Snake;

/// Chance per tick that the apple wanders one cell in snake mode.
pub const WALK_PROBABILITY: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Apple {
    pub pos: Point,
}

impl Apple {
    /// Placement used by the solo modes: any cell off the obstacle layout.
    /// The snake body is deliberately not avoided.
    pub fn spawn_off_obstacles(obstacles: &ObstacleField, rng: &mut SessionRng) -> Self {
        Self {
            pos: obstacles.random_free_cell(rng),
        }
    }

    /// Placement used by the two-player apple race: any cell at all.
    pub fn spawn_anywhere(field_size: FieldSize, rng: &mut SessionRng) -> Self {
        Self {
            pos: Point::new(
                rng.random_range(0..field_size.width),
                rng.random_range(0..field_size.height),
            ),
        }
    }

    /// Snake-mode wandering: half the time the apple tries to sidestep one
    /// cell, taking the first shuffled direction whose target is on the
    /// field and clear of both the snake and the obstacles. No candidate
    /// means it stays put this tick.
    pub fn random_walk(
        &mut self,
        snake: &Snake,
        obstacles: &ObstacleField,
        field_size: FieldSize,
        rng: &mut SessionRng,
    ) {
        if rng.random::<f32>() >= WALK_PROBABILITY {
            return;
        }

        let mut directions = Direction::ALL;
        rng.shuffle(&mut directions);

        for direction in directions {
            let Some(next) = field_size.step(self.pos, direction) else {
                continue;
            };
            if snake.occupies(next) || obstacles.contains(next) {
                continue;
            }
            self.pos = next;
            return;
        }
    }
}
