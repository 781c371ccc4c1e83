use std::collections::HashSet;

use super::grid::{FieldSize, Point};
use super::rng::SessionRng;
use crate::settings::GameSettings;

/// Static obstacle layout for one session. Generated once at session start
/// and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct ObstacleField {
    cells: HashSet<Point>,
    field_size: FieldSize,
}

impl ObstacleField {
    /// Scatters short wall segments over the field. Each segment start is
    /// rejection-sampled until it falls outside the top-left spawn-safe
    /// square; extension cells are not re-checked and may reach back into it.
    /// Cells that would extend past the field edge are dropped, so a segment
    /// can come out shorter than rolled. Overlapping segments collapse into
    /// the same cells.
    pub fn generate(settings: &GameSettings, rng: &mut SessionRng) -> Self {
        let field_size = settings.field_size();
        let mut cells = HashSet::new();

        for _ in 0..settings.obstacle_segments {
            let start = loop {
                let candidate = Point::new(
                    rng.random_range(0..field_size.width),
                    rng.random_range(0..field_size.height),
                );
                if candidate.x >= settings.safe_zone || candidate.y >= settings.safe_zone {
                    break candidate;
                }
            };

            let horizontal = rng.random_bool();
            let length = rng.random_range(1..=settings.max_segment_length);

            for i in 0..length {
                let cell = if horizontal {
                    Point::new(start.x + i, start.y)
                } else {
                    Point::new(start.x, start.y + i)
                };
                if field_size.contains(cell) {
                    cells.insert(cell);
                }
            }
        }

        Self { cells, field_size }
    }

    /// Fixed layout, for tests and scripted scenarios.
    pub fn from_cells(cells: impl IntoIterator<Item = Point>, field_size: FieldSize) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            field_size,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.cells.contains(&point)
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Uniformly random cell that is not an obstacle. Rejection-samples the
    /// whole field; obstacle coverage is a small fraction of the field, so
    /// this terminates quickly in practice.
    pub fn random_free_cell(&self, rng: &mut SessionRng) -> Point {
        loop {
            let candidate = Point::new(
                rng.random_range(0..self.field_size.width),
                rng.random_range(0..self.field_size.height),
            );
            if !self.cells.contains(&candidate) {
                return candidate;
            }
        }
    }
}
