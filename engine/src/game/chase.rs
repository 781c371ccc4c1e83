use super::grid::{Direction, FieldSize, Point};
use super::obstacles::ObstacleField;
use super::snake::Snake;

/// Greedy single-step pursuit used by the AI-controlled snake.
///
/// Candidates are ordered by which axis has the larger gap to the target
/// (ties go to the horizontal axis), then the perpendicular axis, then
/// whatever is left in canonical Up/Down/Left/Right order. The first
/// candidate whose target cell is on the field, off the obstacles and off the
/// snake's own body wins. `None` means every direction is blocked and the
/// snake holds its position this tick.
///
/// There is no lookahead: the snake will happily corner itself against its
/// own body or an obstacle pocket.
pub fn select_direction(
    snake: &Snake,
    target: Point,
    obstacles: &ObstacleField,
    field_size: FieldSize,
) -> Option<Direction> {
    let head = snake.head();
    let dx = target.x as i32 - head.x as i32;
    let dy = target.y as i32 - head.y as i32;

    let horizontal = if dx > 0 {
        Some(Direction::Right)
    } else if dx < 0 {
        Some(Direction::Left)
    } else {
        None
    };
    let vertical = if dy > 0 {
        Some(Direction::Down)
    } else if dy < 0 {
        Some(Direction::Up)
    } else {
        None
    };

    let mut candidates: Vec<Direction> = Vec::with_capacity(4);
    if dx.abs() >= dy.abs() {
        candidates.extend(horizontal);
        candidates.extend(vertical);
    } else {
        candidates.extend(vertical);
        candidates.extend(horizontal);
    }
    for direction in Direction::ALL {
        if !candidates.contains(&direction) {
            candidates.push(direction);
        }
    }

    candidates.into_iter().find(|&direction| {
        field_size
            .step(head, direction)
            .is_some_and(|next| !obstacles.contains(next) && !snake.hits_body(next))
    })
}
