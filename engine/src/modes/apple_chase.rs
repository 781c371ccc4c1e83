use crate::game::apple::Apple;
use crate::game::chase::select_direction;
use crate::game::grid::{Direction, FieldSize};
use crate::game::obstacles::ObstacleField;
use crate::game::resolver::{resolve_move, MoveOutcome};
use crate::game::rng::SessionRng;
use crate::game::snake::{Snake, SPAWN_HEAD, SPAWN_LENGTH};
use crate::settings::GameSettings;

use super::{PlayerSlot, SessionEvent, SessionStatus, TickReport};

/// Role-reversed mode: the player steers the apple, the snake hunts it.
pub struct AppleChaseSession {
    field_size: FieldSize,
    obstacles: ObstacleField,
    snake: Snake,
    apple: Apple,
    apple_direction: Direction,
    rng: SessionRng,
}

impl AppleChaseSession {
    pub fn new(settings: &GameSettings, mut rng: SessionRng) -> Self {
        let obstacles = ObstacleField::generate(settings, &mut rng);
        let snake = Snake::spawn(SPAWN_HEAD, Direction::Right, SPAWN_LENGTH);
        let apple = Apple::spawn_off_obstacles(&obstacles, &mut rng);
        Self {
            field_size: settings.field_size(),
            obstacles,
            snake,
            apple,
            apple_direction: Direction::Right,
            rng,
        }
    }

    pub fn set_apple_direction(&mut self, direction: Direction) {
        self.apple_direction = direction;
    }

    pub fn tick(&mut self) -> TickReport {
        // The apple slides continuously in its current direction; the field
        // edge and obstacles just stop it for the tick. It moves before the
        // snake so the chase targets the fresh position.
        if let Some(next) = self.field_size.step(self.apple.pos, self.apple_direction)
            && !self.obstacles.contains(next)
        {
            self.apple.pos = next;
        }

        let mut events = Vec::new();

        let Some(direction) =
            select_direction(&self.snake, self.apple.pos, &self.obstacles, self.field_size)
        else {
            // Boxed in on all four sides: the snake holds this tick.
            return TickReport {
                status: SessionStatus::Running,
                events,
            };
        };

        let outcome = resolve_move(
            &mut self.snake,
            direction,
            &self.obstacles,
            Some(self.apple.pos),
            self.field_size,
        );

        match outcome {
            MoveOutcome::Fatal(reason) => {
                events.push(SessionEvent::Died {
                    who: PlayerSlot::One,
                    reason,
                });
                return TickReport {
                    status: SessionStatus::Over,
                    events,
                };
            }
            MoveOutcome::Moved { ate_apple: true } => {
                events.push(SessionEvent::AppleEaten {
                    by: PlayerSlot::One,
                });
                self.apple = Apple::spawn_off_obstacles(&self.obstacles, &mut self.rng);
            }
            MoveOutcome::Moved { ate_apple: false } | MoveOutcome::Paused => {}
        }

        TickReport {
            status: SessionStatus::Running,
            events,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn obstacles(&self) -> &ObstacleField {
        &self.obstacles
    }
}
