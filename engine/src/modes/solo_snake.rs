use crate::game::apple::Apple;
use crate::game::grid::{Direction, FieldSize};
use crate::game::obstacles::ObstacleField;
use crate::game::resolver::{resolve_move, MoveOutcome};
use crate::game::rng::SessionRng;
use crate::game::snake::{Snake, SPAWN_HEAD, SPAWN_LENGTH};
use crate::settings::GameSettings;

use super::{PlayerSlot, SessionEvent, SessionStatus, TickReport};

/// Classic mode: the player drives the snake, the apple wanders.
pub struct SoloSnakeSession {
    field_size: FieldSize,
    obstacles: ObstacleField,
    snake: Snake,
    apple: Apple,
    rng: SessionRng,
}

impl SoloSnakeSession {
    pub fn new(settings: &GameSettings, mut rng: SessionRng) -> Self {
        let obstacles = ObstacleField::generate(settings, &mut rng);
        let snake = Snake::spawn(SPAWN_HEAD, Direction::Right, SPAWN_LENGTH);
        let apple = Apple::spawn_off_obstacles(&obstacles, &mut rng);
        Self {
            field_size: settings.field_size(),
            obstacles,
            snake,
            apple,
            rng,
        }
    }

    /// Latest directional key before the tick wins; there is no queue of
    /// pending turns.
    pub fn set_direction(&mut self, direction: Direction) {
        self.snake.direction = direction;
    }

    pub fn tick(&mut self) -> TickReport {
        let direction = self.snake.direction;
        let outcome = resolve_move(
            &mut self.snake,
            direction,
            &self.obstacles,
            Some(self.apple.pos),
            self.field_size,
        );

        let mut events = Vec::new();
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

        // The apple gets its wander step after the snake has moved, eaten or
        // not; a freshly respawned apple may wander on the same tick.
        self.apple
            .random_walk(&self.snake, &self.obstacles, self.field_size, &mut self.rng);

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
