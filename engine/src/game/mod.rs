pub mod apple;
pub mod chase;
pub mod grid;
pub mod obstacles;
pub mod resolver;
pub mod rng;
pub mod snake;

pub use apple::Apple;
pub use chase::select_direction;
pub use grid::{Direction, FieldSize, Point, CELL_SIZE};
pub use obstacles::ObstacleField;
pub use resolver::{DeathReason, DuelPhase, MoveOutcome};
pub use rng::SessionRng;
pub use snake::Snake;
