use super::grid::{Direction, FieldSize, Point};
use super::obstacles::ObstacleField;
use super::snake::Snake;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    /// Competitive mode only: eaten down to a single segment.
    EatenDown,
}

/// What one tick did to one snake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { ate_apple: bool },
    /// The target cell is an obstacle: the snake holds its position this
    /// tick. Nothing is inserted or removed and no events fire.
    Paused,
    Fatal(DeathReason),
}

/// Advances one snake by one tick.
///
/// Rule order matters and is part of the contract: leaving the field kills,
/// an obstacle merely pauses, and self-collision is only tested for a move
/// that actually happens. Walls and obstacles deliberately differ — the
/// field edge is lethal while an obstacle cell is solid but survivable.
pub fn resolve_move(
    snake: &mut Snake,
    direction: Direction,
    obstacles: &ObstacleField,
    apple: Option<Point>,
    field_size: FieldSize,
) -> MoveOutcome {
    let Some(next_head) = field_size.step(snake.head(), direction) else {
        return MoveOutcome::Fatal(DeathReason::WallCollision);
    };

    if obstacles.contains(next_head) {
        return MoveOutcome::Paused;
    }

    if snake.hits_body(next_head) {
        return MoveOutcome::Fatal(DeathReason::SelfCollision);
    }

    snake.push_head(next_head);
    let ate_apple = apple == Some(next_head);
    if !ate_apple {
        snake.pop_tail();
    }

    MoveOutcome::Moved { ate_apple }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuelPhase {
    /// First-to-five apple race; solo collision rules apply to each snake.
    AppleRace,
    /// No apples. Self-collision is off, landing on the opponent's body
    /// feeds on them instead.
    MutualEating,
}

/// Outcome of one simultaneous two-snake tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DuelOutcome {
    pub moves: [MoveOutcome; 2],
    /// `bites[i]`: snake `i`'s new head landed on the opponent's body this
    /// tick (mutual-eating phase only).
    pub bites: [bool; 2],
}

#[derive(Clone, Copy)]
enum Decision {
    Hold,
    Advance { to: Point, grow: bool },
    Die,
}

/// Advances both snakes by one tick, simultaneously.
///
/// Both moves are decided against the pre-tick bodies before either snake is
/// touched, so neither player's move is visible to the other's collision
/// checks within the same tick and the two slots stay symmetric.
pub fn resolve_duel(
    snakes: &mut [Snake; 2],
    directions: [Direction; 2],
    obstacles: &ObstacleField,
    apple: Option<Point>,
    phase: DuelPhase,
    field_size: FieldSize,
) -> DuelOutcome {
    let mut decisions = [Decision::Hold; 2];
    let mut moves = [MoveOutcome::Paused; 2];
    let mut bites = [false; 2];

    for i in 0..2 {
        let me = &snakes[i];
        let other = &snakes[1 - i];

        let Some(next_head) = field_size.step(me.head(), directions[i]) else {
            decisions[i] = Decision::Die;
            moves[i] = MoveOutcome::Fatal(DeathReason::WallCollision);
            continue;
        };

        if obstacles.contains(next_head) {
            continue;
        }

        match phase {
            DuelPhase::AppleRace => {
                if me.hits_body(next_head) {
                    decisions[i] = Decision::Die;
                    moves[i] = MoveOutcome::Fatal(DeathReason::SelfCollision);
                    continue;
                }
                let ate_apple = apple == Some(next_head);
                decisions[i] = Decision::Advance {
                    to: next_head,
                    grow: ate_apple,
                };
                moves[i] = MoveOutcome::Moved { ate_apple };
            }
            DuelPhase::MutualEating => {
                // Own body does not block here; only the opponent's body
                // behind their head registers, and it feeds the mover.
                let bite = other.hits_body(next_head);
                bites[i] = bite;
                decisions[i] = Decision::Advance {
                    to: next_head,
                    grow: bite,
                };
                moves[i] = MoveOutcome::Moved { ate_apple: false };
            }
        }
    }

    for i in 0..2 {
        if let Decision::Advance { to, grow } = decisions[i] {
            snakes[i].push_head(to);
            if !grow {
                snakes[i].pop_tail();
            }
        }
    }

    // A bitten snake sheds one tail segment, unless it is already down to a
    // single cell, in which case it is unaffected this tick.
    for i in 0..2 {
        let victim = 1 - i;
        if bites[i] && snakes[victim].len() > 1 {
            snakes[victim].pop_tail();
        }
    }

    DuelOutcome { moves, bites }
}
