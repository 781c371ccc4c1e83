use crate::game::apple::Apple;
use crate::game::grid::{Direction, FieldSize, Point};
use crate::game::obstacles::ObstacleField;
use crate::game::resolver::{resolve_duel, DeathReason, DuelPhase, MoveOutcome};
use crate::game::rng::SessionRng;
use crate::game::snake::{Snake, SPAWN_HEAD, SPAWN_LENGTH};
use crate::settings::GameSettings;

use super::{PlayerSlot, SessionEvent, SessionStatus, TickReport};

/// Apples eaten (by either player) before the race flips to mutual eating.
pub const APPLES_TO_MUTUAL: u32 = 5;

/// Player two spawns three rows under player one, still inside the
/// spawn-safe corner.
pub const SPAWN_HEAD_P2: Point = Point { x: 3, y: 8 };

/// Local head-to-head mode. Phase one is an apple race; once the shared
/// tally hits [`APPLES_TO_MUTUAL`] the apple is gone for good and the snakes
/// eat each other until one is down to a single segment.
pub struct TwoPlayerSession {
    field_size: FieldSize,
    obstacles: ObstacleField,
    snakes: [Snake; 2],
    apple: Option<Apple>,
    apples_eaten: u32,
    phase: DuelPhase,
    rng: SessionRng,
}

impl TwoPlayerSession {
    pub fn new(settings: &GameSettings, mut rng: SessionRng) -> Self {
        let obstacles = ObstacleField::generate(settings, &mut rng);
        let snakes = [
            Snake::spawn(SPAWN_HEAD, Direction::Right, SPAWN_LENGTH),
            Snake::spawn(SPAWN_HEAD_P2, Direction::Right, SPAWN_LENGTH),
        ];
        // Race-phase apple placement ignores obstacles and snakes alike.
        let apple = Some(Apple::spawn_anywhere(settings.field_size(), &mut rng));
        Self {
            field_size: settings.field_size(),
            obstacles,
            snakes,
            apple,
            apples_eaten: 0,
            phase: DuelPhase::AppleRace,
            rng,
        }
    }

    pub fn set_direction(&mut self, slot: PlayerSlot, direction: Direction) {
        self.snakes[slot.index()].direction = direction;
    }

    pub fn tick(&mut self) -> TickReport {
        let directions = [self.snakes[0].direction, self.snakes[1].direction];
        let apple_pos = self.apple.map(|apple| apple.pos);

        let outcome = resolve_duel(
            &mut self.snakes,
            directions,
            &self.obstacles,
            apple_pos,
            self.phase,
            self.field_size,
        );

        let mut events = Vec::new();
        let mut over = false;
        let mut apples_this_tick = 0u32;

        for (i, move_outcome) in outcome.moves.iter().enumerate() {
            match move_outcome {
                MoveOutcome::Fatal(reason) => {
                    events.push(SessionEvent::Died {
                        who: PlayerSlot::from_index(i),
                        reason: *reason,
                    });
                    over = true;
                }
                MoveOutcome::Moved { ate_apple: true } => {
                    events.push(SessionEvent::AppleEaten {
                        by: PlayerSlot::from_index(i),
                    });
                    apples_this_tick += 1;
                }
                MoveOutcome::Moved { ate_apple: false } | MoveOutcome::Paused => {}
            }
        }

        for (i, bit) in outcome.bites.iter().enumerate() {
            if *bit {
                events.push(SessionEvent::SegmentEaten {
                    victim: PlayerSlot::from_index(1 - i),
                });
            }
        }

        self.apples_eaten += apples_this_tick;

        match self.phase {
            DuelPhase::AppleRace => {
                if self.apples_eaten >= APPLES_TO_MUTUAL {
                    // Permanent flip; no apple ever spawns again.
                    self.phase = DuelPhase::MutualEating;
                    self.apple = None;
                } else if apples_this_tick > 0 {
                    self.apple = Some(Apple::spawn_anywhere(self.field_size, &mut self.rng));
                }
            }
            DuelPhase::MutualEating => {
                for (i, snake) in self.snakes.iter().enumerate() {
                    if snake.len() <= 1 {
                        events.push(SessionEvent::Died {
                            who: PlayerSlot::from_index(i),
                            reason: DeathReason::EatenDown,
                        });
                        over = true;
                    }
                }
            }
        }

        TickReport {
            status: if over {
                SessionStatus::Over
            } else {
                SessionStatus::Running
            },
            events,
        }
    }

    pub fn snakes(&self) -> &[Snake; 2] {
        &self.snakes
    }

    pub fn apple(&self) -> Option<&Apple> {
        self.apple.as_ref()
    }

    pub fn obstacles(&self) -> &ObstacleField {
        &self.obstacles
    }

    pub fn phase(&self) -> DuelPhase {
        self.phase
    }

    pub fn apples_eaten(&self) -> u32 {
        self.apples_eaten
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_settings() -> GameSettings {
        let mut settings = GameSettings::default();
        settings.obstacle_segments = 0;
        settings
    }

    fn park_snakes(session: &mut TwoPlayerSession) {
        // Move both snakes well apart, pointing into open space.
        session.snakes[0] = Snake::spawn(Point::new(10, 20), Direction::Right, 3);
        session.snakes[1] = Snake::spawn(Point::new(10, 30), Direction::Right, 3);
    }

    #[test]
    fn test_race_counter_and_respawn() {
        let mut session = TwoPlayerSession::new(&bare_settings(), SessionRng::new(1));
        park_snakes(&mut session);
        // Put the apple right in front of player one.
        session.apple = Some(Apple {
            pos: Point::new(11, 20),
        });

        let report = session.tick();

        assert!(report.events.contains(&SessionEvent::AppleEaten {
            by: PlayerSlot::One
        }));
        assert_eq!(session.apples_eaten(), 1);
        assert_eq!(session.phase(), DuelPhase::AppleRace);
        assert!(session.apple().is_some());
        assert_eq!(session.snakes()[0].len(), 4);
    }

    #[test]
    fn test_phase_flips_at_five_and_apple_gone() {
        let mut session = TwoPlayerSession::new(&bare_settings(), SessionRng::new(2));

        for eaten_before in 0..APPLES_TO_MUTUAL {
            park_snakes(&mut session);
            session.apple = Some(Apple {
                pos: Point::new(11, 20),
            });
            let report = session.tick();
            assert!(!report.is_over());
            assert_eq!(session.apples_eaten(), eaten_before + 1);
        }

        assert_eq!(session.phase(), DuelPhase::MutualEating);
        assert!(session.apple().is_none());

        // The flip is permanent: further ticks never bring the apple back.
        park_snakes(&mut session);
        session.tick();
        assert_eq!(session.phase(), DuelPhase::MutualEating);
        assert!(session.apple().is_none());
    }

    #[test]
    fn test_mutual_bite_emits_segment_event() {
        let mut session = TwoPlayerSession::new(&bare_settings(), SessionRng::new(3));
        session.phase = DuelPhase::MutualEating;
        session.apple = None;
        session.snakes[0] = Snake::spawn(Point::new(20, 19), Direction::Up, 3);
        session.snakes[1] = Snake::spawn(Point::new(21, 20), Direction::Right, 4);
        // Snake 1 body: (21,20),(20,20),(19,20),(18,20). Snake 0 drops onto
        // (20,20).
        session.set_direction(PlayerSlot::One, Direction::Down);

        let report = session.tick();

        assert!(report.events.contains(&SessionEvent::SegmentEaten {
            victim: PlayerSlot::Two
        }));
        assert!(!report.is_over());
        assert_eq!(session.snakes()[0].len(), 4);
        assert_eq!(session.snakes()[1].len(), 3);
    }

    #[test]
    fn test_round_ends_when_eaten_to_one() {
        let mut session = TwoPlayerSession::new(&bare_settings(), SessionRng::new(4));
        session.phase = DuelPhase::MutualEating;
        session.apple = None;
        session.snakes[0] = Snake::spawn(Point::new(20, 19), Direction::Up, 3);
        session.snakes[1] = Snake::spawn(Point::new(21, 20), Direction::Right, 2);
        // Victim at length 2: one bite while it moves leaves a single cell.
        session.set_direction(PlayerSlot::One, Direction::Down);

        let report = session.tick();

        assert!(report.is_over());
        assert!(report.events.contains(&SessionEvent::Died {
            who: PlayerSlot::Two,
            reason: DeathReason::EatenDown,
        }));
    }

    #[test]
    fn test_wall_death_ends_race() {
        let mut session = TwoPlayerSession::new(&bare_settings(), SessionRng::new(5));
        park_snakes(&mut session);
        session.apple = Some(Apple {
            pos: Point::new(40, 0),
        });
        session.snakes[0] = Snake::spawn(Point::new(10, 0), Direction::Right, 3);
        session.set_direction(PlayerSlot::One, Direction::Up);

        let report = session.tick();

        assert!(report.is_over());
        assert!(report.events.contains(&SessionEvent::Died {
            who: PlayerSlot::One,
            reason: DeathReason::WallCollision,
        }));
    }
}
