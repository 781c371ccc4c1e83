pub mod apple_chase;
pub mod solo_snake;
pub mod two_player;

pub use apple_chase::AppleChaseSession;
pub use solo_snake::SoloSnakeSession;
pub use two_player::{TwoPlayerSession, APPLES_TO_MUTUAL};

use crate::game::resolver::DeathReason;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index {
            0 => PlayerSlot::One,
            _ => PlayerSlot::Two,
        }
    }
}

/// Something a session tick produced that the outside world cares about:
/// coins, sounds and the end of the round all hang off these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    AppleEaten { by: PlayerSlot },
    SegmentEaten { victim: PlayerSlot },
    Died { who: PlayerSlot, reason: DeathReason },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Over,
}

#[derive(Clone, Debug)]
pub struct TickReport {
    pub status: SessionStatus,
    pub events: Vec<SessionEvent>,
}

impl TickReport {
    pub fn is_over(&self) -> bool {
        self.status == SessionStatus::Over
    }
}
