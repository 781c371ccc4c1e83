use serde::{Deserialize, Serialize};

use crate::storage::Persist;

pub const SKIN_COUNT: usize = 20;
pub const HEADWEAR_COUNT: usize = 10;

pub const STARTING_COINS: u32 = 1000;
/// Green, index 1, is everyone's first skin.
pub const DEFAULT_SKIN: usize = 1;

pub const SKIN_COST: u32 = 100;
pub const HEADWEAR_COST: u32 = 150;
pub const APPLE_REWARD: u32 = 10;
pub const REPUTATION_BASE_COST: u32 = 50;
pub const REPUTATION_COST_STEP: u32 = 50;

/// The 20 purchasable skin colors, in shop order.
pub const SKIN_COLORS: [(u8, u8, u8); SKIN_COUNT] = [
    (255, 0, 0),
    (0, 255, 0),
    (0, 0, 255),
    (255, 255, 0),
    (255, 0, 255),
    (0, 255, 255),
    (128, 128, 128),
    (255, 128, 0),
    (128, 0, 128),
    (0, 128, 128),
    (128, 255, 128),
    (255, 128, 128),
    (128, 128, 255),
    (255, 255, 128),
    (255, 128, 255),
    (128, 255, 255),
    (192, 192, 192),
    (64, 64, 64),
    (255, 200, 100),
    (100, 200, 255),
];

/// Everything that survives a process restart: the wallet, the wardrobe and
/// the reputation ladder. One YAML document on disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub coins: u32,
    pub owned_skins: Vec<bool>,
    pub selected_skin: usize,
    pub owned_headwear: Vec<bool>,
    /// -1 means bare-headed.
    pub selected_headwear: i32,
    pub reputation_tier: u32,
    pub next_reputation_cost: u32,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        let mut owned_skins = vec![false; SKIN_COUNT];
        owned_skins[DEFAULT_SKIN] = true;
        Self {
            coins: STARTING_COINS,
            owned_skins,
            selected_skin: DEFAULT_SKIN,
            owned_headwear: vec![false; HEADWEAR_COUNT],
            selected_headwear: -1,
            reputation_tier: 0,
            next_reputation_cost: REPUTATION_BASE_COST,
        }
    }
}

impl Persist for PlayerProfile {
    fn validate(&self) -> Result<(), String> {
        if self.owned_skins.len() != SKIN_COUNT {
            return Err(format!(
                "Profile must track exactly {} skins, found {}",
                SKIN_COUNT,
                self.owned_skins.len()
            ));
        }
        if self.owned_headwear.len() != HEADWEAR_COUNT {
            return Err(format!(
                "Profile must track exactly {} headwear items, found {}",
                HEADWEAR_COUNT,
                self.owned_headwear.len()
            ));
        }
        if self.selected_skin >= SKIN_COUNT {
            return Err(format!("Selected skin {} out of range", self.selected_skin));
        }
        if !self.owned_skins[self.selected_skin] {
            return Err(format!(
                "Selected skin {} is not owned",
                self.selected_skin
            ));
        }
        if self.selected_headwear != -1 {
            let index = self.selected_headwear;
            if index < 0 || index as usize >= HEADWEAR_COUNT {
                return Err(format!("Selected headwear {} out of range", index));
            }
            if !self.owned_headwear[index as usize] {
                return Err(format!("Selected headwear {} is not owned", index));
            }
        }
        if self.next_reputation_cost < REPUTATION_BASE_COST {
            return Err("Reputation cost below the base price".to_string());
        }
        Ok(())
    }
}
