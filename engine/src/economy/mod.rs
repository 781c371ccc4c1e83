mod profile;

pub use profile::{
    PlayerProfile, APPLE_REWARD, DEFAULT_SKIN, HEADWEAR_COST, HEADWEAR_COUNT,
    REPUTATION_BASE_COST, REPUTATION_COST_STEP, SKIN_COLORS, SKIN_COST, SKIN_COUNT,
    STARTING_COINS,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PurchaseError {
    InsufficientFunds,
}

/// The wallet-and-wardrobe context handed into whichever screen owns the
/// current tick. Wraps the persisted profile plus the process-lifetime mute
/// flag, which deliberately resets on every launch.
pub struct Economy {
    profile: PlayerProfile,
    muted: bool,
}

impl Economy {
    pub fn new(profile: PlayerProfile, muted: bool) -> Self {
        Self { profile, muted }
    }

    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    pub fn into_profile(self) -> PlayerProfile {
        self.profile
    }

    pub fn coins(&self) -> u32 {
        self.profile.coins
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn toggle_muted(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn reward(&mut self, amount: u32) {
        self.profile.coins += amount;
    }

    fn spend(&mut self, cost: u32) -> Result<(), PurchaseError> {
        if self.profile.coins < cost {
            return Err(PurchaseError::InsufficientFunds);
        }
        self.profile.coins -= cost;
        Ok(())
    }

    /// Buys and immediately equips a skin. Fails without touching any state
    /// when the wallet is short. Out-of-catalog indexes are a no-op.
    pub fn purchase_skin(&mut self, index: usize) -> Result<(), PurchaseError> {
        if index >= SKIN_COUNT {
            return Ok(());
        }
        self.spend(SKIN_COST)?;
        self.profile.owned_skins[index] = true;
        self.profile.selected_skin = index;
        Ok(())
    }

    /// Equips an owned skin; unowned indexes are ignored.
    pub fn select_skin(&mut self, index: usize) -> bool {
        if index < SKIN_COUNT && self.profile.owned_skins[index] {
            self.profile.selected_skin = index;
            return true;
        }
        false
    }

    /// Shop-click behavior: owned means equip, unowned means try to buy.
    pub fn choose_skin(&mut self, index: usize) -> Result<(), PurchaseError> {
        if index >= SKIN_COUNT {
            return Ok(());
        }
        if self.profile.owned_skins[index] {
            self.profile.selected_skin = index;
            return Ok(());
        }
        self.purchase_skin(index)
    }

    pub fn purchase_headwear(&mut self, index: usize) -> Result<(), PurchaseError> {
        if index >= HEADWEAR_COUNT {
            return Ok(());
        }
        self.spend(HEADWEAR_COST)?;
        self.profile.owned_headwear[index] = true;
        self.profile.selected_headwear = index as i32;
        Ok(())
    }

    pub fn select_headwear(&mut self, index: usize) -> bool {
        if index < HEADWEAR_COUNT && self.profile.owned_headwear[index] {
            self.profile.selected_headwear = index as i32;
            return true;
        }
        false
    }

    pub fn choose_headwear(&mut self, index: usize) -> Result<(), PurchaseError> {
        if index >= HEADWEAR_COUNT {
            return Ok(());
        }
        if self.profile.owned_headwear[index] {
            self.profile.selected_headwear = index as i32;
            return Ok(());
        }
        self.purchase_headwear(index)
    }

    pub fn clear_headwear(&mut self) {
        self.profile.selected_headwear = -1;
    }

    /// Each upgrade raises the next one's price by a fixed step.
    pub fn upgrade_reputation(&mut self) -> Result<(), PurchaseError> {
        let cost = self.profile.next_reputation_cost;
        self.spend(cost)?;
        self.profile.reputation_tier += 1;
        self.profile.next_reputation_cost += REPUTATION_COST_STEP;
        Ok(())
    }

    pub fn selected_skin_color(&self) -> (u8, u8, u8) {
        SKIN_COLORS[self.profile.selected_skin]
    }

    pub fn selected_headwear(&self) -> Option<usize> {
        if self.profile.selected_headwear < 0 {
            None
        } else {
            Some(self.profile.selected_headwear as usize)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn economy() -> Economy {
        Economy::new(PlayerProfile::default(), false)
    }

    #[test]
    fn test_reward_adds_coins() {
        let mut economy = economy();
        economy.reward(APPLE_REWARD);
        assert_eq!(economy.coins(), STARTING_COINS + 10);
    }

    #[test]
    fn test_purchase_skin_deducts_and_equips() {
        let mut economy = economy();
        assert!(economy.purchase_skin(5).is_ok());
        assert_eq!(economy.coins(), STARTING_COINS - SKIN_COST);
        assert!(economy.profile().owned_skins[5]);
        assert_eq!(economy.profile().selected_skin, 5);
    }

    #[test]
    fn test_purchase_without_funds_changes_nothing() {
        let mut economy = Economy::new(
            PlayerProfile {
                coins: 40,
                ..PlayerProfile::default()
            },
            false,
        );
        let before = economy.profile().clone();

        assert_eq!(
            economy.purchase_skin(5),
            Err(PurchaseError::InsufficientFunds)
        );
        assert_eq!(economy.profile(), &before);
    }

    #[test]
    fn test_choose_owned_skin_only_selects() {
        let mut economy = economy();
        assert!(economy.purchase_skin(5).is_ok());
        let coins_after_purchase = economy.coins();

        assert!(economy.choose_skin(1).is_ok());
        assert_eq!(economy.profile().selected_skin, 1);
        assert_eq!(economy.coins(), coins_after_purchase);
    }

    #[test]
    fn test_select_unowned_skin_ignored() {
        let mut economy = economy();
        assert!(!economy.select_skin(9));
        assert_eq!(economy.profile().selected_skin, DEFAULT_SKIN);
    }

    #[test]
    fn test_headwear_purchase_and_clear() {
        let mut economy = economy();
        assert!(economy.purchase_headwear(2).is_ok());
        assert_eq!(economy.coins(), STARTING_COINS - HEADWEAR_COST);
        assert_eq!(economy.selected_headwear(), Some(2));

        economy.clear_headwear();
        assert_eq!(economy.selected_headwear(), None);
        assert!(economy.profile().owned_headwear[2]);
    }

    #[test]
    fn test_reputation_ladder_pricing() {
        let mut economy = economy();
        assert!(economy.upgrade_reputation().is_ok());
        assert_eq!(economy.profile().reputation_tier, 1);
        assert_eq!(economy.profile().next_reputation_cost, 100);
        assert_eq!(economy.coins(), STARTING_COINS - 50);

        assert!(economy.upgrade_reputation().is_ok());
        assert_eq!(economy.profile().reputation_tier, 2);
        assert_eq!(economy.profile().next_reputation_cost, 150);
        assert_eq!(economy.coins(), STARTING_COINS - 150);
    }

    #[test]
    fn test_reputation_upgrade_without_funds_fails() {
        let mut economy = Economy::new(
            PlayerProfile {
                coins: 20,
                ..PlayerProfile::default()
            },
            false,
        );
        assert_eq!(
            economy.upgrade_reputation(),
            Err(PurchaseError::InsufficientFunds)
        );
        assert_eq!(economy.profile().reputation_tier, 0);
        assert_eq!(economy.profile().next_reputation_cost, 50);
        assert_eq!(economy.coins(), 20);
    }

    #[test]
    fn test_mute_flag_round_trip() {
        let mut economy = economy();
        assert!(!economy.muted());
        assert!(economy.toggle_muted());
        assert!(!economy.toggle_muted());
    }
}
