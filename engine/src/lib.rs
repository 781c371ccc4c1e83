pub mod controller;
pub mod economy;
pub mod game;
pub mod io;
pub mod logger;
pub mod modes;
pub mod settings;
pub mod storage;

pub use controller::{ControlFlow, ModeController};
pub use economy::{Economy, PlayerProfile, PurchaseError};
pub use settings::GameSettings;
pub use storage::SaveStore;
