/// Sanity check run before a record is written and after one is read. A
/// failing record never reaches disk and never reaches the game.
pub trait Persist {
    fn validate(&self) -> Result<(), String>;
}
