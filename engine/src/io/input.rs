/// The keys the game distinguishes. Player one steers with the arrows,
/// player two with WASD; the rest drive menus and the in-session overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Enter,
    Escape,
    R,
    M,
    H,
    U,
    Digit(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyPressed(Key),
    /// Window-space pixel coordinates.
    MouseClicked { x: i32, y: i32 },
    /// Window close or equivalent; triggers the shutdown sequence.
    QuitRequested,
}

/// Polled exactly once at the start of each tick; the returned batch is
/// drained fully before the simulation advances.
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}
