#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sound {
    GameStart,
    AppleEaten,
    GameOver,
    /// Two-player mutual eating: a segment was bitten off someone.
    SegmentEaten,
    MuteToggle,
}

/// Fire-and-forget playback. Muting affects subsequent plays only; whatever
/// is already sounding is the sink's problem.
pub trait AudioSink {
    fn play(&mut self, sound: Sound);
    fn set_muted(&mut self, muted: bool);
}
