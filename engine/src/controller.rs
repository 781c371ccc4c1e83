use std::time::{Duration, Instant};

use crate::economy::{Economy, PlayerProfile, APPLE_REWARD, HEADWEAR_COUNT, SKIN_COUNT};
use crate::game::grid::Direction;
use crate::game::rng::SessionRng;
use crate::io::audio::{AudioSink, Sound};
use crate::io::input::{InputEvent, Key};
use crate::io::render::{
    self, Frame, MenuView, PlayView, RenderSink, ShopView, SnakeView,
};
use crate::log;
use crate::modes::{
    AppleChaseSession, PlayerSlot, SessionEvent, SoloSnakeSession, TwoPlayerSession,
};
use crate::settings::GameSettings;

/// How long the game-over screen stays up before control returns to the menu.
/// Modeled as a timed sub-state so the loop never blocks.
pub const GAME_OVER_DISPLAY: Duration = Duration::from_secs(2);

/// Menu entries, top to bottom: Play as Snake, Play as Apple, Two Player,
/// Skins, Quit.
pub const MENU_ITEMS: usize = 5;

/// Player two's snake is always drawn in the first catalog color so the two
/// players stay distinguishable whatever skin is equipped.
const PLAYER_TWO_COLOR: (u8, u8, u8) = crate::economy::SKIN_COLORS[0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    SoloSnake,
    SoloAppleChase,
    TwoPlayer,
}

impl GameMode {
    fn menu_index(self) -> usize {
        match self {
            GameMode::SoloSnake => 0,
            GameMode::SoloAppleChase => 1,
            GameMode::TwoPlayer => 2,
        }
    }
}

enum Session {
    SoloSnake(SoloSnakeSession),
    AppleChase(AppleChaseSession),
    TwoPlayer(TwoPlayerSession),
}

struct PlayState {
    mode: GameMode,
    session: Session,
    game_over_at: Option<Instant>,
}

struct ShopState {
    cursor: usize,
    headwear_rail: bool,
}

enum Screen {
    Menu { selected: usize },
    Shop(ShopState),
    Play(PlayState),
    Terminated,
}

/// The top-level state machine. One instance owns the economy context and
/// whichever screen is active; the shell calls [`ModeController::tick`] once
/// per frame and saves the profile after it reports [`ControlFlow::Exit`].
pub struct ModeController {
    settings: GameSettings,
    economy: Economy,
    screen: Screen,
    rng: SessionRng,
}

impl ModeController {
    pub fn new(settings: GameSettings, economy: Economy, seed: u64) -> Self {
        Self {
            settings,
            economy,
            screen: Screen::Menu { selected: 0 },
            rng: SessionRng::new(seed),
        }
    }

    /// The tick rate differs between gameplay and menu screens; the shell
    /// re-arms its timer whenever this changes.
    pub fn tick_interval(&self) -> Duration {
        match self.screen {
            Screen::Play(_) => self.settings.play_tick_interval(),
            _ => self.settings.menu_tick_interval(),
        }
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    /// Hands the profile back for the final save.
    pub fn into_profile(self) -> PlayerProfile {
        self.economy.into_profile()
    }

    /// One cooperative tick: drain this frame's input, advance the active
    /// screen, hand the resulting frame to the renderer.
    pub fn tick(
        &mut self,
        now: Instant,
        events: &[InputEvent],
        render_sink: &mut dyn RenderSink,
        audio: &mut dyn AudioSink,
    ) -> ControlFlow {
        for &event in events {
            if matches!(event, InputEvent::QuitRequested) {
                log!("Quit requested, shutting down");
                self.screen = Screen::Terminated;
                break;
            }
            self.handle_event(event, audio);
        }

        if matches!(self.screen, Screen::Terminated) {
            return ControlFlow::Exit;
        }

        self.advance(now, audio);

        if matches!(self.screen, Screen::Terminated) {
            return ControlFlow::Exit;
        }

        let frame = self.frame();
        render_sink.present(&frame);
        ControlFlow::Continue
    }

    fn handle_event(&mut self, event: InputEvent, audio: &mut dyn AudioSink) {
        let next_screen: Option<Screen> = match &mut self.screen {
            Screen::Menu { selected } => match event {
                InputEvent::KeyPressed(Key::Up) => {
                    *selected = if *selected == 0 {
                        MENU_ITEMS - 1
                    } else {
                        *selected - 1
                    };
                    None
                }
                InputEvent::KeyPressed(Key::Down) => {
                    *selected = (*selected + 1) % MENU_ITEMS;
                    None
                }
                InputEvent::KeyPressed(Key::Enter) => {
                    Self::activate_menu_item(*selected, &self.settings, &mut self.rng, audio)
                }
                InputEvent::KeyPressed(Key::Digit(n)) if (1..=MENU_ITEMS as u8).contains(&n) => {
                    Self::activate_menu_item(
                        (n - 1) as usize,
                        &self.settings,
                        &mut self.rng,
                        audio,
                    )
                }
                InputEvent::KeyPressed(Key::Escape) => Some(Screen::Terminated),
                _ => None,
            },

            Screen::Shop(shop) => match event {
                InputEvent::KeyPressed(Key::Escape) => Some(Screen::Menu { selected: 3 }),
                InputEvent::KeyPressed(Key::H) => {
                    shop.headwear_rail = !shop.headwear_rail;
                    shop.cursor = 0;
                    None
                }
                InputEvent::KeyPressed(Key::Up) if !shop.headwear_rail => {
                    if shop.cursor >= render::SHOP_COLUMNS {
                        shop.cursor -= render::SHOP_COLUMNS;
                    }
                    None
                }
                InputEvent::KeyPressed(Key::Down) if !shop.headwear_rail => {
                    if shop.cursor + render::SHOP_COLUMNS < SKIN_COUNT {
                        shop.cursor += render::SHOP_COLUMNS;
                    }
                    None
                }
                InputEvent::KeyPressed(Key::Left) => {
                    if shop.cursor > 0
                        && (shop.headwear_rail || shop.cursor % render::SHOP_COLUMNS != 0)
                    {
                        shop.cursor -= 1;
                    }
                    None
                }
                InputEvent::KeyPressed(Key::Right) => {
                    let limit = if shop.headwear_rail {
                        HEADWEAR_COUNT
                    } else {
                        SKIN_COUNT
                    };
                    if shop.cursor + 1 < limit
                        && (shop.headwear_rail
                            || shop.cursor % render::SHOP_COLUMNS != render::SHOP_COLUMNS - 1)
                    {
                        shop.cursor += 1;
                    }
                    None
                }
                InputEvent::KeyPressed(Key::Enter) => {
                    let result = if shop.headwear_rail {
                        self.economy.choose_headwear(shop.cursor)
                    } else {
                        self.economy.choose_skin(shop.cursor)
                    };
                    if result.is_err() {
                        log!("Purchase failed: not enough coins");
                    }
                    None
                }
                InputEvent::KeyPressed(Key::U) => {
                    match self.economy.upgrade_reputation() {
                        Ok(()) => log!(
                            "Reputation upgraded to tier {}",
                            self.economy.profile().reputation_tier
                        ),
                        Err(_) => log!("Reputation upgrade failed: not enough coins"),
                    }
                    None
                }
                InputEvent::MouseClicked { x, y } => {
                    if let Some(index) = render::skin_at_pixel(x, y, SKIN_COUNT) {
                        shop.headwear_rail = false;
                        shop.cursor = index;
                        if self.economy.choose_skin(index).is_err() {
                            log!("Purchase failed: not enough coins");
                        }
                    }
                    None
                }
                _ => None,
            },

            Screen::Play(play) => {
                // The game-over card swallows all input until it expires.
                if play.game_over_at.is_some() {
                    return;
                }
                match event {
                    InputEvent::KeyPressed(Key::Up) => {
                        Self::steer(play, PlayerSlot::One, Direction::Up);
                        None
                    }
                    InputEvent::KeyPressed(Key::Down) => {
                        Self::steer(play, PlayerSlot::One, Direction::Down);
                        None
                    }
                    InputEvent::KeyPressed(Key::Left) => {
                        Self::steer(play, PlayerSlot::One, Direction::Left);
                        None
                    }
                    InputEvent::KeyPressed(Key::Right) => {
                        Self::steer(play, PlayerSlot::One, Direction::Right);
                        None
                    }
                    InputEvent::KeyPressed(Key::W) => {
                        Self::steer(play, PlayerSlot::Two, Direction::Up);
                        None
                    }
                    InputEvent::KeyPressed(Key::S) => {
                        Self::steer(play, PlayerSlot::Two, Direction::Down);
                        None
                    }
                    InputEvent::KeyPressed(Key::A) => {
                        Self::steer(play, PlayerSlot::Two, Direction::Left);
                        None
                    }
                    InputEvent::KeyPressed(Key::D) => {
                        Self::steer(play, PlayerSlot::Two, Direction::Right);
                        None
                    }
                    InputEvent::KeyPressed(Key::R) => {
                        *play = Self::create_play(play.mode, &self.settings, &mut self.rng);
                        None
                    }
                    InputEvent::KeyPressed(Key::Escape) => Some(Screen::Menu {
                        selected: play.mode.menu_index(),
                    }),
                    InputEvent::KeyPressed(Key::M) => {
                        let muted = self.economy.toggle_muted();
                        audio.set_muted(muted);
                        audio.play(Sound::MuteToggle);
                        None
                    }
                    InputEvent::MouseClicked { x, y } => {
                        if render::OVERLAY_RESTART.hit(x, y) {
                            *play = Self::create_play(play.mode, &self.settings, &mut self.rng);
                            None
                        } else if render::OVERLAY_QUIT.hit(x, y) {
                            Some(Screen::Menu {
                                selected: play.mode.menu_index(),
                            })
                        } else if render::OVERLAY_VOLUME.hit(x, y) {
                            let muted = self.economy.toggle_muted();
                            audio.set_muted(muted);
                            audio.play(Sound::MuteToggle);
                            None
                        } else {
                            None
                        }
                    }
                    _ => None,
                }
            }

            Screen::Terminated => None,
        };

        if let Some(screen) = next_screen {
            self.screen = screen;
        }
    }

    fn activate_menu_item(
        index: usize,
        settings: &GameSettings,
        rng: &mut SessionRng,
        audio: &mut dyn AudioSink,
    ) -> Option<Screen> {
        match index {
            0 => {
                audio.play(Sound::GameStart);
                Some(Screen::Play(Self::create_play(
                    GameMode::SoloSnake,
                    settings,
                    rng,
                )))
            }
            1 => {
                audio.play(Sound::GameStart);
                Some(Screen::Play(Self::create_play(
                    GameMode::SoloAppleChase,
                    settings,
                    rng,
                )))
            }
            2 => {
                audio.play(Sound::GameStart);
                Some(Screen::Play(Self::create_play(
                    GameMode::TwoPlayer,
                    settings,
                    rng,
                )))
            }
            3 => {
                audio.play(Sound::GameStart);
                Some(Screen::Shop(ShopState {
                    cursor: 0,
                    headwear_rail: false,
                }))
            }
            _ => Some(Screen::Terminated),
        }
    }

    fn create_play(mode: GameMode, settings: &GameSettings, rng: &mut SessionRng) -> PlayState {
        let seed: u64 = rng.random();
        log!("Starting {:?} session, seed {}", mode, seed);
        let session_rng = SessionRng::new(seed);
        let session = match mode {
            GameMode::SoloSnake => Session::SoloSnake(SoloSnakeSession::new(settings, session_rng)),
            GameMode::SoloAppleChase => {
                Session::AppleChase(AppleChaseSession::new(settings, session_rng))
            }
            GameMode::TwoPlayer => Session::TwoPlayer(TwoPlayerSession::new(settings, session_rng)),
        };
        PlayState {
            mode,
            session,
            game_over_at: None,
        }
    }

    fn steer(play: &mut PlayState, slot: PlayerSlot, direction: Direction) {
        match (&mut play.session, slot) {
            (Session::SoloSnake(session), PlayerSlot::One) => session.set_direction(direction),
            (Session::AppleChase(session), PlayerSlot::One) => {
                session.set_apple_direction(direction)
            }
            (Session::TwoPlayer(session), _) => session.set_direction(slot, direction),
            // WASD does nothing in the solo modes.
            _ => {}
        }
    }

    fn advance(&mut self, now: Instant, audio: &mut dyn AudioSink) {
        let Screen::Play(play) = &mut self.screen else {
            return;
        };

        if let Some(shown_at) = play.game_over_at {
            if now.duration_since(shown_at) >= GAME_OVER_DISPLAY {
                let selected = play.mode.menu_index();
                self.screen = Screen::Menu { selected };
            }
            return;
        }

        let report = match &mut play.session {
            Session::SoloSnake(session) => session.tick(),
            Session::AppleChase(session) => session.tick(),
            Session::TwoPlayer(session) => session.tick(),
        };

        for event in &report.events {
            match event {
                SessionEvent::AppleEaten { by } => {
                    self.economy.reward(APPLE_REWARD);
                    audio.play(Sound::AppleEaten);
                    log!(
                        "Apple eaten by {:?}, wallet at {}",
                        by,
                        self.economy.coins()
                    );
                }
                SessionEvent::SegmentEaten { victim } => {
                    audio.play(Sound::SegmentEaten);
                    log!("Segment bitten off {:?}", victim);
                }
                SessionEvent::Died { who, reason } => {
                    log!("{:?} is done: {:?}", who, reason);
                }
            }
        }

        if report.is_over() {
            audio.play(Sound::GameOver);
            play.game_over_at = Some(now);
        }
    }

    fn frame(&self) -> Frame {
        match &self.screen {
            Screen::Menu { selected } => Frame::Menu(MenuView {
                selected: *selected,
                coins: self.economy.coins(),
            }),
            Screen::Shop(shop) => {
                let profile = self.economy.profile();
                Frame::Shop(ShopView {
                    coins: profile.coins,
                    owned_skins: profile.owned_skins.clone(),
                    selected_skin: profile.selected_skin,
                    owned_headwear: profile.owned_headwear.clone(),
                    selected_headwear: profile.selected_headwear,
                    reputation_tier: profile.reputation_tier,
                    next_reputation_cost: profile.next_reputation_cost,
                    cursor: shop.cursor,
                    headwear_rail: shop.headwear_rail,
                })
            }
            Screen::Play(play) => Frame::Play(self.play_view(play)),
            // Never rendered; tick exits before building a frame.
            Screen::Terminated => Frame::Menu(MenuView {
                selected: 0,
                coins: self.economy.coins(),
            }),
        }
    }

    fn play_view(&self, play: &PlayState) -> PlayView {
        let color = self.economy.selected_skin_color();
        let headwear = self.economy.selected_headwear();
        let coins = self.economy.coins();
        let muted = self.economy.muted();
        let game_over = play.game_over_at.is_some();

        match &play.session {
            Session::SoloSnake(session) => PlayView {
                obstacles: session.obstacles().cells().collect(),
                snakes: vec![SnakeView {
                    cells: session.snake().cells().collect(),
                    color,
                    headwear,
                }],
                apple: Some(session.apple().pos),
                coins,
                muted,
                phase: None,
                apples_eaten: None,
                game_over,
            },
            Session::AppleChase(session) => PlayView {
                obstacles: session.obstacles().cells().collect(),
                snakes: vec![SnakeView {
                    cells: session.snake().cells().collect(),
                    color,
                    headwear,
                }],
                apple: Some(session.apple().pos),
                coins,
                muted,
                phase: None,
                apples_eaten: None,
                game_over,
            },
            Session::TwoPlayer(session) => PlayView {
                obstacles: session.obstacles().cells().collect(),
                snakes: vec![
                    SnakeView {
                        cells: session.snakes()[0].cells().collect(),
                        color,
                        headwear,
                    },
                    SnakeView {
                        cells: session.snakes()[1].cells().collect(),
                        color: PLAYER_TWO_COLOR,
                        headwear: None,
                    },
                ],
                apple: session.apple().map(|apple| apple.pos),
                coins,
                muted,
                phase: Some(session.phase()),
                apples_eaten: Some(session.apples_eaten()),
                game_over,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::STARTING_COINS;

    struct RecordingRender {
        frames: Vec<Frame>,
    }

    impl RecordingRender {
        fn new() -> Self {
            Self { frames: Vec::new() }
        }

        fn last(&self) -> &Frame {
            self.frames.last().expect("at least one frame presented")
        }
    }

    impl RenderSink for RecordingRender {
        fn present(&mut self, frame: &Frame) {
            self.frames.push(frame.clone());
        }
    }

    struct RecordingAudio {
        played: Vec<Sound>,
        muted: Option<bool>,
    }

    impl RecordingAudio {
        fn new() -> Self {
            Self {
                played: Vec::new(),
                muted: None,
            }
        }
    }

    impl AudioSink for RecordingAudio {
        fn play(&mut self, sound: Sound) {
            self.played.push(sound);
        }

        fn set_muted(&mut self, muted: bool) {
            self.muted = Some(muted);
        }
    }

    fn controller() -> ModeController {
        ModeController::new(
            GameSettings::default(),
            Economy::new(PlayerProfile::default(), false),
            1234,
        )
    }

    fn key(k: Key) -> Vec<InputEvent> {
        vec![InputEvent::KeyPressed(k)]
    }

    #[test]
    fn test_starts_on_menu_with_menu_interval() {
        let c = controller();
        assert_eq!(c.tick_interval(), GameSettings::default().menu_tick_interval());
    }

    #[test]
    fn test_enter_starts_solo_snake() {
        let mut c = controller();
        let mut render = RecordingRender::new();
        let mut audio = RecordingAudio::new();
        let now = Instant::now();

        let flow = c.tick(now, &key(Key::Enter), &mut render, &mut audio);

        assert_eq!(flow, ControlFlow::Continue);
        assert!(audio.played.contains(&Sound::GameStart));
        assert_eq!(c.tick_interval(), GameSettings::default().play_tick_interval());
        assert!(matches!(render.last(), Frame::Play(_)));
    }

    #[test]
    fn test_digit_activates_shop() {
        let mut c = controller();
        let mut render = RecordingRender::new();
        let mut audio = RecordingAudio::new();

        c.tick(Instant::now(), &key(Key::Digit(4)), &mut render, &mut audio);

        assert!(matches!(render.last(), Frame::Shop(_)));
        assert_eq!(c.tick_interval(), GameSettings::default().menu_tick_interval());
    }

    #[test]
    fn test_escape_in_play_returns_to_menu() {
        let mut c = controller();
        let mut render = RecordingRender::new();
        let mut audio = RecordingAudio::new();
        let now = Instant::now();

        c.tick(now, &key(Key::Enter), &mut render, &mut audio);
        c.tick(now, &key(Key::Escape), &mut render, &mut audio);

        match render.last() {
            Frame::Menu(view) => assert_eq!(view.selected, 0),
            other => panic!("expected menu frame, got {:?}", other),
        }
    }

    #[test]
    fn test_quit_from_menu_exits() {
        let mut c = controller();
        let mut render = RecordingRender::new();
        let mut audio = RecordingAudio::new();

        let flow = c.tick(Instant::now(), &key(Key::Escape), &mut render, &mut audio);
        assert_eq!(flow, ControlFlow::Exit);
    }

    #[test]
    fn test_quit_requested_exits_from_anywhere() {
        let mut c = controller();
        let mut render = RecordingRender::new();
        let mut audio = RecordingAudio::new();
        let now = Instant::now();

        c.tick(now, &key(Key::Enter), &mut render, &mut audio);
        let flow = c.tick(now, &[InputEvent::QuitRequested], &mut render, &mut audio);
        assert_eq!(flow, ControlFlow::Exit);
    }

    #[test]
    fn test_wall_death_shows_game_over_then_menu() {
        let mut c = controller();
        let mut render = RecordingRender::new();
        let mut audio = RecordingAudio::new();
        let base = Instant::now();

        c.tick(base, &key(Key::Enter), &mut render, &mut audio);
        c.tick(base, &key(Key::Up), &mut render, &mut audio);
        // Head starts five rows from the top edge; the sixth move leaves the
        // field. The first tick above already advanced one row.
        for _ in 0..5 {
            c.tick(base, &[], &mut render, &mut audio);
        }

        assert!(audio.played.contains(&Sound::GameOver));
        match render.last() {
            Frame::Play(view) => assert!(view.game_over),
            other => panic!("expected play frame, got {:?}", other),
        }

        // Still showing the card before the delay elapses.
        c.tick(base + Duration::from_millis(500), &[], &mut render, &mut audio);
        assert!(matches!(render.last(), Frame::Play(_)));

        // After the delay the controller is back on the menu.
        c.tick(base + Duration::from_secs(3), &[], &mut render, &mut audio);
        assert!(matches!(render.last(), Frame::Menu(_)));
    }

    #[test]
    fn test_input_ignored_during_game_over_card() {
        let mut c = controller();
        let mut render = RecordingRender::new();
        let mut audio = RecordingAudio::new();
        let base = Instant::now();

        c.tick(base, &key(Key::Enter), &mut render, &mut audio);
        c.tick(base, &key(Key::Up), &mut render, &mut audio);
        for _ in 0..5 {
            c.tick(base, &[], &mut render, &mut audio);
        }
        match render.last() {
            Frame::Play(view) => assert!(view.game_over),
            other => panic!("expected play frame, got {:?}", other),
        }

        // Escape during the card does not jump to the menu early.
        c.tick(base + Duration::from_millis(100), &key(Key::Escape), &mut render, &mut audio);
        assert!(matches!(render.last(), Frame::Play(_)));
    }

    #[test]
    fn test_shop_click_buys_and_equips_first_skin() {
        let mut c = controller();
        let mut render = RecordingRender::new();
        let mut audio = RecordingAudio::new();
        let now = Instant::now();

        c.tick(now, &key(Key::Digit(4)), &mut render, &mut audio);
        c.tick(
            now,
            &[InputEvent::MouseClicked { x: 60, y: 160 }],
            &mut render,
            &mut audio,
        );

        let profile = c.economy().profile();
        assert!(profile.owned_skins[0]);
        assert_eq!(profile.selected_skin, 0);
        assert_eq!(profile.coins, STARTING_COINS - crate::economy::SKIN_COST);

        // Clicking an owned swatch re-equips without charging.
        c.tick(
            now,
            &[InputEvent::MouseClicked { x: 60, y: 160 }],
            &mut render,
            &mut audio,
        );
        assert_eq!(c.economy().coins(), STARTING_COINS - crate::economy::SKIN_COST);
    }

    #[test]
    fn test_shop_keyboard_purchase_and_reputation() {
        let mut c = controller();
        let mut render = RecordingRender::new();
        let mut audio = RecordingAudio::new();
        let now = Instant::now();

        c.tick(now, &key(Key::Digit(4)), &mut render, &mut audio);
        c.tick(now, &key(Key::Right), &mut render, &mut audio);
        c.tick(now, &key(Key::Right), &mut render, &mut audio);
        c.tick(now, &key(Key::Enter), &mut render, &mut audio);
        assert!(c.economy().profile().owned_skins[2]);

        c.tick(now, &key(Key::U), &mut render, &mut audio);
        assert_eq!(c.economy().profile().reputation_tier, 1);
        assert_eq!(c.economy().profile().next_reputation_cost, 100);
    }

    #[test]
    fn test_wasd_steers_player_two() {
        let mut c = controller();
        let mut render = RecordingRender::new();
        let mut audio = RecordingAudio::new();
        let now = Instant::now();

        c.tick(now, &key(Key::Digit(3)), &mut render, &mut audio);
        c.tick(now, &key(Key::W), &mut render, &mut audio);

        match render.last() {
            Frame::Play(view) => {
                assert_eq!(view.snakes.len(), 2);
                // Player two spawned at (3,8) and slid right on the entry
                // tick; W turned them upward for the second tick.
                assert_eq!(view.snakes[1].cells[0], crate::game::grid::Point::new(4, 7));
            }
            other => panic!("expected play frame, got {:?}", other),
        }
    }

    #[test]
    fn test_mute_toggle_reaches_audio_sink() {
        let mut c = controller();
        let mut render = RecordingRender::new();
        let mut audio = RecordingAudio::new();
        let now = Instant::now();

        c.tick(now, &key(Key::Enter), &mut render, &mut audio);
        c.tick(now, &key(Key::M), &mut render, &mut audio);

        assert_eq!(audio.muted, Some(true));
        assert!(audio.played.contains(&Sound::MuteToggle));
        assert!(c.economy().muted());
    }

    #[test]
    fn test_restart_resets_session_keeps_wallet() {
        let mut c = controller();
        let mut render = RecordingRender::new();
        let mut audio = RecordingAudio::new();
        let now = Instant::now();

        c.tick(now, &key(Key::Enter), &mut render, &mut audio);
        // Let the snake crawl a few ticks to the right.
        for _ in 0..3 {
            c.tick(now, &[], &mut render, &mut audio);
        }
        c.tick(now, &key(Key::R), &mut render, &mut audio);

        match render.last() {
            Frame::Play(view) => {
                // Fresh spawn at (3,5), advanced once by the restart tick.
                // Without the restart the head would sit at (8,5).
                assert_eq!(view.snakes[0].cells[0], crate::game::grid::Point::new(4, 5));
            }
            other => panic!("expected play frame, got {:?}", other),
        }
        // The wallet survives a restart (apples eaten on the way only add).
        assert!(c.economy().coins() >= STARTING_COINS);
    }
}
