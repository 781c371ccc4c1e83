use engine::io::audio::{AudioSink, Sound};
use engine::io::input::{InputEvent, InputSource, Key};
use engine::io::render::{Frame, RenderSink};
use engine::log;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// Translates stdin lines into input events so the engine can be driven from
/// a plain terminal. A windowed front-end would feed the same channel from
/// its event loop instead.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<InputEvent> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            for event in parse_line(line.trim()) {
                if tx.send(event).is_err() {
                    return;
                }
            }
        }
    });
    rx
}

fn parse_line(line: &str) -> Vec<InputEvent> {
    let key = match line {
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "w" => Key::W,
        "a" => Key::A,
        "s" => Key::S,
        "d" => Key::D,
        "" | "enter" => Key::Enter,
        "esc" | "escape" => Key::Escape,
        "r" => Key::R,
        "m" => Key::M,
        "h" => Key::H,
        "u" => Key::U,
        "q" | "quit" => return vec![InputEvent::QuitRequested],
        other => {
            if let &[d] = other.as_bytes()
                && d.is_ascii_digit()
            {
                return vec![InputEvent::KeyPressed(Key::Digit(d - b'0'))];
            }
            if let Some(rest) = other.strip_prefix("click ") {
                let mut parts = rest.split_whitespace();
                if let (Some(x), Some(y)) = (parts.next(), parts.next())
                    && let (Ok(x), Ok(y)) = (x.parse(), y.parse())
                {
                    return vec![InputEvent::MouseClicked { x, y }];
                }
            }
            log!("Unrecognized input: {}", other);
            return vec![];
        }
    };
    vec![InputEvent::KeyPressed(key)]
}

pub struct ChannelInputSource {
    rx: mpsc::UnboundedReceiver<InputEvent>,
}

impl ChannelInputSource {
    pub fn new(rx: mpsc::UnboundedReceiver<InputEvent>) -> Self {
        Self { rx }
    }
}

impl InputSource for ChannelInputSource {
    fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}

/// Logs a one-line summary whenever the visible state changes shape; a real
/// renderer would draw every frame.
pub struct LogRenderSink {
    last_summary: Option<String>,
}

impl LogRenderSink {
    pub fn new() -> Self {
        Self { last_summary: None }
    }
}

impl RenderSink for LogRenderSink {
    fn present(&mut self, frame: &Frame) {
        let summary = summarize(frame);
        if self.last_summary.as_deref() != Some(summary.as_str()) {
            log!("{}", summary);
            self.last_summary = Some(summary);
        }
    }
}

fn summarize(frame: &Frame) -> String {
    match frame {
        Frame::Menu(view) => format!("[menu] item {}, {} coins", view.selected, view.coins),
        Frame::Shop(view) => format!(
            "[shop] {} cursor {}, {} coins, reputation tier {} (next {})",
            if view.headwear_rail { "headwear" } else { "skins" },
            view.cursor,
            view.coins,
            view.reputation_tier,
            view.next_reputation_cost,
        ),
        Frame::Play(view) => {
            let lengths: Vec<usize> = view.snakes.iter().map(|s| s.cells.len()).collect();
            format!(
                "[play] lengths {:?}, {} coins{}{}",
                lengths,
                view.coins,
                view.apples_eaten
                    .map(|n| format!(", {} apples", n))
                    .unwrap_or_default(),
                if view.game_over { ", game over" } else { "" },
            )
        }
    }
}

pub struct LogAudioSink {
    muted: bool,
}

impl LogAudioSink {
    pub fn new() -> Self {
        Self { muted: false }
    }
}

impl AudioSink for LogAudioSink {
    fn play(&mut self, sound: Sound) {
        if !self.muted {
            log!("[audio] {:?}", sound);
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}
