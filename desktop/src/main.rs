mod sinks;

use std::time::Instant;

use clap::Parser;
use engine::controller::{ControlFlow, ModeController};
use engine::economy::{Economy, PlayerProfile};
use engine::io::audio::AudioSink;
use engine::io::input::InputSource;
use engine::log;
use engine::logger::init_logger;
use engine::settings::GameSettings;
use engine::storage::SaveStore;
use tokio::time::interval;

use sinks::{spawn_stdin_reader, ChannelInputSource, LogAudioSink, LogRenderSink};

const DEFAULT_PROFILE_FILE: &str = "snake_arcade_profile.yaml";

#[derive(Parser, Debug)]
#[command(name = "snake_arcade", about = "Grid arcade snake game")]
struct Args {
    /// Path to the save file holding coins, skins and reputation.
    #[arg(long)]
    profile: Option<String>,

    /// Seed for the session RNG; omit for a random run.
    #[arg(long)]
    seed: Option<u64>,

    /// Start with sounds muted.
    #[arg(long)]
    muted: bool,

    /// Extra prefix on every log line.
    #[arg(long)]
    log_prefix: Option<String>,
}

fn profile_path(args: &Args) -> String {
    if let Some(path) = &args.profile {
        return path.clone();
    }
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir
            .join(DEFAULT_PROFILE_FILE)
            .to_string_lossy()
            .into_owned();
    }
    DEFAULT_PROFILE_FILE.to_string()
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    init_logger(args.log_prefix.clone());

    let settings = GameSettings::default();
    if let Err(e) = settings.validate() {
        log!("Invalid settings: {}", e);
        return;
    }

    let store: SaveStore<_, PlayerProfile> = SaveStore::yaml_file(&profile_path(&args));
    let profile = match store.load() {
        Ok(profile) => profile,
        Err(e) => {
            log!("Could not load profile ({}), starting fresh", e);
            PlayerProfile::default()
        }
    };
    log!("Profile loaded: {} coins", profile.coins);

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut controller = ModeController::new(settings, Economy::new(profile, args.muted), seed);

    let mut render = LogRenderSink::new();
    let mut audio = LogAudioSink::new();
    audio.set_muted(args.muted);
    let mut input = ChannelInputSource::new(spawn_stdin_reader());

    let mut current_interval = controller.tick_interval();
    let mut ticker = interval(current_interval);

    loop {
        ticker.tick().await;

        let events = input.poll();
        let flow = controller.tick(Instant::now(), &events, &mut render, &mut audio);
        if flow == ControlFlow::Exit {
            break;
        }

        // Menu and play screens tick at different rates; re-arm on change.
        let next_interval = controller.tick_interval();
        if next_interval != current_interval {
            current_interval = next_interval;
            ticker = interval(current_interval);
        }
    }

    // Flush the wallet before the process goes away, whatever the exit path.
    let profile = controller.into_profile();
    match store.save(&profile) {
        Ok(()) => log!("Profile saved"),
        Err(e) => log!("Failed to save profile: {}", e),
    }
}
