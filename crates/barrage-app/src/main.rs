use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use barrage_app::autopilot::Autopilot;
use barrage_app::game_loop::{frame_duration, spawn_game_loop};
use barrage_core::commands::PlayerCommand;
use barrage_core::constants::TARGET_FPS;
use barrage_core::enums::GamePhase;
use barrage_core::settings::GameSettings;
use barrage_sim::engine::SimConfig;

/// Headless BARRAGE match runner.
#[derive(Parser, Debug)]
#[command(name = "barrage", version, about)]
struct Args {
    /// RNG seed for entry offsets, wandering and enemy fire jitter.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Wall-clock seconds to run before stopping.
    #[arg(long, default_value_t = 60.0)]
    seconds: f64,

    /// Frames per second.
    #[arg(long, default_value_t = TARGET_FPS)]
    fps: u32,

    /// JSON settings file; missing fields use the stock tuning.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Start the match but give no input (the ship just sits there).
    #[arg(long)]
    idle: bool,
}

fn load_settings(path: Option<&PathBuf>) -> Result<GameSettings> {
    let Some(path) = path else {
        return Ok(GameSettings::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    GameSettings::from_json(&json).with_context(|| format!("failed to load {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let settings = load_settings(args.settings.as_ref())?;
    let weapons: Vec<String> = settings
        .weapons
        .iter()
        .map(|(weapon, _)| weapon.key().to_string())
        .collect();

    info!(seed = args.seed, fps = args.fps, seconds = args.seconds, "starting runner");
    let handle = spawn_game_loop(
        SimConfig {
            seed: args.seed,
            settings,
            spawn_waves: true,
        },
        args.fps,
    )
    .context("failed to start game loop")?;

    let mut pilot = if args.idle {
        handle.send(PlayerCommand::StartMatch);
        None
    } else {
        Some(Autopilot::new(weapons))
    };

    let deadline = Instant::now() + Duration::from_secs_f64(args.seconds.max(0.0));
    let poll = frame_duration(args.fps);
    while Instant::now() < deadline && !handle.is_finished() {
        if let Some(snapshot) = handle.latest() {
            if snapshot.phase == GamePhase::GameOver {
                break;
            }
            if let Some(pilot) = pilot.as_mut() {
                for command in pilot.next_commands(&snapshot) {
                    handle.send(command);
                }
            }
        }
        thread::sleep(poll);
    }

    let last = handle.latest();
    match (handle.shutdown(), last) {
        (Some(score), _) => println!("game over, final score {score}"),
        (None, Some(snapshot)) => println!(
            "time up after {:.1}s: score {}, lives {}, waves {}",
            snapshot.time.now_ms / 1000.0,
            snapshot.hud.score,
            snapshot.hud.lives,
            snapshot.hud.waves_spawned
        ),
        (None, None) => println!("no frames simulated"),
    }
    Ok(())
}
