//! Game loop thread: runs the simulation engine once per rendered frame.
//!
//! The engine is created inside the thread so it never crosses threads.
//! Commands arrive via `mpsc` channel; each frame advances the match by the
//! measured wall-clock delta and stores the snapshot for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::{info, trace};

use barrage_core::constants::MAX_FRAME_DELTA_MS;
use barrage_core::events::PresentationEvent;
use barrage_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, LoopHandle, SharedSnapshot};

/// Nominal duration of one frame at `frame_rate` frames per second.
pub fn frame_duration(frame_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(frame_rate.max(1)))
}

/// Wall-clock time since the previous frame, in ms, clamped so a stall
/// (debugger, suspended process) cannot produce one huge step.
pub fn frame_delta_ms(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0).min(MAX_FRAME_DELTA_MS)
}

/// Spawn the game loop in a new thread.
pub fn spawn_game_loop(config: SimConfig, frame_rate: u32) -> io::Result<LoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("barrage-game-loop".into())
        .spawn(move || run_game_loop(config, frame_rate, cmd_rx, &shared))?;

    Ok(LoopHandle::new(cmd_tx, latest_snapshot, thread))
}

/// Runs until Shutdown or channel disconnect. Returns the final score of the
/// last match that ended, if any.
fn run_game_loop(
    config: SimConfig,
    frame_rate: u32,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<barrage_core::state::MatchSnapshot>>,
) -> Option<u32> {
    let mut engine = SimulationEngine::new(config);
    let frame = frame_duration(frame_rate);
    let mut final_score = None;
    let mut last_frame = Instant::now();
    let mut next_frame = last_frame + frame;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return final_score,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return final_score,
            }
        }

        // 2. Advance by the measured frame time
        let now = Instant::now();
        let snapshot = engine.tick(frame_delta_ms(now - last_frame));
        last_frame = now;

        // 3. Hand requests to the (absent) presentation layer
        for event in &snapshot.events {
            trace!(?event, "presentation event");
            if let PresentationEvent::MatchEnded { final_score: score } = event {
                info!(score, frame = snapshot.time.frame, "match ended");
                final_score = Some(*score);
            }
        }

        // 4. Publish for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next frame
        let now = Instant::now();
        if next_frame > now {
            std::thread::sleep(next_frame - now);
            next_frame += frame;
        } else {
            // Behind schedule: skip ahead rather than spin.
            next_frame = now + frame;
        }
    }
}
