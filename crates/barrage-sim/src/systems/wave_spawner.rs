//! Wave spawning system: a fresh formation at match start and on a fixed interval.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use barrage_core::constants::*;
use barrage_core::settings::GameSettings;

use barrage_enemy_ai::trajectory::{drop_entry, formation_slot, swoop_entry};

use crate::world_setup;

/// Polled wave clock.
#[derive(Debug, Clone)]
pub struct WaveSchedule {
    pub interval_ms: f64,
    pub next_wave_at_ms: f64,
    pub waves_spawned: u32,
    /// When false no waves are spawned (scripted setups).
    pub enabled: bool,
}

impl Default for WaveSchedule {
    fn default() -> Self {
        Self {
            interval_ms: WAVE_INTERVAL_MS,
            next_wave_at_ms: 0.0,
            waves_spawned: 0,
            enabled: true,
        }
    }
}

impl WaveSchedule {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Spawn a wave if one is due. At most one wave per frame.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    schedule: &mut WaveSchedule,
    settings: &GameSettings,
    now_ms: f64,
) {
    if !schedule.enabled || now_ms < schedule.next_wave_at_ms {
        return;
    }

    let spawned = spawn_wave(world, rng, settings, now_ms);
    schedule.waves_spawned += 1;
    schedule.next_wave_at_ms += schedule.interval_ms;
    if schedule.next_wave_at_ms <= now_ms {
        schedule.next_wave_at_ms = now_ms + schedule.interval_ms;
    }
    debug!(wave = schedule.waves_spawned, enemies = spawned, "wave spawned");
}

/// Spawn a full formation above the field. Row 0 swoops in, later rows drop
/// in staggered. Returns the number of enemies spawned.
pub fn spawn_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    settings: &GameSettings,
    now_ms: f64,
) -> usize {
    let mut count = 0;
    for row in 0..FORMATION_ROWS {
        let variant = settings.variant_for_row(row);
        for col in 0..FORMATION_COLS {
            let slot = formation_slot(row, col, FORMATION_COLS, settings.field_width);
            let entry = if row == 0 {
                swoop_entry(rng, slot, now_ms)
            } else {
                drop_entry(slot, row, now_ms)
            };
            world_setup::spawn_enemy(world, variant, slot, Some(entry));
            count += 1;
        }
    }
    count
}
