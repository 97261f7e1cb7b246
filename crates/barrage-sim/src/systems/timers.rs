//! Dispatch of due scheduler timers.
//!
//! Each callback re-checks that its owner still exists and is active before
//! acting; a stale repeating timer is cancelled on the spot.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use barrage_core::components::{Active, Enemy, PlayerShip, Projectile, ProjectileBehavior};
use barrage_core::constants::*;
use barrage_core::enums::{EnemyPhase, Owner};
use barrage_core::events::PresentationEvent;
use barrage_core::types::Position;

use barrage_enemy_ai::patterns::plan_shots;

use crate::scheduler::{DueTimer, Scheduler, TimerKind};
use crate::systems::player_control::player_position;
use crate::world_setup::{self, ProjectileSpawn};

const ENEMY_SHOT_SOUND: &str = "laser-sound";

pub fn run(
    world: &mut World,
    scheduler: &mut Scheduler,
    rng: &mut ChaCha8Rng,
    now_ms: f64,
    events: &mut Vec<PresentationEvent>,
) {
    for due in scheduler.pop_due(now_ms) {
        let acted = match due.kind {
            TimerKind::EnemyFire => enemy_fire(world, &due, rng, now_ms, events),
            TimerKind::InvulnerabilityExpiry => end_invulnerability(world, &due, now_ms),
        };
        if !acted {
            scheduler.cancel(due.id);
        }
    }
}

/// Returns false when the owner is gone and the timer should be dropped.
fn enemy_fire(
    world: &mut World,
    due: &DueTimer,
    rng: &mut ChaCha8Rng,
    now_ms: f64,
    events: &mut Vec<PresentationEvent>,
) -> bool {
    let Some(owner) = due.owner else {
        return false;
    };
    let shooter = world
        .query_one_mut::<(&Enemy, &Position, &Active)>(owner)
        .ok()
        .filter(|(enemy, _, active)| active.0 && enemy.phase != EnemyPhase::Destroyed)
        .map(|(enemy, pos, _)| (enemy.variant, enemy.projectile_speed, *pos));
    let Some((variant, speed, origin)) = shooter else {
        return false;
    };

    // No live target: skip this shot but keep the cadence.
    let Some(target) = player_position(world) else {
        return true;
    };

    for shot in plan_shots(variant, origin, target, speed, rng) {
        let behavior = match shot.trail {
            Some(color) => ProjectileBehavior::Trailing { color },
            None => ProjectileBehavior::Straight,
        };
        world_setup::spawn_projectile(
            world,
            ProjectileSpawn {
                position: shot.origin,
                velocity: shot.velocity,
                projectile: Projectile {
                    owner: Owner::Enemy,
                    weapon: None,
                    damage: ENEMY_PROJECTILE_DAMAGE,
                    spawn_ms: now_ms,
                    ttl_ms: PROJECTILE_TTL_MS,
                    behavior,
                    scale: shot.scale,
                },
            },
        );
    }

    if rng.gen_range(0..ENEMY_SHOT_SOUND_CHANCE_DENOM) == 0 {
        events.push(PresentationEvent::sound(ENEMY_SHOT_SOUND, 0.2, 300.0));
    }
    true
}

fn end_invulnerability(world: &mut World, due: &DueTimer, now_ms: f64) -> bool {
    let Some(owner) = due.owner else {
        return false;
    };
    if let Ok(ship) = world.query_one_mut::<&mut PlayerShip>(owner) {
        if now_ms >= ship.invulnerable_until_ms {
            ship.invulnerable = false;
        }
    }
    true
}
