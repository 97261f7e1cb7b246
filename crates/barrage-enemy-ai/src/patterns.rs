//! Per-variant shot patterns and fire cadence.

use std::f64::consts::PI;

use glam::DVec2;
use rand::Rng;

use barrage_core::constants::*;
use barrage_core::enums::EnemyVariant;
use barrage_core::types::{Color, Position, Velocity};

/// One enemy projectile to spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotSpec {
    pub origin: Position,
    pub velocity: Velocity,
    pub scale: f64,
    /// Particle trail color, if the shot leaves one.
    pub trail: Option<Color>,
}

/// Plan the projectiles for one `shoot(target)` call.
///
/// basic: straight down. bomber: straight down, plus a 1-in-3 symmetric pair
/// at +/-30 degrees from vertical. elite: aimed at the target. boss: 8-way
/// radial burst rotated onto the target bearing, plus one aimed shot.
pub fn plan_shots(
    variant: EnemyVariant,
    origin: Position,
    target: Position,
    speed: f64,
    rng: &mut impl Rng,
) -> Vec<ShotSpec> {
    let muzzle = origin.offset(0.0, ENEMY_MUZZLE_OFFSET);
    let straight_down = Velocity::new(0.0, speed);

    match variant {
        EnemyVariant::Basic => vec![shot(muzzle, straight_down, 1.0)],
        EnemyVariant::Bomber => {
            let mut shots = Vec::with_capacity(3);
            if rng.gen_range(0..BOMBER_SPREAD_CHANCE_DENOM) == 0 {
                let down = PI / 2.0;
                let spread = BOMBER_SPREAD_DEG.to_radians();
                shots.push(shot(
                    muzzle.offset(-BOMBER_SIDE_OFFSET, 0.0),
                    Velocity::from_angle(down - spread, speed),
                    1.0,
                ));
                shots.push(shot(
                    muzzle.offset(BOMBER_SIDE_OFFSET, 0.0),
                    Velocity::from_angle(down + spread, speed),
                    1.0,
                ));
            }
            shots.push(shot(muzzle, straight_down, 1.0));
            shots
        }
        EnemyVariant::Elite => {
            let aim = origin.angle_to(&target);
            vec![shot(muzzle, Velocity::from_angle(aim, speed), ELITE_BULLET_SCALE)]
        }
        EnemyVariant::Boss => {
            let aim = origin.angle_to(&target);
            let mut shots: Vec<ShotSpec> = (0..BOSS_BURST_COUNT)
                .map(|i| {
                    let angle = aim + i as f64 * (2.0 * PI / BOSS_BURST_COUNT as f64);
                    let v = DVec2::from_angle(angle) * speed;
                    ShotSpec {
                        origin,
                        velocity: Velocity::new(v.x, v.y),
                        scale: BOSS_BULLET_SCALE,
                        trail: Some(Color::RED),
                    }
                })
                .collect();
            shots.push(ShotSpec {
                origin: muzzle,
                velocity: Velocity::from_angle(aim, speed),
                scale: 1.0,
                trail: None,
            });
            shots
        }
    }
}

/// Fire period for an enemy that just became Active: base interval with a
/// uniform jitter, fixed for the enemy's lifetime.
pub fn roll_fire_interval(base_ms: f64, rng: &mut impl Rng) -> f64 {
    let jitter = rng.gen_range(-ENEMY_FIRE_JITTER_MS..=ENEMY_FIRE_JITTER_MS);
    (base_ms + jitter).max(base_ms * 0.25)
}

fn shot(origin: Position, velocity: Velocity, scale: f64) -> ShotSpec {
    ShotSpec {
        origin,
        velocity,
        scale,
        trail: None,
    }
}
