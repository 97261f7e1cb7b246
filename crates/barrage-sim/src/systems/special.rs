//! Special attacks: one per weapon, gated by a shared cooldown.
//!
//! basic: spread fan. plasma: area blast with knockback. missile: homing
//! swarm on the nearest enemies. beam: instantaneous wide column strike.

use std::f64::consts::FRAC_PI_2;

use hecs::{Entity, World};
use tracing::debug;

use barrage_core::components::{Active, Enemy, ProjectileBehavior};
use barrage_core::constants::*;
use barrage_core::enums::{EffectKind, EnemyPhase, WeaponType};
use barrage_core::events::PresentationEvent;
use barrage_core::settings::GameSettings;
use barrage_core::types::{Color, Position, Velocity};

use crate::damage::damage_enemy;
use crate::homing;
use crate::match_state::MatchState;
use crate::weapon_system::player_projectile;
use crate::world_setup::{self, ProjectileSpawn};

const SPECIAL_VOLUME: f64 = 0.7;

/// Perform the special attack of `weapon` from `source`. Cooldown gating is
/// the caller's job.
pub fn run(
    world: &mut World,
    weapon: WeaponType,
    source: Position,
    settings: &GameSettings,
    match_state: &mut MatchState,
    now_ms: f64,
    events: &mut Vec<PresentationEvent>,
) {
    let damage = settings
        .weapons
        .get(weapon)
        .map(|config| config.damage)
        .unwrap_or(1.0);

    match weapon {
        WeaponType::Basic => spread_fan(world, source, damage, settings.bullet_speed, now_ms),
        WeaponType::Plasma => plasma_blast(world, source, settings, match_state, events),
        WeaponType::Missile => missile_swarm(world, source, damage, now_ms),
        WeaponType::Beam => beam_strike(world, source, settings, match_state, events),
    }

    events.push(PresentationEvent::sound(
        format!("{}-sound", weapon.key()),
        SPECIAL_VOLUME,
        0.0,
    ));
    debug!(%weapon, "special attack");
}

/// Straight shots every 15 degrees across +/-60 degrees of vertical.
fn spread_fan(world: &mut World, source: Position, damage: f64, speed: f64, now_ms: f64) {
    for offset in (-SPREAD_FAN_HALF_ANGLE_DEG..=SPREAD_FAN_HALF_ANGLE_DEG)
        .step_by(SPREAD_FAN_STEP_DEG as usize)
    {
        let angle = (offset as f64).to_radians() - FRAC_PI_2;
        world_setup::spawn_projectile(
            world,
            ProjectileSpawn {
                position: source,
                velocity: Velocity::from_angle(angle, speed),
                projectile: player_projectile(
                    WeaponType::Basic,
                    damage,
                    now_ms,
                    1.0,
                    ProjectileBehavior::Straight,
                ),
            },
        );
    }
}

/// Damage every live enemy within the blast radius and push it away from
/// the center, harder the closer it was.
fn plasma_blast(
    world: &mut World,
    source: Position,
    settings: &GameSettings,
    match_state: &mut MatchState,
    events: &mut Vec<PresentationEvent>,
) {
    let center = source.offset(0.0, -PLASMA_BLAST_FORWARD_OFFSET);
    let color = settings
        .weapons
        .get(WeaponType::Plasma)
        .map(|config| config.particle_color)
        .unwrap_or(Color(0xff00ff));
    events.push(PresentationEvent::effect(
        EffectKind::PlasmaBlast,
        center,
        color,
        2.0,
    ));

    let in_range: Vec<(Entity, f64, f64)> = live_enemies(world)
        .into_iter()
        .filter_map(|(entity, pos)| {
            let dist = center.distance_to(&pos);
            (dist < PLASMA_BLAST_RADIUS).then(|| (entity, center.angle_to(&pos), dist))
        })
        .collect();

    for (entity, angle, dist) in in_range {
        damage_enemy(world, entity, PLASMA_BLAST_DAMAGE, events, match_state);
        if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
            let force = (PLASMA_BLAST_RADIUS - dist) * PLASMA_BLAST_IMPULSE_FACTOR;
            let impulse = Velocity::from_angle(angle, force);
            vel.x += impulse.x;
            vel.y += impulse.y;
        }
    }

    events.push(PresentationEvent::Shake {
        duration_ms: 300.0,
        intensity: 0.01,
    });
}

/// One homing missile per distinct target, nearest first.
fn missile_swarm(world: &mut World, source: Position, damage: f64, now_ms: f64) {
    let targets = homing::nearest_enemies(world, &source, MISSILE_SWARM_MAX_TARGETS);
    for target in targets {
        world_setup::spawn_projectile(
            world,
            ProjectileSpawn {
                position: source,
                velocity: Velocity::new(0.0, -MISSILE_SWARM_SPEED),
                projectile: player_projectile(
                    WeaponType::Missile,
                    damage,
                    now_ms,
                    1.0,
                    ProjectileBehavior::Homing {
                        target: Some(target),
                        turn_rate: MISSILE_SWARM_TURN_RATE,
                        reacquire: false,
                    },
                ),
            },
        );
    }
}

/// Heavy damage to every live enemy in the ship's column.
fn beam_strike(
    world: &mut World,
    source: Position,
    settings: &GameSettings,
    match_state: &mut MatchState,
    events: &mut Vec<PresentationEvent>,
) {
    let color = settings
        .weapons
        .get(WeaponType::Beam)
        .map(|config| config.particle_color)
        .unwrap_or(Color(0x66ff66));

    let mut y = 0.0;
    while y < BEAM_STRIKE_LENGTH {
        events.push(PresentationEvent::effect(
            EffectKind::LaserImpact,
            source.offset(0.0, -y),
            color,
            1.0,
        ));
        y += 20.0;
    }

    let hits: Vec<Entity> = live_enemies(world)
        .into_iter()
        .filter(|(_, pos)| (pos.x - source.x).abs() < BEAM_STRIKE_HALF_WIDTH)
        .map(|(entity, _)| entity)
        .collect();
    for entity in hits {
        damage_enemy(world, entity, BEAM_STRIKE_DAMAGE, events, match_state);
    }

    events.push(PresentationEvent::Shake {
        duration_ms: 500.0,
        intensity: 0.005,
    });
}

fn live_enemies(world: &World) -> Vec<(Entity, Position)> {
    world
        .query::<(&Enemy, &Position, &Active)>()
        .iter()
        .filter(|(_, (enemy, _, active))| active.0 && enemy.phase != EnemyPhase::Destroyed)
        .map(|(entity, (_, pos, _))| (entity, *pos))
        .collect()
}
