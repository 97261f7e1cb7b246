//! Player weapon firing.
//!
//! Looks weapon configs up in the catalog, enforces the per-weapon cooldown
//! and produces the projectiles (or beam sweep) for one trigger pull.

use std::collections::HashMap;

use hecs::World;

use barrage_core::components::{Projectile, ProjectileBehavior};
use barrage_core::constants::*;
use barrage_core::enums::{Owner, WeaponType};
use barrage_core::types::{Position, Velocity};
use barrage_core::weapons::{WeaponConfig, WeaponTable};

use crate::homing;
use crate::world_setup::ProjectileSpawn;

/// Instantaneous hit-scan column fired by the beam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamSweep {
    pub origin: Position,
    pub half_width: f64,
    pub damage: f64,
}

/// Everything one successful trigger pull produced.
#[derive(Debug, Clone)]
pub struct Volley {
    pub weapon: WeaponType,
    pub projectiles: Vec<ProjectileSpawn>,
    pub beam: Option<BeamSweep>,
}

#[derive(Debug, Default)]
pub struct WeaponSystem {
    last_fired_ms: HashMap<WeaponType, f64>,
    beam_engaged: bool,
}

impl WeaponSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `weapon` may fire at `now_ms`. Never-fired weapons are always ready.
    pub fn is_ready(&self, weapon: WeaponType, config: &WeaponConfig, now_ms: f64) -> bool {
        match self.last_fired_ms.get(&weapon) {
            Some(last) => now_ms >= last + config.fire_rate_ms,
            None => true,
        }
    }

    /// Fire `weapon` from `source`. Returns `None` (and changes nothing) when
    /// the weapon is not in the catalog or still cooling down.
    pub fn fire(
        &mut self,
        catalog: &WeaponTable,
        weapon: WeaponType,
        source: Position,
        now_ms: f64,
        world: &World,
    ) -> Option<Volley> {
        let config = catalog.get(weapon)?;
        if !self.is_ready(weapon, config, now_ms) {
            return None;
        }
        self.last_fired_ms.insert(weapon, now_ms);

        let mut volley = Volley {
            weapon,
            projectiles: Vec::new(),
            beam: None,
        };

        match weapon {
            WeaponType::Basic => {
                volley.projectiles.push(forward_shot(
                    weapon,
                    config,
                    source,
                    now_ms,
                    1.0,
                    ProjectileBehavior::Straight,
                ));
            }
            WeaponType::Plasma => {
                volley.projectiles.push(forward_shot(
                    weapon,
                    config,
                    source,
                    now_ms,
                    PLASMA_SCALE,
                    ProjectileBehavior::Trailing {
                        color: config.particle_color,
                    },
                ));
            }
            WeaponType::Missile => {
                for side in [-1.0, 1.0] {
                    let position = source.offset(side * MISSILE_LATERAL_OFFSET, 0.0);
                    let target = homing::acquire_ahead(world, &position, MISSILE_SEEK_RADIUS);
                    volley.projectiles.push(ProjectileSpawn {
                        position,
                        velocity: Velocity::new(
                            side * MISSILE_OUTWARD_SPEED,
                            -config.projectile_speed,
                        ),
                        projectile: player_projectile(
                            weapon,
                            config.damage,
                            now_ms,
                            1.0,
                            ProjectileBehavior::Homing {
                                target,
                                turn_rate: MISSILE_TURN_RATE,
                                reacquire: true,
                            },
                        ),
                    });
                }
            }
            WeaponType::Beam => {
                volley.beam = Some(BeamSweep {
                    origin: source,
                    half_width: BEAM_HALF_WIDTH,
                    damage: config.damage,
                });
            }
        }

        Some(volley)
    }

    /// Track whether the beam is being held. Returns true on the frame it engages.
    pub fn engage_beam(&mut self, engaged: bool) -> bool {
        let started = engaged && !self.beam_engaged;
        self.beam_engaged = engaged;
        started
    }

    /// Forget all cooldowns (new match).
    pub fn reset(&mut self) {
        self.last_fired_ms.clear();
        self.beam_engaged = false;
    }
}

/// A player projectile record with the standard lifetime.
pub fn player_projectile(
    weapon: WeaponType,
    damage: f64,
    now_ms: f64,
    scale: f64,
    behavior: ProjectileBehavior,
) -> Projectile {
    Projectile {
        owner: Owner::Player,
        weapon: Some(weapon),
        damage,
        spawn_ms: now_ms,
        ttl_ms: PROJECTILE_TTL_MS,
        behavior,
        scale,
    }
}

fn forward_shot(
    weapon: WeaponType,
    config: &WeaponConfig,
    source: Position,
    now_ms: f64,
    scale: f64,
    behavior: ProjectileBehavior,
) -> ProjectileSpawn {
    ProjectileSpawn {
        position: source.offset(0.0, -MUZZLE_OFFSET),
        velocity: Velocity::new(0.0, -config.projectile_speed),
        projectile: player_projectile(weapon, config.damage, now_ms, scale, behavior),
    }
}
