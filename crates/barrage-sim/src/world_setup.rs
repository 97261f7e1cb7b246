//! Entity spawn factories.
//!
//! Creates the player ship, enemies and projectiles with their component
//! bundles. Every entity carries an `Active` flag.

use hecs::{Entity, World};

use barrage_core::components::*;
use barrage_core::constants::*;
use barrage_core::enums::*;
use barrage_core::types::{Position, Velocity};

use barrage_enemy_ai::profiles::get_profile;

/// A projectile ready to be spawned.
#[derive(Debug, Clone)]
pub struct ProjectileSpawn {
    pub position: Position,
    pub velocity: Velocity,
    pub projectile: Projectile,
}

impl ProjectileSpawn {
    /// Hitbox grows with the visual scale.
    pub fn hitbox(&self) -> Hitbox {
        Hitbox {
            half_width: BULLET_HALF_WIDTH * self.projectile.scale,
            half_height: BULLET_HALF_HEIGHT * self.projectile.scale,
        }
    }
}

/// Spawn the player ship at the bottom of the field.
pub fn spawn_player(world: &mut World, field_width: f64, field_height: f64, lives: u32) -> Entity {
    let spawn = Position::new(
        field_width / 2.0,
        field_height - (FIELD_HEIGHT - PLAYER_SPAWN_Y),
    );
    world.spawn((
        PlayerShip {
            lives,
            invulnerable: false,
            invulnerable_until_ms: 0.0,
        },
        spawn,
        Velocity::default(),
        Hitbox {
            half_width: PLAYER_HALF_EXTENT,
            half_height: PLAYER_HALF_EXTENT,
        },
        Active(true),
    ))
}

/// Spawn an enemy with the stats of its variant. With a tween it starts in
/// `Entering`; without one it is immediately `Active`.
pub fn spawn_enemy(
    world: &mut World,
    variant: EnemyVariant,
    position: Position,
    entry: Option<Tween>,
) -> Entity {
    let profile = get_profile(variant);
    let phase = if entry.is_some() {
        EnemyPhase::Entering
    } else {
        EnemyPhase::Active
    };
    let enemy = Enemy {
        variant,
        health: profile.health,
        score_value: profile.score_value,
        fire_interval_ms: profile.fire_interval_ms,
        projectile_speed: profile.projectile_speed,
        tint: profile.tint,
        phase,
    };
    let hitbox = Hitbox {
        half_width: profile.half_extent(),
        half_height: profile.half_extent(),
    };

    let entity = world.spawn((enemy, position, Velocity::default(), hitbox, Active(true)));
    if let Some(tween) = entry {
        let _ = world.insert_one(entity, tween);
    }
    entity
}

pub fn spawn_projectile(world: &mut World, spawn: ProjectileSpawn) -> Entity {
    let hitbox = spawn.hitbox();
    world.spawn((
        spawn.projectile,
        spawn.position,
        spawn.velocity,
        hitbox,
        Active(true),
    ))
}
