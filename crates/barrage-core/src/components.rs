//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Color, EntityRef, Position};

/// Axis-aligned bounding half-extents used for overlap tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub half_width: f64,
    pub half_height: f64,
}

/// Active flag shared by every entity. Inactive entities are skipped by all
/// update and collision passes and despawned by cleanup at the end of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Active(pub bool);

/// The player's ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerShip {
    /// Mirror of the match's remaining lives.
    pub lives: u32,
    pub invulnerable: bool,
    /// Match time (ms) at which the current invulnerability window ends.
    pub invulnerable_until_ms: f64,
}

/// Enemy stats and lifecycle state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub variant: EnemyVariant,
    /// Remaining health. Stored as f64 so per-frame beam damage accumulates.
    pub health: f64,
    pub score_value: u32,
    pub fire_interval_ms: f64,
    pub projectile_speed: f64,
    pub tint: Color,
    pub phase: EnemyPhase,
}

/// Scripted position interpolation (entry trajectories, wandering).
/// While attached, it owns the entity's position and velocity integration is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub from: Position,
    pub to: Position,
    /// Match time (ms) at which the tween was created.
    pub start_ms: f64,
    /// Wait before motion begins (staggered drops).
    pub delay_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

/// Per-update behavior of a projectile, dispatched by the projectile system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProjectileBehavior {
    /// Constant velocity.
    Straight,
    /// Rotates its heading toward a target by at most `turn_rate` radians per update.
    Homing {
        target: Option<EntityRef>,
        turn_rate: f64,
        /// Search for a new target when the held one is gone.
        reacquire: bool,
    },
    /// Straight, requesting a particle trail every update.
    Trailing { color: Color },
}

/// A bullet or missile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub owner: Owner,
    /// Weapon that fired it; `None` for enemy shots.
    pub weapon: Option<WeaponType>,
    pub damage: f64,
    pub spawn_ms: f64,
    pub ttl_ms: f64,
    pub behavior: ProjectileBehavior,
    /// Sprite scale. The collision box scales with it too.
    pub scale: f64,
}

impl Projectile {
    /// Whether the projectile has reached the end of its lifetime.
    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms - self.spawn_ms >= self.ttl_ms
    }
}
