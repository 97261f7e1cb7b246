//! Variant-specific stat profiles.

use barrage_core::constants::ENEMY_BASE_HALF_EXTENT;
use barrage_core::enums::EnemyVariant;
use barrage_core::types::Color;

/// Stat profile for an enemy variant.
pub struct VariantProfile {
    pub health: f64,
    /// Visual weight; also scales the hitbox.
    pub scale: f64,
    pub score_value: u32,
    /// Base time between shots (ms), before jitter.
    pub fire_interval_ms: f64,
    pub projectile_speed: f64,
    pub tint: Color,
    /// Size of the destruction explosion.
    pub explosion_scale: f64,
    /// Volume of the destruction sound.
    pub explosion_volume: f64,
}

impl VariantProfile {
    pub fn half_extent(&self) -> f64 {
        ENEMY_BASE_HALF_EXTENT * self.scale
    }
}

/// Get the stat profile for a given variant.
pub fn get_profile(variant: EnemyVariant) -> VariantProfile {
    match variant {
        EnemyVariant::Basic => VariantProfile {
            health: 2.0,
            scale: 0.8,
            score_value: 100,
            fire_interval_ms: 3000.0,
            projectile_speed: 200.0,
            tint: Color(0x00ffff),
            explosion_scale: 1.0,
            explosion_volume: 0.4,
        },
        EnemyVariant::Bomber => VariantProfile {
            health: 4.0,
            scale: 1.0,
            score_value: 200,
            fire_interval_ms: 2500.0,
            projectile_speed: 220.0,
            tint: Color(0xff6600),
            explosion_scale: 1.0,
            explosion_volume: 0.4,
        },
        EnemyVariant::Elite => VariantProfile {
            health: 6.0,
            scale: 1.2,
            score_value: 300,
            fire_interval_ms: 2000.0,
            projectile_speed: 250.0,
            tint: Color(0xff00ff),
            explosion_scale: 1.5,
            explosion_volume: 0.4,
        },
        EnemyVariant::Boss => VariantProfile {
            health: 30.0,
            scale: 2.0,
            score_value: 1000,
            fire_interval_ms: 1000.0,
            projectile_speed: 300.0,
            tint: Color(0xff0000),
            explosion_scale: 2.0,
            explosion_volume: 0.8,
        },
    }
}
