//! Enumeration types used throughout the simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommandError;

/// Player weapon type. Each has one entry in the weapon catalog.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WeaponType {
    /// Straight single shot.
    #[default]
    Basic,
    /// Oversized straight shot with a particle trail.
    Plasma,
    /// Twin homing missiles.
    Missile,
    /// Continuous hit-scan beam.
    Beam,
}

impl WeaponType {
    pub const ALL: [WeaponType; 4] = [
        WeaponType::Basic,
        WeaponType::Plasma,
        WeaponType::Missile,
        WeaponType::Beam,
    ];

    /// Catalog key, also used to build sound ids.
    pub fn key(self) -> &'static str {
        match self {
            WeaponType::Basic => "basic",
            WeaponType::Plasma => "plasma",
            WeaponType::Missile => "missile",
            WeaponType::Beam => "beam",
        }
    }
}

impl fmt::Display for WeaponType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for WeaponType {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeaponType::ALL
            .into_iter()
            .find(|w| w.key() == s)
            .ok_or_else(|| CommandError::UnknownWeapon(s.to_string()))
    }
}

/// Enemy subtype with a fixed stat profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyVariant {
    Basic,
    Bomber,
    Elite,
    Boss,
}

/// Enemy lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyPhase {
    /// Following a scripted entry trajectory. Never fires.
    #[default]
    Entering,
    /// In position, firing on its periodic timer.
    Active,
    /// Transient random relocation while Active. Keeps firing.
    Wandering,
    /// Health crossed zero, escaped, or rammed the player.
    Destroyed,
}

/// Side that fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Enemy,
}

/// Top-level match phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// Kind of visual effect requested from the effect collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Projectile struck something.
    Impact,
    /// Entity destroyed.
    Explosion,
    /// Sparks on a surviving enemy.
    Damage,
    /// Per-frame particle trail behind a projectile.
    BulletTrail,
    /// Smoke behind a missile.
    SmokeTrail,
    /// Beam column from the ship upward.
    BeamGlow,
    /// Beam contact point.
    LaserImpact,
    /// Plasma special-attack blast.
    PlasmaBlast,
    /// Player hit but alive.
    PlayerFlash,
}

/// Easing curve for scripted trajectories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    /// Sine ease in-out (swoop entries, wandering).
    SineInOut,
    /// Back ease out, slight overshoot (drop entries).
    BackOut,
}
