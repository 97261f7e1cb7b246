//! Weapon catalog: immutable per-weapon configuration looked up by type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::WeaponType;
use crate::types::Color;

/// Static configuration of one weapon type. Never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponConfig {
    /// Display name.
    pub name: String,
    /// Damage per hit (per frame for the beam).
    pub damage: f64,
    /// Minimum time between shots. 0 means continuous.
    pub fire_rate_ms: f64,
    pub projectile_speed: f64,
    pub color: Color,
    pub particle_color: Color,
    /// Sound id requested on every shot.
    pub sound: String,
    /// Volume of the shot sound.
    pub volume: f64,
}

/// Weapon table keyed by type. A type missing from the table cannot be fired
/// or selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeaponTable {
    entries: BTreeMap<WeaponType, WeaponConfig>,
}

impl WeaponTable {
    pub fn new(entries: BTreeMap<WeaponType, WeaponConfig>) -> Self {
        Self { entries }
    }

    /// The stock four-weapon loadout.
    pub fn stock() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(
            WeaponType::Basic,
            config("Basic Laser", 1.0, 250.0, 500.0, 0x00ffff, "laser-sound", 0.3),
        );
        entries.insert(
            WeaponType::Plasma,
            config("Plasma Cannon", 2.0, 500.0, 400.0, 0xff00ff, "plasma-sound", 0.4),
        );
        entries.insert(
            WeaponType::Missile,
            config("Homing Missiles", 3.0, 1000.0, 300.0, 0xff6600, "missile-sound", 0.5),
        );
        entries.insert(
            WeaponType::Beam,
            config("Beam Laser", 0.1, 0.0, 800.0, 0x66ff66, "laser-sound", 0.3),
        );
        Self { entries }
    }

    pub fn get(&self, weapon: WeaponType) -> Option<&WeaponConfig> {
        self.entries.get(&weapon)
    }

    pub fn contains(&self, weapon: WeaponType) -> bool {
        self.entries.contains_key(&weapon)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&WeaponType, &WeaponConfig)> {
        self.entries.iter()
    }
}

impl Default for WeaponTable {
    fn default() -> Self {
        Self::stock()
    }
}

fn config(
    name: &str,
    damage: f64,
    fire_rate_ms: f64,
    projectile_speed: f64,
    color: u32,
    sound: &str,
    volume: f64,
) -> WeaponConfig {
    WeaponConfig {
        name: name.to_string(),
        damage,
        fire_rate_ms,
        projectile_speed,
        color: Color(color),
        particle_color: Color(color),
        sound: sound.to_string(),
        volume,
    }
}
