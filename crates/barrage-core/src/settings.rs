//! Tunable game settings, loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::EnemyVariant;
use crate::error::SettingsError;
use crate::weapons::WeaponTable;

/// Retunable match configuration. `Default` is the stock arcade tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub field_width: f64,
    pub field_height: f64,
    /// Player ship speed (u/s).
    pub player_speed: f64,
    /// Speed of the basic spread-fan special shots.
    pub bullet_speed: f64,
    /// Bonus credited when a player projectile destroys an enemy.
    pub score_per_kill: u32,
    pub initial_lives: u32,
    /// Variant per formation row, front to back. Rows past the end reuse the last.
    pub formation_variants: Vec<EnemyVariant>,
    pub weapons: WeaponTable,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            player_speed: 300.0,
            bullet_speed: 500.0,
            score_per_kill: 100,
            initial_lives: 3,
            formation_variants: vec![
                EnemyVariant::Basic,
                EnemyVariant::Bomber,
                EnemyVariant::Elite,
            ],
            weapons: WeaponTable::stock(),
        }
    }
}

impl GameSettings {
    /// Parse settings from JSON. Missing fields fall back to the stock tuning.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: GameSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.field_width <= 2.0 * FORMATION_MARGIN_X || self.field_height <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "play field {}x{} is too small",
                self.field_width, self.field_height
            )));
        }
        if self.formation_variants.is_empty() {
            return Err(SettingsError::Invalid(
                "formation_variants must name at least one variant".into(),
            ));
        }
        if self.initial_lives == 0 {
            return Err(SettingsError::Invalid("initial_lives must be positive".into()));
        }
        Ok(())
    }

    /// Variant for a formation row: `variants[min(row, last)]`.
    pub fn variant_for_row(&self, row: usize) -> EnemyVariant {
        let last = self.formation_variants.len().saturating_sub(1);
        self.formation_variants
            .get(row.min(last))
            .copied()
            .unwrap_or(EnemyVariant::Basic)
    }
}
