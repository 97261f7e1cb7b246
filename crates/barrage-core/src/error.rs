//! Error types for command validation and settings loading.

use thiserror::Error;

use crate::enums::{GamePhase, WeaponType};

/// A player command that was rejected without changing any state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    /// The weapon key does not name any weapon type.
    #[error("unknown weapon '{0}'")]
    UnknownWeapon(String),

    /// The weapon type exists but is not in the loaded catalog.
    #[error("weapon {0} is not in the catalog")]
    WeaponUnavailable(WeaponType),

    /// Special attack still recharging.
    #[error("special attack recharging for another {remaining_ms:.0}ms")]
    SpecialNotReady { remaining_ms: f64 },

    /// The player ship is destroyed or missing.
    #[error("player is not active")]
    PlayerInactive,

    /// Command not valid in the current match phase.
    #[error("command not allowed while {0:?}")]
    WrongPhase(GamePhase),
}

/// Failure to load `GameSettings`.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}
