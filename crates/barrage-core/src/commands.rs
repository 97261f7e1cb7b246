//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are validated and applied at the next frame boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Match flow ---
    /// Start a fresh match from the menu or the game-over screen.
    StartMatch,
    /// Leave the game-over screen.
    ReturnToMenu,

    // --- Ship control ---
    /// Movement axes, each in [-1, 1]. Held until changed.
    SetMovement { x: f64, y: f64 },
    /// Hold or release the trigger.
    SetFiring { firing: bool },
    /// Select a weapon by catalog key ("basic", "plasma", "missile", "beam").
    SwitchWeapon { weapon: String },
    /// Fire the current weapon's special attack.
    TriggerSpecial,
}
