//! Match snapshot: the complete visible state handed to the presentation
//! layer after each frame.

use serde::{Deserialize, Serialize};

use crate::components::ProjectileBehavior;
use crate::enums::*;
use crate::events::PresentationEvent;
use crate::types::{Color, Position, SimTime, Velocity};

/// Complete match state broadcast after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub hud: HudView,
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    /// Requests produced during this frame, in emission order.
    pub events: Vec<PresentationEvent>,
}

/// Score, lives, weapon and cooldown readouts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub current_weapon: WeaponType,
    pub weapon_name: String,
    pub fire_ready: bool,
    pub special_ready: bool,
    /// 0.0 right after a special attack, 1.0 when recharged.
    pub special_charge: f64,
    pub waves_spawned: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub active: bool,
    pub invulnerable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    pub variant: EnemyVariant,
    pub phase: EnemyPhase,
    pub health: f64,
    pub tint: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub velocity: Velocity,
    pub owner: Owner,
    pub weapon: Option<WeaponType>,
    pub behavior: ProjectileBehavior,
    pub scale: f64,
}
