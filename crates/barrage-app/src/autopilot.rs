//! Demo autopilot: turns snapshots into player commands so the headless
//! runner plays a real match.
//!
//! Strategy: start the match, hold the trigger, dodge enemy shots about to
//! land, otherwise line up under the nearest enemy. Cycles weapons on a timer
//! and spends the special attack whenever a crowd is on screen.

use barrage_core::commands::PlayerCommand;
use barrage_core::enums::{GamePhase, Owner};
use barrage_core::state::{MatchSnapshot, PlayerView};

/// Match time between weapon changes.
const WEAPON_ROTATION_MS: f64 = 10_000.0;
/// Enemies on screen before the special is worth spending.
const SPECIAL_CROWD: usize = 3;
/// How far above the ship an enemy shot counts as incoming.
const DODGE_LOOKAHEAD: f64 = 120.0;
const DODGE_HALF_WIDTH: f64 = 30.0;
/// Horizontal slack before the ship bothers to move.
const ALIGN_DEADBAND: f64 = 8.0;

pub struct Autopilot {
    weapons: Vec<String>,
    weapon_index: usize,
    next_rotation_ms: f64,
    started: bool,
    firing: bool,
    axis: f64,
}

impl Autopilot {
    /// `weapons` are catalog keys in rotation order.
    pub fn new(weapons: Vec<String>) -> Self {
        Self {
            weapons,
            weapon_index: 0,
            next_rotation_ms: WEAPON_ROTATION_MS,
            started: false,
            firing: false,
            axis: 0.0,
        }
    }

    pub fn next_commands(&mut self, snapshot: &MatchSnapshot) -> Vec<PlayerCommand> {
        match snapshot.phase {
            GamePhase::Menu if !self.started => {
                self.started = true;
                vec![PlayerCommand::StartMatch]
            }
            GamePhase::Playing => self.play(snapshot),
            _ => Vec::new(),
        }
    }

    fn play(&mut self, snapshot: &MatchSnapshot) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();
        let Some(player) = snapshot.player.as_ref().filter(|p| p.active) else {
            return commands;
        };

        if !self.firing {
            self.firing = true;
            commands.push(PlayerCommand::SetFiring { firing: true });
        }

        let axis = dodge_axis(snapshot, player).unwrap_or_else(|| align_axis(snapshot, player));
        if axis != self.axis {
            self.axis = axis;
            commands.push(PlayerCommand::SetMovement { x: axis, y: 0.0 });
        }

        if snapshot.time.now_ms >= self.next_rotation_ms && !self.weapons.is_empty() {
            self.next_rotation_ms = snapshot.time.now_ms + WEAPON_ROTATION_MS;
            self.weapon_index = (self.weapon_index + 1) % self.weapons.len();
            commands.push(PlayerCommand::SwitchWeapon {
                weapon: self.weapons[self.weapon_index].clone(),
            });
        }

        if snapshot.hud.special_ready && snapshot.enemies.len() >= SPECIAL_CROWD {
            commands.push(PlayerCommand::TriggerSpecial);
        }

        commands
    }
}

/// Sidestep away from the closest enemy shot about to hit the ship.
fn dodge_axis(snapshot: &MatchSnapshot, player: &PlayerView) -> Option<f64> {
    snapshot
        .projectiles
        .iter()
        .filter(|p| p.owner == Owner::Enemy)
        .filter(|p| {
            let above = player.position.y - p.position.y;
            (0.0..DODGE_LOOKAHEAD).contains(&above)
                && (p.position.x - player.position.x).abs() < DODGE_HALF_WIDTH
        })
        .min_by(|a, b| b.position.y.total_cmp(&a.position.y))
        .map(|shot| {
            if shot.position.x > player.position.x {
                -1.0
            } else {
                1.0
            }
        })
}

/// Drift under the horizontally nearest enemy.
fn align_axis(snapshot: &MatchSnapshot, player: &PlayerView) -> f64 {
    let target = snapshot
        .enemies
        .iter()
        .map(|e| e.position.x - player.position.x)
        .min_by(|a, b| a.abs().total_cmp(&b.abs()));
    match target {
        Some(dx) if dx.abs() > ALIGN_DEADBAND => dx.signum(),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barrage_core::components::ProjectileBehavior;
    use barrage_core::enums::{EnemyPhase, EnemyVariant};
    use barrage_core::state::{EnemyView, ProjectileView};
    use barrage_core::types::{Color, Position, Velocity};

    fn playing_snapshot(player_x: f64) -> MatchSnapshot {
        MatchSnapshot {
            phase: GamePhase::Playing,
            player: Some(PlayerView {
                position: Position::new(player_x, 520.0),
                active: true,
                invulnerable: false,
            }),
            ..MatchSnapshot::default()
        }
    }

    fn enemy_at(x: f64, y: f64) -> EnemyView {
        EnemyView {
            position: Position::new(x, y),
            variant: EnemyVariant::Basic,
            phase: EnemyPhase::Active,
            health: 2.0,
            tint: Color(0x00ffff),
        }
    }

    #[test]
    fn test_starts_match_once() {
        let mut pilot = Autopilot::new(vec!["basic".into()]);
        let menu = MatchSnapshot::default();
        assert!(matches!(
            pilot.next_commands(&menu).as_slice(),
            [PlayerCommand::StartMatch]
        ));
        assert!(pilot.next_commands(&menu).is_empty());
    }

    #[test]
    fn test_moves_toward_nearest_enemy_and_fires() {
        let mut pilot = Autopilot::new(vec!["basic".into()]);
        let mut snap = playing_snapshot(400.0);
        snap.enemies = vec![enemy_at(250.0, 100.0), enemy_at(700.0, 100.0)];

        let commands = pilot.next_commands(&snap);
        assert!(commands
            .iter()
            .any(|c| matches!(c, PlayerCommand::SetFiring { firing: true })));
        assert!(commands
            .iter()
            .any(|c| matches!(c, PlayerCommand::SetMovement { x, .. } if *x == -1.0)));

        // Same situation next frame: nothing new to say.
        assert!(pilot.next_commands(&snap).is_empty());
    }

    #[test]
    fn test_dodges_incoming_shot() {
        let mut pilot = Autopilot::new(vec!["basic".into()]);
        let mut snap = playing_snapshot(400.0);
        snap.enemies = vec![enemy_at(100.0, 100.0)];
        snap.projectiles = vec![ProjectileView {
            position: Position::new(390.0, 470.0),
            velocity: Velocity::new(0.0, 200.0),
            owner: Owner::Enemy,
            weapon: None,
            behavior: ProjectileBehavior::Straight,
            scale: 1.0,
        }];

        let commands = pilot.next_commands(&snap);
        assert!(commands
            .iter()
            .any(|c| matches!(c, PlayerCommand::SetMovement { x, .. } if *x == 1.0)));
    }

    #[test]
    fn test_rotates_weapons_and_spends_special() {
        let mut pilot = Autopilot::new(vec!["basic".into(), "plasma".into()]);
        let mut snap = playing_snapshot(400.0);
        snap.time.now_ms = WEAPON_ROTATION_MS;
        snap.hud.special_ready = true;
        snap.enemies = (0..4).map(|i| enemy_at(400.0 + i as f64, 100.0)).collect();

        let commands = pilot.next_commands(&snap);
        assert!(commands.iter().any(
            |c| matches!(c, PlayerCommand::SwitchWeapon { weapon } if weapon == "plasma")
        ));
        assert!(commands
            .iter()
            .any(|c| matches!(c, PlayerCommand::TriggerSpecial)));
    }
}
