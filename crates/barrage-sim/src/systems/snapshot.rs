//! Snapshot system: builds a MatchSnapshot from the world. Read-only.

use hecs::World;

use barrage_core::components::*;
use barrage_core::enums::GamePhase;
use barrage_core::events::PresentationEvent;
use barrage_core::state::*;
use barrage_core::types::{Position, SimTime, Velocity};
use barrage_core::weapons::WeaponTable;

use crate::match_state::MatchState;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    match_state: &MatchState,
    catalog: &WeaponTable,
    waves_spawned: u32,
    events: Vec<PresentationEvent>,
) -> MatchSnapshot {
    let weapon_name = catalog
        .get(match_state.current_weapon)
        .map(|config| config.name.clone())
        .unwrap_or_default();
    let in_match = match_state.phase != GamePhase::Menu;

    MatchSnapshot {
        time: *time,
        phase: match_state.phase,
        hud: HudView {
            score: match_state.score,
            lives: match_state.lives,
            level: match_state.level,
            current_weapon: match_state.current_weapon,
            weapon_name,
            fire_ready: in_match && match_state.fire_cooldown_ready,
            special_ready: in_match && match_state.special_attack_ready,
            special_charge: match_state.special_charge(time.now_ms),
            waves_spawned,
        },
        player: build_player(world),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        events,
    }
}

fn build_player(world: &World) -> Option<PlayerView> {
    world
        .query::<(&PlayerShip, &Position, &Active)>()
        .iter()
        .next()
        .map(|(_, (ship, pos, active))| PlayerView {
            position: *pos,
            active: active.0,
            invulnerable: ship.invulnerable,
        })
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Enemy, &Position, &Active)>()
        .iter()
        .filter(|(_, (_, _, active))| active.0)
        .map(|(_, (enemy, pos, _))| EnemyView {
            position: *pos,
            variant: enemy.variant,
            phase: enemy.phase,
            health: enemy.health,
            tint: enemy.tint,
        })
        .collect()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position, &Velocity, &Active)>()
        .iter()
        .filter(|(_, (_, _, _, active))| active.0)
        .map(|(_, (projectile, pos, vel, _))| ProjectileView {
            position: *pos,
            velocity: *vel,
            owner: projectile.owner,
            weapon: projectile.weapon,
            behavior: projectile.behavior,
            scale: projectile.scale,
        })
        .collect()
}
