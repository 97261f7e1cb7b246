//! Held-trigger firing of the current weapon.

use hecs::{Entity, World};

use barrage_core::components::{Active, Enemy};
use barrage_core::enums::{EffectKind, EnemyPhase, WeaponType};
use barrage_core::events::PresentationEvent;
use barrage_core::types::Position;
use barrage_core::weapons::WeaponTable;

use crate::damage::damage_enemy;
use crate::match_state::MatchState;
use crate::systems::player_control::player_position;
use crate::weapon_system::{BeamSweep, WeaponSystem};
use crate::world_setup;

/// Fire the current weapon while the trigger is held, then refresh the
/// fire-ready readout.
pub fn run(
    world: &mut World,
    weapon_system: &mut WeaponSystem,
    match_state: &mut MatchState,
    catalog: &WeaponTable,
    firing: bool,
    now_ms: f64,
    events: &mut Vec<PresentationEvent>,
) {
    let weapon = match_state.current_weapon;
    let source = player_position(world);

    let volley = match source {
        Some(source) if firing => weapon_system.fire(catalog, weapon, source, now_ms, world),
        _ => None,
    };
    let beam_started = weapon_system.engage_beam(
        volley
            .as_ref()
            .is_some_and(|v| v.weapon == WeaponType::Beam),
    );

    if let Some(volley) = volley {
        if let Some(config) = catalog.get(volley.weapon) {
            // The beam sound loops while held; request it once when it engages.
            if volley.beam.is_none() || beam_started {
                events.push(PresentationEvent::sound(
                    config.sound.clone(),
                    config.volume,
                    0.0,
                ));
            }
        }
        for spawn in volley.projectiles {
            world_setup::spawn_projectile(world, spawn);
        }
        if let Some(sweep) = volley.beam {
            apply_beam(world, &sweep, catalog, match_state, events);
        }
    }

    match_state.fire_cooldown_ready = catalog
        .get(weapon)
        .is_some_and(|config| weapon_system.is_ready(weapon, config, now_ms));
}

/// Hit-scan every live enemy above the ship within the beam's half-width.
fn apply_beam(
    world: &mut World,
    sweep: &BeamSweep,
    catalog: &WeaponTable,
    match_state: &mut MatchState,
    events: &mut Vec<PresentationEvent>,
) {
    let color = catalog
        .get(WeaponType::Beam)
        .map(|config| config.particle_color)
        .unwrap_or_default();
    events.push(PresentationEvent::effect(
        EffectKind::BeamGlow,
        sweep.origin,
        color,
        1.0,
    ));

    let hits: Vec<(Entity, Position)> = world
        .query::<(&Enemy, &Position, &Active)>()
        .iter()
        .filter(|(_, (enemy, pos, active))| {
            active.0
                && enemy.phase != EnemyPhase::Destroyed
                && pos.y < sweep.origin.y
                && (pos.x - sweep.origin.x).abs() < sweep.half_width
        })
        .map(|(entity, (_, pos, _))| (entity, *pos))
        .collect();

    for (entity, pos) in hits {
        events.push(PresentationEvent::effect(
            EffectKind::LaserImpact,
            Position::new(sweep.origin.x, pos.y),
            color,
            1.0,
        ));
        damage_enemy(world, entity, sweep.damage, events, match_state);
    }
}
