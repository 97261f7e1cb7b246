//! Enemy damage and destruction.
//!
//! Every damage source (projectiles, beam, specials) goes through
//! [`damage_enemy`], so an enemy credits its score exactly once: on the hit
//! that first takes its health to zero or below.

use hecs::{Entity, World};

use barrage_core::components::{Active, Enemy};
use barrage_core::enums::{EffectKind, EnemyPhase};
use barrage_core::events::PresentationEvent;
use barrage_core::types::{Color, Position};

use barrage_enemy_ai::profiles::get_profile;

use crate::match_state::MatchState;

pub const EXPLOSION_SOUND: &str = "explosion-sound";
pub const EXPLOSION_PITCH_VARIANCE: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Target missing, inactive or already destroyed.
    Ignored,
    Survived,
    Destroyed,
}

/// Apply `amount` damage to an enemy. Health only ever decreases; on the
/// first crossing to <= 0 the enemy is destroyed, deactivated and its score
/// value credited.
pub fn damage_enemy(
    world: &mut World,
    entity: Entity,
    amount: f64,
    events: &mut Vec<PresentationEvent>,
    match_state: &mut MatchState,
) -> DamageOutcome {
    let Ok((enemy, pos, active)) =
        world.query_one_mut::<(&mut Enemy, &Position, &mut Active)>(entity)
    else {
        return DamageOutcome::Ignored;
    };
    if !active.0 || enemy.phase == EnemyPhase::Destroyed {
        return DamageOutcome::Ignored;
    }

    enemy.health -= amount.max(0.0);
    events.push(PresentationEvent::effect(
        EffectKind::Damage,
        *pos,
        enemy.tint,
        1.0,
    ));

    if enemy.health > 0.0 {
        return DamageOutcome::Survived;
    }

    enemy.phase = EnemyPhase::Destroyed;
    active.0 = false;

    let profile = get_profile(enemy.variant);
    events.push(PresentationEvent::effect(
        EffectKind::Explosion,
        *pos,
        enemy.tint,
        profile.explosion_scale,
    ));
    events.push(PresentationEvent::sound(
        EXPLOSION_SOUND,
        profile.explosion_volume,
        EXPLOSION_PITCH_VARIANCE,
    ));
    match_state.credit(enemy.score_value);
    DamageOutcome::Destroyed
}

/// Take an enemy out of play without scoring (escape, ram). Returns its
/// position if it was live.
pub fn retire_enemy(world: &mut World, entity: Entity) -> Option<Position> {
    let (enemy, pos, active) = world
        .query_one_mut::<(&mut Enemy, &Position, &mut Active)>(entity)
        .ok()?;
    if !active.0 || enemy.phase == EnemyPhase::Destroyed {
        return None;
    }
    enemy.phase = EnemyPhase::Destroyed;
    active.0 = false;
    Some(*pos)
}

/// Explosion requested when an enemy rams the player.
pub fn ram_explosion(position: Position) -> PresentationEvent {
    PresentationEvent::effect(EffectKind::Explosion, position, Color::EXPLOSION, 1.0)
}
