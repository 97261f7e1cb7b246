//! Homing guidance and target selection for missiles.
//!
//! Heading changes are capped per update; speed is preserved.

use std::f64::consts::{PI, TAU};

use glam::DVec2;
use hecs::{Entity, World};

use barrage_core::components::{Active, Enemy};
use barrage_core::enums::EnemyPhase;
use barrage_core::types::{EntityRef, Position, Velocity};

/// Wrap an angle into (-PI, PI].
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Rotate `current` toward `target` by at most `max_step` radians, taking the
/// shorter way around.
pub fn rotate_toward(current: f64, target: f64, max_step: f64) -> f64 {
    let diff = wrap_angle(target - current);
    if diff.abs() <= max_step {
        target
    } else {
        current + max_step * diff.signum()
    }
}

/// Turn `velocity` toward `target` by at most `turn_rate` radians.
pub fn steer(velocity: Velocity, from: &Position, target: &Position, turn_rate: f64) -> Velocity {
    let current = DVec2::new(velocity.x, velocity.y);
    let speed = current.length();
    if speed <= f64::EPSILON {
        return velocity;
    }
    let desired = from.angle_to(target);
    let heading = rotate_toward(velocity.heading(), desired, turn_rate);
    let v = DVec2::from_angle(heading) * speed;
    Velocity::new(v.x, v.y)
}

pub fn entity_ref(entity: Entity) -> EntityRef {
    EntityRef(entity.to_bits().get())
}

/// Resolve a weak reference to a live, active, not-destroyed enemy and its position.
pub fn resolve_enemy(world: &World, target: EntityRef) -> Option<(Entity, Position)> {
    let entity = Entity::from_bits(target.0)?;
    let mut query = world
        .query_one::<(&Enemy, &Position, &Active)>(entity)
        .ok()?;
    let (enemy, pos, active) = query.get()?;
    if !active.0 || enemy.phase == EnemyPhase::Destroyed {
        return None;
    }
    Some((entity, *pos))
}

/// Live enemies as (entity, position, distance from `from`).
fn live_enemies(world: &World, from: &Position) -> Vec<(Entity, Position, f64)> {
    world
        .query::<(&Enemy, &Position, &Active)>()
        .iter()
        .filter(|(_, (enemy, _, active))| active.0 && enemy.phase != EnemyPhase::Destroyed)
        .map(|(entity, (_, pos, _))| (entity, *pos, from.distance_to(pos)))
        .collect()
}

/// Nearest live enemy ahead of (above) `from` within `radius`.
pub fn acquire_ahead(world: &World, from: &Position, radius: f64) -> Option<EntityRef> {
    live_enemies(world, from)
        .into_iter()
        .filter(|(_, pos, dist)| pos.y < from.y && *dist < radius)
        .min_by(|a, b| a.2.total_cmp(&b.2))
        .map(|(entity, _, _)| entity_ref(entity))
}

/// Up to `count` distinct live enemies, nearest first.
pub fn nearest_enemies(world: &World, from: &Position, count: usize) -> Vec<EntityRef> {
    let mut candidates = live_enemies(world, from);
    candidates.sort_by(|a, b| a.2.total_cmp(&b.2));
    candidates
        .into_iter()
        .take(count)
        .map(|(entity, _, _)| entity_ref(entity))
        .collect()
}
