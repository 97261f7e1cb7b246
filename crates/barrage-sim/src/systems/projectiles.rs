//! Per-update projectile behavior: homing steering and trail requests.

use hecs::{Entity, World};

use barrage_core::components::{Active, Projectile, ProjectileBehavior};
use barrage_core::constants::MISSILE_SEEK_RADIUS;
use barrage_core::enums::EffectKind;
use barrage_core::events::PresentationEvent;
use barrage_core::types::{Color, EntityRef, Position, Velocity};

use crate::homing;

const SMOKE_COLOR: Color = Color(0xaaaaaa);

/// Steer homing projectiles and request trail effects.
///
/// A homing projectile whose target is gone drops the reference; if it may
/// reacquire it searches for the nearest enemy ahead, otherwise it keeps
/// flying straight.
pub fn run(world: &mut World, events: &mut Vec<PresentationEvent>) {
    let mut updates: Vec<(Entity, Velocity, Option<EntityRef>)> = Vec::new();

    {
        let mut query = world.query::<(&Projectile, &Position, &Velocity, &Active)>();
        for (entity, (projectile, pos, vel, active)) in query.iter() {
            if !active.0 {
                continue;
            }
            match projectile.behavior {
                ProjectileBehavior::Straight => {}
                ProjectileBehavior::Trailing { color } => {
                    events.push(PresentationEvent::effect(
                        EffectKind::BulletTrail,
                        *pos,
                        color,
                        projectile.scale,
                    ));
                }
                ProjectileBehavior::Homing {
                    target,
                    turn_rate,
                    reacquire,
                } => {
                    let mut resolved = target.and_then(|t| homing::resolve_enemy(world, t));
                    if resolved.is_none() && reacquire {
                        resolved = homing::acquire_ahead(world, pos, MISSILE_SEEK_RADIUS)
                            .and_then(|t| homing::resolve_enemy(world, t));
                    }

                    let (new_vel, new_target) = match resolved {
                        Some((target_entity, target_pos)) => (
                            homing::steer(*vel, pos, &target_pos, turn_rate),
                            Some(homing::entity_ref(target_entity)),
                        ),
                        None => (*vel, None),
                    };
                    updates.push((entity, new_vel, new_target));

                    events.push(PresentationEvent::effect(
                        EffectKind::SmokeTrail,
                        *pos,
                        SMOKE_COLOR,
                        projectile.scale,
                    ));
                }
            }
        }
    }

    for (entity, new_vel, new_target) in updates {
        if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
            *vel = new_vel;
        }
        if let Ok(mut projectile) = world.get::<&mut Projectile>(entity) {
            if let ProjectileBehavior::Homing { target, .. } = &mut projectile.behavior {
                *target = new_target;
            }
        }
    }
}
