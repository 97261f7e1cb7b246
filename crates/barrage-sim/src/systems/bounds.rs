//! Play-field bounds: keeps the player and enemies inside the field
//! horizontally and retires enemies that escape past the bottom edge.

use hecs::{Entity, World};
use tracing::debug;

use barrage_core::components::{Active, Enemy, Hitbox, PlayerShip, Tween};
use barrage_core::constants::ENEMY_ESCAPE_MARGIN;
use barrage_core::enums::EnemyPhase;
use barrage_core::types::{Position, Velocity};

use crate::damage::retire_enemy;

pub fn run(world: &mut World, field_width: f64, field_height: f64) {
    // Player: clamp to the whole field.
    for (_entity, (_ship, pos, hitbox, active)) in
        world.query_mut::<(&PlayerShip, &mut Position, &Hitbox, &Active)>()
    {
        if !active.0 {
            continue;
        }
        pos.x = clamp_axis(pos.x, hitbox.half_width, field_width);
        pos.y = clamp_axis(pos.y, hitbox.half_height, field_height);
    }

    // Enemies: horizontal contact reflects the drift; escapes below are retired.
    let mut escaped: Vec<Entity> = Vec::new();
    for (entity, (enemy, pos, vel, hitbox, active, tween)) in world.query_mut::<(
        &Enemy,
        &mut Position,
        &mut Velocity,
        &Hitbox,
        &Active,
        Option<&Tween>,
    )>() {
        if !active.0 || enemy.phase == EnemyPhase::Destroyed {
            continue;
        }
        if pos.y > field_height + ENEMY_ESCAPE_MARGIN {
            escaped.push(entity);
            continue;
        }
        if tween.is_some() {
            continue;
        }
        let min_x = hitbox.half_width;
        let max_x = field_width - hitbox.half_width;
        if pos.x < min_x {
            pos.x = min_x;
            vel.x = vel.x.abs();
        } else if pos.x > max_x {
            pos.x = max_x;
            vel.x = -vel.x.abs();
        }
    }

    for entity in escaped {
        if retire_enemy(world, entity).is_some() {
            debug!(?entity, "enemy escaped");
        }
    }
}

fn clamp_axis(value: f64, half_extent: f64, extent: f64) -> f64 {
    if extent <= 2.0 * half_extent {
        return extent / 2.0;
    }
    value.clamp(half_extent, extent - half_extent)
}
