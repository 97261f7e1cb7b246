//! Cleanup system: despawns inactive enemies and expired, spent or
//! out-of-bounds projectiles, cancelling any timers they own.

use hecs::{Entity, World};

use barrage_core::components::{Active, Enemy, Projectile};
use barrage_core::constants::PROJECTILE_CULL_MARGIN;
use barrage_core::types::Position;

use crate::scheduler::Scheduler;

/// Uses a pre-allocated buffer to avoid per-frame allocation. The player
/// ship is never despawned here.
pub fn run(
    world: &mut World,
    scheduler: &mut Scheduler,
    despawn_buffer: &mut Vec<Entity>,
    now_ms: f64,
    field_width: f64,
    field_height: f64,
) {
    despawn_buffer.clear();

    for (entity, (projectile, pos, active)) in
        world.query_mut::<(&Projectile, &Position, &Active)>()
    {
        if !active.0
            || projectile.is_expired(now_ms)
            || out_of_field(pos, field_width, field_height)
        {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (_enemy, active)) in world.query_mut::<(&Enemy, &Active)>() {
        if !active.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        scheduler.cancel_owner(entity);
        let _ = world.despawn(entity);
    }
}

fn out_of_field(pos: &Position, field_width: f64, field_height: f64) -> bool {
    pos.x < -PROJECTILE_CULL_MARGIN
        || pos.x > field_width + PROJECTILE_CULL_MARGIN
        || pos.y < -PROJECTILE_CULL_MARGIN
        || pos.y > field_height + PROJECTILE_CULL_MARGIN
}
