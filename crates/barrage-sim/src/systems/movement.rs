//! Kinematic integration: position += velocity * dt.
//!
//! Entities with a tween attached are positioned by the tween instead.

use hecs::World;

use barrage_core::components::{Active, Tween};
use barrage_core::types::{Position, Velocity};

pub fn run(world: &mut World, dt_secs: f64) {
    for (_entity, (pos, vel, active, tween)) in
        world.query_mut::<(&mut Position, &Velocity, &Active, Option<&Tween>)>()
    {
        if !active.0 || tween.is_some() {
            continue;
        }
        pos.x += vel.x * dt_secs;
        pos.y += vel.y * dt_secs;
    }
}
