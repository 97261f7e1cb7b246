//! Player input: movement axes and trigger state.

use hecs::World;

use barrage_core::components::{Active, PlayerShip};
use barrage_core::types::{Position, Velocity};

/// Held input, updated by commands and read every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    pub move_x: f64,
    pub move_y: f64,
    pub firing: bool,
}

impl PlayerInput {
    /// Store movement axes clamped to [-1, 1].
    pub fn set_movement(&mut self, x: f64, y: f64) {
        self.move_x = if x.is_finite() { x.clamp(-1.0, 1.0) } else { 0.0 };
        self.move_y = if y.is_finite() { y.clamp(-1.0, 1.0) } else { 0.0 };
    }

    /// Velocity for the given ship speed. Diagonals are normalized so they
    /// are no faster than straight moves.
    pub fn velocity(&self, speed: f64) -> Velocity {
        let (mut x, mut y) = (self.move_x, self.move_y);
        let len = (x * x + y * y).sqrt();
        if len > 1.0 {
            x /= len;
            y /= len;
        }
        Velocity::new(x * speed, y * speed)
    }
}

/// Apply held input to the player's velocity. An inactive ship stops.
pub fn run(world: &mut World, input: &PlayerInput, speed: f64) {
    for (_entity, (_ship, vel, active)) in
        world.query_mut::<(&PlayerShip, &mut Velocity, &Active)>()
    {
        *vel = if active.0 {
            input.velocity(speed)
        } else {
            Velocity::default()
        };
    }
}

/// Position of the active player ship, if any.
pub fn player_position(world: &World) -> Option<Position> {
    world
        .query::<(&PlayerShip, &Position, &Active)>()
        .iter()
        .find(|(_, (_, _, active))| active.0)
        .map(|(_, (_, pos, _))| *pos)
}
