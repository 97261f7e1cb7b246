//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position on the play field (screen units).
/// x grows to the right, y grows downward; the player sits near the bottom edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity (units per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// RGB color packed as 0xRRGGBB, passed through to the effect layer untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffffff);
    pub const RED: Color = Color(0xff0000);
    pub const EXPLOSION: Color = Color(0xff6600);
}

/// Simulation clock. Advanced by the measured wall-clock delta of each frame.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Frames simulated so far.
    pub frame: u64,
    /// Milliseconds elapsed since the match started.
    pub now_ms: f64,
    /// Length of the most recent frame in milliseconds.
    pub delta_ms: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle of the vector from `self` to `other` in radians (atan2 on screen axes).
    pub fn angle_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity of magnitude `speed` along `angle` (radians, screen axes).
    pub fn from_angle(angle: f64, speed: f64) -> Self {
        Self::new(angle.cos() * speed, angle.sin() * speed)
    }

    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Heading in radians (atan2 on screen axes).
    pub fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl SimTime {
    /// Seconds covered by the most recent frame.
    pub fn dt_secs(&self) -> f64 {
        self.delta_ms / 1000.0
    }

    /// Advance the clock by one frame of `delta_ms` milliseconds.
    pub fn advance(&mut self, delta_ms: f64) {
        self.frame += 1;
        self.delta_ms = delta_ms.max(0.0);
        self.now_ms += self.delta_ms;
    }
}

/// Weak, lookup-only handle to another entity (packed ECS entity bits).
/// Holding one never keeps the referenced entity alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef(pub u64);
