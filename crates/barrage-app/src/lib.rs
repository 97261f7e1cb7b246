//! BARRAGE headless runner.
//!
//! Drives the simulation engine on its own thread at a fixed frame rate,
//! forwarding player commands over a channel and publishing the latest
//! snapshot for polling.

pub mod autopilot;
pub mod game_loop;
pub mod state;

pub use barrage_core as core;
