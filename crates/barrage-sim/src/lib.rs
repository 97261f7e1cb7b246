//! Simulation engine for BARRAGE.
//!
//! Owns the hecs ECS world, runs systems once per rendered frame on the
//! measured wall-clock delta, and produces MatchSnapshots for the
//! presentation layer.

pub mod damage;
pub mod engine;
pub mod homing;
pub mod match_state;
pub mod scheduler;
pub mod systems;
pub mod weapon_system;
pub mod world_setup;

pub use barrage_core as core;
pub use engine::{SimConfig, SimulationEngine};
