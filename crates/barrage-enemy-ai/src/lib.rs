//! Enemy AI for BARRAGE.
//!
//! Implements variant stat profiles, scripted entry and wander trajectories,
//! the per-enemy lifecycle state machine, and per-variant shot patterns.
//! No ECS dependency: everything here operates on plain data.

pub mod fsm;
pub mod patterns;
pub mod profiles;
pub mod trajectory;

pub use barrage_core as core;

#[cfg(test)]
mod tests;
