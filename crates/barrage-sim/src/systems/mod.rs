//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are plain functions taking `&mut World` (or `&World` when read-only).
//! Long-lived state lives in components or in the engine-owned structs passed in.

pub mod bounds;
pub mod cleanup;
pub mod collision;
pub mod enemy_ai;
pub mod movement;
pub mod player_control;
pub mod projectiles;
pub mod snapshot;
pub mod special;
pub mod timers;
pub mod wave_spawner;
pub mod weapons;
