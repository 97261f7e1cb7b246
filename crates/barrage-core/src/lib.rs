//! Core types and definitions for the BARRAGE combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, weapon catalog, settings, snapshots, events,
//! and constants. It has no dependency on the ECS or any runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod settings;
pub mod state;
pub mod types;
pub mod weapons;

#[cfg(test)]
mod tests;
