//! Coin Quest library.
//!
//! This module exposes the game's ECS components, resources, systems, and
//! events for use by the binary and by integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod math;
pub mod resources;
pub mod systems;
