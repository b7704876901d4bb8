//! Goblin Keep library.
//!
//! Gameplay for a small 2D platformer: a player collecting coins, traps and a
//! key, and goblins that patrol and chase. Exposes the ECS components,
//! resources, systems and events for use by the binary and integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
