//! Kinematic body: velocity plus named constant accelerations.
//!
//! Agents only ever write the velocity axis they own: the player and the
//! goblin set `velocity.x` and leave `velocity.y` to gravity, except for the
//! jump impulse. [`movement`](crate::systems::movement::movement) consumes
//! the body each physics step.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use rustc_hash::FxHashMap;

/// Name under which gravity is registered on every dynamic body.
pub const GRAVITY_FORCE: &str = "gravity";

#[derive(Component, Clone, Debug, Default)]
pub struct RigidBody {
    /// World units per second, y-up.
    pub velocity: Vec2,
    /// Accelerations summed every step, keyed so they can be replaced.
    pub forces: FxHashMap<String, Vec2>,
}

impl RigidBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// A body pulled down by `gravity` units per second squared.
    pub fn with_gravity(gravity: f32) -> Self {
        let mut rb = Self::new();
        rb.add_force(GRAVITY_FORCE, Vec2::new(0.0, -gravity));
        rb
    }

    /// Insert or replace the acceleration stored under `name`.
    pub fn add_force(&mut self, name: &str, value: Vec2) {
        self.forces.insert(name.to_string(), value);
    }

    pub fn total_acceleration(&self) -> Vec2 {
        self.forces.values().copied().sum()
    }

    pub fn set_horizontal(&mut self, vx: f32) {
        self.velocity.x = vx;
    }

    pub fn set_vertical(&mut self, vy: f32) {
        self.velocity.y = vy;
    }
}
