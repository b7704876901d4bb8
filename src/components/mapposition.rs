//! World-space position component.
//!
//! World coordinates are y-up: gravity pulls towards negative `y` and the
//! renderer flips the axis when drawing.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// World-space position (pivot) for an entity.
///
/// For entities with a [`BoxCollider`](super::boxcollider::BoxCollider), the
/// collider is placed relative to this point.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl Default for MapPosition {
    fn default() -> Self {
        Self { pos: Vec2::ZERO }
    }
}

impl MapPosition {
    /// Create a MapPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    /// Create a MapPosition from an existing vector.
    pub fn from_vec(pos: Vec2) -> Self {
        Self { pos }
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }
}
