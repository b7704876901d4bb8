//! Player agent component.
//!
//! Per-frame behaviour lives in [`crate::systems::player`].

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::components::tag::LayerMask;

/// Horizontal speed above which the player counts as running.
pub const RUN_THRESHOLD: f32 = 0.1;
/// Signal flag set while running.
pub const RUNNING_FLAG: &str = "running";
/// Signal flag set while airborne.
pub const JUMPING_FLAG: &str = "jumping";

#[derive(Component, Clone, Debug)]
pub struct Player {
    pub move_speed: f32,
    /// Vertical velocity set by a jump.
    pub jump_force: f32,
    /// Foot anchor, relative to the player's position.
    pub ground_check: Vec2,
    pub ground_radius: f32,
    pub ground_mask: LayerMask,
    /// Recomputed every frame from the ground overlap test.
    pub grounded: bool,
    pub initialized: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(5.0, 15.0)
    }
}

impl Player {
    pub fn new(move_speed: f32, jump_force: f32) -> Self {
        Self {
            move_speed,
            jump_force,
            ground_check: Vec2::new(0.0, -0.5),
            ground_radius: 0.2,
            ground_mask: LayerMask::GROUND,
            grounded: false,
            initialized: false,
        }
    }

    pub fn with_ground_check(mut self, anchor: Vec2, radius: f32) -> Self {
        self.ground_check = anchor;
        self.ground_radius = radius;
        self
    }

    /// Animation flags `(running, jumping)` for the given horizontal speed.
    pub fn animation_flags(&self, velocity_x: f32) -> (bool, bool) {
        (velocity_x.abs() > RUN_THRESHOLD, !self.grounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_flags_follow_speed_and_ground() {
        let mut p = Player::default();
        p.grounded = true;
        assert_eq!(p.animation_flags(0.0), (false, false));
        assert_eq!(p.animation_flags(0.1), (false, false));
        assert_eq!(p.animation_flags(-0.2), (true, false));
        p.grounded = false;
        assert_eq!(p.animation_flags(5.0), (true, true));
    }
}
