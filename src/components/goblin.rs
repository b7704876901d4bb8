//! Goblin enemy agent.
//!
//! The [`Goblin`] component holds the patrol/chase state machine. The sensing
//! and motion systems live in [`crate::systems::goblin`]; the decision rules
//! themselves are plain methods here so they can be reasoned about without a
//! world.
//!
//! # States
//!
//! - [`GoblinState::Patrol`] – walk back and forth around `start_point`,
//!   turning at ledges, walls and the edges of the patrol band
//! - [`GoblinState::Chase`] – run horizontally towards the detected player
//!
//! The state is a pure function of the latest detection result: it is
//! `Chase` exactly when a player was seen unobstructed this frame.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::tag::LayerMask;

/// Horizontal offset of the ledge probe, ahead of the goblin.
pub const GROUND_PROBE_OFFSET: f32 = 0.4;
/// Length of the downward ledge probe.
pub const GROUND_PROBE_LENGTH: f32 = 0.6;
/// Length of the forward wall probe.
pub const WALL_PROBE_LENGTH: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GoblinState {
    #[default]
    Patrol,
    Chase,
}

#[derive(Component, Clone, Debug)]
pub struct Goblin {
    pub move_speed: f32,
    /// Half-width of the patrol band around `start_point.x`.
    pub patrol_distance: f32,
    /// Length of the forward detection ray.
    pub detection_range: f32,
    pub ground_mask: LayerMask,
    pub wall_mask: LayerMask,
    pub player_mask: LayerMask,
    /// Patrol anchor, captured from the position at initialization.
    pub start_point: Vec2,
    pub facing_right: bool,
    pub player_detected: bool,
    /// Player entity reported by the last unobstructed detection ray.
    pub target: Option<Entity>,
    pub state: GoblinState,
    /// Set once the initialization system has validated this agent.
    pub initialized: bool,
    /// Band edges to clamp against after this tick's movement, set when the
    /// tick started inside the band in patrol mode.
    pub patrol_clamp: Option<(f32, f32)>,
}

impl Default for Goblin {
    fn default() -> Self {
        Self::new(2.0, 5.0, 5.0)
    }
}

impl Goblin {
    pub fn new(move_speed: f32, patrol_distance: f32, detection_range: f32) -> Self {
        Self {
            move_speed,
            patrol_distance,
            detection_range,
            ground_mask: LayerMask::GROUND,
            wall_mask: LayerMask::WALL,
            player_mask: LayerMask::PLAYER,
            start_point: Vec2::ZERO,
            facing_right: true,
            player_detected: false,
            target: None,
            state: GoblinState::Patrol,
            initialized: false,
            patrol_clamp: None,
        }
    }

    pub fn facing_left(mut self) -> Self {
        self.facing_right = false;
        self
    }

    /// `(left, right)` edges of the patrol band.
    pub fn patrol_bounds(&self) -> (f32, f32) {
        (
            self.start_point.x - self.patrol_distance,
            self.start_point.x + self.patrol_distance,
        )
    }

    pub fn facing_sign(&self) -> f32 {
        if self.facing_right { 1.0 } else { -1.0 }
    }

    pub fn facing_dir(&self) -> Vec2 {
        Vec2::new(self.facing_sign(), 0.0)
    }

    /// Origin of the ledge probe for a goblin at `position`.
    pub fn ground_probe_origin(&self, position: Vec2) -> Vec2 {
        position + Vec2::new(self.facing_sign() * GROUND_PROBE_OFFSET, 0.0)
    }

    pub fn turn_around(&mut self) {
        self.facing_right = !self.facing_right;
    }

    /// Whether a patrolling goblin at `x` must reverse this tick.
    pub fn should_turn(&self, x: f32, ground_ahead: bool, wall_ahead: bool) -> bool {
        let (left, right) = self.patrol_bounds();
        !ground_ahead
            || wall_ahead
            || (self.facing_right && x >= right)
            || (!self.facing_right && x <= left)
    }

    pub fn within_patrol_band(&self, x: f32) -> bool {
        let (left, right) = self.patrol_bounds();
        x >= left && x <= right
    }

    /// Record this frame's detection result.
    ///
    /// `Some(entity)` means the detection ray hit a player with no wall in
    /// between; `None` covers both a miss and an obstructed hit.
    pub fn apply_detection(&mut self, seen: Option<Entity>) {
        self.player_detected = seen.is_some();
        self.target = seen;
        self.state = if seen.is_some() {
            GoblinState::Chase
        } else {
            GoblinState::Patrol
        };
    }

    /// Drop the chase target, e.g. after it despawned.
    pub fn lose_target(&mut self) {
        self.apply_detection(None);
    }

    /// Horizontal chase direction towards `target_x`: `+1` strictly right of
    /// the goblin, `-1` otherwise.
    pub fn chase_sign(x: f32, target_x: f32) -> f32 {
        if target_x - x > 0.0 { 1.0 } else { -1.0 }
    }
}
