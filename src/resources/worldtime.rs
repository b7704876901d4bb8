//! Simulation time resource.
//!
//! `time_scale` is the global pause switch: the game-over and win transitions
//! set it to 0, which stops every physics step while leaving component state
//! untouched; restarting or leaving for the menu sets it back to 1.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds since start.
    pub elapsed: f32,
    /// Scaled delta of the schedule currently running.
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    /// True while the simulation is halted.
    pub fn is_frozen(&self) -> bool {
        self.time_scale <= 0.0
    }

    pub fn freeze(&mut self) {
        self.time_scale = 0.0;
    }

    pub fn resume(&mut self) {
        self.time_scale = 1.0;
    }
}
