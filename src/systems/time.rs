//! Time update helpers.
//!
//! The host loop calls these directly on the world: [`update_world_time`]
//! once per frame before the frame schedule, and [`set_fixed_delta`] before
//! each physics step.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is the unscaled frame delta in seconds. The current `time_scale` is
/// applied before writing both `elapsed` and `delta`.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

/// Expose the fixed step length as the delta seen by physics systems.
pub fn set_fixed_delta(world: &mut World, fixed_dt: f32) {
    world.resource_mut::<WorldTime>().delta = fixed_dt;
}
