//! Time update functions.
//!
//! Called from the main loop once per frame, before the schedule runs.
//! [`update_world_time`] advances the animation clock with `time_scale`
//! applied; [`update_wall_clock`] advances the unscaled timer clock.
use bevy_ecs::prelude::*;

use crate::resources::wallclock::WallClock;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The function
/// applies the current `time_scale` and writes both `elapsed` and `delta`.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt.max(0.0) * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

/// Advance the [`WallClock`] by the unscaled frame delta in seconds.
pub fn update_wall_clock(world: &mut World, dt: f32) {
    world.resource_mut::<WallClock>().advance_secs(dt);
}
