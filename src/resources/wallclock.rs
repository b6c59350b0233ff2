//! Unscaled wall clock for deferred and periodic timers.
//!
//! Respawn scheduling, the HUD score ticker, the combo flash and the loading
//! screen all count real milliseconds rather than animation time. The clock
//! only moves when [`WallClock::advance`] is called, so tests drive it
//! virtually without sleeping.

use bevy_ecs::prelude::Resource;
use std::time::Duration;

#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WallClock {
    /// Time since the clock was created.
    pub now: Duration,
    /// Length of the most recent advance.
    pub delta: Duration,
}

impl WallClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.now += dt;
        self.delta = dt;
    }

    /// Move the clock forward by a frame time in seconds. Negative or
    /// non-finite inputs count as zero.
    pub fn advance_secs(&mut self, dt: f32) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.advance(Duration::from_secs_f32(dt));
    }
}
