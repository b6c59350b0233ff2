use bevy_ecs::prelude::*;

use crate::resources::hud::HudState;
use crate::resources::wallclock::WallClock;

/// Advance the displayed-score ticker and the combo flash on wall-clock time.
///
/// Must run before pointer picking in the frame so a collect resolved this
/// frame starts its flash and tick period from zero.
pub fn hud_timers_system(clock: Res<WallClock>, mut hud: ResMut<HudState>) {
    hud.advance(clock.delta);
}
