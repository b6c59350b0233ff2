//! Loading screen driver.
//!
//! Advances the fake progress bar on wall-clock time and requests the
//! `Playing` state once the bar fills up, or right away when the skip key is
//! pressed.
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::loading::LoadingScreen;
use crate::resources::scenerng::SceneRng;
use crate::resources::wallclock::WallClock;

pub fn loading_system(
    clock: Res<WallClock>,
    input: Res<InputState>,
    mut screen: ResMut<LoadingScreen>,
    mut rng: ResMut<SceneRng>,
    mut next_state: ResMut<NextGameState>,
) {
    let complete = screen.advance(clock.delta, &mut rng);
    if complete {
        info!("loading finished");
        next_state.set(GameStates::Playing);
    } else if input.skip_loading.just_pressed {
        info!("loading skipped");
        next_state.set(GameStates::Playing);
    }
}
