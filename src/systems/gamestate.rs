use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::coinset::CoinSet;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use bevy_ecs::prelude::*;

pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    // Check if there is a pending state change
    if let NextGameStates::Pending(_new_state) = next_state.get() {
        // If there is, trigger the GameStateChangedEvent
        commands.trigger(GameStateChangedEvent {});
    }
}

pub fn state_is_playing(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Playing)
}

pub fn state_is_loading(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Loading)
}

/// The scene resources exist (between mount and unmount).
pub fn scene_is_mounted(coins: Option<Res<CoinSet>>) -> bool {
    coins.is_some()
}
