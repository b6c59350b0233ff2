//! Game state transition event and observer.
//!
//! Systems can request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and invokes the appropriate hooks stored in
//! [`crate::resources::systemsstore::SystemsStore`]:
//!
//! - `"mount_scene"` when the scene first appears (entering `Loading`, or
//!   entering `Playing` straight from `None`)
//! - `"enter_play"` when entering `Playing`
//! - `"unmount_scene"` when entering `Quitting`
//!
//! This decouples the intent to change state from the mechanics of running
//! setup/teardown systems and avoids borrowing conflicts.
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
///
/// Emitting this event causes [`observe_gamestate_change_event`] to read
/// [`NextGameState`]. If it contains [`Pending`], the observer updates the
/// authoritative [`GameState`], runs the hooks, and clears the pending
/// value; if it is [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], then:
///   - calls state-specific exit hooks for the previous state
///   - calls state-specific enter hooks for the new state
///   - resets [`NextGameState`] to [`Unchanged`]
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("GameStateChangedEvent triggered");

    if let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    {
        // Clone the next state value first so we don't keep an immutable borrow while mutating.
        let next_state_value = next_game_state.get().clone();
        match next_state_value {
            Pending(new_state) => {
                let old_state = game_state.get().clone();
                info!("Transitioning from {:?} to {:?}", old_state, new_state);
                game_state.set(new_state.clone());
                next_game_state.reset();
                on_state_exit(&old_state);
                on_state_enter(&new_state, &old_state, &mut commands, &systems_store);
            }
            Unchanged => {
                debug!("No state change pending.");
            }
        }
    } else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
    }
}

fn run_hook(name: &str, commands: &mut Commands, systems_store: &SystemsStore) {
    match systems_store.get(name) {
        Some(id) => commands.run_system(*id),
        None => warn!("Hook '{}' not found in SystemsStore", name),
    }
}

/// Internal: run state-specific "enter" systems for the given state.
fn on_state_enter(
    state: &GameStates,
    previous: &GameStates,
    commands: &mut Commands,
    systems_store: &SystemsStore,
) {
    match state {
        GameStates::None => debug!("Entered None state"),
        GameStates::Loading => run_hook("mount_scene", commands, systems_store),
        GameStates::Playing => {
            if *previous == GameStates::None {
                run_hook("mount_scene", commands, systems_store);
            }
            run_hook("enter_play", commands, systems_store);
        }
        GameStates::Quitting => run_hook("unmount_scene", commands, systems_store),
    }
}

/// Internal: state-specific "exit" notifications.
fn on_state_exit(state: &GameStates) {
    match state {
        GameStates::None => debug!("Exited None state"),
        GameStates::Loading => debug!("Exited Loading state"),
        GameStates::Playing => debug!("Exited Playing state"),
        GameStates::Quitting => debug!("Exited Quitting state"),
    }
}
