//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`]. It
//!   also tracks the window size in [`ScreenSize`].
//! - [`input_actions_system`] reacts to key presses: F11 toggles the debug
//!   overlay via [`SwitchDebugEvent`], ESC requests the `Quitting` state.
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::{MouseButton, RaylibHandle};

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;

/// Poll Raylib for keyboard and mouse input and update the `InputState`
/// resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    mut screen: ResMut<ScreenSize>,
    rl: NonSend<RaylibHandle>,
) {
    let back = rl.is_key_down(input.action_back.key_binding);
    let debug = rl.is_key_down(input.mode_debug.key_binding);
    let skip = rl.is_key_down(input.skip_loading.key_binding);
    input.action_back.update(back);
    input.mode_debug.update(debug);
    input.skip_loading.update(skip);

    let position = rl.get_mouse_position();
    let down = rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT);
    let wheel = rl.get_mouse_wheel_move();
    input.pointer.update(position, down, wheel);

    let (w, h) = (rl.get_screen_width(), rl.get_screen_height());
    if screen.w != w || screen.h != h {
        screen.w = w;
        screen.h = h;
    }
}

/// Translate key presses into debug toggles and quit requests.
pub fn input_actions_system(
    mut commands: Commands,
    input: Res<InputState>,
    mut next_state: ResMut<NextGameState>,
) {
    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    if input.action_back.just_pressed {
        info!("quit requested");
        next_state.set(GameStates::Quitting);
    }
}
