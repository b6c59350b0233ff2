use bevy_ecs::prelude::*;

use crate::resources::input::InputState;
use crate::resources::orbitcamera::OrbitCamera;
use crate::resources::screensize::ScreenSize;

/// Feed pointer drag and wheel into the orbit camera, then step its damping.
///
/// Movement only counts once the pointer has left the click slop, so a
/// click on a coin never turns the view.
pub fn orbit_camera_system(
    input: Res<InputState>,
    screen: Res<ScreenSize>,
    mut camera: ResMut<OrbitCamera>,
) {
    let pointer = &input.pointer;
    if pointer.is_dragging() {
        let d = pointer.delta();
        camera.drag(d.x, d.y, screen.h as f32);
    }
    if pointer.wheel != 0.0 {
        camera.zoom(pointer.wheel);
    }
    camera.update();
}
