//! Per-frame input resource.
//!
//! Captures the subset of keyboard and mouse state the demo cares about and
//! exposes it to systems via the [`InputState`] resource. The pointer keeps
//! its own press/release edges and accumulated drag distance so a drag that
//! rotates the camera is never mistaken for a click on a coin.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// A release after travelling further than this many pixels is a drag.
pub const CLICK_SLOP: f32 = 4.0;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding,
        }
    }

    /// Record this frame's key level and derive the press edge.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.active = down;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Primary mouse button / touch pointer.
#[derive(Debug, Clone, Copy)]
pub struct PointerState {
    pub position: Vector2,
    pub previous: Vector2,
    pub down: bool,
    pub just_pressed: bool,
    pub just_released: bool,
    /// Wheel notches this frame.
    pub wheel: f32,
    /// Pixels travelled since the last press.
    pub drag_distance: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            previous: Vector2 { x: 0.0, y: 0.0 },
            down: false,
            just_pressed: false,
            just_released: false,
            wheel: 0.0,
            drag_distance: 0.0,
        }
    }
}

impl PointerState {
    /// Record this frame's pointer sample.
    pub fn update(&mut self, position: Vector2, down: bool, wheel: f32) {
        self.previous = self.position;
        self.position = position;
        self.just_pressed = down && !self.down;
        self.just_released = !down && self.down;
        if self.just_pressed {
            self.drag_distance = 0.0;
        } else if self.down {
            let d = self.delta();
            self.drag_distance += (d.x * d.x + d.y * d.y).sqrt();
        }
        self.down = down;
        self.wheel = wheel;
    }

    pub fn delta(&self) -> Vector2 {
        Vector2 {
            x: self.position.x - self.previous.x,
            y: self.position.y - self.previous.y,
        }
    }

    /// A release that did not travel far enough to count as a drag.
    pub fn is_click(&self) -> bool {
        self.just_released && self.drag_distance <= CLICK_SLOP
    }

    /// Held and moved past the click slop.
    pub fn is_dragging(&self) -> bool {
        self.down && !self.just_pressed && self.drag_distance > CLICK_SLOP
    }
}

/// Resource capturing the per-frame input relevant to the demo.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub pointer: PointerState,
    pub action_back: BoolState,
    pub mode_debug: BoolState,
    pub skip_loading: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pointer: PointerState::default(),
            action_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            skip_loading: BoolState::bound_to(KeyboardKey::KEY_ENTER),
        }
    }
}
