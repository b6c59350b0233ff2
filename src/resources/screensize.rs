//! Screen size resource.
//!
//! Stores the current framebuffer dimensions in pixels. Picking and the HUD
//! layout read this to adapt to window resizes.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn as_vector(&self) -> Vector2 {
        Vector2 {
            x: self.w as f32,
            y: self.h as f32,
        }
    }
}
