//! Color tint component for scene primitives.
//!
//! The [`Tint`] component gives a decoration its base color. When the entity
//! also carries an [`Opacity`](super::decoration::Opacity), the renderer
//! scales the tint's alpha by it.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    /// Create a new Tint with the specified RGBA values.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Color::new(r, g, b, a),
        }
    }

    /// Create an opaque tint from a `0xRRGGBB` value.
    pub fn hex(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 255)
    }

    /// The tint with its alpha multiplied by `opacity` (clamped to `[0, 1]`).
    pub fn faded(&self, opacity: f32) -> Color {
        let a = (self.color.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Color::new(self.color.r, self.color.g, self.color.b, a)
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let t = Tint::new(100, 150, 200, 255);
        assert_eq!(t.color.r, 100);
        assert_eq!(t.color.g, 150);
        assert_eq!(t.color.b, 200);
        assert_eq!(t.color.a, 255);
    }

    #[test]
    fn test_hex() {
        let t = Tint::hex(0x00ffaa);
        assert_eq!(t.color.r, 0x00);
        assert_eq!(t.color.g, 0xff);
        assert_eq!(t.color.b, 0xaa);
        assert_eq!(t.color.a, 255);
    }

    #[test]
    fn test_faded() {
        let t = Tint::hex(0xff00aa);
        assert_eq!(t.faded(1.0).a, 255);
        assert_eq!(t.faded(0.0).a, 0);
        assert_eq!(t.faded(0.4).a, 102);
        assert_eq!(t.faded(3.0).a, 255);
        assert_eq!(t.faded(0.4).r, 0xff);
    }

    #[test]
    fn test_default_is_white() {
        let t = Tint::default();
        assert_eq!(t.color.r, 255);
        assert_eq!(t.color.a, 255);
    }
}
