//! Decorative scene components.
//!
//! The arcade backdrop is made of plain entities: a [`Shape`] to draw, a
//! [`MapPosition`](super::mapposition::MapPosition) and a
//! [`Tint`](super::tint::Tint), plus optional animation drivers that the
//! decoration system evaluates from elapsed time each frame:
//!
//! - [`Floating`] – vertical sine bob around a base height
//! - [`Orbiting`] – position on a horizontal ring that turns over time
//! - [`Pulse`] – sine-driven [`Opacity`]
//!
//! All drivers are stateless functions of elapsed time.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Vector2, Vector3};

/// Primitive the renderer draws at the entity's position.
#[derive(Component, Clone, Debug)]
pub enum Shape {
    /// Axis-aligned box with full extents.
    Cuboid { size: Vector3 },
    /// Double pyramid with the given half height and base radius.
    Octahedron { radius: f32 },
    /// Horizontal square of line segments.
    Grid { size: f32, divisions: u32 },
    /// Horizontal filled plane.
    Plane { size: Vector2 },
    /// Screen-space text anchored at the projected position.
    Label { text: String, font_size: i32 },
}

/// Vertical bob: `y = base_y + sin(t * frequency + phase) * amplitude`.
#[derive(Component, Clone, Copy, Debug)]
pub struct Floating {
    pub base_y: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub phase: f32,
}

impl Floating {
    pub fn new(base_y: f32, amplitude: f32, frequency: f32) -> Self {
        Self {
            base_y,
            amplitude,
            frequency,
            phase: 0.0,
        }
    }

    pub fn height_at(&self, t: f32) -> f32 {
        self.base_y + (t * self.frequency + self.phase).sin() * self.amplitude
    }
}

/// Point on a horizontal ring of `radius` around the origin whose angle
/// decreases at `rate` rad/s (a positive turn of the whole ring about +Y).
#[derive(Component, Clone, Copy, Debug)]
pub struct Orbiting {
    pub radius: f32,
    pub angle: f32,
    pub rate: f32,
}

impl Orbiting {
    /// `(x, z)` at time `t`.
    pub fn xz_at(&self, t: f32) -> (f32, f32) {
        let a = self.angle - t * self.rate;
        (a.cos() * self.radius, a.sin() * self.radius)
    }
}

/// Drives [`Opacity`] as `base + sin(t * frequency) * amplitude`.
#[derive(Component, Clone, Copy, Debug)]
pub struct Pulse {
    pub base: f32,
    pub amplitude: f32,
    pub frequency: f32,
}

impl Pulse {
    pub fn value_at(&self, t: f32) -> f32 {
        (self.base + (t * self.frequency).sin() * self.amplitude).clamp(0.0, 1.0)
    }
}

/// Alpha multiplier applied on top of the tint.
#[derive(Component, Clone, Copy, Debug)]
pub struct Opacity(pub f32);

impl Default for Opacity {
    fn default() -> Self {
        Opacity(1.0)
    }
}
