//! Background starfield.
//!
//! A fixed set of points scattered through a spherical shell far outside
//! the play area. Generated once at scene mount from the scene RNG.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector3;
use std::f32::consts::TAU;

use crate::resources::scenerng::SceneRng;

pub const STAR_COUNT: usize = 800;
pub const STAR_RADIUS: f32 = 100.0;
pub const STAR_DEPTH: f32 = 50.0;

#[derive(Resource, Clone, Debug, Default)]
pub struct StarField {
    pub stars: Vec<Vector3>,
}

impl StarField {
    /// Scatter `count` stars between `radius` and `radius + depth`.
    pub fn generate(count: usize, radius: f32, depth: f32, rng: &mut SceneRng) -> Self {
        let stars = (0..count)
            .map(|_| {
                let r = radius + rng.unit() * depth;
                // Uniform direction on the sphere.
                let y = rng.range(-1.0, 1.0);
                let theta = rng.unit() * TAU;
                let ring = (1.0 - y * y).max(0.0).sqrt();
                Vector3 {
                    x: r * ring * theta.cos(),
                    y: r * y,
                    z: r * ring * theta.sin(),
                }
            })
            .collect();
        StarField { stars }
    }
}
