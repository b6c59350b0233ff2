//! Small vector helpers over raylib's plain math structs.
//!
//! Only field access is used so the helpers stay independent of whichever
//! operator impls the `raylib` crate ships.

use raylib::prelude::Vector3;

/// Linearly interpolate between two floats.
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

pub fn v3(x: f32, y: f32, z: f32) -> Vector3 {
    Vector3 { x, y, z }
}

pub fn add(a: Vector3, b: Vector3) -> Vector3 {
    v3(a.x + b.x, a.y + b.y, a.z + b.z)
}

pub fn sub(a: Vector3, b: Vector3) -> Vector3 {
    v3(a.x - b.x, a.y - b.y, a.z - b.z)
}

pub fn scale(a: Vector3, s: f32) -> Vector3 {
    v3(a.x * s, a.y * s, a.z * s)
}

pub fn dot(a: Vector3, b: Vector3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    v3(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

pub fn length(a: Vector3) -> f32 {
    dot(a, a).sqrt()
}

/// Unit vector in the direction of `a`; the zero vector maps to itself.
pub fn normalize(a: Vector3) -> Vector3 {
    let len = length(a);
    if len <= f32::EPSILON {
        a
    } else {
        scale(a, 1.0 / len)
    }
}

/// A half-line in world space. `dir` is expected to be normalized.
#[derive(Clone, Copy, Debug)]
pub struct Ray3 {
    pub origin: Vector3,
    pub dir: Vector3,
}

impl Ray3 {
    pub fn at(&self, t: f32) -> Vector3 {
        add(self.origin, scale(self.dir, t))
    }

    /// Distance along the ray to the first intersection with a sphere.
    ///
    /// Returns `None` when the sphere is missed or lies entirely behind the
    /// origin. An origin inside the sphere reports the exit distance.
    pub fn hit_sphere(&self, center: Vector3, radius: f32) -> Option<f32> {
        let oc = sub(self.origin, center);
        let b = dot(oc, self.dir);
        let c = dot(oc, oc) - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sq = disc.sqrt();
        let near = -b - sq;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + sq;
        if far >= 0.0 { Some(far) } else { None }
    }
}
