//! Orbit camera around the arcade platform.
//!
//! The camera sits on a sphere around `target`, parameterised by azimuth
//! (`yaw`, around +Y) and polar angle (`polar`, measured from +Y). Dragging
//! feeds angular velocity, the wheel feeds zoom; both decay by the damping
//! factor every frame. Panning is not supported.
//!
//! The same camera also answers the two projection questions the rest of the
//! scene needs: the world ray under a screen pixel (for coin picking) and the
//! screen pixel of a world point (for the floating title).

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Vector2, Vector3};
use std::f32::consts::{PI, TAU};

use crate::math::{Ray3, add, cross, dot, length, normalize, scale, sub, v3};

pub const DEFAULT_FOVY: f32 = 60.0;
pub const DEFAULT_EYE: Vector3 = Vector3 {
    x: 0.0,
    y: 3.0,
    z: 12.0,
};
pub const DAMPING: f32 = 0.05;
pub const MIN_POLAR: f32 = 0.01;
pub const MAX_POLAR: f32 = PI / 2.1;
/// Fraction of the distance removed per wheel notch.
pub const ZOOM_STEP: f32 = 0.05;
const NEAR: f32 = 0.01;

#[derive(Resource, Clone, Copy, Debug)]
pub struct OrbitCamera {
    pub target: Vector3,
    pub yaw: f32,
    pub polar: f32,
    pub distance: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    yaw_velocity: f32,
    polar_velocity: f32,
    zoom_velocity: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_at(DEFAULT_EYE, v3(0.0, 0.0, 0.0), DEFAULT_FOVY, 5.0, 25.0)
    }
}

impl OrbitCamera {
    /// Build a camera from an eye position orbiting `target`.
    pub fn looking_at(
        eye: Vector3,
        target: Vector3,
        fovy: f32,
        min_distance: f32,
        max_distance: f32,
    ) -> Self {
        let offset = sub(eye, target);
        let distance = length(offset).clamp(min_distance, max_distance);
        let polar = if length(offset) > f32::EPSILON {
            (offset.y / length(offset)).clamp(-1.0, 1.0).acos()
        } else {
            MAX_POLAR
        };
        OrbitCamera {
            target,
            yaw: offset.x.atan2(offset.z),
            polar: polar.clamp(MIN_POLAR, MAX_POLAR),
            distance,
            fovy,
            min_distance,
            max_distance,
            yaw_velocity: 0.0,
            polar_velocity: 0.0,
            zoom_velocity: 0.0,
        }
    }

    /// Queue a drag of `dx`/`dy` pixels. A drag the full viewport height
    /// turns the camera a full revolution.
    pub fn drag(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        self.yaw_velocity -= TAU * dx / viewport_height;
        self.polar_velocity -= TAU * dy / viewport_height;
    }

    /// Queue a zoom by wheel notches; positive moves closer.
    pub fn zoom(&mut self, notches: f32) {
        self.zoom_velocity += notches * ZOOM_STEP;
    }

    /// Apply one frame of damped motion and enforce the limits.
    pub fn update(&mut self) {
        self.yaw += self.yaw_velocity * DAMPING;
        self.polar = (self.polar + self.polar_velocity * DAMPING).clamp(MIN_POLAR, MAX_POLAR);
        self.distance = (self.distance * (1.0 - self.zoom_velocity * DAMPING))
            .clamp(self.min_distance, self.max_distance);

        self.yaw_velocity *= 1.0 - DAMPING;
        self.polar_velocity *= 1.0 - DAMPING;
        self.zoom_velocity *= 1.0 - DAMPING;
    }

    pub fn is_moving(&self) -> bool {
        self.yaw_velocity.abs() > 1e-4
            || self.polar_velocity.abs() > 1e-4
            || self.zoom_velocity.abs() > 1e-4
    }

    pub fn eye(&self) -> Vector3 {
        let sin_polar = self.polar.sin();
        add(
            self.target,
            v3(
                self.distance * sin_polar * self.yaw.sin(),
                self.distance * self.polar.cos(),
                self.distance * sin_polar * self.yaw.cos(),
            ),
        )
    }

    /// `(forward, right, up)` unit vectors of the view.
    pub fn basis(&self) -> (Vector3, Vector3, Vector3) {
        let forward = normalize(sub(self.target, self.eye()));
        let right = normalize(cross(forward, v3(0.0, 1.0, 0.0)));
        let up = cross(right, forward);
        (forward, right, up)
    }

    fn half_extents(&self, screen: Vector2) -> (f32, f32) {
        let tan_half = (self.fovy.to_radians() * 0.5).tan();
        let aspect = if screen.y > 0.0 { screen.x / screen.y } else { 1.0 };
        (tan_half * aspect, tan_half)
    }

    /// World-space ray through `pointer` (pixels, origin top-left).
    pub fn screen_ray(&self, pointer: Vector2, screen: Vector2) -> Ray3 {
        let (half_w, half_h) = self.half_extents(screen);
        let ndc_x = if screen.x > 0.0 { 2.0 * pointer.x / screen.x - 1.0 } else { 0.0 };
        let ndc_y = if screen.y > 0.0 { 1.0 - 2.0 * pointer.y / screen.y } else { 0.0 };
        let (forward, right, up) = self.basis();
        let dir = add(
            forward,
            add(scale(right, ndc_x * half_w), scale(up, ndc_y * half_h)),
        );
        Ray3 {
            origin: self.eye(),
            dir: normalize(dir),
        }
    }

    /// Pixel position of `point`, or `None` when it is behind the camera.
    pub fn world_to_screen(&self, point: Vector3, screen: Vector2) -> Option<Vector2> {
        let (half_w, half_h) = self.half_extents(screen);
        let (forward, right, up) = self.basis();
        let rel = sub(point, self.eye());
        let depth = dot(rel, forward);
        if depth <= NEAR {
            return None;
        }
        let x = dot(rel, right) / (depth * half_w);
        let y = dot(rel, up) / (depth * half_h);
        Some(Vector2 {
            x: (x + 1.0) * 0.5 * screen.x,
            y: (1.0 - y) * 0.5 * screen.y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn screen() -> Vector2 {
        Vector2 { x: 1280.0, y: 720.0 }
    }

    #[test]
    fn test_default_eye_matches_start_position() {
        let cam = OrbitCamera::default();
        let eye = cam.eye();
        assert!(approx_eq(eye.x, 0.0));
        assert!(approx_eq(eye.y, 3.0));
        assert!(approx_eq(eye.z, 12.0));
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let cam = OrbitCamera::default();
        let ray = cam.screen_ray(Vector2 { x: 640.0, y: 360.0 }, screen());
        assert!(ray.hit_sphere(cam.target, 0.1).is_some());
    }

    #[test]
    fn test_projection_roundtrips_through_ray() {
        let cam = OrbitCamera::default();
        let point = v3(1.5, 2.0, -1.0);
        let px = cam.world_to_screen(point, screen()).unwrap();
        let ray = cam.screen_ray(px, screen());
        assert!(ray.hit_sphere(point, 0.01).is_some());
    }

    #[test]
    fn test_point_behind_camera_has_no_projection() {
        let cam = OrbitCamera::default();
        assert!(cam.world_to_screen(v3(0.0, 3.0, 20.0), screen()).is_none());
    }

    #[test]
    fn test_zoom_clamped() {
        let mut cam = OrbitCamera::default();
        for _ in 0..500 {
            cam.zoom(10.0);
            cam.update();
        }
        assert!(approx_eq(cam.distance, cam.min_distance));
        for _ in 0..500 {
            cam.zoom(-10.0);
            cam.update();
        }
        assert!(approx_eq(cam.distance, cam.max_distance));
    }

    #[test]
    fn test_polar_clamped_below_horizon() {
        let mut cam = OrbitCamera::default();
        for _ in 0..200 {
            cam.drag(0.0, -500.0, 720.0);
            cam.update();
        }
        assert!(cam.polar <= MAX_POLAR + 1e-6);
        assert!(cam.eye().y > 0.0);
    }

    #[test]
    fn test_drag_decays() {
        let mut cam = OrbitCamera::default();
        cam.drag(100.0, 0.0, 720.0);
        assert!(cam.is_moving());
        let start = cam.yaw;
        for _ in 0..400 {
            cam.update();
        }
        assert!(!cam.is_moving());
        assert!(cam.yaw < start);
    }
}
