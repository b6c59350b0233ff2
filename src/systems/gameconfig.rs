//! Game configuration change detection system.
//!
//! Monitors [`GameConfig`] for changes and applies settings to the window
//! and the orbit camera.

use crate::resources::gameconfig::GameConfig;
use crate::resources::orbitcamera::OrbitCamera;
use bevy_ecs::prelude::*;
use log::info;
use raylib::ffi;

/// Copy the camera-related settings into a live [`OrbitCamera`].
pub fn apply_camera_config(config: &GameConfig, camera: &mut OrbitCamera) {
    camera.fovy = config.fov;
    camera.min_distance = config.min_distance;
    camera.max_distance = config.max_distance.max(config.min_distance);
    camera.distance = camera.distance.clamp(camera.min_distance, camera.max_distance);
}

/// System that applies game configuration changes.
///
/// When [`GameConfig`] is added or modified:
/// 1. resizes the window if the configured size differs
/// 2. applies vsync and target FPS
/// 3. updates the camera field of view and zoom limits, if a scene is mounted
pub fn apply_gameconfig_changes(
    config: Res<GameConfig>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    camera: Option<ResMut<OrbitCamera>>,
) {
    if !(config.is_changed() || config.is_added()) {
        return;
    }

    let (w, h) = config.window_size();
    if rl.get_screen_width() != w as i32 || rl.get_screen_height() != h as i32 {
        info!(
            "Resizing window: {}x{} -> {}x{}",
            rl.get_screen_width(),
            rl.get_screen_height(),
            w,
            h
        );
        rl.set_window_size(w as i32, h as i32);
    }

    unsafe {
        if config.vsync {
            ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        } else {
            ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        }
    }
    rl.set_target_fps(config.target_fps);

    if let Some(mut camera) = camera {
        apply_camera_config(&config, &mut camera);
    }

    info!(
        "GameConfig applied: {}x{} @ {} fps, vsync {}, fov {}",
        w, h, config.target_fps, config.vsync, config.fov
    );
}
