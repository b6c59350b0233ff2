//! Game systems.
//!
//! This module groups all ECS systems and observers that advance the
//! simulation, read input, and render.
//!
//! Submodules overview
//! - [`coin`] – per-frame coin spin, bob and scale smoothing
//! - [`collect`] – collect/miss handling and due respawns
//! - [`decoration`] – evaluate decoration animation drivers
//! - [`gameconfig`] – apply configuration changes to the window and camera
//! - [`gamestate`] – check for pending state transitions and run conditions
//! - [`hud`] – advance HUD timers
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`loading`] – drive the loading screen and leave it when done
//! - [`orbitcamera`] – feed pointer drag and wheel into the camera
//! - [`picking`] – pointer hover and click hit-testing against coins
//! - [`render`] – draw the scene, HUD and overlays using Raylib
//! - [`score`] – score and HUD observers
//! - [`time`] – update animation time and the wall clock

pub mod coin;
pub mod collect;
pub mod decoration;
pub mod gameconfig;
pub mod gamestate;
pub mod hud;
pub mod input;
pub mod loading;
pub mod orbitcamera;
pub mod picking;
pub mod render;
pub mod score;
pub mod time;
