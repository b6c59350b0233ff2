//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that the debug overlay
//! (frame rate, camera, per-coin state) should be drawn. Remove it to disable
//! debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws the debug overlay.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
