//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component are not despawned when the
//! scene is torn down. Observers and registered systems carry it so they
//! survive the unmount.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should outlive the scene.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
