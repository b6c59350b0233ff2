//! Collection controller.
//!
//! Turns resolved pointer activations into collects and misses, and brings
//! collected coins back once their respawn is due.
//!
//! - [`attempt_collect`] marks an interactible coin as collected and queues
//!   its respawn on the [`RespawnScheduler`].
//! - [`pointer_activation_observer`] routes a [`PointerActivatedEvent`] to
//!   either a [`CoinCollectedEvent`] or a [`ComboMissedEvent`].
//! - [`respawn_due_coins`] runs every frame and respawns every coin whose
//!   task is due on the [`WallClock`].
//!
//! Activations on coins that are already collected (or exiting) and ids
//! outside the set are silent no-ops.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};
use std::time::Duration;

use crate::events::coin::{
    CoinCollectedEvent, ComboMissedEvent, PointerActivatedEvent, PointerTarget,
};
use crate::resources::coinset::{CoinId, CoinSet, sample_home};
use crate::resources::scenerng::SceneRng;
use crate::resources::scheduler::{RESPAWN_DELAY, RespawnScheduler};
use crate::resources::wallclock::WallClock;

/// Try to collect coin `id` at wall-clock time `now`.
///
/// Returns `true` when the coin was interactible; in that case it is now
/// collected, its exit animation is armed and a respawn is scheduled at
/// `now + RESPAWN_DELAY`. Returns `false` otherwise, touching nothing.
pub fn attempt_collect(
    coins: &mut CoinSet,
    scheduler: &mut RespawnScheduler,
    now: Duration,
    id: CoinId,
) -> bool {
    let Some(coin) = coins.get_mut(id) else {
        debug!("collect ignored: unknown coin {}", id);
        return false;
    };
    if !coin.is_interactible() {
        debug!("collect ignored: coin {} already collected", id);
        return false;
    }
    coin.collected = true;
    coin.view.collecting = true;
    coin.view.hovered = false;
    let due = scheduler.schedule(id, now, RESPAWN_DELAY);
    debug!("coin {} collected, respawn due at {:?}", id, due);
    true
}

/// A pointer activation that hit nothing. Always resets the combo.
pub fn attempt_miss(commands: &mut Commands) {
    commands.trigger(ComboMissedEvent {});
}

/// Observer resolving pointer activations into collect or miss events.
///
/// When the scene is not mounted (no [`CoinSet`] or [`RespawnScheduler`])
/// activations are dropped.
pub fn pointer_activation_observer(
    trigger: On<PointerActivatedEvent>,
    mut commands: Commands,
    coins: Option<ResMut<CoinSet>>,
    scheduler: Option<ResMut<RespawnScheduler>>,
    clock: Res<WallClock>,
) {
    let (Some(mut coins), Some(mut scheduler)) = (coins, scheduler) else {
        debug!("pointer activation dropped: scene not mounted");
        return;
    };
    match trigger.event().target {
        PointerTarget::Coin(id) => {
            if attempt_collect(&mut coins, &mut scheduler, clock.now, id) {
                commands.trigger(CoinCollectedEvent { coin: id });
            }
        }
        PointerTarget::Nothing => attempt_miss(&mut commands),
    }
}

/// Respawn every coin whose scheduled time has been reached.
///
/// Each respawn samples a fresh home, clears `collected` and resets the
/// coin's view state.
pub fn respawn_due_coins(
    clock: Res<WallClock>,
    mut scheduler: ResMut<RespawnScheduler>,
    mut coins: ResMut<CoinSet>,
    mut rng: ResMut<SceneRng>,
) {
    for id in scheduler.drain_due(clock.now) {
        let home = sample_home(&mut rng);
        if coins.respawn(id, home) {
            info!(
                "coin {} respawned at ({:.2}, {:.2}, {:.2})",
                id, home.x, home.y, home.z
            );
        } else {
            debug!("respawn ignored for coin {}", id);
        }
    }
}
