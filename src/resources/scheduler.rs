//! Deferred respawn tasks keyed by coin id.
//!
//! A successful collect schedules exactly one respawn for that coin at a
//! fixed wall-clock offset. [`RespawnScheduler::drain_due`] hands back every
//! task whose due time has been reached, in due order. Tearing the scene
//! down calls [`RespawnScheduler::cancel_all`], which drops every pending
//! task before the scheduler itself is removed.

use bevy_ecs::prelude::Resource;
use log::debug;
use rustc_hash::FxHashMap;
use std::time::Duration;

use crate::resources::coinset::CoinId;

/// Delay between a collect and the coin's respawn.
pub const RESPAWN_DELAY: Duration = Duration::from_millis(2000);

#[derive(Resource, Debug, Default)]
pub struct RespawnScheduler {
    pending: FxHashMap<CoinId, Duration>,
}

impl RespawnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a respawn of `coin` at `now + delay`, replacing any pending
    /// task for the same coin. Returns the due time.
    pub fn schedule(&mut self, coin: CoinId, now: Duration, delay: Duration) -> Duration {
        let due = now + delay;
        if self.pending.insert(coin, due).is_some() {
            debug!("respawn for coin {} rescheduled", coin);
        }
        due
    }

    /// Remove and return the coins whose respawn is due at `now`, earliest
    /// first. Ties are broken by coin id.
    pub fn drain_due(&mut self, now: Duration) -> Vec<CoinId> {
        let mut due: Vec<(Duration, CoinId)> = self
            .pending
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(coin, at)| (*at, *coin))
            .collect();
        due.sort_unstable();
        for (_, coin) in &due {
            self.pending.remove(coin);
        }
        due.into_iter().map(|(_, coin)| coin).collect()
    }

    /// Cancel every pending respawn. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Due time of the pending respawn for `coin`, if any.
    pub fn due_at(&self, coin: CoinId) -> Option<Duration> {
        self.pending.get(&coin).copied()
    }
}
