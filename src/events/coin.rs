//! Coin interaction events.
//!
//! The picking system resolves every pointer activation to a
//! [`PointerTarget`] and triggers a [`PointerActivatedEvent`]. The collection
//! observer turns that into either a [`CoinCollectedEvent`] (a successful
//! collect) or a [`ComboMissedEvent`] (nothing was hit). The score observer
//! reacts to both and publishes the new counters as a [`ScoreChangedEvent`].
//!
//! ```text
//! PointerActivatedEvent ─┬─> CoinCollectedEvent ─┐
//!                        └─> ComboMissedEvent  ──┴─> ScoreChangedEvent
//! ```

use bevy_ecs::prelude::*;

use crate::resources::coinset::CoinId;
use crate::resources::scoreboard::ScoreSnapshot;

/// What a pointer activation landed on, already hit-tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Coin(CoinId),
    Nothing,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct PointerActivatedEvent {
    pub target: PointerTarget,
}

/// A collect on an interactible coin succeeded.
#[derive(Event, Debug, Clone, Copy)]
pub struct CoinCollectedEvent {
    pub coin: CoinId,
}

/// A pointer activation hit no coin.
#[derive(Event, Debug, Clone, Copy)]
pub struct ComboMissedEvent {}

/// The score counters changed.
#[derive(Event, Debug, Clone, Copy)]
pub struct ScoreChangedEvent {
    pub snapshot: ScoreSnapshot,
}
