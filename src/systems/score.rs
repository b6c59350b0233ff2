//! Score observers.
//!
//! The [`ScoreBoard`] is mutated only here, in response to
//! [`CoinCollectedEvent`] and [`ComboMissedEvent`]. Every mutation publishes
//! the new counters as a [`ScoreChangedEvent`], which the HUD observer feeds
//! into [`HudState`].

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::events::coin::{CoinCollectedEvent, ComboMissedEvent, ScoreChangedEvent};
use crate::resources::hud::HudState;
use crate::resources::scoreboard::{ScoreBoard, ScoreEvent};

fn apply_and_publish(commands: &mut Commands, board: &mut ScoreBoard, event: ScoreEvent) {
    let snapshot = board.apply(event);
    commands.trigger(ScoreChangedEvent { snapshot });
}

pub fn coin_collected_observer(
    trigger: On<CoinCollectedEvent>,
    mut commands: Commands,
    board: Option<ResMut<ScoreBoard>>,
) {
    let Some(mut board) = board else {
        debug!("collect of coin {} not scored: no scoreboard", trigger.event().coin);
        return;
    };
    apply_and_publish(&mut commands, &mut board, ScoreEvent::Collect);
    info!(
        "coin {} collected: score {} combo x{}",
        trigger.event().coin,
        board.score(),
        board.combo()
    );
}

pub fn combo_missed_observer(
    _trigger: On<ComboMissedEvent>,
    mut commands: Commands,
    board: Option<ResMut<ScoreBoard>>,
) {
    let Some(mut board) = board else {
        return;
    };
    let had_combo = board.combo() > 1;
    apply_and_publish(&mut commands, &mut board, ScoreEvent::Miss);
    if had_combo {
        info!("combo lost");
    }
}

/// Forward new counters to the HUD presentation state.
pub fn hud_score_observer(trigger: On<ScoreChangedEvent>, hud: Option<ResMut<HudState>>) {
    if let Some(mut hud) = hud {
        hud.observe(trigger.event().snapshot);
    }
}
