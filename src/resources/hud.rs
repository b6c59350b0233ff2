//! HUD presentation state.
//!
//! The HUD is a projection of [`ScoreSnapshot`] with two bits of cosmetic
//! timing layered on top:
//!
//! - [`ScoreTicker`] walks the displayed score toward the real score in
//!   fixed 30 ms ticks. Each retarget computes one step of
//!   `ceil(|remaining| / 10)` from the value currently on screen, so a single
//!   jump settles in at most ten ticks and never overshoots.
//! - [`ComboFlash`] holds a 200 ms emphasis whenever the combo changes to a
//!   value above 1.

use bevy_ecs::prelude::Resource;
use std::time::Duration;

use crate::resources::scoreboard::ScoreSnapshot;

pub const SCORE_TICK: Duration = Duration::from_millis(30);
pub const SCORE_TICK_DIVISOR: u64 = 10;
pub const COMBO_FLASH: Duration = Duration::from_millis(200);
/// Width the score is padded to with leading zeros.
pub const SCORE_WIDTH: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreTicker {
    displayed: u64,
    target: u64,
    step: u64,
    since_tick: Duration,
}

impl ScoreTicker {
    pub fn new(value: u64) -> Self {
        ScoreTicker {
            displayed: value,
            target: value,
            step: 0,
            since_tick: Duration::ZERO,
        }
    }

    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.displayed == self.target
    }

    /// Point the ticker at a new value, restarting the interpolation from
    /// whatever is displayed right now.
    pub fn retarget(&mut self, target: u64) {
        if target == self.target && self.step != 0 {
            return;
        }
        self.target = target;
        self.step = self.displayed.abs_diff(target).div_ceil(SCORE_TICK_DIVISOR);
        self.since_tick = Duration::ZERO;
    }

    /// Run one display tick. Returns `true` if the displayed value moved.
    pub fn tick(&mut self) -> bool {
        if self.is_settled() {
            self.step = 0;
            return false;
        }
        self.displayed = if self.target > self.displayed {
            (self.displayed + self.step).min(self.target)
        } else {
            self.displayed.saturating_sub(self.step).max(self.target)
        };
        if self.is_settled() {
            self.step = 0;
        }
        true
    }

    /// Feed wall-clock time and run every tick that became due. Returns the
    /// number of ticks run.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.is_settled() {
            self.since_tick = Duration::ZERO;
            return 0;
        }
        self.since_tick += dt;
        let mut ticks = 0;
        while self.since_tick >= SCORE_TICK && !self.is_settled() {
            self.since_tick -= SCORE_TICK;
            self.tick();
            ticks += 1;
        }
        ticks
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComboFlash {
    remaining: Duration,
}

impl ComboFlash {
    pub fn trigger(&mut self) {
        self.remaining = COMBO_FLASH;
    }

    pub fn advance(&mut self, dt: Duration) {
        self.remaining = self.remaining.saturating_sub(dt);
    }

    pub fn is_active(&self) -> bool {
        !self.remaining.is_zero()
    }
}

/// Everything the HUD overlay draws from.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct HudState {
    pub snapshot: ScoreSnapshot,
    pub ticker: ScoreTicker,
    pub combo_flash: ComboFlash,
}

impl HudState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take in a fresh snapshot from the score policy.
    pub fn observe(&mut self, snapshot: ScoreSnapshot) {
        if snapshot.combo != self.snapshot.combo && snapshot.combo > 1 {
            self.combo_flash.trigger();
        }
        if snapshot.score != self.ticker.target() {
            self.ticker.retarget(snapshot.score);
        }
        self.snapshot = snapshot;
    }

    pub fn advance(&mut self, dt: Duration) {
        self.ticker.advance(dt);
        self.combo_flash.advance(dt);
    }

    pub fn combo_active(&self) -> bool {
        self.snapshot.combo > 1
    }

    pub fn score_text(&self) -> String {
        format_score(self.ticker.displayed())
    }

    pub fn combo_text(&self) -> String {
        format!("x{}", self.snapshot.combo)
    }

    pub fn coins_text(&self) -> String {
        self.snapshot.coins_collected.to_string()
    }
}

/// Group digits in threes with commas, then left-pad with `0` to
/// [`SCORE_WIDTH`] characters.
pub fn format_score(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{:0>width$}", grouped, width = SCORE_WIDTH)
}
