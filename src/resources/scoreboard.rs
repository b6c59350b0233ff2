//! Session score and combo counters.
//!
//! [`ScoreBoard`] is a pure state machine over two events: a collect raises
//! the score by `100 * combo` and escalates the combo up to [`MAX_COMBO`];
//! a miss drops the combo back to 1. Nothing else mutates it.

use bevy_ecs::prelude::Resource;

pub const POINTS_PER_COIN: u64 = 100;
pub const MAX_COMBO: u32 = 10;

/// The only two inputs the score policy reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreEvent {
    Collect,
    Miss,
}

/// Immutable copy of the counters, handed to the HUD.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreSnapshot {
    pub score: u64,
    pub combo: u32,
    pub coins_collected: u64,
}

impl Default for ScoreSnapshot {
    fn default() -> Self {
        ScoreSnapshot {
            score: 0,
            combo: 1,
            coins_collected: 0,
        }
    }
}

#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    state: ScoreSnapshot,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event and return the resulting counters.
    pub fn apply(&mut self, event: ScoreEvent) -> ScoreSnapshot {
        self.state = transition(self.state, event);
        self.state
    }

    pub fn snapshot(&self) -> ScoreSnapshot {
        self.state
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn combo(&self) -> u32 {
        self.state.combo
    }

    pub fn coins_collected(&self) -> u64 {
        self.state.coins_collected
    }
}

/// The score policy as a plain function.
pub fn transition(state: ScoreSnapshot, event: ScoreEvent) -> ScoreSnapshot {
    match event {
        ScoreEvent::Collect => ScoreSnapshot {
            score: state.score + POINTS_PER_COIN * u64::from(state.combo),
            combo: (state.combo + 1).min(MAX_COMBO),
            coins_collected: state.coins_collected + 1,
        },
        ScoreEvent::Miss => ScoreSnapshot { combo: 1, ..state },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(score: u64, combo: u32, coins_collected: u64) -> ScoreSnapshot {
        ScoreSnapshot {
            score,
            combo,
            coins_collected,
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ScoreBoard::new().snapshot(), snap(0, 1, 0));
    }

    #[test]
    fn test_combo_after_consecutive_collects() {
        for n in 0..25u32 {
            let mut board = ScoreBoard::new();
            for _ in 0..n {
                board.apply(ScoreEvent::Collect);
            }
            assert_eq!(board.combo(), (1 + n).min(MAX_COMBO));
        }
    }

    #[test]
    fn test_score_is_sum_of_combo_multiples() {
        let mut board = ScoreBoard::new();
        let mut expected = 0;
        for _ in 0..15 {
            expected += 100 * u64::from(board.combo());
            board.apply(ScoreEvent::Collect);
        }
        assert_eq!(board.score(), expected);
        // 100 * (1 + 2 + ... + 10) + 5 more at the cap.
        assert_eq!(expected, 100 * 55 + 5 * 1000);
    }

    #[test]
    fn test_miss_resets_combo_only() {
        let mut board = ScoreBoard::new();
        for _ in 0..6 {
            board.apply(ScoreEvent::Collect);
        }
        let before = board.snapshot();
        let after = board.apply(ScoreEvent::Miss);
        assert_eq!(after.combo, 1);
        assert_eq!(after.score, before.score);
        assert_eq!(after.coins_collected, before.coins_collected);
    }

    #[test]
    fn test_miss_on_fresh_board_is_harmless() {
        let mut board = ScoreBoard::new();
        assert_eq!(board.apply(ScoreEvent::Miss), snap(0, 1, 0));
    }

    #[test]
    fn test_end_to_end_sequence() {
        let mut board = ScoreBoard::new();
        assert_eq!(board.apply(ScoreEvent::Collect), snap(100, 2, 1));
        assert_eq!(board.apply(ScoreEvent::Collect), snap(300, 3, 2));
        assert_eq!(board.apply(ScoreEvent::Miss), snap(300, 1, 2));
        assert_eq!(board.apply(ScoreEvent::Collect), snap(400, 2, 3));
    }
}
