//! Coin behavior updater.
//!
//! One flat pass over the [`CoinSet`] per frame. For each coin the render
//! transform is derived from its declarative parameters, its canonical home
//! and the animation clock:
//!
//! - spin: `rotation_y += delta * rotation_speed`
//! - bob: `y = home.y + sin(elapsed * speed + home.x) * 0.3`
//! - scale: smoothed toward 0 while collecting (with a small upward push),
//!   1.3 while hovered, 1.0 otherwise
//!
//! A collected coin is hidden once its smoothed scale drops under
//! [`HIDE_SCALE`]. The smoothed scale is the only value carried between
//! frames.

use bevy_ecs::prelude::*;

use crate::resources::coinset::{Coin, CoinSet, CoinTransform};
use crate::resources::worldtime::WorldTime;

pub const BOB_AMPLITUDE: f32 = 0.3;
/// Upward push per second applied while the exit animation runs.
pub const EXIT_RISE: f32 = 5.0;
pub const HOVER_SCALE: f32 = 1.3;
pub const REST_SCALE: f32 = 1.0;
/// Smoothing constants per target.
pub const EXIT_RATE: f32 = 8.0;
pub const HOVER_RATE: f32 = 10.0;
pub const SETTLE_RATE: f32 = 5.0;
/// Collected coins below this scale are not drawn.
pub const HIDE_SCALE: f32 = 0.05;

/// Which scale a coin is heading toward this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleTarget {
    Exit,
    Hover,
    Rest,
}

impl ScaleTarget {
    /// First match wins: collecting, then hovered, then rest.
    pub fn select(collecting: bool, hovered: bool) -> Self {
        if collecting {
            ScaleTarget::Exit
        } else if hovered {
            ScaleTarget::Hover
        } else {
            ScaleTarget::Rest
        }
    }

    pub fn scale(self) -> f32 {
        match self {
            ScaleTarget::Exit => 0.0,
            ScaleTarget::Hover => HOVER_SCALE,
            ScaleTarget::Rest => REST_SCALE,
        }
    }

    pub fn rate(self) -> f32 {
        match self {
            ScaleTarget::Exit => EXIT_RATE,
            ScaleTarget::Hover => HOVER_RATE,
            ScaleTarget::Rest => SETTLE_RATE,
        }
    }
}

/// Exponential smoothing step: move `current` toward `target` by
/// `min(delta * rate, 1)` of the remaining distance.
///
/// The interpolation factor is clamped so a long frame lands on the target
/// instead of overshooting past it.
pub fn smooth_scale(current: f32, target: f32, rate: f32, delta: f32) -> f32 {
    let t = (delta.max(0.0) * rate).min(1.0);
    current + (target - current) * t
}

/// Vertical position of the bob around `home_y`, phase-shifted by `home_x`.
pub fn bob_height(home_y: f32, home_x: f32, speed: f32, elapsed: f32) -> f32 {
    home_y + (elapsed * speed + home_x).sin() * BOB_AMPLITUDE
}

/// Advance one coin by one frame and return its render transform.
pub fn step_coin(coin: &mut Coin, elapsed: f32, delta: f32) -> CoinTransform {
    let view = &mut coin.view;
    view.rotation_y += delta * coin.rotation_speed;

    let mut position = coin.position;
    position.y = bob_height(coin.position.y, coin.position.x, coin.speed, elapsed);

    let target = ScaleTarget::select(view.collecting, view.hovered);
    view.scale = smooth_scale(view.scale, target.scale(), target.rate(), delta);
    if target == ScaleTarget::Exit {
        position.y += EXIT_RISE * delta;
    }

    view.visible = !(coin.collected && view.scale < HIDE_SCALE);
    view.transform = CoinTransform {
        position,
        rotation_y: view.rotation_y,
        scale: view.scale,
    };
    view.transform
}

/// Update every coin's view state from the animation clock.
pub fn coin_behavior_system(world_time: Res<WorldTime>, mut coins: ResMut<CoinSet>) {
    let elapsed = world_time.elapsed;
    let delta = world_time.delta.max(0.0);
    for coin in coins.iter_mut() {
        step_coin(coin, elapsed, delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Vector3;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn coin_at(x: f32, y: f32, z: f32) -> Coin {
        Coin::new(0, Vector3 { x, y, z }, 2.0, 3.0)
    }

    #[test]
    fn test_smooth_scale_basic() {
        assert!(approx_eq(smooth_scale(1.0, 0.0, 8.0, 0.05), 0.6));
        assert!(approx_eq(smooth_scale(1.0, 1.3, 10.0, 0.01), 1.03));
        assert!(approx_eq(smooth_scale(0.5, 1.0, 5.0, 0.0), 0.5));
    }

    #[test]
    fn test_smooth_scale_clamps_long_frames() {
        assert!(approx_eq(smooth_scale(1.0, 0.0, 8.0, 1.0), 0.0));
        assert!(approx_eq(smooth_scale(1.0, 1.3, 10.0, 0.5), 1.3));
    }

    #[test]
    fn test_exit_shrink_is_monotonic_and_finishes() {
        for delta in [0.001, 0.016, 0.05, 0.124, 0.2, 1.5] {
            let mut scale = 1.3;
            let mut frames = 0;
            while scale > HIDE_SCALE {
                let next = smooth_scale(scale, 0.0, EXIT_RATE, delta);
                assert!(next <= scale);
                scale = next;
                frames += 1;
                assert!(frames < 100_000);
            }
        }
    }

    #[test]
    fn test_target_priority() {
        assert_eq!(ScaleTarget::select(true, true), ScaleTarget::Exit);
        assert_eq!(ScaleTarget::select(false, true), ScaleTarget::Hover);
        assert_eq!(ScaleTarget::select(false, false), ScaleTarget::Rest);
    }

    #[test]
    fn test_bob_does_not_move_home() {
        let mut coin = coin_at(1.0, 2.0, -1.0);
        for frame in 0..100 {
            step_coin(&mut coin, frame as f32 * 0.016, 0.016);
        }
        assert!(approx_eq(coin.position.y, 2.0));
        assert!(approx_eq(coin.position.x, 1.0));
    }

    #[test]
    fn test_bob_formula_and_amplitude() {
        let mut coin = coin_at(0.7, 2.0, 0.0);
        let t = step_coin(&mut coin, 1.25, 0.016);
        assert!(approx_eq(t.position.y, 2.0 + (1.25f32 * 2.0 + 0.7).sin() * 0.3));
        for frame in 0..500 {
            let t = step_coin(&mut coin, frame as f32 * 0.05, 0.05);
            assert!((t.position.y - 2.0).abs() <= BOB_AMPLITUDE + EPSILON);
        }
    }

    #[test]
    fn test_spin_accumulates() {
        let mut coin = coin_at(0.0, 1.0, 0.0);
        step_coin(&mut coin, 0.0, 0.5);
        let t = step_coin(&mut coin, 0.5, 0.5);
        assert!(approx_eq(t.rotation_y, 3.0));
    }

    #[test]
    fn test_hover_grows_toward_1_3() {
        let mut coin = coin_at(0.0, 1.0, 0.0);
        coin.view.hovered = true;
        let mut last = coin.view.scale;
        for frame in 0..200 {
            let t = step_coin(&mut coin, frame as f32 * 0.016, 0.016);
            assert!(t.scale >= last);
            assert!(t.scale <= HOVER_SCALE + EPSILON);
            last = t.scale;
        }
        assert!((last - HOVER_SCALE).abs() < 1e-3);
    }

    #[test]
    fn test_collecting_rises_and_hides() {
        let mut coin = coin_at(0.0, 1.0, 0.0);
        coin.collected = true;
        coin.view.collecting = true;
        let t = step_coin(&mut coin, 0.0, 0.1);
        assert!(approx_eq(t.position.y, 1.0 + EXIT_RISE * 0.1));
        assert!(coin.view.visible);
        let mut frames = 0;
        while coin.view.visible {
            step_coin(&mut coin, 0.0, 0.016);
            frames += 1;
            assert!(frames < 10_000);
        }
        assert!(coin.view.scale < HIDE_SCALE);
    }

    #[test]
    fn test_small_but_uncollected_coin_stays_visible() {
        let mut coin = coin_at(0.0, 1.0, 0.0);
        coin.view.scale = 0.01;
        step_coin(&mut coin, 0.0, 0.0);
        assert!(coin.view.visible);
    }
}
