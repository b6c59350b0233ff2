//! Fake loading screen state.
//!
//! The bar fills in random increments of up to 15% every 150 ms, the
//! "LOADING" dots cycle every 400 ms, the "INSERT COIN" prompt blinks once
//! per second and the title pulses between full and 70% opacity. None of it
//! waits on real work.

use bevy_ecs::prelude::Resource;
use std::time::Duration;

use crate::resources::scenerng::SceneRng;

pub const PROGRESS_TICK: Duration = Duration::from_millis(150);
pub const PROGRESS_MAX_STEP: f32 = 15.0;
pub const DOTS_TICK: Duration = Duration::from_millis(400);
pub const MAX_DOTS: u8 = 3;
pub const BLINK_PERIOD: Duration = Duration::from_millis(1000);
pub const PULSE_PERIOD: Duration = Duration::from_millis(1500);

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct LoadingScreen {
    /// Percent, may overshoot 100 on the last step.
    progress: f32,
    dots: u8,
    since_progress: Duration,
    since_dots: Duration,
    elapsed: Duration,
}

impl LoadingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 100.0
    }

    /// Progress clamped to `[0, 100]`.
    pub fn progress(&self) -> f32 {
        self.progress.min(100.0)
    }

    /// Fill fraction of the bar in `[0, 1]`.
    pub fn bar_fraction(&self) -> f32 {
        self.progress() / 100.0
    }

    /// Advance timers by `dt`, drawing progress increments from `rng`.
    /// Returns `true` once the bar is full.
    pub fn advance(&mut self, dt: Duration, rng: &mut SceneRng) -> bool {
        self.elapsed += dt;

        if !self.is_complete() {
            self.since_progress += dt;
            while self.since_progress >= PROGRESS_TICK && !self.is_complete() {
                self.since_progress -= PROGRESS_TICK;
                self.progress += rng.unit() * PROGRESS_MAX_STEP;
            }
        }

        self.since_dots += dt;
        while self.since_dots >= DOTS_TICK {
            self.since_dots -= DOTS_TICK;
            self.dots = if self.dots >= MAX_DOTS { 0 } else { self.dots + 1 };
        }

        self.is_complete()
    }

    pub fn dots(&self) -> u8 {
        self.dots
    }

    pub fn status_text(&self) -> String {
        format!("LOADING{}", ".".repeat(usize::from(self.dots)))
    }

    /// "INSERT COIN" is shown during the first half of each blink period.
    pub fn prompt_visible(&self) -> bool {
        let phase = self.elapsed.as_millis() % BLINK_PERIOD.as_millis();
        phase < BLINK_PERIOD.as_millis() / 2
    }

    /// Title opacity, easing 1.0 → 0.7 → 1.0 over one pulse period.
    pub fn title_alpha(&self) -> f32 {
        let period = PULSE_PERIOD.as_secs_f32();
        let phase = (self.elapsed.as_secs_f32() % period) / period;
        let wave = 0.5 - 0.5 * (phase * std::f32::consts::TAU).cos();
        1.0 - 0.3 * wave
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_no_progress_before_first_tick() {
        let mut screen = LoadingScreen::new();
        let mut rng = SceneRng::with_seed(11);
        screen.advance(ms(149), &mut rng);
        assert_eq!(screen.progress(), 0.0);
    }

    #[test]
    fn test_progress_is_monotonic_and_bounded_per_tick() {
        let mut screen = LoadingScreen::new();
        let mut rng = SceneRng::with_seed(12);
        let mut last = 0.0;
        for _ in 0..20 {
            screen.advance(PROGRESS_TICK, &mut rng);
            let p = screen.progress();
            assert!(p >= last);
            assert!(p - last <= PROGRESS_MAX_STEP);
            last = p;
        }
    }

    #[test]
    fn test_eventually_completes_and_clamps() {
        let mut screen = LoadingScreen::new();
        let mut rng = SceneRng::with_seed(13);
        let mut done = false;
        for _ in 0..10_000 {
            if screen.advance(PROGRESS_TICK, &mut rng) {
                done = true;
                break;
            }
        }
        assert!(done);
        assert_eq!(screen.progress(), 100.0);
        assert_eq!(screen.bar_fraction(), 1.0);
    }

    #[test]
    fn test_dots_cycle() {
        let mut screen = LoadingScreen::new();
        let mut rng = SceneRng::with_seed(14);
        let mut seen = vec![screen.status_text()];
        for _ in 0..4 {
            screen.advance(DOTS_TICK, &mut rng);
            seen.push(screen.status_text());
        }
        assert_eq!(
            seen,
            vec!["LOADING", "LOADING.", "LOADING..", "LOADING...", "LOADING"]
        );
    }

    #[test]
    fn test_prompt_blinks() {
        let mut screen = LoadingScreen::new();
        let mut rng = SceneRng::with_seed(15);
        assert!(screen.prompt_visible());
        screen.advance(ms(600), &mut rng);
        assert!(!screen.prompt_visible());
        screen.advance(ms(500), &mut rng);
        assert!(screen.prompt_visible());
    }

    #[test]
    fn test_title_alpha_range() {
        let mut screen = LoadingScreen::new();
        let mut rng = SceneRng::with_seed(16);
        assert!((screen.title_alpha() - 1.0).abs() < 1e-5);
        screen.advance(ms(750), &mut rng);
        assert!((screen.title_alpha() - 0.7).abs() < 1e-3);
    }
}
