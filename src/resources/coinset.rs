//! The coin entity set.
//!
//! Every collectible lives in one flat array indexed by its stable
//! [`CoinId`]. The array length never changes during a session; coins are
//! only toggled between collected and respawned. Each entry pairs the
//! declarative parameters (home, speeds) with a small view record holding the
//! per-frame animation state (hover, smoothed scale, collecting flag).
//!
//! Mutation paths:
//! - [`attempt_collect`](crate::systems::collect::attempt_collect) sets
//!   `collected` and the collecting flag.
//! - [`CoinSet::respawn`] resamples the home, clears `collected` and resets
//!   the view record.
//! - [`coin_behavior_system`](crate::systems::coin::coin_behavior_system)
//!   writes the view record once per frame.

use bevy_ecs::prelude::Resource;
use log::debug;
use raylib::prelude::Vector3;

use crate::resources::scenerng::SceneRng;

/// Stable coin identity; doubles as the index into [`CoinSet`].
pub type CoinId = usize;

/// Number of coins in a session.
pub const COIN_COUNT: usize = 12;
/// Homes are sampled with `x` and `z` in `(-SPAWN_HALF_EXTENT, SPAWN_HALF_EXTENT)`.
pub const SPAWN_HALF_EXTENT: f32 = 4.0;
/// Homes are sampled with `y` in `[SPAWN_MIN_Y, SPAWN_MAX_Y)`.
pub const SPAWN_MIN_Y: f32 = 1.0;
pub const SPAWN_MAX_Y: f32 = 3.0;
/// Bob frequency range.
pub const SPEED_RANGE: (f32, f32) = (1.0, 3.0);
/// Spin rate range in radians per second.
pub const ROTATION_SPEED_RANGE: (f32, f32) = (2.0, 5.0);

/// What the renderer needs for one coin this frame.
#[derive(Clone, Copy, Debug)]
pub struct CoinTransform {
    pub position: Vector3,
    /// Radians around the vertical axis, unbounded.
    pub rotation_y: f32,
    /// Uniform scale.
    pub scale: f32,
}

/// View-local animation state. Reset whenever a coin respawns.
#[derive(Clone, Copy, Debug)]
pub struct CoinView {
    pub hovered: bool,
    /// Exit animation in progress (set by a successful collect).
    pub collecting: bool,
    /// Smoothed scale, the only value carried between frames.
    pub scale: f32,
    pub rotation_y: f32,
    pub transform: CoinTransform,
    pub visible: bool,
}

impl CoinView {
    fn at(home: Vector3) -> Self {
        CoinView {
            hovered: false,
            collecting: false,
            scale: 1.0,
            rotation_y: 0.0,
            transform: CoinTransform {
                position: home,
                rotation_y: 0.0,
                scale: 1.0,
            },
            visible: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Coin {
    pub id: CoinId,
    /// Canonical home; the bob oscillates around it without mutating it.
    pub position: Vector3,
    pub collected: bool,
    /// Bob frequency, fixed at creation.
    pub speed: f32,
    /// Spin rate, fixed at creation.
    pub rotation_speed: f32,
    pub view: CoinView,
}

impl Coin {
    pub fn new(id: CoinId, position: Vector3, speed: f32, rotation_speed: f32) -> Self {
        Coin {
            id,
            position,
            collected: false,
            speed,
            rotation_speed,
            view: CoinView::at(position),
        }
    }

    /// Create a coin with a random home and random speeds.
    pub fn random(id: CoinId, rng: &mut SceneRng) -> Self {
        let position = sample_home(rng);
        let speed = rng.range(SPEED_RANGE.0, SPEED_RANGE.1);
        let rotation_speed = rng.range(ROTATION_SPEED_RANGE.0, ROTATION_SPEED_RANGE.1);
        Coin::new(id, position, speed, rotation_speed)
    }

    /// A coin accepts a collect only while neither collected nor exiting.
    pub fn is_interactible(&self) -> bool {
        !self.collected && !self.view.collecting
    }
}

/// Sample a fresh home inside the spawn volume.
pub fn sample_home(rng: &mut SceneRng) -> Vector3 {
    Vector3 {
        x: rng.open_range(-SPAWN_HALF_EXTENT, SPAWN_HALF_EXTENT),
        y: rng.range(SPAWN_MIN_Y, SPAWN_MAX_Y),
        z: rng.open_range(-SPAWN_HALF_EXTENT, SPAWN_HALF_EXTENT),
    }
}

/// Fixed-size collection of coins indexed by [`CoinId`].
#[derive(Resource, Clone, Debug)]
pub struct CoinSet {
    coins: Vec<Coin>,
}

impl CoinSet {
    /// Create the session's [`COIN_COUNT`] coins with ids `0..COIN_COUNT`.
    pub fn spawn(rng: &mut SceneRng) -> Self {
        let coins = (0..COIN_COUNT).map(|id| Coin::random(id, rng)).collect();
        CoinSet { coins }
    }

    /// Build a set from explicit coins. Ids are reassigned to match indices.
    pub fn from_coins(coins: Vec<Coin>) -> Self {
        let coins = coins
            .into_iter()
            .enumerate()
            .map(|(id, mut coin)| {
                coin.id = id;
                coin
            })
            .collect();
        CoinSet { coins }
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    pub fn get(&self, id: CoinId) -> Option<&Coin> {
        self.coins.get(id)
    }

    pub fn get_mut(&mut self, id: CoinId) -> Option<&mut Coin> {
        self.coins.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.coins.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Coin> {
        self.coins.iter_mut()
    }

    /// Mark exactly one coin (or none) as hovered.
    pub fn set_hovered(&mut self, hovered: Option<CoinId>) {
        for coin in self.coins.iter_mut() {
            coin.view.hovered = Some(coin.id) == hovered;
        }
    }

    /// Move a coin to `home` and make it interactible again.
    ///
    /// Returns `false` (and changes nothing) for an unknown id or a coin that
    /// is not collected.
    pub fn respawn(&mut self, id: CoinId, home: Vector3) -> bool {
        let Some(coin) = self.coins.get_mut(id) else {
            debug!("respawn ignored: unknown coin {}", id);
            return false;
        };
        if !coin.collected {
            debug!("respawn ignored: coin {} is not collected", id);
            return false;
        }
        coin.position = home;
        coin.collected = false;
        coin.view = CoinView::at(home);
        true
    }

    pub fn collected_count(&self) -> usize {
        self.coins.iter().filter(|c| c.collected).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home(x: f32, y: f32, z: f32) -> Vector3 {
        Vector3 { x, y, z }
    }

    #[test]
    fn test_spawn_creates_fixed_count_with_stable_ids() {
        let mut rng = SceneRng::with_seed(1);
        let set = CoinSet::spawn(&mut rng);
        assert_eq!(set.len(), COIN_COUNT);
        for (index, coin) in set.iter().enumerate() {
            assert_eq!(coin.id, index);
            assert!(!coin.collected);
        }
    }

    #[test]
    fn test_spawn_parameters_within_ranges() {
        let mut rng = SceneRng::with_seed(2);
        for _ in 0..20 {
            let set = CoinSet::spawn(&mut rng);
            for coin in set.iter() {
                assert!(coin.position.x > -4.0 && coin.position.x < 4.0);
                assert!(coin.position.z > -4.0 && coin.position.z < 4.0);
                assert!(coin.position.y >= 1.0 && coin.position.y < 3.0);
                assert!(coin.speed >= 1.0 && coin.speed < 3.0);
                assert!(coin.rotation_speed >= 2.0 && coin.rotation_speed < 5.0);
            }
        }
    }

    #[test]
    fn test_from_coins_reassigns_ids() {
        let set = CoinSet::from_coins(vec![
            Coin::new(7, home(0.0, 1.0, 0.0), 1.0, 2.0),
            Coin::new(9, home(1.0, 1.0, 0.0), 1.0, 2.0),
        ]);
        assert_eq!(set.get(0).unwrap().id, 0);
        assert_eq!(set.get(1).unwrap().id, 1);
    }

    #[test]
    fn test_set_hovered_is_exclusive() {
        let mut rng = SceneRng::with_seed(3);
        let mut set = CoinSet::spawn(&mut rng);
        set.set_hovered(Some(4));
        assert!(set.get(4).unwrap().view.hovered);
        assert_eq!(set.iter().filter(|c| c.view.hovered).count(), 1);
        set.set_hovered(None);
        assert!(set.iter().all(|c| !c.view.hovered));
    }

    #[test]
    fn test_respawn_requires_collected() {
        let mut set = CoinSet::from_coins(vec![Coin::new(0, home(0.0, 1.0, 0.0), 1.0, 2.0)]);
        assert!(!set.respawn(0, home(2.0, 2.0, 2.0)));
        assert!((set.get(0).unwrap().position.x - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_respawn_resets_view_state() {
        let mut set = CoinSet::from_coins(vec![Coin::new(0, home(0.0, 1.0, 0.0), 1.0, 2.0)]);
        {
            let coin = set.get_mut(0).unwrap();
            coin.collected = true;
            coin.view.collecting = true;
            coin.view.hovered = true;
            coin.view.scale = 0.01;
            coin.view.visible = false;
        }
        assert!(set.respawn(0, home(2.0, 2.5, -1.0)));
        let coin = set.get(0).unwrap();
        assert!(!coin.collected);
        assert!(!coin.view.collecting);
        assert!(!coin.view.hovered);
        assert!(coin.view.visible);
        assert!((coin.view.scale - 1.0).abs() < 1e-6);
        assert!((coin.position.y - 2.5).abs() < 1e-6);
        assert!(coin.is_interactible());
    }

    #[test]
    fn test_collected_count() {
        let mut rng = SceneRng::with_seed(6);
        let mut set = CoinSet::spawn(&mut rng);
        assert_eq!(set.collected_count(), 0);
        set.get_mut(2).unwrap().collected = true;
        set.get_mut(7).unwrap().collected = true;
        assert_eq!(set.collected_count(), 2);
        assert!(set.respawn(2, home(0.0, 2.0, 0.0)));
        assert_eq!(set.collected_count(), 1);
    }

    #[test]
    fn test_respawn_unknown_id_is_noop() {
        let mut rng = SceneRng::with_seed(4);
        let mut set = CoinSet::spawn(&mut rng);
        assert!(!set.respawn(COIN_COUNT + 3, home(0.0, 0.0, 0.0)));
        assert_eq!(set.len(), COIN_COUNT);
    }
}
