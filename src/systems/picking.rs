//! Pointer picking.
//!
//! Casts the pointer through the [`OrbitCamera`] and hit-tests it against
//! the coins. Each interactible, visible coin is approximated by a sphere of
//! radius `PICK_RADIUS * scale` centred on its render position; the nearest
//! hit wins.
//!
//! Per frame the hovered coin is written into the [`CoinSet`]. A click
//! (a release that stayed within the click slop) triggers a
//! [`PointerActivatedEvent`] targeting either the hit coin or nothing.

use bevy_ecs::prelude::*;
use log::trace;

use crate::events::coin::{PointerActivatedEvent, PointerTarget};
use crate::math::Ray3;
use crate::resources::coinset::{CoinId, CoinSet};
use crate::resources::input::InputState;
use crate::resources::orbitcamera::OrbitCamera;
use crate::resources::screensize::ScreenSize;

/// Hit radius of a coin at scale 1.
pub const PICK_RADIUS: f32 = 0.8;

/// Nearest interactible, visible coin hit by `ray`.
pub fn pick_coin(coins: &CoinSet, ray: &Ray3) -> Option<CoinId> {
    coins
        .iter()
        .filter(|coin| coin.is_interactible() && coin.view.visible)
        .filter_map(|coin| {
            let t = &coin.view.transform;
            ray.hit_sphere(t.position, PICK_RADIUS * t.scale)
                .map(|distance| (distance, coin.id))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, id)| id)
}

pub fn picking_system(
    mut commands: Commands,
    input: Res<InputState>,
    screen: Res<ScreenSize>,
    camera: Res<OrbitCamera>,
    mut coins: ResMut<CoinSet>,
) {
    let pointer = &input.pointer;
    let ray = camera.screen_ray(pointer.position, screen.as_vector());
    let hit = pick_coin(&coins, &ray);

    let hovered = if pointer.is_dragging() { None } else { hit };
    coins.set_hovered(hovered);

    if pointer.is_click() {
        let target = match hit {
            Some(id) => PointerTarget::Coin(id),
            None => PointerTarget::Nothing,
        };
        trace!("pointer activation: {:?}", target);
        commands.trigger(PointerActivatedEvent { target });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::v3;
    use crate::resources::coinset::Coin;

    fn ray_down_z() -> Ray3 {
        Ray3 {
            origin: v3(0.0, 2.0, 12.0),
            dir: v3(0.0, 0.0, -1.0),
        }
    }

    fn set_with(positions: &[(f32, f32, f32)]) -> CoinSet {
        CoinSet::from_coins(
            positions
                .iter()
                .map(|&(x, y, z)| Coin::new(0, v3(x, y, z), 2.0, 3.0))
                .collect(),
        )
    }

    #[test]
    fn test_nearest_hit_wins() {
        let coins = set_with(&[(0.0, 2.0, -3.0), (0.0, 2.0, 2.0), (5.0, 2.0, 0.0)]);
        assert_eq!(pick_coin(&coins, &ray_down_z()), Some(1));
    }

    #[test]
    fn test_miss_reports_none() {
        let coins = set_with(&[(3.0, 2.0, 0.0)]);
        assert_eq!(pick_coin(&coins, &ray_down_z()), None);
    }

    #[test]
    fn test_collected_coin_is_not_picked() {
        let mut coins = set_with(&[(0.0, 2.0, 2.0), (0.0, 2.0, -3.0)]);
        if let Some(coin) = coins.get_mut(0) {
            coin.collected = true;
            coin.view.collecting = true;
        }
        assert_eq!(pick_coin(&coins, &ray_down_z()), Some(1));
    }

    #[test]
    fn test_hit_radius_follows_scale() {
        let mut coins = set_with(&[(0.0, 2.9, 0.0)]);
        assert_eq!(pick_coin(&coins, &ray_down_z()), None);
        if let Some(coin) = coins.get_mut(0) {
            coin.view.transform.scale = 1.3;
        }
        assert_eq!(pick_coin(&coins, &ray_down_z()), Some(0));
    }
}
