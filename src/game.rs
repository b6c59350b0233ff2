//! Scene lifecycle hooks.
//!
//! These systems are registered in the
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) and run by
//! the game state observer:
//!
//! - [`mount_scene`] inserts the per-session resources and spawns the
//!   decorative backdrop
//! - [`enter_play`] drops the loading screen and starts the session
//! - [`unmount_scene`] cancels every pending respawn, removes the session
//!   resources and despawns every non-persistent scene entity

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::{Vector2, Vector3};
use std::f32::consts::TAU;

use crate::components::decoration::{Floating, Opacity, Orbiting, Pulse, Shape};
use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::tint::Tint;
use crate::resources::coinset::CoinSet;
use crate::resources::gameconfig::GameConfig;
use crate::resources::hud::HudState;
use crate::resources::loading::LoadingScreen;
use crate::resources::orbitcamera::{DEFAULT_EYE, OrbitCamera};
use crate::resources::scenerng::SceneRng;
use crate::resources::scheduler::RespawnScheduler;
use crate::resources::scoreboard::ScoreBoard;
use crate::resources::starfield::{STAR_COUNT, STAR_DEPTH, STAR_RADIUS, StarField};
use crate::resources::worldtime::WorldTime;

pub const TITLE_TEXT: &str = "CRYPTO QUEST";
pub const CRYSTAL_COUNT: usize = 8;
pub const CRYSTAL_RING_RADIUS: f32 = 8.0;
pub const CRYSTAL_RING_RATE: f32 = 0.1;
const CRYSTAL_COLORS: [u32; 4] = [0xff00aa, 0x00aaff, 0xffaa00, 0xaa00ff];
const PLATFORM_SIZE: f32 = 12.0;
const PLATFORM_Y: f32 = -1.5;

/// Spawn the static and animated backdrop entities.
pub fn spawn_decorations(commands: &mut Commands, rng: &mut SceneRng) {
    commands.spawn((
        Shape::Label {
            text: TITLE_TEXT.to_string(),
            font_size: 48,
        },
        MapPosition::new(0.0, 5.0, -5.0),
        Floating::new(5.0, 0.2, 0.5),
        Tint::hex(0xff00aa),
    ));

    commands.spawn((
        Shape::Grid {
            size: 50.0,
            divisions: 50,
        },
        MapPosition::new(0.0, -2.0, 0.0),
        Tint::hex(0x00ffaa),
        Pulse {
            base: 0.3,
            amplitude: 0.1,
            frequency: 1.0,
        },
        Opacity::default(),
    ));

    for i in 0..CRYSTAL_COUNT {
        let angle = i as f32 / CRYSTAL_COUNT as f32 * TAU;
        let height = 2.0 + rng.unit() * 2.0;
        let orbit = Orbiting {
            radius: CRYSTAL_RING_RADIUS,
            angle,
            rate: CRYSTAL_RING_RATE,
        };
        let (x, z) = orbit.xz_at(0.0);
        commands.spawn((
            Shape::Octahedron { radius: 0.5 },
            MapPosition::new(x, height, z),
            orbit,
            Floating {
                base_y: height,
                amplitude: 0.25,
                frequency: 1.0 + i as f32 * 0.2,
                phase: angle,
            },
            Tint::hex(CRYSTAL_COLORS[i % CRYSTAL_COLORS.len()]),
        ));
    }

    spawn_platform(commands);
}

fn spawn_platform(commands: &mut Commands) {
    let half = PLATFORM_SIZE * 0.5;
    commands.spawn((
        Shape::Cuboid {
            size: Vector3::new(PLATFORM_SIZE, 0.5, PLATFORM_SIZE),
        },
        MapPosition::new(0.0, PLATFORM_Y, 0.0),
        Tint::hex(0x1a1a2e),
    ));

    // Neon edges along the top rim.
    let rim_y = PLATFORM_Y + 0.25;
    for sign in [-1.0, 1.0] {
        commands.spawn((
            Shape::Cuboid {
                size: Vector3::new(PLATFORM_SIZE, 0.05, 0.05),
            },
            MapPosition::new(0.0, rim_y, sign * half),
            Tint::hex(0x00ffaa),
        ));
        commands.spawn((
            Shape::Cuboid {
                size: Vector3::new(0.05, 0.05, PLATFORM_SIZE),
            },
            MapPosition::new(sign * half, rim_y, 0.0),
            Tint::hex(0x00ffaa),
        ));
    }

    for (x, z) in [(-5.5, -5.5), (5.5, -5.5), (-5.5, 5.5), (5.5, 5.5)] {
        commands.spawn((
            Shape::Cuboid {
                size: Vector3::new(0.5, 3.0, 0.5),
            },
            MapPosition::new(x, PLATFORM_Y + 1.0, z),
            Tint::hex(0xff00aa),
        ));
    }

    commands.spawn((
        Shape::Plane {
            size: Vector2::new(PLATFORM_SIZE, PLATFORM_SIZE),
        },
        MapPosition::new(0.0, PLATFORM_Y + 0.26, 0.0),
        Tint::new(0, 255, 170, 24),
    ));
}

pub fn mount_scene(mut commands: Commands, config: Res<GameConfig>, mut rng: ResMut<SceneRng>) {
    commands.insert_resource(WorldTime::default());
    commands.insert_resource(CoinSet::spawn(&mut rng));
    commands.insert_resource(ScoreBoard::new());
    commands.insert_resource(HudState::new());
    commands.insert_resource(RespawnScheduler::new());
    commands.insert_resource(LoadingScreen::new());
    commands.insert_resource(StarField::generate(
        STAR_COUNT,
        STAR_RADIUS,
        STAR_DEPTH,
        &mut rng,
    ));
    commands.insert_resource(OrbitCamera::looking_at(
        DEFAULT_EYE,
        Vector3::new(0.0, 0.0, 0.0),
        config.fov,
        config.min_distance,
        config.max_distance.max(config.min_distance),
    ));
    spawn_decorations(&mut commands, &mut rng);
    info!("Scene mounted");
}

pub fn enter_play(mut commands: Commands, board: Option<Res<ScoreBoard>>) {
    commands.remove_resource::<LoadingScreen>();
    if let Some(board) = board {
        info!(
            "Play started: score {} combo x{}",
            board.score(),
            board.combo()
        );
    }
}

pub fn unmount_scene(
    mut commands: Commands,
    scheduler: Option<ResMut<RespawnScheduler>>,
    query: Query<Entity, (With<MapPosition>, Without<Persistent>)>,
) {
    if let Some(mut scheduler) = scheduler {
        let dropped = scheduler.cancel_all();
        info!("Cancelled {} pending respawns", dropped);
    }
    commands.remove_resource::<RespawnScheduler>();
    commands.remove_resource::<CoinSet>();
    commands.remove_resource::<ScoreBoard>();
    commands.remove_resource::<HudState>();
    commands.remove_resource::<LoadingScreen>();
    commands.remove_resource::<StarField>();
    commands.remove_resource::<OrbitCamera>();
    let mut despawned = 0;
    for entity in query.iter() {
        commands.entity(entity).despawn();
        despawned += 1;
    }
    info!("Scene unmounted, {} entities despawned", despawned);
}
