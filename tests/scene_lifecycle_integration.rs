//! Scene lifecycle integration tests.
//!
//! Runs the game state observer with the real mount/play/unmount hooks
//! registered in a `SystemsStore`, the way the binary wires them.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use std::time::Duration;

use coinquest::components::decoration::Shape;
use coinquest::components::mapposition::MapPosition;
use coinquest::components::persistent::Persistent;
use coinquest::events::coin::{PointerActivatedEvent, PointerTarget};
use coinquest::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use coinquest::game::{self, CRYSTAL_COUNT};
use coinquest::resources::coinset::{COIN_COUNT, CoinSet};
use coinquest::resources::gameconfig::GameConfig;
use coinquest::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use coinquest::resources::hud::HudState;
use coinquest::resources::input::InputState;
use coinquest::resources::loading::LoadingScreen;
use coinquest::resources::orbitcamera::OrbitCamera;
use coinquest::resources::scenerng::SceneRng;
use coinquest::resources::scheduler::RespawnScheduler;
use coinquest::resources::scoreboard::ScoreBoard;
use coinquest::resources::starfield::StarField;
use coinquest::resources::systemsstore::SystemsStore;
use coinquest::resources::wallclock::WallClock;
use coinquest::resources::worldtime::WorldTime;
use coinquest::systems::collect::pointer_activation_observer;
use coinquest::systems::gamestate::{check_pending_state, state_is_loading};
use coinquest::systems::loading::loading_system;
use coinquest::systems::score::{coin_collected_observer, combo_missed_observer};

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(WallClock::new());
    world.insert_resource(GameConfig::new());
    world.insert_resource(SceneRng::with_seed(42));
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(pointer_activation_observer), Persistent));
    world.spawn((Observer::new(coin_collected_observer), Persistent));
    world.spawn((Observer::new(combo_missed_observer), Persistent));

    let mut store = SystemsStore::new();
    for (name, id) in [
        ("mount_scene", world.register_system(game::mount_scene)),
        ("enter_play", world.register_system(game::enter_play)),
        ("unmount_scene", world.register_system(game::unmount_scene)),
    ] {
        world.entity_mut(id.entity()).insert(Persistent);
        store.insert(name, id);
    }
    world.insert_resource(store);
    world.flush();
    world
}

fn request_state(world: &mut World, state: GameStates) {
    world.resource_mut::<NextGameState>().set(state);
    world.trigger(GameStateChangedEvent {});
    world.flush();
}

fn state(world: &World) -> GameStates {
    world.resource::<GameState>().get().clone()
}

fn decoration_count(world: &mut World) -> usize {
    let mut q = world.query_filtered::<Entity, With<Shape>>();
    q.iter(world).count()
}

#[test]
fn loading_mounts_scene() {
    let mut world = make_world();
    request_state(&mut world, GameStates::Loading);

    assert_eq!(state(&world), GameStates::Loading);
    assert_eq!(world.resource::<CoinSet>().len(), COIN_COUNT);
    assert!(world.contains_resource::<ScoreBoard>());
    assert!(world.contains_resource::<HudState>());
    assert!(world.contains_resource::<RespawnScheduler>());
    assert!(world.contains_resource::<LoadingScreen>());
    assert!(world.contains_resource::<OrbitCamera>());
    assert!(!world.resource::<StarField>().stars.is_empty());
    // Title, grid, crystals, platform pieces.
    assert!(decoration_count(&mut world) > CRYSTAL_COUNT + 2);
}

#[test]
fn loading_finishes_into_playing() {
    let mut world = make_world();
    request_state(&mut world, GameStates::Loading);

    let mut schedule = Schedule::default();
    schedule.add_systems((loading_system.run_if(state_is_loading), check_pending_state).chain());

    // Worst case the bar needs 100 / 15 rounds up to many ticks; random
    // steps can be tiny, so allow plenty of wall-clock time.
    for _ in 0..2_000 {
        world
            .resource_mut::<WallClock>()
            .advance(Duration::from_millis(150));
        schedule.run(&mut world);
        world.flush();
        if state(&world) == GameStates::Playing {
            break;
        }
    }
    assert_eq!(state(&world), GameStates::Playing);
    assert!(!world.contains_resource::<LoadingScreen>());
    assert_eq!(*world.resource::<NextGameState>().get(), NextGameStates::Unchanged);
}

#[test]
fn skip_loading_mounts_and_plays() {
    let mut world = make_world();
    request_state(&mut world, GameStates::Playing);

    assert_eq!(state(&world), GameStates::Playing);
    assert!(world.contains_resource::<CoinSet>());
    assert!(!world.contains_resource::<LoadingScreen>());
}

#[test]
fn teardown_cancels_respawns_and_clears_scene() {
    let mut world = make_world();
    request_state(&mut world, GameStates::Playing);

    world.trigger(PointerActivatedEvent {
        target: PointerTarget::Coin(1),
    });
    world.flush();
    assert_eq!(world.resource::<RespawnScheduler>().pending_count(), 1);

    request_state(&mut world, GameStates::Quitting);

    assert_eq!(state(&world), GameStates::Quitting);
    assert!(!world.contains_resource::<RespawnScheduler>());
    assert!(!world.contains_resource::<CoinSet>());
    assert!(!world.contains_resource::<ScoreBoard>());
    assert!(!world.contains_resource::<StarField>());
    assert_eq!(decoration_count(&mut world), 0);
    let mut positions = world.query::<&MapPosition>();
    assert_eq!(positions.iter(&world).count(), 0);

    // Observers and hooks survive; a late activation is dropped quietly.
    let mut persistent = world.query_filtered::<Entity, With<Persistent>>();
    assert!(persistent.iter(&world).count() >= 7);
    world.resource_mut::<WallClock>().advance(Duration::from_secs(5));
    world.trigger(PointerActivatedEvent {
        target: PointerTarget::Coin(1),
    });
    world.flush();
    assert!(!world.contains_resource::<CoinSet>());
}
