//! Coin Quest main entry point.
//!
//! A small neon arcade scene written in Rust using:
//! - **raylib** for windowing and immediate-mode 3D drawing
//! - **bevy_ecs** for resources, systems, observers and the frame schedule
//!
//! Twelve coins bob and spin above a platform. Clicking one collects it,
//! adds `100 × combo` points and raises the combo; clicking empty space
//! resets the combo. Collected coins respawn somewhere else two seconds
//! later.
//!
//! # Main Loop
//!
//! 1. Parse the command line, load `config.ini`, open the raylib window
//! 2. Insert resources, register observers and the scene hooks
//! 3. Enter `Loading` (or `Playing` with `--skip-loading`)
//! 4. Each frame: advance the clocks, run the schedule (input, camera,
//!    coins, picking, respawns, HUD timers, render)
//! 5. ESC or closing the window enters `Quitting`, which tears the scene
//!    down and ends the loop
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 42
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemId;
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use coinquest::components::persistent::Persistent;
use coinquest::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use coinquest::events::switchdebug::switch_debug_observer;
use coinquest::game;
use coinquest::resources::debugmode::DebugMode;
use coinquest::resources::gameconfig::GameConfig;
use coinquest::resources::gamestate::{GameState, GameStates, NextGameState};
use coinquest::resources::input::InputState;
use coinquest::resources::scenerng::SceneRng;
use coinquest::resources::screensize::ScreenSize;
use coinquest::resources::systemsstore::SystemsStore;
use coinquest::resources::wallclock::WallClock;
use coinquest::resources::worldtime::WorldTime;
use coinquest::systems::coin::coin_behavior_system;
use coinquest::systems::collect::{pointer_activation_observer, respawn_due_coins};
use coinquest::systems::decoration::{decoration_motion_system, decoration_pulse_system};
use coinquest::systems::gameconfig::apply_gameconfig_changes;
use coinquest::systems::gamestate::{
    check_pending_state, scene_is_mounted, state_is_loading, state_is_playing,
};
use coinquest::systems::hud::hud_timers_system;
use coinquest::systems::input::{input_actions_system, update_input_state};
use coinquest::systems::loading::loading_system;
use coinquest::systems::orbitcamera::orbit_camera_system;
use coinquest::systems::picking::picking_system;
use coinquest::systems::render::render_system;
use coinquest::systems::score::{
    coin_collected_observer, combo_missed_observer, hud_score_observer,
};
use coinquest::systems::time::{update_wall_clock, update_world_time};

/// Coin Quest
#[derive(Parser)]
#[command(version, about = "Coin Quest: click the coins, keep the combo going.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Seed for coin placement and decorations. Overrides `[scene] seed`.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Start playing right away without the loading screen.
    #[arg(long)]
    skip_loading: bool,

    /// Start with the debug overlay enabled (toggle with F11).
    #[arg(long)]
    debug: bool,
}

/// Register `system` as a persistent one-shot system.
fn register_hook<M>(
    world: &mut World,
    system: impl IntoSystem<(), (), M> + 'static,
) -> SystemId {
    let id = world.register_system(system);
    // Registered systems are entities; keep them alive across scene teardown.
    world.entity_mut(id.entity()).insert(Persistent);
    id
}

fn request_state(world: &mut World, state: GameStates) {
    world.resource_mut::<NextGameState>().set(state);
    world.trigger(GameStateChangedEvent {});
    world.flush();
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using default configuration", e);
    }
    let seed = cli.seed.or(config.seed);
    let rng = match seed {
        Some(seed) => {
            info!("Using scene seed {}", seed);
            SceneRng::with_seed(seed)
        }
        None => SceneRng::new(),
    };

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .msaa_4x()
        .title("Coin Quest")
        .build();
    rl.set_target_fps(config.target_fps);
    // ESC is handled as a game action
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(WallClock::new());
    world.insert_resource(ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(rng);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(switch_debug_observer), Persistent));
    world.spawn((Observer::new(pointer_activation_observer), Persistent));
    world.spawn((Observer::new(coin_collected_observer), Persistent));
    world.spawn((Observer::new(combo_missed_observer), Persistent));
    world.spawn((Observer::new(hud_score_observer), Persistent));

    let mut systems_store = SystemsStore::new();
    let mount_id = register_hook(&mut world, game::mount_scene);
    systems_store.insert("mount_scene", mount_id);
    let enter_play_id = register_hook(&mut world, game::enter_play);
    systems_store.insert("enter_play", enter_play_id);
    let unmount_id = register_hook(&mut world, game::unmount_scene);
    systems_store.insert("unmount_scene", unmount_id);
    world.insert_resource(systems_store);

    // Ensure observers are registered before anything is triggered.
    world.flush();

    let first_state = if cli.skip_loading {
        GameStates::Playing
    } else {
        GameStates::Loading
    };
    request_state(&mut world, first_state);

    let mut update = Schedule::default();
    update.add_systems(apply_gameconfig_changes);
    update.add_systems(update_input_state.after(apply_gameconfig_changes));
    update.add_systems(input_actions_system.after(update_input_state));
    update.add_systems(
        loading_system
            .run_if(state_is_loading)
            .after(update_input_state),
    );
    update.add_systems(
        (
            hud_timers_system,
            orbit_camera_system,
            coin_behavior_system,
            picking_system,
            respawn_due_coins,
        )
            .chain()
            .run_if(state_is_playing)
            .after(input_actions_system),
    );
    update.add_systems(
        (decoration_motion_system, decoration_pulse_system)
            .run_if(scene_is_mounted)
            .after(update_input_state),
    );
    update.add_systems(
        check_pending_state
            .after(loading_system)
            .after(input_actions_system)
            .after(respawn_due_coins),
    );
    update.add_systems(
        render_system
            .after(check_pending_state)
            .after(decoration_pulse_system),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    loop {
        let (should_close, dt) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.window_should_close(), rl.get_frame_time())
        };
        if should_close {
            break;
        }
        update_world_time(&mut world, dt);
        update_wall_clock(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();

        if *world.resource::<GameState>().get() == GameStates::Quitting {
            break;
        }
    }

    if *world.resource::<GameState>().get() != GameStates::Quitting {
        request_state(&mut world, GameStates::Quitting);
    }
    info!("Bye!");
}
