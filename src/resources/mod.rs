//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `coinset` – the twelve coins, indexed by stable id
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – settings loaded from `config.ini`
//! - `gamestate` – authoritative and pending high-level game state
//! - `hud` – displayed-score ticker, combo flash and HUD text
//! - `input` – per-frame keyboard and pointer state
//! - `loading` – fake loading screen progress and blink timers
//! - `orbitcamera` – damped orbit camera and screen/world projection
//! - `scenerng` – seedable random generator for the scene
//! - `scheduler` – deferred coin respawns
//! - `scoreboard` – score, combo and collected-coin counters
//! - `screensize` – current framebuffer dimensions in pixels
//! - `starfield` – background star positions
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `wallclock` – unscaled time driving timers
//! - `worldtime` – animation time and delta
pub mod coinset;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod hud;
pub mod input;
pub mod loading;
pub mod orbitcamera;
pub mod scenerng;
pub mod scheduler;
pub mod scoreboard;
pub mod screensize;
pub mod starfield;
pub mod systemsstore;
pub mod wallclock;
pub mod worldtime;
