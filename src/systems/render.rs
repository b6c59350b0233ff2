//! Raylib rendering.
//!
//! [`render_system`] is an exclusive system: it takes the Raylib handle out
//! of the world for the duration of the frame, opens the drawing scope and
//! hands the world to the individual passes:
//!
//! 1. [`render_scene`] – starfield, decorations and coins in 3D
//! 2. [`render_labels`] – world-anchored text projected to the screen
//! 3. [`render_hud`] – score, combo and coin counter panels
//! 4. [`render_loading`] – loading overlay while in `Loading`
//! 5. [`render_scanlines`] – CRT scanline overlay
//! 6. [`render_debug_ui`] – debug overlay when [`DebugMode`] is present
use bevy_ecs::prelude::*;
use log::warn;
use raylib::ffi;
use raylib::prelude::*;
use std::ffi::CString;

use crate::components::decoration::{Opacity, Shape};
use crate::components::mapposition::MapPosition;
use crate::components::tint::Tint;
use crate::math::{add, scale, v3};
use crate::resources::coinset::CoinSet;
use crate::resources::debugmode::DebugMode;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::hud::HudState;
use crate::resources::loading::LoadingScreen;
use crate::resources::orbitcamera::OrbitCamera;
use crate::resources::scheduler::RespawnScheduler;
use crate::resources::scoreboard::ScoreBoard;
use crate::resources::screensize::ScreenSize;
use crate::resources::starfield::StarField;

const BACKGROUND: Color = Color::new(10, 10, 26, 255);
const COIN_GOLD: Color = Color::new(255, 215, 0, 255);
const COIN_HOVER: Color = Color::new(255, 237, 74, 255);
const COIN_RIM: Color = Color::new(184, 134, 11, 255);
const NEON_GREEN: Color = Color::new(0, 255, 170, 255);
const NEON_PINK: Color = Color::new(255, 0, 170, 255);
const NEON_CYAN: Color = Color::new(0, 170, 255, 255);
const PANEL: Color = Color::new(0, 0, 0, 170);
const DIM_TEXT: Color = Color::new(170, 170, 200, 255);

/// Coin disc radius at scale 1.
const COIN_RADIUS: f32 = 0.5;
/// Coin disc thickness at scale 1.
const COIN_THICKNESS: f32 = 0.1;
const SCANLINE_SPACING: i32 = 4;

/// Pixel width of `text` drawn with the default font.
fn text_width(text: &str, font_size: i32) -> i32 {
    match CString::new(text) {
        Ok(c_text) => unsafe { ffi::MeasureText(c_text.as_ptr(), font_size) },
        Err(_) => 0,
    }
}

fn draw_text_centered(d: &mut RaylibDrawHandle, text: &str, cx: i32, y: i32, size: i32, color: Color) {
    d.draw_text(text, cx - text_width(text, size) / 2, y, size, color);
}

fn with_alpha(color: Color, opacity: f32) -> Color {
    Tint { color }.faded(opacity)
}

pub fn camera3d(camera: &OrbitCamera) -> Camera3D {
    Camera3D::perspective(
        camera.eye(),
        camera.target,
        Vector3::new(0.0, 1.0, 0.0),
        camera.fovy,
    )
}

pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        warn!("render_system: RaylibHandle missing");
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        warn!("render_system: RaylibThread missing");
        world.insert_non_send_resource(rl);
        return;
    };

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(BACKGROUND);
        if let Some(camera) = world.get_resource::<OrbitCamera>().copied() {
            {
                let mut d3 = d.begin_mode3D(camera3d(&camera));
                render_scene(world, &mut d3);
            }
            render_labels(world, &mut d, &camera);
        }
        render_hud(world, &mut d);
        render_loading(world, &mut d);
        render_scanlines(world, &mut d);
        render_debug_ui(world, &mut d);
    }

    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(rl);
}

/// Draw everything that lives in world space.
pub fn render_scene(world: &mut World, d3: &mut RaylibMode3D<RaylibDrawHandle>) {
    if let Some(stars) = world.get_resource::<StarField>() {
        for star in &stars.stars {
            d3.draw_point3D(*star, Color::WHITE);
        }
    }

    let mut decorations = world.query::<(&Shape, &MapPosition, Option<&Tint>, Option<&Opacity>)>();
    for (shape, position, tint, opacity) in decorations.iter(world) {
        let tint = tint.copied().unwrap_or_default();
        let color = tint.faded(opacity.map_or(1.0, |o| o.0));
        draw_shape(d3, shape, position.pos, color);
    }

    if let Some(coins) = world.get_resource::<CoinSet>() {
        for coin in coins.iter().filter(|c| c.view.visible) {
            let t = &coin.view.transform;
            if t.scale <= 0.0 {
                continue;
            }
            // Disc standing upright, its face normal spinning around +Y.
            let half = scale(
                v3(t.rotation_y.sin(), 0.0, t.rotation_y.cos()),
                COIN_THICKNESS * 0.5 * t.scale,
            );
            let front = add(t.position, half);
            let back = add(t.position, scale(half, -1.0));
            let radius = COIN_RADIUS * t.scale;
            let face = if coin.view.hovered { COIN_HOVER } else { COIN_GOLD };
            d3.draw_cylinder_ex(back, front, radius, radius, 24, face);
            d3.draw_cylinder_wires_ex(back, front, radius, radius, 24, COIN_RIM);
        }
    }
}

fn draw_shape(d3: &mut RaylibMode3D<RaylibDrawHandle>, shape: &Shape, pos: Vector3, color: Color) {
    match shape {
        Shape::Cuboid { size } => {
            d3.draw_cube(pos, size.x, size.y, size.z, color);
        }
        Shape::Octahedron { radius } => {
            let r = *radius;
            d3.draw_cylinder(v3(pos.x, pos.y - r, pos.z), r, 0.0, r, 4, color);
            d3.draw_cylinder(pos, 0.0, r, r, 4, color);
            d3.draw_cylinder_wires(v3(pos.x, pos.y - r, pos.z), r, 0.0, r, 4, Color::WHITE);
            d3.draw_cylinder_wires(pos, 0.0, r, r, 4, Color::WHITE);
        }
        Shape::Grid { size, divisions } => {
            let half = size * 0.5;
            let divisions = (*divisions).max(1);
            let step = size / divisions as f32;
            for i in 0..=divisions {
                let o = -half + step * i as f32;
                d3.draw_line_3D(
                    v3(pos.x + o, pos.y, pos.z - half),
                    v3(pos.x + o, pos.y, pos.z + half),
                    color,
                );
                d3.draw_line_3D(
                    v3(pos.x - half, pos.y, pos.z + o),
                    v3(pos.x + half, pos.y, pos.z + o),
                    color,
                );
            }
        }
        Shape::Plane { size } => {
            d3.draw_plane(pos, *size, color);
        }
        Shape::Label { .. } => {}
    }
}

/// Project [`Shape::Label`] entities onto the screen and draw their text.
pub fn render_labels(world: &mut World, d: &mut RaylibDrawHandle, camera: &OrbitCamera) {
    let screen = world.resource::<ScreenSize>().as_vector();
    let mut labels = world.query::<(&Shape, &MapPosition, Option<&Tint>)>();
    for (shape, position, tint) in labels.iter(world) {
        let Shape::Label { text, font_size } = shape else {
            continue;
        };
        if let Some(at) = camera.world_to_screen(position.pos, screen) {
            let color = tint.map_or(NEON_PINK, |t| t.color);
            draw_text_centered(d, text, at.x as i32, at.y as i32 - font_size / 2, *font_size, color);
        }
    }
}

pub fn render_hud(world: &mut World, d: &mut RaylibDrawHandle) {
    if !matches!(world.resource::<GameState>().get(), GameStates::Playing) {
        return;
    }
    let Some(hud) = world.get_resource::<HudState>() else {
        return;
    };
    let screen = *world.resource::<ScreenSize>();

    // Score, top left.
    d.draw_rectangle(16, 16, 220, 64, PANEL);
    d.draw_rectangle_lines(16, 16, 220, 64, NEON_GREEN);
    d.draw_text("SCORE", 28, 24, 10, DIM_TEXT);
    d.draw_text(&hud.score_text(), 28, 40, 30, NEON_GREEN);

    // Combo, top right.
    let combo_color = if hud.combo_active() { NEON_PINK } else { DIM_TEXT };
    let combo_size = if hud.combo_flash.is_active() { 40 } else { 30 };
    let panel_x = screen.w - 16 - 140;
    d.draw_rectangle(panel_x, 16, 140, 64, PANEL);
    d.draw_rectangle_lines(panel_x, 16, 140, 64, combo_color);
    d.draw_text("COMBO", panel_x + 12, 24, 10, DIM_TEXT);
    d.draw_text(&hud.combo_text(), panel_x + 12, 38, combo_size, combo_color);

    // Coins, below score.
    d.draw_rectangle(16, 88, 220, 36, PANEL);
    d.draw_rectangle_lines(16, 88, 220, 36, COIN_GOLD);
    d.draw_text("COINS", 28, 100, 10, DIM_TEXT);
    d.draw_text(&hud.coins_text(), 90, 96, 20, COIN_GOLD);

    draw_text_centered(d, "CLICK COINS TO COLLECT", screen.w / 2, screen.h - 56, 20, NEON_CYAN);
    draw_text_centered(d, "DRAG TO ROTATE VIEW", screen.w / 2, screen.h - 30, 10, DIM_TEXT);
}

pub fn render_loading(world: &mut World, d: &mut RaylibDrawHandle) {
    if !matches!(world.resource::<GameState>().get(), GameStates::Loading) {
        return;
    }
    let Some(loading) = world.get_resource::<LoadingScreen>() else {
        return;
    };
    let screen = *world.resource::<ScreenSize>();
    let cx = screen.w / 2;
    let cy = screen.h / 2;

    d.draw_rectangle(0, 0, screen.w, screen.h, BACKGROUND);
    draw_text_centered(d, "CRYPTO QUEST", cx, cy - 120, 60, with_alpha(NEON_PINK, loading.title_alpha()));

    let bar_w = (screen.w / 2).max(200);
    let bar_x = cx - bar_w / 2;
    d.draw_rectangle_lines(bar_x - 2, cy - 2, bar_w + 4, 24, NEON_GREEN);
    let filled = (bar_w as f32 * loading.bar_fraction()) as i32;
    d.draw_rectangle(bar_x, cy, filled, 20, NEON_GREEN);
    let percent = format!("{}%", loading.progress().floor() as i32);
    draw_text_centered(d, &percent, cx, cy + 30, 20, NEON_GREEN);
    d.draw_text(&loading.status_text(), bar_x, cy + 60, 20, NEON_CYAN);

    if loading.prompt_visible() {
        draw_text_centered(d, "INSERT COIN", cx, cy + 110, 30, COIN_GOLD);
    }
}

pub fn render_scanlines(world: &mut World, d: &mut RaylibDrawHandle) {
    let screen = *world.resource::<ScreenSize>();
    let line = Color::new(0, 0, 0, 40);
    let mut y = 0;
    while y < screen.h {
        d.draw_line(0, y, screen.w, y, line);
        y += SCANLINE_SPACING;
    }
}

pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let screen = *world.resource::<ScreenSize>();

    let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", d.get_fps());
    d.draw_text(&text, 10, screen.h - 100, 10, Color::WHITE);

    let state = format!("State: {:?}", world.resource::<GameState>().get());
    d.draw_text(&state, 10, screen.h - 86, 10, Color::WHITE);

    if let Some(camera) = world.get_resource::<OrbitCamera>() {
        let eye = camera.eye();
        let cam_text = format!(
            "Camera eye: ({:.1}, {:.1}, {:.1}) dist: {:.2} polar: {:.2}",
            eye.x, eye.y, eye.z, camera.distance, camera.polar
        );
        d.draw_text(&cam_text, 10, screen.h - 72, 10, Color::WHITE);
    }

    if let (Some(coins), Some(board), Some(scheduler)) = (
        world.get_resource::<CoinSet>(),
        world.get_resource::<ScoreBoard>(),
        world.get_resource::<RespawnScheduler>(),
    ) {
        let totals = format!(
            "Collected now: {}/{} | total: {} | pending respawns: {}",
            coins.collected_count(),
            coins.len(),
            board.coins_collected(),
            scheduler.pending_count()
        );
        d.draw_text(&totals, 10, screen.h - 58, 10, Color::WHITE);

        let mut y = 140;
        for coin in coins.iter() {
            let respawn = scheduler
                .due_at(coin.id)
                .map(|due| format!(" respawn @{}ms", due.as_millis()))
                .unwrap_or_default();
            let line = format!(
                "#{:02} {} scale {:.2} {}{}{}",
                coin.id,
                if coin.collected { "collected" } else { "ready    " },
                coin.view.scale,
                if coin.view.hovered { "hover " } else { "" },
                if coin.view.visible { "" } else { "hidden" },
                respawn,
            );
            d.draw_text(&line, 10, y, 10, Color::WHITE);
            y += 12;
        }
    }
}
