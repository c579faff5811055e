//! Rendering for the main game frame and UI panels.

use crate::game_layout::{FrameLayout, PanelRect};
use crate::ui_text::{
    action_lines, debug_line, event_log_line, inspect_lines, player_info_lines, status_text,
};
use macroquad::prelude::*;
use snowfield_app::app_loop::AppState;
use snowfield_core::{Game, InteractionMode, ObjectKind, Pos, TerrainKind, ViewTile};

const BORDER_COLOR: Color = Color { r: 0.2, g: 0.2, b: 0.2, a: 1.0 };
const BORDER_THICKNESS: f32 = 1.0;
const PANEL_PAD_X: f32 = 12.0;
const PANEL_PAD_Y: f32 = 24.0;
const TITLE_FONT_SIZE: f32 = 20.0;
const TEXT_FONT_SIZE: f32 = 18.0;
const LINE_STEP: f32 = 20.0;
const EVENT_LOG_LINES: usize = 6;
const REMEMBERED_SHADE: f32 = 0.45;

const SNOW_COLOR: Color = rgb(200, 210, 225);
const ROCK_COLOR: Color = rgb(130, 140, 160);
const TREE_COLOR: Color = rgb(0, 255, 0);
const WOOD_COLOR: Color = rgb(139, 90, 43);
const PLAYER_COLOR: Color = rgb(255, 200, 175);
const CURSOR_COLOR: Color = YELLOW;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color { r: r as f32 / 255.0, g: g as f32 / 255.0, b: b as f32 / 255.0, a: 1.0 }
}

pub fn draw_frame(
    game: &Game,
    app_state: &AppState,
    run_seed: u64,
    layout: &FrameLayout,
    show_debug: bool,
) {
    let hud = game.hud();
    draw_panel_borders(layout);
    draw_map(game, layout.map);
    draw_status_panel(game, app_state, run_seed, layout.status, show_debug);
    draw_text_panel("Player", &player_info_lines(&hud), layout.player_info, WHITE);
    draw_text_panel("Nearby", &action_lines(&hud), layout.nearby_actions, WHITE);
    if hud.mode == InteractionMode::Inspect {
        draw_text_panel("Inspect", &inspect_lines(&hud.inspected), layout.inspect, LIGHTGRAY);
    } else {
        draw_text_panel("Inspect", &["Press I to look around".to_string()], layout.inspect, GRAY);
    }
    draw_event_log(game, layout.event_log);
}

fn draw_panel_borders(layout: &FrameLayout) {
    for panel in layout.panels() {
        draw_rectangle_lines(
            panel.x,
            panel.y,
            panel.width,
            panel.height,
            BORDER_THICKNESS,
            BORDER_COLOR,
        );
    }
}

fn draw_status_panel(
    game: &Game,
    app_state: &AppState,
    run_seed: u64,
    panel: PanelRect,
    show_debug: bool,
) {
    let text = if show_debug {
        debug_line(run_seed, game.snapshot_hash(), app_state.frames)
    } else {
        status_text(game.mode()).to_string()
    };
    draw_text(&text, panel.x + PANEL_PAD_X, panel.y + PANEL_PAD_Y, TITLE_FONT_SIZE, WHITE);
}

fn draw_text_panel(title: &str, lines: &[String], panel: PanelRect, color: Color) {
    let text_x = panel.x + PANEL_PAD_X;
    let mut text_y = panel.y + PANEL_PAD_Y;
    draw_text(title, text_x, text_y, TITLE_FONT_SIZE, YELLOW);
    text_y += LINE_STEP;

    let visible_lines =
        fit_lines_to_panel(lines, panel.height - LINE_STEP, LINE_STEP, PANEL_PAD_Y);
    for line in visible_lines {
        draw_text(&line, text_x, text_y, TEXT_FONT_SIZE, color);
        text_y += LINE_STEP;
    }
}

fn fit_lines_to_panel(
    lines: &[String],
    panel_height: f32,
    line_step: f32,
    panel_pad_y: f32,
) -> Vec<String> {
    if line_step <= 0.0 {
        return Vec::new();
    }

    let usable_height = (panel_height - panel_pad_y).max(0.0);
    let max_lines = (usable_height / line_step).floor() as usize;
    if lines.len() <= max_lines {
        return lines.to_vec();
    }
    if max_lines == 0 {
        return Vec::new();
    }
    if max_lines == 1 {
        return vec![format!("... and {} more", lines.len())];
    }

    let hidden_count = lines.len() - (max_lines - 1);
    let mut fitted_lines = lines[..max_lines - 1].to_vec();
    fitted_lines.push(format!("... and {hidden_count} more"));
    fitted_lines
}

/// Side of one square map cell so the whole camera window fits the panel.
fn cell_size(panel: PanelRect, columns: i32, rows: i32) -> f32 {
    if columns <= 0 || rows <= 0 {
        return 0.0;
    }
    let usable_width = (panel.width - 2.0 * BORDER_THICKNESS).max(0.0);
    let usable_height = (panel.height - 2.0 * BORDER_THICKNESS).max(0.0);
    (usable_width / columns as f32).min(usable_height / rows as f32).floor()
}

fn draw_map(game: &Game, panel: PanelRect) {
    let viewport = game.viewport();
    let cell = cell_size(panel, viewport.width, viewport.height);
    if cell <= 0.0 {
        return;
    }
    let origin_x = panel.x + (panel.width - cell * viewport.width as f32) / 2.0;
    let origin_y = panel.y + (panel.height - cell * viewport.height as f32) / 2.0;
    let cell_origin = |local: Pos| (origin_x + local.x as f32 * cell, origin_y + local.y as f32 * cell);

    for tile in game.view_tiles() {
        let (x, y) = cell_origin(tile.local);
        draw_rectangle(x, y, cell, cell, tile_color(&tile));
    }

    let inset = (cell * 0.15).floor();
    for object in game.visible_objects() {
        let (x, y) = cell_origin(game.camera().to_local(object.location));
        draw_rectangle(
            x + inset,
            y + inset,
            cell - 2.0 * inset,
            cell - 2.0 * inset,
            object_color(object.kind),
        );
    }

    if game.mode() != InteractionMode::Gameplay && viewport.contains(game.cursor()) {
        let (x, y) = cell_origin(game.camera().to_local(game.cursor()));
        draw_rectangle_lines(x, y, cell, cell, 2.0, CURSOR_COLOR);
    }
}

fn terrain_color(terrain: TerrainKind) -> Color {
    match terrain {
        TerrainKind::Snow => SNOW_COLOR,
        TerrainKind::Rock => ROCK_COLOR,
    }
}

/// Unexplored cells stay black; remembered cells are drawn dimmed.
fn tile_color(tile: &ViewTile) -> Color {
    if !tile.explored {
        return BLACK;
    }
    let base = terrain_color(tile.terrain);
    if tile.visible { base } else { shade(base, REMEMBERED_SHADE) }
}

fn shade(color: Color, factor: f32) -> Color {
    Color { r: color.r * factor, g: color.g * factor, b: color.b * factor, a: color.a }
}

fn object_color(kind: ObjectKind) -> Color {
    match kind {
        ObjectKind::Player => PLAYER_COLOR,
        ObjectKind::Tree => TREE_COLOR,
        ObjectKind::Wood => WOOD_COLOR,
    }
}

fn draw_event_log(game: &Game, panel: PanelRect) {
    let lines: Vec<String> = {
        let events = game.log();
        let start = events.len().saturating_sub(EVENT_LOG_LINES);
        events[start..].iter().map(event_log_line).collect()
    };
    draw_text_panel("Event log", &lines, panel, LIGHTGRAY);
}

#[cfg(test)]
mod tests;
