//! Shared helpers for the developer binaries: config loading, logging setup,
//! and the ASCII map renderer used by `preview`.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use snowfield_core::{Game, GameConfig, ObjectKind, Pos, Rect, TerrainKind};
use tracing::Level;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::builder().with_default_directive(Level::INFO.into()).from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

pub fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(GameConfig::default()),
    }
}

/// Glyph for one map cell, ignoring visibility. Objects win over terrain.
pub fn cell_glyph(game: &Game, location: Pos) -> char {
    if location == game.player_location() {
        return '@';
    }
    if let Some(object) = game.world().occupant(location) {
        return match object.kind {
            ObjectKind::Player => '@',
            ObjectKind::Tree => 'T',
            ObjectKind::Wood => 'w',
        };
    }
    match game.map().tile_at(location).terrain {
        TerrainKind::Snow => '.',
        TerrainKind::Rock => '^',
    }
}

/// The first `rows` map rows, whole width.
pub fn map_rows(game: &Game, rows: usize) -> Vec<String> {
    let map = game.map();
    let rows = rows.min(map.height()) as i32;
    let region = Rect { x: 0, y: 0, width: map.width() as i32, height: rows };
    render_region(game, region, false)
}

/// The camera window with cells outside the current field of view blanked.
pub fn fov_rows(game: &Game) -> Vec<String> {
    render_region(game, game.viewport(), true)
}

fn render_region(game: &Game, region: Rect, only_visible: bool) -> Vec<String> {
    (region.y..region.bottom())
        .map(|y| {
            (region.x..region.right())
                .map(|x| {
                    let location = Pos::new(x, y);
                    if only_visible && !game.map().tile_at(location).visible {
                        ' '
                    } else {
                        cell_glyph(game, location)
                    }
                })
                .collect()
        })
        .collect()
}
