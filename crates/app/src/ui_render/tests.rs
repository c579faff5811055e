use super::{
    BLACK, PLAYER_COLOR, ROCK_COLOR, SNOW_COLOR, TREE_COLOR, cell_size, fit_lines_to_panel,
    object_color, tile_color,
};
use crate::game_layout::PanelRect;
use snowfield_core::{ObjectKind, Pos, TerrainKind, ViewTile};

fn tile(terrain: TerrainKind, visible: bool, explored: bool) -> ViewTile {
    ViewTile {
        location: Pos::new(3, 4),
        local: Pos::new(1, 1),
        terrain,
        visible,
        explored,
        occupant: None,
    }
}

#[test]
fn unexplored_tiles_are_black_regardless_of_terrain() {
    assert_eq!(tile_color(&tile(TerrainKind::Snow, false, false)), BLACK);
    assert_eq!(tile_color(&tile(TerrainKind::Rock, false, false)), BLACK);
}

#[test]
fn visible_tiles_use_terrain_colors() {
    assert_eq!(tile_color(&tile(TerrainKind::Snow, true, true)), SNOW_COLOR);
    assert_eq!(tile_color(&tile(TerrainKind::Rock, true, true)), ROCK_COLOR);
}

#[test]
fn remembered_tiles_are_dimmer_than_visible_ones() {
    let remembered = tile_color(&tile(TerrainKind::Snow, false, true));
    assert!(remembered.r < SNOW_COLOR.r);
    assert!(remembered.g < SNOW_COLOR.g);
    assert!(remembered.b < SNOW_COLOR.b);
    assert_eq!(remembered.a, 1.0);
}

#[test]
fn objects_have_distinct_colors() {
    assert_eq!(object_color(ObjectKind::Player), PLAYER_COLOR);
    assert_eq!(object_color(ObjectKind::Tree), TREE_COLOR);
    assert_ne!(object_color(ObjectKind::Wood), object_color(ObjectKind::Tree));
}

#[test]
fn cell_size_fits_the_tighter_axis() {
    let panel = PanelRect { x: 0.0, y: 0.0, width: 522.0, height: 962.0 };
    assert_eq!(cell_size(panel, 26, 24), 20.0);
    let wide = PanelRect { x: 0.0, y: 0.0, width: 2000.0, height: 242.0 };
    assert_eq!(cell_size(wide, 26, 24), 10.0);
    assert_eq!(cell_size(panel, 0, 24), 0.0);
}

#[test]
fn fit_lines_to_panel_keeps_all_lines_when_space_is_sufficient() {
    let lines = vec!["Player".to_string(), "Health: 100".to_string(), "Turn: 0".to_string()];
    let fitted = fit_lines_to_panel(&lines, 200.0, 15.0, 25.0);
    assert_eq!(fitted, lines);
}

#[test]
fn fit_lines_to_panel_truncates_and_shows_hidden_count() {
    let lines =
        vec!["moved".to_string(), "moved".to_string(), "turn 1".to_string(), "turn 2".to_string()];

    let fitted = fit_lines_to_panel(&lines, 70.0, 20.0, 25.0);
    assert_eq!(fitted.len(), 2);
    assert_eq!(fitted[0], "moved");
    assert_eq!(fitted[1], "... and 3 more");
}

#[test]
fn fit_lines_to_panel_returns_empty_when_no_vertical_space() {
    let lines = vec!["Player".to_string(), "Turn: 0".to_string()];
    let fitted = fit_lines_to_panel(&lines, 20.0, 15.0, 25.0);
    assert!(fitted.is_empty());
}
