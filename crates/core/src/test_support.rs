//! Shared world and game fixtures for the core unit test suites.
//! Keeps map setup out of individual tests; no production logic lives here.

use crate::config::{FovAlgorithm, GameConfig};
use crate::map::GridMap;
use crate::types::{ObjectKind, Pos, TerrainKind};
use crate::world::World;

/// All-snow world with no objects.
pub(crate) fn open_world(width: usize, height: usize) -> World {
    World::new(GridMap::new(width, height))
}

/// All-snow world with a tree installed on each of `trees`.
pub(crate) fn world_with_trees(width: usize, height: usize, trees: &[Pos]) -> World {
    let mut world = open_world(width, height);
    for &location in trees {
        world.spawn(ObjectKind::Tree, location).expect("fixture tree on a free tile");
    }
    world
}

/// World from rows of `.` (snow), `^` (rock), `T` (tree on snow) and `w` (wood on snow).
pub(crate) fn world_from_rows(rows: &[&str]) -> World {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.len());
    let mut world = open_world(width, height);
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), width, "fixture rows must have equal length");
        for (x, ch) in row.chars().enumerate() {
            let pos = Pos::new(x as i32, y as i32);
            match ch {
                '^' => world.map.set_terrain(pos, TerrainKind::Rock),
                'T' => {
                    world.spawn(ObjectKind::Tree, pos).expect("fixture tree");
                }
                'w' => {
                    world.spawn(ObjectKind::Wood, pos).expect("fixture wood");
                }
                _ => {}
            }
        }
    }
    world
}

/// Small config for games that should not pay for a 64x1024 map.
pub(crate) fn small_config(width: i32, height: i32) -> GameConfig {
    let mut config = GameConfig::default();
    config.map.width = width;
    config.map.height = height;
    config.camera.width = width.min(12);
    config.camera.height = height.min(10);
    config
}

/// Config with an empty map: no rock, no trees.
pub(crate) fn bare_config(width: i32, height: i32) -> GameConfig {
    let mut config = small_config(width, height);
    config.mapgen.rock_weight = 0;
    config.mapgen.tree_seed_probability = 0.0;
    config.mapgen.smoothing_passes = 0;
    config.fov.algorithm = FovAlgorithm::Symmetric;
    config
}
