//! Procedural terrain and forest generation, deterministic for a seed.

mod forest;
mod seed;
mod terrain;

pub use forest::ForestMask;

use crate::config::MapGenConfig;
use crate::types::TerrainKind;

use seed::{FOREST_STREAM, TERRAIN_STREAM, stream_rng};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedTerrain {
    pub width: usize,
    pub height: usize,
    pub terrain: Vec<TerrainKind>,
    pub forest: ForestMask,
}

pub fn generate(seed: u64, width: usize, height: usize, config: &MapGenConfig) -> GeneratedTerrain {
    let mut terrain_rng = stream_rng(seed, TERRAIN_STREAM);
    let terrain = terrain::generate_terrain(&mut terrain_rng, width, height, config);

    let mut forest_rng = stream_rng(seed, FOREST_STREAM);
    let forest = forest::generate_forest(&mut forest_rng, &terrain, width, height, config);

    GeneratedTerrain { width, height, terrain, forest }
}
