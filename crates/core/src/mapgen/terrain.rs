//! Weighted per-cell terrain assignment.

use rand_chacha::ChaCha8Rng;

use super::seed::below;
use crate::config::MapGenConfig;
use crate::types::TerrainKind;

pub(super) fn roll_terrain(rng: &mut ChaCha8Rng, config: &MapGenConfig) -> TerrainKind {
    let total = u64::from(config.snow_weight) + u64::from(config.rock_weight);
    if below(rng, total) < u64::from(config.snow_weight) {
        TerrainKind::Snow
    } else {
        TerrainKind::Rock
    }
}

pub(super) fn generate_terrain(
    rng: &mut ChaCha8Rng,
    width: usize,
    height: usize,
    config: &MapGenConfig,
) -> Vec<TerrainKind> {
    (0..width * height).map(|_| roll_terrain(rng, config)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapgen::seed::{TERRAIN_STREAM, stream_rng};

    #[test]
    fn weights_shape_the_distribution() {
        let mut rng = stream_rng(42, TERRAIN_STREAM);
        let terrain = generate_terrain(&mut rng, 100, 100, &MapGenConfig::default());
        let rock = terrain.iter().filter(|&&kind| kind == TerrainKind::Rock).count();
        // 15% expected; allow generous slack.
        assert!((1_000..2_000).contains(&rock), "rock count {rock} far from 15%");
    }

    #[test]
    fn zero_rock_weight_is_all_snow() {
        let config = MapGenConfig { rock_weight: 0, ..MapGenConfig::default() };
        let mut rng = stream_rng(3, TERRAIN_STREAM);
        let terrain = generate_terrain(&mut rng, 20, 20, &config);
        assert!(terrain.iter().all(|&kind| kind == TerrainKind::Snow));
    }
}
