//! Cellular-automaton forest generation: a random seed pass followed by a fixed
//! number of smoothing passes over the Moore neighbourhood.

use rand_chacha::ChaCha8Rng;

use super::seed::unit_f64;
use crate::config::MapGenConfig;
use crate::types::{Pos, TerrainKind};

/// Tree placement over a grid. Ineligible cells (rock) never hold a tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForestMask {
    width: usize,
    height: usize,
    trees: Vec<bool>,
    eligible: Vec<bool>,
}

impl ForestMask {
    pub fn empty(terrain: &[TerrainKind], width: usize, height: usize) -> Self {
        assert_eq!(terrain.len(), width * height);
        Self {
            width,
            height,
            trees: vec![false; width * height],
            eligible: terrain.iter().map(|&kind| kind != TerrainKind::Rock).collect(),
        }
    }

    /// Build a mask from rows of `T` (tree), `.` (empty) and `#` (ineligible).
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        let mut trees = Vec::with_capacity(width * height);
        let mut eligible = Vec::with_capacity(width * height);
        for row in rows {
            assert_eq!(row.len(), width, "forest rows must have equal length");
            for ch in row.chars() {
                trees.push(ch == 'T');
                eligible.push(ch != '#');
            }
        }
        Self { width, height, trees, eligible }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn has_tree(&self, x: usize, y: usize) -> bool {
        self.trees[y * self.width + x]
    }

    pub fn tree_count(&self) -> usize {
        self.trees.iter().filter(|&&tree| tree).count()
    }

    /// Trees among the up-to-8 neighbours of `(x, y)`, clipped at the edges.
    pub fn tree_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for ny in y.saturating_sub(1)..=(y + 1).min(self.height - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(self.width - 1) {
                if (nx, ny) != (x, y) && self.has_tree(nx, ny) {
                    count += 1;
                }
            }
        }
        count
    }

    pub(super) fn seed(&mut self, rng: &mut ChaCha8Rng, probability: f64) {
        for idx in 0..self.trees.len() {
            // Draw for every cell so the stream does not depend on terrain.
            let roll = unit_f64(rng);
            self.trees[idx] = self.eligible[idx] && roll < probability;
        }
    }

    /// One generation of the smoothing rule, reading only the previous state.
    pub fn smoothed(&self, grow_threshold: u8, starve_threshold: u8) -> Self {
        let mut next = self.trees.clone();
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let neighbours = self.tree_neighbors(x, y);
                if !self.trees[idx] && self.eligible[idx] && neighbours > grow_threshold {
                    next[idx] = true;
                } else if self.trees[idx] && neighbours < starve_threshold {
                    next[idx] = false;
                }
            }
        }
        Self { trees: next, ..self.clone() }
    }

    pub fn smoothed_n(&self, passes: u32, grow_threshold: u8, starve_threshold: u8) -> Self {
        let mut mask = self.clone();
        for _ in 0..passes {
            mask = mask.smoothed(grow_threshold, starve_threshold);
        }
        mask
    }

    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.trees
            .iter()
            .enumerate()
            .filter(|(_, tree)| **tree)
            .map(|(idx, _)| Pos { x: (idx % self.width) as i32, y: (idx / self.width) as i32 })
    }

    #[cfg(test)]
    pub(crate) fn to_rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| {
                        let idx = y * self.width + x;
                        if !self.eligible[idx] {
                            '#'
                        } else if self.trees[idx] {
                            'T'
                        } else {
                            '.'
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

pub(super) fn generate_forest(
    rng: &mut ChaCha8Rng,
    terrain: &[TerrainKind],
    width: usize,
    height: usize,
    config: &MapGenConfig,
) -> ForestMask {
    let mut mask = ForestMask::empty(terrain, width, height);
    mask.seed(rng, config.tree_seed_probability);
    mask.smoothed_n(config.smoothing_passes, config.grow_threshold, config.starve_threshold)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn neighbour_count_is_clipped_and_excludes_self() {
        let mask = ForestMask::from_rows(&["TTT", "TTT", "TTT"]);
        assert_eq!(mask.tree_neighbors(1, 1), 8);
        assert_eq!(mask.tree_neighbors(0, 0), 3);
        assert_eq!(mask.tree_neighbors(2, 1), 5);
    }

    #[test]
    fn isolated_tree_starves_and_crowded_gap_fills() {
        let mask = ForestMask::from_rows(&[
            "......", //
            ".T....",
            "......",
            "...TTT",
            "...T.T",
            "...TTT",
        ]);
        let next = mask.smoothed(3, 2);
        assert!(!next.has_tree(1, 1), "isolated tree should die");
        assert!(next.has_tree(4, 4), "gap surrounded by 8 trees should fill");
    }

    #[test]
    fn rock_never_grows_a_tree() {
        let mask = ForestMask::from_rows(&["TTT", "T#T", "TTT"]);
        let next = mask.smoothed_n(5, 3, 2);
        assert!(!next.has_tree(1, 1));
        assert_eq!(next.to_rows()[1], "T#T");
    }

    #[test]
    fn fixed_grid_is_stable_after_five_passes() {
        let mask = ForestMask::from_rows(&[
            "T..T.TT.",
            ".TT..T..",
            "T.TTT..T",
            "..T.#T..",
            ".T..TT.T",
            "TT.T..T.",
            "..T.TT..",
            "T...T..T",
        ]);
        let settled = mask.smoothed_n(5, 3, 2);
        let once_more = settled.smoothed(3, 2);
        assert_eq!(settled.to_rows(), once_more.to_rows());
    }

    #[test]
    fn full_and_empty_grids_are_fixed_points() {
        let full = ForestMask::from_rows(&["TTTT", "TTTT", "TTTT"]);
        assert_eq!(full.smoothed(3, 2), full);
        let empty = ForestMask::from_rows(&["....", "....", "...."]);
        assert_eq!(empty.smoothed(3, 2), empty);
    }

    proptest! {
        #[test]
        fn smoothing_only_flips_cells_that_cross_a_threshold(
            cells in proptest::collection::vec(any::<bool>(), 36)
        ) {
            let rows: Vec<String> = cells
                .chunks(6)
                .map(|row| row.iter().map(|&t| if t { 'T' } else { '.' }).collect())
                .collect();
            let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
            let mask = ForestMask::from_rows(&row_refs);
            let next = mask.smoothed(3, 2);
            for y in 0..6 {
                for x in 0..6 {
                    let n = mask.tree_neighbors(x, y);
                    if mask.has_tree(x, y) != next.has_tree(x, y) {
                        prop_assert!(
                            (mask.has_tree(x, y) && n < 2) || (!mask.has_tree(x, y) && n > 3)
                        );
                    }
                }
            }
        }
    }
}
