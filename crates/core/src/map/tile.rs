//! Per-cell state of the grid map.

use crate::types::{ObjectId, Pos, TerrainKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub location: Pos,
    pub terrain: TerrainKind,
    pub occupant: Option<ObjectId>,
    pub visible: bool,
    pub explored: bool,
}

impl Tile {
    pub fn new(location: Pos, terrain: TerrainKind) -> Self {
        Self { location, terrain, occupant: None, visible: false, explored: false }
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Apply one visibility result. `explored` only ever grows.
    pub fn mark_seen(&mut self, visible: bool) {
        self.visible = visible;
        self.explored |= visible;
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explored_survives_losing_visibility() {
        let mut tile = Tile::new(Pos::new(1, 1), TerrainKind::Snow);
        tile.mark_seen(true);
        assert!(tile.visible && tile.explored);

        tile.mark_seen(false);
        assert!(!tile.visible);
        assert!(tile.explored, "explored must be monotone");

        tile.hide();
        assert!(tile.explored);
    }

    #[test]
    fn unseen_tile_stays_unexplored() {
        let mut tile = Tile::new(Pos::new(0, 0), TerrainKind::Rock);
        tile.mark_seen(false);
        assert!(!tile.visible);
        assert!(!tile.explored);
    }
}
