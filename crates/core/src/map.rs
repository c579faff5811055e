//! The grid map: a fixed-size, row-major array of tiles.
//! Out-of-range lookups through `tile_at`/`neighbors` are caller bugs and panic;
//! use `get`/`checked_tile` where a location has not been validated.

mod tile;

pub use tile::Tile;

use crate::objects::ObjectStore;
use crate::types::{GameError, Pos, Rect, TerrainKind};

#[derive(Clone, Debug)]
pub struct GridMap {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl GridMap {
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_terrain(width, height, vec![TerrainKind::Snow; width * height])
    }

    pub fn from_terrain(width: usize, height: usize, terrain: Vec<TerrainKind>) -> Self {
        assert_eq!(terrain.len(), width * height, "terrain layer must cover the whole map");
        let tiles = terrain
            .into_iter()
            .enumerate()
            .map(|(idx, kind)| {
                let location = Pos { x: (idx % width) as i32, y: (idx / width) as i32 };
                Tile::new(location, kind)
            })
            .collect();
        Self { width, height, tiles }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rect(&self) -> Rect {
        Rect { x: 0, y: 0, width: self.width as i32, height: self.height as i32 }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn tile_at(&self, pos: Pos) -> &Tile {
        &self.tiles[self.index(pos)]
    }

    pub(crate) fn tile_at_mut(&mut self, pos: Pos) -> &mut Tile {
        let idx = self.index(pos);
        &mut self.tiles[idx]
    }

    pub fn get(&self, pos: Pos) -> Option<&Tile> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(&self.tiles[self.index(pos)])
    }

    pub fn checked_tile(&self, pos: Pos) -> Result<&Tile, GameError> {
        self.get(pos).ok_or(GameError::OutOfBounds(pos))
    }

    pub fn set_terrain(&mut self, pos: Pos, terrain: TerrainKind) {
        self.tile_at_mut(pos).terrain = terrain;
    }

    /// In-bounds cells of the 3x3 block around `pos`, excluding `pos`, row-major.
    pub fn neighbors(&self, pos: Pos) -> Vec<Pos> {
        assert!(self.in_bounds(pos), "neighbors() called with out-of-bounds location {pos}");
        let mut out = Vec::with_capacity(8);
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let n = pos.offset(dx, dy);
                if self.in_bounds(n) {
                    out.push(n);
                }
            }
        }
        out
    }

    /// Terrain transparency, cleared by an opaque occupant.
    pub fn is_transparent(&self, pos: Pos, objects: &ObjectStore) -> bool {
        let tile = self.tile_at(pos);
        let occupant_opaque = tile
            .occupant
            .and_then(|id| objects.get(id))
            .is_some_and(|object| !object.kind.is_transparent());
        tile.terrain.is_transparent() && !occupant_opaque
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn visible_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.visible).count()
    }

    pub fn explored_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.explored).count()
    }

    fn index(&self, pos: Pos) -> usize {
        assert!(self.in_bounds(pos), "tile access out of bounds at {pos}");
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ObjectKind;

    #[test]
    fn neighbors_interior_has_eight_in_row_major_order() {
        let map = GridMap::new(5, 5);
        let got = map.neighbors(Pos::new(2, 2));
        let expected = vec![
            Pos::new(1, 1),
            Pos::new(2, 1),
            Pos::new(3, 1),
            Pos::new(1, 2),
            Pos::new(3, 2),
            Pos::new(1, 3),
            Pos::new(2, 3),
            Pos::new(3, 3),
        ];
        assert_eq!(got, expected);
    }

    #[test]
    fn neighbors_are_clipped_at_edges() {
        let map = GridMap::new(5, 5);
        assert_eq!(map.neighbors(Pos::new(0, 0)).len(), 3);
        assert_eq!(map.neighbors(Pos::new(4, 2)).len(), 5);
        assert!(!map.neighbors(Pos::new(0, 0)).contains(&Pos::new(0, 0)));
    }

    #[test]
    #[should_panic(expected = "out-of-bounds")]
    fn neighbors_of_outside_location_panics() {
        GridMap::new(5, 5).neighbors(Pos::new(5, 0));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn tile_at_outside_panics_instead_of_clamping() {
        GridMap::new(4, 4).tile_at(Pos::new(-1, 2));
    }

    #[test]
    fn checked_tile_reports_out_of_bounds() {
        let map = GridMap::new(4, 4);
        assert_eq!(map.checked_tile(Pos::new(4, 0)), Err(GameError::OutOfBounds(Pos::new(4, 0))));
        assert_eq!(map.checked_tile(Pos::new(3, 3)).map(|tile| tile.location), Ok(Pos::new(3, 3)));
    }

    #[test]
    fn tiles_know_their_location() {
        let map = GridMap::new(3, 2);
        for tile in map.tiles() {
            assert_eq!(map.tile_at(tile.location).location, tile.location);
        }
        assert_eq!(map.tile_at(Pos::new(2, 1)).location, Pos::new(2, 1));
    }

    #[test]
    fn transparency_combines_terrain_and_occupant() {
        let mut map = GridMap::new(3, 3);
        let mut objects = ObjectStore::default();
        map.set_terrain(Pos::new(0, 0), TerrainKind::Rock);
        let tree = objects.insert(ObjectKind::Tree, Pos::new(1, 1));
        map.tile_at_mut(Pos::new(1, 1)).occupant = Some(tree);
        let wood = objects.insert(ObjectKind::Wood, Pos::new(2, 2));
        map.tile_at_mut(Pos::new(2, 2)).occupant = Some(wood);

        assert!(!map.is_transparent(Pos::new(0, 0), &objects));
        assert!(!map.is_transparent(Pos::new(1, 1), &objects));
        assert!(map.is_transparent(Pos::new(2, 2), &objects));
        assert!(map.is_transparent(Pos::new(0, 2), &objects));
    }
}
