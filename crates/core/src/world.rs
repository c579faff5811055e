//! The map + object-list pair.
//! Tile occupant slots and the object store must agree at every observable
//! point, so every mutation that touches one touches the other here.

use tracing::{debug, info, warn};

use crate::actions::ActionResponse;
use crate::config::MapGenConfig;
use crate::map::GridMap;
use crate::mapgen;
use crate::objects::{GameObject, ObjectStore};
use crate::types::{GameError, ObjectId, ObjectKind, Pos};

#[derive(Clone, Debug)]
pub struct World {
    pub map: GridMap,
    pub objects: ObjectStore,
}

impl World {
    pub fn new(map: GridMap) -> Self {
        Self { map, objects: ObjectStore::default() }
    }

    /// Generate terrain and forest for `seed` and install a tree object on
    /// every forested cell.
    pub fn generate(seed: u64, width: usize, height: usize, config: &MapGenConfig) -> Self {
        let generated = mapgen::generate(seed, width, height, config);
        let mut world = Self::new(GridMap::from_terrain(width, height, generated.terrain));
        for location in generated.forest.cells() {
            world.install(ObjectKind::Tree, location);
        }
        info!(
            seed,
            width,
            height,
            trees = world.objects.count_kind(ObjectKind::Tree),
            "generated world"
        );
        world
    }

    pub fn occupant_at(&self, location: Pos) -> Option<ObjectId> {
        self.map.tile_at(location).occupant
    }

    pub fn occupant(&self, location: Pos) -> Option<&GameObject> {
        self.occupant_at(location).and_then(|id| self.objects.get(id))
    }

    pub fn is_transparent(&self, location: Pos) -> bool {
        self.map.is_transparent(location, &self.objects)
    }

    /// Create an object and install it as the occupant of `location`.
    pub fn spawn(&mut self, kind: ObjectKind, location: Pos) -> Result<ObjectId, GameError> {
        let tile = self.map.checked_tile(location)?;
        if tile.is_occupied() {
            return Err(GameError::TileOccupied(location));
        }
        Ok(self.install(kind, location))
    }

    /// Create an object that lives in the object list only and never occupies a
    /// tile slot (the player walks over occupants).
    pub fn spawn_free(
        &mut self,
        kind: ObjectKind,
        location: Pos,
        name: String,
    ) -> Result<ObjectId, GameError> {
        self.map.checked_tile(location)?;
        Ok(self.objects.insert_named(kind, location, name))
    }

    pub fn move_free(&mut self, id: ObjectId, to: Pos) -> Result<(), GameError> {
        self.map.checked_tile(to)?;
        let Some(object) = self.objects.get_mut(id) else {
            return Err(GameError::NoOccupant(to));
        };
        debug_assert!(
            self.map.tile_at(object.location).occupant != Some(id),
            "installed occupants cannot be moved as free objects"
        );
        object.location = to;
        Ok(())
    }

    /// Remove the occupant of `location` from its tile and from the object list.
    pub fn despawn_occupant(&mut self, location: Pos) -> Result<GameObject, GameError> {
        let tile = self.map.checked_tile(location)?;
        let Some(id) = tile.occupant else {
            return Err(GameError::NoOccupant(location));
        };
        self.map.tile_at_mut(location).occupant = None;
        self.objects.remove(id).ok_or(GameError::NoOccupant(location))
    }

    /// Apply a successful action response: destroy, then install spawns.
    /// Everything is validated before the first mutation, so an error leaves
    /// the world untouched.
    pub fn apply_response(&mut self, response: &ActionResponse) -> Result<Vec<ObjectId>, GameError> {
        if !response.success {
            return Ok(Vec::new());
        }
        if let Err(err) = self.validate_response(response) {
            warn!(%err, location = %response.location, "rejected action response");
            return Err(err);
        }

        if response.destroy_self {
            let removed = self.despawn_occupant(response.location)?;
            debug!(kind = ?removed.kind, location = %response.location, "destroyed occupant");
        }
        let spawned = response
            .spawned_objects
            .iter()
            .map(|spawn| self.install(spawn.kind, spawn.location))
            .collect();
        Ok(spawned)
    }

    fn validate_response(&self, response: &ActionResponse) -> Result<(), GameError> {
        if response.destroy_self && self.map.checked_tile(response.location)?.occupant.is_none() {
            return Err(GameError::NoOccupant(response.location));
        }
        let mut claimed: Vec<Pos> = Vec::with_capacity(response.spawned_objects.len());
        for spawn in &response.spawned_objects {
            let tile = self.map.checked_tile(spawn.location)?;
            let freed = response.destroy_self && spawn.location == response.location;
            if (tile.is_occupied() && !freed) || claimed.contains(&spawn.location) {
                return Err(GameError::TileOccupied(spawn.location));
            }
            claimed.push(spawn.location);
        }
        Ok(())
    }

    fn install(&mut self, kind: ObjectKind, location: Pos) -> ObjectId {
        let id = self.objects.insert(kind, location);
        self.map.tile_at_mut(location).occupant = Some(id);
        id
    }

    /// Every way the tile slots and the object list disagree. Empty when consistent.
    pub fn occupancy_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        let mut installed = 0usize;
        for tile in self.map.tiles() {
            let Some(id) = tile.occupant else {
                continue;
            };
            installed += 1;
            match self.objects.get(id) {
                None => violations.push(format!("tile {} points at a removed object", tile.location)),
                Some(object) if object.location != tile.location => violations.push(format!(
                    "tile {} holds {} located at {}",
                    tile.location, object.name, object.location
                )),
                Some(_) => {}
            }
        }
        let expected = self.objects.iter().filter(|object| object.kind != ObjectKind::Player).count();
        if installed != expected {
            violations.push(format!("{installed} installed occupants but {expected} placeable objects"));
        }
        violations
    }
}
