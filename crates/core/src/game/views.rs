//! Read-only views handed to the render collaborator.

use super::*;
use crate::objects::GameObject;

/// One window cell as the renderer needs it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewTile {
    pub location: Pos,
    /// Position inside the camera window.
    pub local: Pos,
    pub terrain: TerrainKind,
    pub visible: bool,
    pub explored: bool,
    pub occupant: Option<ObjectKind>,
}

/// What the inspect panel shows for the cursor tile. Terrain is only known
/// once explored; occupants only while visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InspectedTile {
    pub location: Pos,
    pub terrain: Option<TerrainKind>,
    pub occupant: Option<String>,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HudSnapshot {
    pub player_name: String,
    pub health: u32,
    pub location: Pos,
    pub stats: GameStats,
    pub actions: Vec<String>,
    pub active_action: Option<usize>,
    pub mode: InteractionMode,
    pub inspected: InspectedTile,
}

impl Game {
    pub fn viewport(&self) -> Rect {
        self.camera.visible_rect()
    }

    /// Window tiles in row-major order.
    pub fn view_tiles(&self) -> Vec<ViewTile> {
        self.viewport()
            .cells()
            .map(|location| {
                let tile = self.world.map.tile_at(location);
                ViewTile {
                    location,
                    local: self.camera.to_local(location),
                    terrain: tile.terrain,
                    visible: tile.visible,
                    explored: tile.explored,
                    occupant: self.world.occupant(location).map(|object| object.kind),
                }
            })
            .collect()
    }

    /// Objects standing on visible window tiles, in object-list order.
    pub fn visible_objects(&self) -> Vec<&GameObject> {
        let window = self.viewport();
        self.world
            .objects
            .iter()
            .filter(|object| {
                window.contains(object.location) && self.world.map.tile_at(object.location).visible
            })
            .collect()
    }

    pub fn inspect(&self, location: Pos) -> Option<InspectedTile> {
        let tile = self.world.map.get(location)?;
        Some(InspectedTile {
            location,
            terrain: tile.explored.then_some(tile.terrain),
            occupant: if tile.visible {
                self.world.occupant(location).map(|object| object.name.clone())
            } else {
                None
            },
            visible: tile.visible,
        })
    }

    pub fn hud(&self) -> HudSnapshot {
        let location = self.player_location();
        let player_name = self
            .world
            .objects
            .get(self.player)
            .map_or_else(|| self.config.player.name.clone(), |player| player.name.clone());
        let cursor = self.interaction.cursor();
        HudSnapshot {
            player_name,
            health: self.config.player.health,
            location,
            stats: self.stats,
            actions: self.menu.actions().iter().map(|action| action.text.clone()).collect(),
            active_action: self.menu.active_index(),
            mode: self.interaction.mode(),
            inspected: self.inspect(cursor).unwrap_or(InspectedTile {
                location: cursor,
                terrain: None,
                occupant: None,
                visible: false,
            }),
        }
    }
}
