//! Action discovery around the player and action execution.
//! Discovery is rebuilt from scratch after every move and every executed action;
//! nothing here is cached across turns.

mod menu;

pub use menu::ActionMenu;

use crate::types::{ObjectId, ObjectKind, Pos};
use crate::world::World;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Optionally destroy the source object, then drop a new object where it stood.
    DropObject { destroy_self: bool, spawn: ObjectKind },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    pub source: ObjectId,
    pub target: Pos,
    pub text: String,
    pub kind: ActionKind,
}

/// An object an action wants created, installed at `location`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectSpawn {
    pub kind: ObjectKind,
    pub location: Pos,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionResponse {
    /// Where the source object is now; authoritative over `Action::target`.
    pub location: Pos,
    pub success: bool,
    pub destroy_self: bool,
    pub spawned_objects: Vec<ObjectSpawn>,
}

impl ActionResponse {
    pub fn failed(location: Pos) -> Self {
        Self { location, success: false, destroy_self: false, spawned_objects: Vec::new() }
    }
}

impl Action {
    pub fn destroys_source(&self) -> bool {
        match self.kind {
            ActionKind::DropObject { destroy_self, .. } => destroy_self,
        }
    }

    /// Resolve this action against the current world without mutating it.
    /// Fails when the source object is gone or no longer occupies a tile.
    pub fn act(&self, world: &World) -> ActionResponse {
        let Some(source) = world.objects.get(self.source) else {
            return ActionResponse::failed(self.target);
        };
        let location = source.location;
        if world.occupant_at(location) != Some(self.source) {
            return ActionResponse::failed(location);
        }

        match self.kind {
            ActionKind::DropObject { destroy_self, spawn } => ActionResponse {
                location,
                success: true,
                destroy_self,
                spawned_objects: vec![ObjectSpawn { kind: spawn, location }],
            },
        }
    }
}

/// Scan the 3x3 block around `player` (centre included, row-major) and collect
/// every occupant's actions in scan order, then per-occupant order.
pub fn discover(world: &World, player: Pos) -> Vec<Action> {
    let mut found = Vec::new();
    for dy in -1..=1 {
        for dx in -1..=1 {
            let cell = player.offset(dx, dy);
            if !world.map.in_bounds(cell) {
                continue;
            }
            let Some(object) = world.occupant_at(cell).and_then(|id| world.objects.get(id)) else {
                continue;
            };
            found.extend(object.actions());
        }
    }
    found
}
