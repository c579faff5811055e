pub mod actions;
pub mod camera;
pub mod config;
pub mod game;
pub mod interaction;
pub mod map;
pub mod mapgen;
pub mod objects;
pub mod stats;
pub mod types;
pub mod visibility;
pub mod world;

#[cfg(test)]
mod test_support;

pub use actions::{Action, ActionKind, ActionMenu, ActionResponse, ObjectSpawn};
pub use camera::Camera;
pub use config::{ConfigError, FovAlgorithm, GameConfig};
pub use game::{Game, HudSnapshot, InspectedTile, ViewTile};
pub use map::{GridMap, Tile};
pub use objects::{GameObject, ObjectStore};
pub use stats::{CalendarDate, GameStats, Month, TimeOfDay};
pub use types::*;
pub use visibility::VisibilityEngine;
pub use world::World;
