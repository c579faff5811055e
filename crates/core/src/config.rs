//! Tunable game configuration, loaded from TOML.
//! Every field has a default, so an empty file (or no file) yields the stock game.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::types::Pos;

pub const DEFAULT_MAP_WIDTH: i32 = 64;
pub const DEFAULT_MAP_HEIGHT: i32 = 1024;
pub const DEFAULT_CAMERA_WIDTH: i32 = 26;
pub const DEFAULT_CAMERA_HEIGHT: i32 = 24;
pub const DEFAULT_FOV_RADIUS: i32 = 20;
pub const MAX_FOV_RADIUS: i32 = 1024;
pub const DEFAULT_MINUTES_PER_TURN: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub map: MapConfig,
    pub camera: CameraConfig,
    pub fov: FovConfig,
    pub mapgen: MapGenConfig,
    pub turn: TurnConfig,
    pub player: PlayerConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self { width: DEFAULT_MAP_WIDTH, height: DEFAULT_MAP_HEIGHT }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { width: DEFAULT_CAMERA_WIDTH, height: DEFAULT_CAMERA_HEIGHT }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FovAlgorithm {
    /// Shadowcasting filtered by a direct line of sight; A sees B iff B sees A.
    Symmetric,
    /// Plain recursive shadowcasting. Slightly more permissive around pillars.
    Shadowcast,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FovConfig {
    pub radius: i32,
    pub algorithm: FovAlgorithm,
}

impl Default for FovConfig {
    fn default() -> Self {
        Self { radius: DEFAULT_FOV_RADIUS, algorithm: FovAlgorithm::Symmetric }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapGenConfig {
    pub snow_weight: u32,
    pub rock_weight: u32,
    pub tree_seed_probability: f64,
    pub smoothing_passes: u32,
    /// An empty cell grows a tree when more than this many neighbours are trees.
    pub grow_threshold: u8,
    /// A tree dies when fewer than this many neighbours are trees.
    pub starve_threshold: u8,
}

impl Default for MapGenConfig {
    fn default() -> Self {
        Self {
            snow_weight: 85,
            rock_weight: 15,
            tree_seed_probability: 0.3,
            smoothing_passes: 5,
            grow_threshold: 3,
            starve_threshold: 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TurnConfig {
    pub minutes_per_turn: u32,
}

impl Default for TurnConfig {
    fn default() -> Self {
        Self { minutes_per_turn: DEFAULT_MINUTES_PER_TURN }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    pub name: String,
    pub health: u32,
    /// Defaults to the centre of the first camera window.
    pub start: Option<Pos>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { name: "Player".to_string(), health: 100, start: None }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map.width <= 0 || self.map.height <= 0 {
            return Err(invalid("map dimensions must be positive"));
        }
        if self.camera.width <= 0 || self.camera.height <= 0 {
            return Err(invalid("camera dimensions must be positive"));
        }
        if self.camera.width > self.map.width || self.camera.height > self.map.height {
            return Err(invalid("camera window must fit inside the map"));
        }
        if !(0..=MAX_FOV_RADIUS).contains(&self.fov.radius) {
            return Err(invalid("fov radius must be within 0..=1024"));
        }
        match self.mapgen.snow_weight.checked_add(self.mapgen.rock_weight) {
            None => return Err(invalid("terrain weights overflow when summed")),
            Some(0) => return Err(invalid("terrain weights must not both be zero")),
            Some(_) => {}
        }
        if !(0.0..=1.0).contains(&self.mapgen.tree_seed_probability) {
            return Err(invalid("tree_seed_probability must be within 0..=1"));
        }
        if self.mapgen.grow_threshold > 8 || self.mapgen.starve_threshold > 8 {
            return Err(invalid("neighbour thresholds must be at most 8"));
        }
        if let Some(start) = self.player.start
            && (start.x < 0
                || start.y < 0
                || start.x >= self.map.width
                || start.y >= self.map.height)
        {
            return Err(invalid("player start must lie inside the map"));
        }
        Ok(())
    }

    pub fn player_start(&self) -> Pos {
        self.player.start.unwrap_or(Pos { x: self.camera.width / 2, y: self.camera.height / 2 })
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::Invalid(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_yields_defaults() {
        let config = GameConfig::from_toml_str("").expect("empty config should parse");
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.map.width, 64);
        assert_eq!(config.map.height, 1024);
        assert_eq!(config.fov.radius, 20);
        assert_eq!(config.player_start(), Pos { x: 13, y: 12 });
    }

    #[test]
    fn partial_tables_override_only_named_fields() {
        let text = r#"
            [fov]
            algorithm = "shadowcast"

            [mapgen]
            smoothing_passes = 2

            [player]
            start = { x = 32, y = 32 }
        "#;
        let config = GameConfig::from_toml_str(text).expect("config should parse");
        assert_eq!(config.fov.algorithm, FovAlgorithm::Shadowcast);
        assert_eq!(config.fov.radius, DEFAULT_FOV_RADIUS);
        assert_eq!(config.mapgen.smoothing_passes, 2);
        assert_eq!(config.mapgen.rock_weight, 15);
        assert_eq!(config.player_start(), Pos { x: 32, y: 32 });
    }

    #[test]
    fn rejects_terrain_weights_that_overflow() {
        let text = "[mapgen]\nsnow_weight = 4294967295\nrock_weight = 1\n";
        let err = GameConfig::from_toml_str(text).expect_err("weights overflow u32");
        assert!(matches!(err, ConfigError::Invalid(_)), "unexpected error: {err}");

        let zero = "[mapgen]\nsnow_weight = 0\nrock_weight = 0\n";
        assert!(matches!(GameConfig::from_toml_str(zero), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_fov_radius_out_of_range() {
        let mut config = GameConfig::default();
        config.fov.radius = 50_000;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        config.fov.radius = -1;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        config.fov.radius = MAX_FOV_RADIUS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_camera_larger_than_map() {
        let text = "[map]\nwidth = 10\nheight = 10\n";
        let err = GameConfig::from_toml_str(text).expect_err("camera cannot exceed map");
        assert!(matches!(err, ConfigError::Invalid(_)), "unexpected error: {err}");
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = GameConfig::from_toml_str("[fov]\nangle = 3\n").expect_err("unknown key");
        assert!(matches!(err, ConfigError::Parse(_)), "unexpected error: {err}");
    }

    #[test]
    fn rejects_start_outside_map() {
        let text = "[player]\nstart = { x = 64, y = 0 }\n";
        assert!(GameConfig::from_toml_str(text).is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "[turn]\nminutes_per_turn = 15").expect("write config");
        let config = GameConfig::load(file.path()).expect("load config");
        assert_eq!(config.turn.minutes_per_turn, 15);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = GameConfig::load(&dir.path().join("absent.toml")).expect_err("missing file");
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
