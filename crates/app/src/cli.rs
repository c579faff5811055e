//! Command-line options for the desktop app.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use snowfield_core::GameConfig;

#[derive(Debug, Parser)]
#[command(name = "snowfield", about = "Explore a snowy, seeded tile map")]
pub struct Cli {
    /// World seed; a fresh one is generated when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// TOML file overriding the default game configuration.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn load_config(&self) -> Result<GameConfig> {
        match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("failed to load config from {}", path.display())),
            None => Ok(GameConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_seed_and_config() {
        let cli = Cli::try_parse_from(["snowfield", "--seed", "4242", "--config", "game.toml"])
            .expect("valid arguments");
        assert_eq!(cli.seed, Some(4242));
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
    }

    #[test]
    fn seed_must_be_a_number() {
        assert!(Cli::try_parse_from(["snowfield", "--seed=abc"]).is_err());
    }

    #[test]
    fn missing_config_flag_uses_defaults() {
        let cli = Cli::try_parse_from(["snowfield"]).expect("no arguments");
        assert_eq!(cli.load_config().expect("defaults"), GameConfig::default());
    }

    #[test]
    fn config_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[fov]\nradius = 8").expect("write config");
        let cli = Cli { seed: None, config: Some(file.path().to_path_buf()) };
        assert_eq!(cli.load_config().expect("valid config").fov.radius, 8);
    }

    #[test]
    fn unreadable_config_reports_the_path() {
        let cli = Cli { seed: None, config: Some(PathBuf::from("/definitely/missing.toml")) };
        let err = cli.load_config().expect_err("missing file");
        assert!(format!("{err:#}").contains("/definitely/missing.toml"));
    }
}
