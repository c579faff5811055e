use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use snowfield_core::Game;
use snowfield_tools::{fov_rows, init_tracing, load_config, map_rows};
use tracing::info;

/// Print a generated map as ASCII: `.` snow, `^` rock, `T` tree, `w` wood, `@` player.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// TOML file overriding the default game configuration.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of map rows to print, starting from the top.
    #[arg(short, long, default_value_t = 48)]
    rows: usize,
    /// Print only the camera window, blanking cells outside the start field of view.
    #[arg(long)]
    fov: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = load_config(args.config.as_deref())?;
    let game = Game::new(args.seed, config).context("failed to generate map")?;
    let map = game.map();
    info!(
        seed = args.seed,
        width = map.width(),
        height = map.height(),
        visible = map.visible_count(),
        "map generated"
    );

    let rows = if args.fov { fov_rows(&game) } else { map_rows(&game, args.rows) };
    for row in rows {
        println!("{row}");
    }
    Ok(())
}
