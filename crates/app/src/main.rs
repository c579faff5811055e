use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::*;
use macroquad::window::Conf;
use snowfield_app::app_loop::AppState;
use snowfield_app::cli::Cli;
use snowfield_app::seed::{SeedChoice, generate_runtime_seed};
use snowfield_app::{format_seed, init_tracing};
use snowfield_core::Game;
use taffy::TaffyTree;
use tracing::{error, info};

mod frame_input;
mod game_layout;
mod ui_render;
mod ui_text;
mod window_config;

use frame_input::capture_frame_input;
use game_layout::{compute_frame_layout, setup_layout};
use ui_render::draw_frame;

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = run().await {
        error!("{err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.load_config()?;
    let seed_choice = SeedChoice::resolve(cli.seed, generate_runtime_seed());
    let seed = seed_choice.value();
    info!(seed = %format_seed(seed), source = ?seed_choice, "starting run");
    let mut game = Game::new(seed, config).context("failed to start game")?;

    let mut taffy = TaffyTree::new();
    let nodes = setup_layout(&mut taffy);
    let mut app = AppState::new();
    let mut show_debug = false;

    loop {
        let input = capture_frame_input();
        if input.toggle_debug_overlay {
            show_debug = !show_debug;
        }
        if !app.tick(&mut game, &input.keys_pressed) {
            break;
        }

        clear_background(BLACK);
        let layout = compute_frame_layout(&mut taffy, &nodes, screen_width(), screen_height());
        draw_frame(&game, &app, seed, &layout, show_debug);
        next_frame().await;
    }

    info!(frames = app.frames, turn = game.stats().turn_count, "run finished");
    Ok(())
}
