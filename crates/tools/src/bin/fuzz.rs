use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use snowfield_core::{Direction, FrameCommands, FrameOutcome, Game};
use snowfield_tools::{init_tracing, load_config};
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    frames: u32,
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

/// Mostly movement, with occasional mode switches and confirms. Never quits.
fn random_commands(rng: &mut ChaCha8Rng) -> FrameCommands {
    let roll = rng.next_u32() % 100;
    let mut commands = FrameCommands::default();
    if roll < 70 {
        commands.movement = Some(choose(rng, &Direction::ALL));
    }
    commands.toggle_action_mode = roll % 13 == 0;
    commands.toggle_inspect_mode = roll % 17 == 0;
    commands.confirm = roll % 5 == 0;
    commands
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = load_config(args.config.as_deref())?;
    let mut game = Game::new(args.seed, config).context("failed to start game")?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    info!(seed = args.seed, frames = args.frames, "starting fuzz run");

    let mut explored = game.explored_mask();
    for frame in 0..args.frames {
        let commands = random_commands(&mut rng);
        if game.update(&commands) == FrameOutcome::Quit {
            bail!("fuzz commands never quit, yet frame {frame} did");
        }

        let violations = game.invariant_violations(Some(&explored));
        if !violations.is_empty() {
            for violation in &violations {
                warn!(frame, %violation, "invariant violated");
            }
            bail!("{} invariant violations at frame {frame}", violations.len());
        }
        explored = game.explored_mask();
    }

    println!("Fuzzing completed successfully.");
    println!("Turns: {}", game.stats().turn_count);
    println!("Time: {} {}", game.stats().time, game.stats().date);
    println!("Explored tiles: {}", game.map().explored_count());
    println!("Snapshot Hash: {:016x}", game.snapshot_hash());
    Ok(())
}
