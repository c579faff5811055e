use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use snowfield_core::{Direction, FrameCommands, FrameOutcome, Game, GameConfig};

fn random_commands(rng: &mut ChaCha8Rng) -> FrameCommands {
    let roll = rng.next_u64();
    let movement = match roll % 6 {
        0 => Some(Direction::North),
        1 => Some(Direction::South),
        2 => Some(Direction::West),
        3 => Some(Direction::East),
        _ => None,
    };
    FrameCommands {
        quit: false,
        movement,
        toggle_action_mode: (roll >> 8) % 7 == 0,
        toggle_inspect_mode: (roll >> 16) % 11 == 0,
        confirm: (roll >> 24) % 3 == 0,
    }
}

fn fuzz_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.map.width = 40;
    config.map.height = 120;
    config.camera.width = 14;
    config.camera.height = 12;
    config.fov.radius = 8;
    config
}

fn run_fuzz_simulation(map_seed: u64, input_seed: u64, frames: u32) -> Result<(), String> {
    let mut game = Game::new(map_seed, fuzz_config()).map_err(|err| err.to_string())?;
    let mut rng = ChaCha8Rng::seed_from_u64(input_seed);
    let mut explored = game.explored_mask();

    for frame in 0..frames {
        let commands = random_commands(&mut rng);
        if game.update(&commands) == FrameOutcome::Quit {
            return Err(format!("frame {frame}: quit without a quit command"));
        }
        let violations = game.invariant_violations(Some(&explored));
        if !violations.is_empty() {
            return Err(format!(
                "map_seed {map_seed}, input_seed {input_seed}, frame {frame} ({commands:?}): {violations:?}"
            ));
        }
        explored = game.explored_mask();
    }
    Ok(())
}

#[test]
fn fixed_seeds_hold_invariants() {
    for seed in [1, 2, 3, 42, 2026] {
        run_fuzz_simulation(seed, seed ^ 0xA5A5, 300).expect("invariants hold");
    }
}

#[test]
fn random_seeds_hold_invariants() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(16));
    runner
        .run(&(any::<u64>(), any::<u64>()), |(map_seed, input_seed)| {
            run_fuzz_simulation(map_seed, input_seed, 150).map_err(TestCaseError::fail)
        })
        .expect("fuzzed runs hold invariants");
}
