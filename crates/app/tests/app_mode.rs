use macroquad::prelude::KeyCode;
use snowfield_app::app_loop::AppState;
use snowfield_core::{Game, GameConfig, InteractionMode, Pos};

fn small_game(seed: u64) -> Game {
    let mut config = GameConfig::default();
    config.map.height = 96;
    Game::new(seed, config).expect("valid config")
}

#[test]
fn idle_frames_change_nothing() {
    let mut game = small_game(12345);
    let mut app = AppState::new();
    let before = game.snapshot_hash();
    for _ in 0..10 {
        assert!(app.tick(&mut game, &[]));
    }
    assert_eq!(app.frames, 10);
    assert_eq!(game.snapshot_hash(), before);
}

#[test]
fn walking_keys_move_the_player() {
    let mut game = small_game(12345);
    let mut app = AppState::new();
    let start = game.player_location();
    app.tick(&mut game, &[KeyCode::S]);
    app.tick(&mut game, &[KeyCode::Down]);
    app.tick(&mut game, &[KeyCode::D]);
    assert_eq!(game.player_location(), Pos::new(start.x + 1, start.y + 2));
    assert_eq!(game.stats().turn_count, 3);
}

#[test]
fn escape_stops_the_loop_and_stays_stopped() {
    let mut game = small_game(1);
    let mut app = AppState::new();
    assert!(!app.tick(&mut game, &[KeyCode::Escape]));
    assert!(!app.tick(&mut game, &[KeyCode::S]));
    assert_eq!(game.stats().turn_count, 0);
}

#[test]
fn mode_keys_toggle_between_modes() {
    let mut game = small_game(1);
    let mut app = AppState::new();
    app.tick(&mut game, &[KeyCode::E]);
    assert_eq!(game.mode(), InteractionMode::ActionSelect);
    app.tick(&mut game, &[KeyCode::I]);
    assert_eq!(game.mode(), InteractionMode::Inspect);
    app.tick(&mut game, &[KeyCode::I]);
    assert_eq!(game.mode(), InteractionMode::Gameplay);
}

#[test]
fn inspect_mode_arrows_move_the_cursor_only() {
    let mut game = small_game(3);
    let mut app = AppState::new();
    let start = game.player_location();
    app.tick(&mut game, &[KeyCode::I]);
    app.tick(&mut game, &[KeyCode::Left]);
    assert_eq!(game.player_location(), start);
    assert_eq!(game.cursor(), Pos::new(start.x - 1, start.y));
}
