use macroquad::prelude::KeyCode;
use snowfield_core::{Direction, FrameCommands, FrameOutcome, Game};
use tracing::info;

/// Fold this frame's key presses into one command set. When several movement
/// keys arrive in the same frame the last one wins.
pub fn commands_from_keys(keys_pressed: &[KeyCode]) -> FrameCommands {
    let mut commands = FrameCommands::default();
    for key in keys_pressed {
        match key {
            KeyCode::Escape => commands.quit = true,
            KeyCode::W | KeyCode::Up => commands.movement = Some(Direction::North),
            KeyCode::S | KeyCode::Down => commands.movement = Some(Direction::South),
            KeyCode::A | KeyCode::Left => commands.movement = Some(Direction::West),
            KeyCode::D | KeyCode::Right => commands.movement = Some(Direction::East),
            KeyCode::E => commands.toggle_action_mode = true,
            KeyCode::I => commands.toggle_inspect_mode = true,
            KeyCode::Enter | KeyCode::KpEnter => commands.confirm = true,
            _ => {}
        }
    }
    commands
}

#[derive(Debug, Default)]
pub struct AppState {
    pub frames: u64,
    pub quit_requested: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process input for a single frame, returning whether the app should keep running.
    pub fn tick(&mut self, game: &mut Game, keys_pressed: &[KeyCode]) -> bool {
        if self.quit_requested {
            return false;
        }
        self.frames += 1;
        let commands = commands_from_keys(keys_pressed);
        if commands == FrameCommands::default() {
            return true;
        }
        if game.update(&commands) == FrameOutcome::Quit {
            info!(frames = self.frames, turn = game.stats().turn_count, "quit requested");
            self.quit_requested = true;
            return false;
        }
        true
    }
}
