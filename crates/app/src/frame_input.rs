//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_pressed};

const WATCHED_KEYS: [KeyCode; 14] = [
    KeyCode::Escape,
    KeyCode::W,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::E,
    KeyCode::I,
    KeyCode::Enter,
    KeyCode::KpEnter,
    KeyCode::F3,
];

#[derive(Default)]
pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
    pub toggle_debug_overlay: bool,
}

pub fn capture_frame_input() -> FrameInput {
    let mut keys_pressed = Vec::with_capacity(WATCHED_KEYS.len());
    for key in WATCHED_KEYS {
        if is_key_pressed(key) {
            keys_pressed.push(key);
        }
    }
    let toggle_debug_overlay = keys_pressed.contains(&KeyCode::F3);
    FrameInput { keys_pressed, toggle_debug_overlay }
}
