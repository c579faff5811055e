//! Text formatting for the status line, HUD panels, and event log entries.

use snowfield_app::{format_seed, format_snapshot_hash};
use snowfield_core::{GameEvent, HudSnapshot, InspectedTile, InteractionMode};

pub fn status_text(mode: InteractionMode) -> &'static str {
    match mode {
        InteractionMode::Gameplay => "WASD to move, E for actions, I to inspect, Esc to quit",
        InteractionMode::ActionSelect => "ACTIONS: WASD to choose, Enter to confirm, E to leave",
        InteractionMode::Inspect => "INSPECT: WASD to move the cursor, I to leave",
    }
}

pub fn debug_line(seed: u64, snapshot_hash: u64, frames: u64) -> String {
    format!(
        "seed {} | hash {} | frame {frames}",
        format_seed(seed),
        format_snapshot_hash(snapshot_hash)
    )
}

pub fn player_info_lines(hud: &HudSnapshot) -> Vec<String> {
    vec![
        hud.player_name.clone(),
        format!("Health: {}", hud.health),
        format!("Location: {}, {}", hud.location.x, hud.location.y),
        format!("Turn: {}", hud.stats.turn_count),
        format!("Time: {}", hud.stats.time),
        format!("Date: {}", hud.stats.date),
    ]
}

/// The active entry is marked only while the player is choosing an action.
pub fn action_lines(hud: &HudSnapshot) -> Vec<String> {
    if hud.actions.is_empty() {
        return vec!["Nothing to do here".to_string()];
    }
    let choosing = hud.mode == InteractionMode::ActionSelect;
    hud.actions
        .iter()
        .enumerate()
        .map(|(index, text)| {
            if choosing && hud.active_action == Some(index) {
                format!("> {text}")
            } else {
                format!("  {text}")
            }
        })
        .collect()
}

pub fn inspect_lines(tile: &InspectedTile) -> Vec<String> {
    let mut lines = vec![format!("Cursor: {}, {}", tile.location.x, tile.location.y)];
    match tile.terrain {
        Some(terrain) => lines.push(format!("Ground: {}", terrain.name())),
        None => lines.push("Unexplored".to_string()),
    }
    if let Some(occupant) = &tile.occupant {
        lines.push(format!("Here: {occupant}"));
    } else if tile.terrain.is_some() && !tile.visible {
        lines.push("Out of sight".to_string());
    }
    lines
}

pub fn event_log_line(event: &GameEvent) -> String {
    match event {
        GameEvent::PlayerMoved { to, .. } => format!("moved to {}, {}", to.x, to.y),
        GameEvent::MoveBlocked { target } => format!("can't go to {}, {}", target.x, target.y),
        GameEvent::ModeChanged { mode } => match mode {
            InteractionMode::Gameplay => "back to walking".to_string(),
            InteractionMode::ActionSelect => "choosing an action".to_string(),
            InteractionMode::Inspect => "inspecting".to_string(),
        },
        GameEvent::ActionExecuted { text, location } => {
            format!("{} at {}, {}", text.to_lowercase(), location.x, location.y)
        }
        GameEvent::ActionFailed { text } => format!("{} failed", text.to_lowercase()),
        GameEvent::TurnCompleted { turn } => format!("turn {turn} ends"),
    }
}
