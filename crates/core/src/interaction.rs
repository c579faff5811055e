//! Interaction mode and the inspection cursor.
//! Modes are flat: there is no history, so toggling the current mode always
//! lands back in `Gameplay`.

use crate::actions::ActionMenu;
use crate::types::{Direction, InteractionMode, Pos, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interaction {
    mode: InteractionMode,
    cursor: Pos,
}

impl Interaction {
    pub fn new(player: Pos) -> Self {
        Self { mode: InteractionMode::Gameplay, cursor: player }
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// The tile the inspect panel describes.
    pub fn cursor(&self) -> Pos {
        self.cursor
    }

    /// `ActionSelect` <-> `Gameplay`; from `Inspect` switches to `ActionSelect`.
    pub fn toggle_action_select(&mut self, menu: &ActionMenu, player: Pos) {
        let next = match self.mode {
            InteractionMode::ActionSelect => InteractionMode::Gameplay,
            InteractionMode::Gameplay | InteractionMode::Inspect => InteractionMode::ActionSelect,
        };
        self.enter(next, menu, player);
    }

    /// `Inspect` <-> `Gameplay`; from `ActionSelect` switches to `Inspect`.
    pub fn toggle_inspect(&mut self, menu: &ActionMenu, player: Pos) {
        let next = match self.mode {
            InteractionMode::Inspect => InteractionMode::Gameplay,
            InteractionMode::Gameplay | InteractionMode::ActionSelect => InteractionMode::Inspect,
        };
        self.enter(next, menu, player);
    }

    fn enter(&mut self, mode: InteractionMode, menu: &ActionMenu, player: Pos) {
        self.mode = mode;
        self.cursor = player;
        if mode == InteractionMode::ActionSelect {
            self.follow_active(menu, player);
        }
    }

    /// Inspect-mode cursor step, kept inside the camera window.
    pub fn move_cursor(&mut self, direction: Direction, window: Rect) {
        let next = self.cursor.step(direction);
        self.cursor = Pos {
            x: next.x.clamp(window.x, window.right() - 1),
            y: next.y.clamp(window.y, window.bottom() - 1),
        };
    }

    /// Point the cursor at the active action's target, or the player when the
    /// list is empty.
    pub fn follow_active(&mut self, menu: &ActionMenu, player: Pos) {
        self.cursor = menu.active().map_or(player, |action| action.target);
    }

    /// Re-anchor the cursor after the player moved or the action list changed.
    pub fn sync(&mut self, menu: &ActionMenu, player: Pos, window: Rect) {
        match self.mode {
            InteractionMode::Gameplay => self.cursor = player,
            InteractionMode::ActionSelect => self.follow_active(menu, player),
            InteractionMode::Inspect if !window.contains(self.cursor) => self.cursor = player,
            InteractionMode::Inspect => {}
        }
    }
}
