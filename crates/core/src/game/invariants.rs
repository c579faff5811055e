//! Cross-module consistency checks used by fuzzing and integration tests.

use super::*;

impl Game {
    pub fn explored_mask(&self) -> Vec<bool> {
        self.world.map.tiles().map(|tile| tile.explored).collect()
    }

    /// Every broken invariant, described. `previous_explored` is the mask from
    /// an earlier frame; explored tiles must never be forgotten.
    pub fn invariant_violations(&self, previous_explored: Option<&[bool]>) -> Vec<String> {
        let mut violations = self.world.occupancy_violations();
        let player = self.player_location();
        let window = self.camera.visible_rect();

        if !window.contains(player) {
            violations.push(format!("player {player} outside camera window {window:?}"));
        }
        if !self.world.map.tile_at(player).visible {
            violations.push(format!("player tile {player} is not visible"));
        }
        if self.world.map.tile_at(player).occupant == Some(self.player) {
            violations.push("player installed as a tile occupant".to_string());
        }
        for tile in self.world.map.tiles() {
            if tile.visible && !tile.explored {
                violations.push(format!("tile {} visible but unexplored", tile.location));
            }
            if tile.visible && !window.contains(tile.location) {
                violations.push(format!("tile {} visible outside the window", tile.location));
            }
        }
        if let Some(previous) = previous_explored {
            let forgotten = previous
                .iter()
                .zip(self.world.map.tiles())
                .filter(|(was, tile)| **was && !tile.explored)
                .count();
            if forgotten > 0 {
                violations.push(format!("{forgotten} explored tiles were forgotten"));
            }
        }
        if let Some(action) = self.menu.active()
            && (action.target.x - player.x).abs().max((action.target.y - player.y).abs()) > 1
        {
            violations.push(format!("active action targets {} away from player", action.target));
        }
        violations
    }
}
