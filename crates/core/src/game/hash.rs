//! Stable snapshot hashing for determinism checks.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl Game {
    /// Digest of the state that gameplay can observe: seed, clock, player,
    /// mode and selection, every object, and the explored set.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.stats.turn_count);
        hasher.write_u8(self.stats.time.hour);
        hasher.write_u8(self.stats.time.minute);
        hasher.write_u8(self.stats.date.day);
        hasher.write_u8(self.stats.date.month as u8);

        let player = self.player_location();
        hasher.write_i32(player.x);
        hasher.write_i32(player.y);
        hasher.write_u8(self.interaction.mode() as u8);
        let cursor = self.interaction.cursor();
        hasher.write_i32(cursor.x);
        hasher.write_i32(cursor.y);
        hasher.write_u64(self.menu.active_index().map_or(u64::MAX, |idx| idx as u64));

        for object in self.world.objects.iter() {
            hasher.write_u8(object.kind as u8);
            hasher.write_i32(object.location.x);
            hasher.write_i32(object.location.y);
        }
        for tile in self.world.map.tiles() {
            hasher.write_u8(u8::from(tile.explored) | (u8::from(tile.visible) << 1));
        }
        hasher.finish()
    }
}
