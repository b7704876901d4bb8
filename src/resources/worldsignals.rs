//! World-wide signal board.
//!
//! Gameplay writes plain values here and the display systems read them, so
//! neither side needs to know about the other. Per-entity values live in
//! [`Signals`](crate::components::signals::Signals) instead.
//!
//! Keys in use:
//! - integer `score`: the displayed score
//! - flags `game_over` / `game_win`: drive the overlay panels
//! - string `scene`: name of the loaded scene
//! - flag `quit_game`: ends the host loop

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, Resource, Default)]
pub struct WorldSignals {
    pub scalars: FxHashMap<String, f32>,
    pub integers: FxHashMap<String, i32>,
    pub strings: FxHashMap<String, String>,
    /// A flag is true while its key is present.
    pub flags: FxHashSet<String>,
}

impl WorldSignals {
    pub fn set_scalar(&mut self, key: impl Into<String>, value: f32) {
        self.scalars.insert(key.into(), value);
    }

    pub fn get_scalar(&self, key: &str) -> Option<f32> {
        self.scalars.get(key).copied()
    }

    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }

    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }

    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }

    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_kept_per_kind() {
        let mut signals = WorldSignals::default();
        signals.set_integer("score", 3);
        signals.set_string("scene", "game");
        signals.set_flag("game_over");

        assert_eq!(signals.get_integer("score"), Some(3));
        assert_eq!(signals.get_scalar("score"), None);
        assert_eq!(signals.get_string("scene"), Some("game"));
        assert!(signals.has_flag("game_over"));

        signals.clear_flag("game_over");
        signals.clear_flag("never_set");
        assert!(!signals.has_flag("game_over"));
    }
}
