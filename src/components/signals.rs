// Signals for communication between components

use bevy_ecs::prelude::Component;
use rustc_hash::{FxHashMap, FxHashSet};

/// Per-entity signal storage.
///
/// The player controller publishes its animation flags (`running`,
/// `jumping`) here; the animation controller reads them back.
#[derive(Debug, Clone, Component, Default)]
pub struct Signals {
    pub scalars: FxHashMap<String, f32>,
    pub integers: FxHashMap<String, i32>,
    pub flags: FxHashSet<String>,
}

impl Signals {
    pub fn with_flag(mut self, key: impl Into<String>) -> Self {
        self.set_flag(key);
        self
    }
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
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }
    /// Set or clear a flag from a boolean.
    pub fn put_flag(&mut self, key: &str, value: bool) {
        if value {
            self.flags.insert(key.to_string());
        } else {
            self.flags.remove(key);
        }
    }
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
    pub fn get_flags(&self) -> &FxHashSet<String> {
        &self.flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_flag_sets_and_clears() {
        let mut s = Signals::default();
        s.put_flag("running", true);
        assert!(s.has_flag("running"));
        s.put_flag("running", false);
        assert!(!s.has_flag("running"));
        s.put_flag("running", false); // clearing twice is fine
        assert!(s.get_flags().is_empty());
    }

    #[test]
    fn scalars_and_integers_are_independent() {
        let mut s = Signals::default().with_flag("jumping");
        s.set_scalar("speed", 2.5);
        s.set_integer("speed", 3);
        assert_eq!(s.get_scalar("speed"), Some(2.5));
        assert_eq!(s.get_integer("speed"), Some(3));
        assert!(s.has_flag("jumping"));
        assert_eq!(s.get_scalar("missing"), None);
    }
}
