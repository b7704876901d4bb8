use bevy_ecs::prelude::Component;

use super::signals::Signals;

/// Currently selected animation track for an entity.
///
/// Frame playback belongs to the renderer; gameplay only decides which track
/// is active.
#[derive(Debug, Clone, Component)]
pub struct Animation {
    pub animation_key: String,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
        }
    }

    /// Switch to another track. Returns false when `key` is already active.
    pub fn switch_to(&mut self, key: &str) -> bool {
        if self.animation_key == key {
            return false;
        }
        self.animation_key = key.to_string();
        true
    }
}

/// Selects `set_key` while the entity's signals carry `flag`.
#[derive(Debug, Clone)]
pub struct AnimRule {
    pub flag: String,
    pub set_key: String,
}

/// Rule list evaluated top to bottom; the first matching rule wins, otherwise
/// `fallback_key` is selected.
#[derive(Debug, Clone, Component)]
pub struct AnimationController {
    pub current_key: String,
    pub rules: Vec<AnimRule>,
    pub fallback_key: String,
}

impl AnimationController {
    pub fn new(fallback_key: impl Into<String>) -> Self {
        let fallback_key = fallback_key.into();
        Self {
            current_key: fallback_key.clone(),
            rules: Vec::new(),
            fallback_key,
        }
    }

    pub fn with_rule(mut self, flag: impl Into<String>, set_key: impl Into<String>) -> Self {
        self.rules.push(AnimRule {
            flag: flag.into(),
            set_key: set_key.into(),
        });
        self
    }

    /// Track the rules pick for the given signals.
    pub fn select(&self, signals: &Signals) -> &str {
        self.rules
            .iter()
            .find(|rule| signals.has_flag(&rule.flag))
            .map_or(self.fallback_key.as_str(), |rule| rule.set_key.as_str())
    }
}
