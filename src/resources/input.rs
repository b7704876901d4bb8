//! Per-frame input resource.
//!
//! The frontend (a raylib window, or a scripted driver when headless)
//! samples its devices into an [`InputFrame`] of raw key-down states and
//! hands it to [`InputState::update`], which derives press/release edges.
//! Gameplay systems only ever read [`InputState`].
use bevy_ecs::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean action state with edge detection.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,
}

impl BoolState {
    fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

/// Raw device snapshot for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Restart the level.
    pub restart: bool,
    /// Leave for the menu.
    pub back: bool,
    /// Confirm in the menu.
    pub confirm: bool,
}

impl InputFrame {
    pub fn right() -> Self {
        Self {
            right: true,
            ..Self::default()
        }
    }

    pub fn left() -> Self {
        Self {
            left: true,
            ..Self::default()
        }
    }

    pub fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }
}

/// Resource capturing the per-frame input relevant to gameplay.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    /// Raw horizontal axis in [-1, 1]; opposite keys cancel out.
    pub horizontal: f32,
    pub jump: BoolState,
    pub restart: BoolState,
    pub back: BoolState,
    pub confirm: BoolState,
}

impl InputState {
    pub fn update(&mut self, frame: &InputFrame) {
        self.horizontal = match (frame.left, frame.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        self.jump.update(frame.jump);
        self.restart.update(frame.restart);
        self.back.update(frame.back);
        self.confirm.update(frame.confirm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_axis_is_raw() {
        let mut input = InputState::default();
        input.update(&InputFrame::right());
        assert_eq!(input.horizontal, 1.0);
        input.update(&InputFrame::left());
        assert_eq!(input.horizontal, -1.0);
        input.update(&InputFrame {
            left: true,
            right: true,
            ..InputFrame::default()
        });
        assert_eq!(input.horizontal, 0.0);
    }

    #[test]
    fn jump_edge_fires_once_per_press() {
        let mut input = InputState::default();
        input.update(&InputFrame::default().with_jump());
        assert!(input.jump.just_pressed);
        input.update(&InputFrame::default().with_jump());
        assert!(input.jump.active);
        assert!(!input.jump.just_pressed);
        input.update(&InputFrame::default());
        assert!(input.jump.just_released);
        assert!(!input.jump.active);
    }
}
