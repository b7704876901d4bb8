//! Overlay panels shown at the end of a playthrough.
//!
//! A [`Panel`] is visible while the world flag named by its kind is set; see
//! [`crate::systems::signalbinding::update_panel_visibility_system`].

use bevy_ecs::prelude::Component;

/// Which terminal overlay this panel presents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelKind {
    GameOver,
    GameWin,
}

impl PanelKind {
    /// World flag that drives the panel's visibility.
    pub fn flag(&self) -> &'static str {
        match self {
            PanelKind::GameOver => "game_over",
            PanelKind::GameWin => "game_win",
        }
    }
}

#[derive(Component, Clone, Debug)]
pub struct Panel {
    pub kind: PanelKind,
    pub title: String,
    pub visible: bool,
}

impl Panel {
    /// Panels start hidden.
    pub fn new(kind: PanelKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            visible: false,
        }
    }
}
