//! Scene resources.
//!
//! These resources track the loaded scene and any pending scene change
//! requested by gameplay. See
//! [`crate::events::scene::observe_scene_change_event`] for how a change is
//! applied: the live object graph is torn down and the new scene's enter
//! system builds it again.

use bevy_ecs::prelude::Resource;

/// Scenes the game can load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scene {
    #[default]
    None,
    Menu,
    Game,
}

impl Scene {
    pub fn name(&self) -> &'static str {
        match self {
            Scene::None => "None",
            Scene::Menu => "Menu",
            Scene::Game => "Game",
        }
    }

    /// Key of the enter system in the [`SystemsStore`](super::systemsstore::SystemsStore).
    pub fn enter_hook(&self) -> Option<&'static str> {
        match self {
            Scene::None => None,
            Scene::Menu => Some("enter_menu"),
            Scene::Game => Some("enter_game"),
        }
    }
}

/// Representation of a requested scene load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextScenes {
    #[default]
    Unchanged,
    Pending(Scene),
}

/// Authoritative loaded scene.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub struct CurrentScene {
    current: Scene,
}

impl CurrentScene {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get(&self) -> Scene {
        self.current
    }
    pub fn set(&mut self, scene: Scene) {
        self.current = scene;
    }
}

/// Intent to load a scene.
///
/// Use [`NextScene::set`] to mark a load as pending; the
/// `check_pending_scene` system then triggers the change event and the
/// observer resets the value to [`NextScenes::Unchanged`]. Requesting the
/// scene that is already loaded reloads it.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub struct NextScene {
    next: NextScenes,
}

impl NextScene {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get(&self) -> NextScenes {
        self.next
    }
    pub fn set(&mut self, next: Scene) {
        self.next = NextScenes::Pending(next);
    }
    pub fn reset(&mut self) {
        self.next = NextScenes::Unchanged;
    }
    pub fn is_pending(&self) -> bool {
        matches!(self.next, NextScenes::Pending(_))
    }
}
