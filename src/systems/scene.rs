use bevy_ecs::prelude::*;

use crate::events::scene::SceneChangeEvent;
use crate::resources::scene::{CurrentScene, NextScene, Scene};

/// Trigger the scene change observer when a load has been requested.
pub fn check_pending_scene(mut commands: Commands, next_scene: Res<NextScene>) {
    if next_scene.is_pending() {
        commands.trigger(SceneChangeEvent {});
    }
}

/// Run condition: the game scene is loaded.
pub fn scene_is_game(scene: Res<CurrentScene>) -> bool {
    scene.get() == Scene::Game
}
