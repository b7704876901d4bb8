//! Scene change event and observer.
//!
//! Systems request a scene through [`NextScene`]. Emitting a
//! [`SceneChangeEvent`] then triggers the observer in this module, which tears
//! down the live scene, records the new one in [`CurrentScene`] and runs the
//! scene's enter system stored in [`SystemsStore`].
//!
//! This decouples the intent to change scene from the mechanics of running
//! setup/teardown and avoids borrowing conflicts.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::panel::Panel;
use crate::resources::scene::{CurrentScene, NextScene, NextScenes, Scene};
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldsignals::WorldSignals;

/// Event used to indicate that a pending scene change should be applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct SceneChangeEvent {}

/// Everything a scene puts in the world or on screen.
type SceneObjects = Or<(With<MapPosition>, With<DynamicText>, With<Panel>)>;

/// Observer that applies a pending scene change.
///
/// Contract
/// - Reads the intention from [`NextScene`]; does nothing if unchanged.
/// - Despawns every scene object of the outgoing scene.
/// - Stores the new scene in [`CurrentScene`] and the `scene` world signal.
/// - Runs the enter system registered under [`Scene::enter_hook`].
/// - Resets [`NextScene`].
pub fn observe_scene_change_event(
    _trigger: On<SceneChangeEvent>,
    mut commands: Commands,
    mut next_scene: ResMut<NextScene>,
    mut current_scene: ResMut<CurrentScene>,
    mut world_signals: ResMut<WorldSignals>,
    systems_store: Res<SystemsStore>,
    scene_objects: Query<Entity, SceneObjects>,
) {
    debug!("SceneChangeEvent triggered");

    let NextScenes::Pending(new_scene) = next_scene.get() else {
        debug!("No scene change pending.");
        return;
    };
    next_scene.reset();

    info!(
        "Loading scene {} (was {})",
        new_scene.name(),
        current_scene.get().name()
    );

    let mut despawned = 0;
    for entity in scene_objects.iter() {
        commands.entity(entity).despawn();
        despawned += 1;
    }
    debug!("Despawned {} scene objects", despawned);

    current_scene.set(new_scene);
    world_signals.set_string("scene", new_scene.name());

    on_scene_enter(new_scene, &mut commands, &systems_store);
}

/// Internal: run the scene-specific "enter" system for the given scene.
fn on_scene_enter(scene: Scene, commands: &mut Commands, systems_store: &SystemsStore) {
    let Some(hook) = scene.enter_hook() else {
        debug!("Entered {} scene", scene.name());
        return;
    };
    match systems_store.get(hook) {
        Some(system_id) => commands.run_system(*system_id),
        None => warn!("No '{}' system registered for scene {}", hook, scene.name()),
    }
}
