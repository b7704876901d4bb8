//! Collision event type.
//!
//! The collision detector emits [`CollisionEvent`] when two tagged entities
//! start overlapping. The player's router
//! ([`crate::systems::collision::player_collision_observer`]) subscribes to
//! it and turns it into game state changes.
use bevy_ecs::prelude::*;

/// Event fired when two entities with BoxCollider and a Tag start overlapping.
///
/// The two fields, [`CollisionEvent::a`] and [`CollisionEvent::b`], are the
/// entity IDs of the participants. No ordering guarantees are provided.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}

impl CollisionEvent {
    /// The participant that is not `entity`, if `entity` takes part.
    pub fn other(&self, entity: Entity) -> Option<Entity> {
        if self.a == entity {
            Some(self.b)
        } else if self.b == entity {
            Some(self.a)
        } else {
            None
        }
    }
}
