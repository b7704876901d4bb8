//! Sensor queries over layered colliders.
//!
//! [`Sensors`] is a [`SystemParam`] that answers the two questions the agents
//! ask the world every tick: "what is the nearest collider along this ray?"
//! and "does this circle touch anything?". Only entities carrying a
//! [`Layer`] are visible to it; a [`LayerMask`] selects which layers a query
//! considers.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::tag::{Layer, LayerMask};

/// Nearest collider reported by [`Sensors::raycast`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub distance: f32,
    pub point: Vec2,
}

#[derive(SystemParam)]
pub struct Sensors<'w, 's> {
    colliders: Query<
        'w,
        's,
        (
            Entity,
            &'static MapPosition,
            &'static BoxCollider,
            &'static Layer,
        ),
    >,
}

impl Sensors<'_, '_> {
    /// Cast a ray and return the nearest hit on a layer in `mask`.
    ///
    /// `dir` is normalized here. A hit exactly at `max_distance` counts, and a
    /// ray starting inside a collider hits it at distance 0. `ignore` skips
    /// one entity, usually the caster.
    pub fn raycast(
        &self,
        origin: Vec2,
        dir: Vec2,
        max_distance: f32,
        mask: LayerMask,
        ignore: Option<Entity>,
    ) -> Option<RayHit> {
        let dir = dir.normalize_or_zero();
        if dir == Vec2::ZERO || max_distance < 0.0 {
            return None;
        }
        let mut nearest: Option<RayHit> = None;
        for (entity, position, collider, layer) in self.colliders.iter() {
            if Some(entity) == ignore || !mask.contains(*layer) {
                continue;
            }
            let Some(distance) = collider.ray_distance(position.pos, origin, dir, max_distance)
            else {
                continue;
            };
            if nearest.is_none_or(|hit| distance < hit.distance) {
                nearest = Some(RayHit {
                    entity,
                    distance,
                    point: origin + dir * distance,
                });
            }
        }
        nearest
    }

    /// True if a circle touches any collider on a layer in `mask`.
    pub fn overlap_circle(
        &self,
        center: Vec2,
        radius: f32,
        mask: LayerMask,
        ignore: Option<Entity>,
    ) -> bool {
        self.colliders
            .iter()
            .filter(|(entity, _, _, layer)| Some(*entity) != ignore && mask.contains(**layer))
            .any(|(_, position, collider, _)| {
                collider.overlaps_circle(position.pos, center, radius)
            })
    }
}
