//! Kinematic movement for rigid bodies.
//!
//! Each physics tick [`movement`] accelerates every body by its enabled forces,
//! then moves it one axis at a time. After each axis the body is pushed back
//! out of any static solid it entered (see [`resolve_solids`]), so a body
//! sliding along the floor never snags on the seams between ground tiles.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::tag::Layer;
use crate::resources::worldtime::WorldTime;

/// Overlaps thinner than this are treated as resting contact.
const CONTACT_SKIN: f32 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

pub fn movement(
    mut bodies: Query<(&mut MapPosition, &mut RigidBody, Option<&BoxCollider>)>,
    solids: Query<(&MapPosition, &BoxCollider, &Layer), Without<RigidBody>>,
    time: Res<WorldTime>,
) {
    let dt = time.delta;
    let statics: Vec<(Vec2, BoxCollider)> = solids
        .iter()
        .filter(|(_, _, layer)| layer.is_solid())
        .map(|(position, collider, _)| (position.pos, *collider))
        .collect();

    for (mut position, mut body, collider) in bodies.iter_mut() {
        let acceleration = body.total_acceleration();
        body.velocity += acceleration * dt;

        for axis in [Axis::X, Axis::Y] {
            let i = axis.index();
            position.pos[i] += body.velocity[i] * dt;
            if let Some(collider) = collider {
                resolve_solids(axis, &mut position.pos, &mut body.velocity, collider, &statics);
            }
        }
    }
}

/// Push a body out of the static colliders it overlaps along `axis`.
///
/// The push direction opposes the body's velocity on that axis, or points
/// away from the solid's center when the body is not moving along it. The
/// velocity component into the solid is zeroed.
pub fn resolve_solids(
    axis: Axis,
    position: &mut Vec2,
    velocity: &mut Vec2,
    collider: &BoxCollider,
    statics: &[(Vec2, BoxCollider)],
) {
    let i = axis.index();
    for (solid_position, solid) in statics {
        let Some(depth) = collider.penetration(*position, solid, *solid_position) else {
            continue;
        };
        if depth.x <= CONTACT_SKIN || depth.y <= CONTACT_SKIN {
            continue;
        }
        let dir = if velocity[i] > 0.0 {
            -1.0
        } else if velocity[i] < 0.0 {
            1.0
        } else if collider.center(*position)[i] < solid.center(*solid_position)[i] {
            -1.0
        } else {
            1.0
        };
        position[i] += dir * depth[i];
        if velocity[i] * dir < 0.0 {
            velocity[i] = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Vec<(Vec2, BoxCollider)> {
        (0..4)
            .map(|i| (Vec2::new(i as f32 + 0.5, 0.5), BoxCollider::centered(1.0, 1.0)))
            .collect()
    }

    #[test]
    fn falling_body_lands_on_top_of_floor() {
        let collider = BoxCollider::centered(0.8, 1.0);
        let mut position = Vec2::new(1.5, 1.45);
        let mut velocity = Vec2::new(0.0, -3.0);
        resolve_solids(Axis::Y, &mut position, &mut velocity, &collider, &floor());
        assert!((position.y - 1.5).abs() < 1e-5);
        assert_eq!(velocity.y, 0.0);
    }

    #[test]
    fn resting_body_slides_across_tile_seams() {
        let collider = BoxCollider::centered(0.8, 1.0);
        let mut position = Vec2::new(1.55, 1.5);
        let mut velocity = Vec2::new(5.0, 0.0);
        resolve_solids(Axis::X, &mut position, &mut velocity, &collider, &floor());
        assert_eq!(position.x, 1.55);
        assert_eq!(velocity.x, 5.0);
    }

    #[test]
    fn wall_stops_horizontal_motion() {
        let collider = BoxCollider::centered(0.8, 1.0);
        let wall = vec![(Vec2::new(3.5, 1.5), BoxCollider::centered(1.0, 1.0))];
        let mut position = Vec2::new(2.7, 1.5);
        let mut velocity = Vec2::new(5.0, 0.0);
        resolve_solids(Axis::X, &mut position, &mut velocity, &collider, &wall);
        assert!((position.x - 2.6).abs() < 1e-5);
        assert_eq!(velocity.x, 0.0);
    }
}
