//! Goblin enemy systems.
//!
//! Frame schedule:
//! - [`goblin_init_system`] validates new agents and captures their patrol anchor
//! - [`goblin_detection_system`] re-evaluates player detection every frame
//!
//! Physics schedule, in this order:
//! - [`goblin_motion_system`] patrols or chases by writing horizontal velocity
//! - (movement integration)
//! - [`goblin_patrol_clamp_system`] keeps a patrolling goblin inside its band
//! - [`goblin_facing_sync_system`] mirrors the sprite to the facing
//!
//! Detection reads the facing from the sprite flip, so it sees what the
//! previous physics tick decided.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, error, warn};

use crate::components::disabled::Disabled;
use crate::components::goblin::{
    GROUND_PROBE_LENGTH, Goblin, GoblinState, WALL_PROBE_LENGTH,
};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::tag::{LayerMask, Tag};
use crate::systems::sensors::Sensors;

/// Validate newly spawned goblins.
///
/// A goblin without a [`RigidBody`] or a [`Sprite`] cannot act: it gets an
/// error log and a [`Disabled`] marker. Valid goblins remember their spawn
/// position as `start_point`. A missing player is only worth a warning; the
/// goblin keeps patrolling until one shows up.
pub fn goblin_init_system(
    mut commands: Commands,
    mut goblins: Query<
        (
            Entity,
            &mut Goblin,
            &MapPosition,
            Has<RigidBody>,
            Option<&mut Sprite>,
        ),
        Without<Disabled>,
    >,
    tags: Query<&Tag>,
) {
    for (entity, mut goblin, position, has_body, sprite) in goblins.iter_mut() {
        if goblin.initialized {
            continue;
        }
        goblin.initialized = true;

        let Some(mut sprite) = sprite else {
            error!("Goblin {:?} has no Sprite; disabling it", entity);
            commands
                .entity(entity)
                .insert(Disabled::new("missing Sprite"));
            continue;
        };
        if !has_body {
            error!("Goblin {:?} has no RigidBody; disabling it", entity);
            commands
                .entity(entity)
                .insert(Disabled::new("missing RigidBody"));
            continue;
        }

        goblin.start_point = position.pos;
        sprite.flip_h = !goblin.facing_right;

        if !tags.iter().any(|tag| *tag == Tag::Player) {
            warn!(
                "Goblin {:?}: no entity tagged Player, patrolling only",
                entity
            );
        }
        debug!(
            "Goblin {:?} patrols around x={} (+/-{})",
            entity, goblin.start_point.x, goblin.patrol_distance
        );
    }
}

/// Forward detection ray against the player layer, rejected when a wall lies
/// between the goblin and the hit.
///
/// Returns the player entity seen, if any.
pub fn detect_player(
    sensors: &Sensors,
    origin: Vec2,
    dir: Vec2,
    range: f32,
    player_mask: LayerMask,
    wall_mask: LayerMask,
    ignore: Option<Entity>,
) -> Option<Entity> {
    let hit = sensors.raycast(origin, dir, range, player_mask, ignore)?;
    if sensors
        .raycast(origin, dir, hit.distance, wall_mask, ignore)
        .is_some()
    {
        return None;
    }
    Some(hit.entity)
}

/// Re-evaluate detection for every active goblin.
///
/// The ray follows the sprite's facing: mirrored means left.
pub fn goblin_detection_system(
    mut goblins: Query<(Entity, &mut Goblin, &MapPosition, &Sprite), Without<Disabled>>,
    sensors: Sensors,
) {
    for (entity, mut goblin, position, sprite) in goblins.iter_mut() {
        if !goblin.initialized {
            continue;
        }
        let dir = if sprite.faces_left() {
            Vec2::NEG_X
        } else {
            Vec2::X
        };
        let seen = detect_player(
            &sensors,
            position.pos,
            dir,
            goblin.detection_range,
            goblin.player_mask,
            goblin.wall_mask,
            Some(entity),
        );
        let was = goblin.state;
        goblin.apply_detection(seen);
        if was != goblin.state {
            debug!("Goblin {:?}: {:?} -> {:?}", entity, was, goblin.state);
        }
    }
}

/// Patrol or chase, one physics tick.
///
/// Chasing needs both a detection and a live target; a despawned target drops
/// the goblin back to patrol.
pub fn goblin_motion_system(
    mut goblins: Query<(Entity, &mut Goblin, &MapPosition, &mut RigidBody), Without<Disabled>>,
    positions: Query<&MapPosition>,
    sensors: Sensors,
) {
    for (entity, mut goblin, position, mut body) in goblins.iter_mut() {
        if !goblin.initialized {
            continue;
        }
        goblin.patrol_clamp = None;

        let target_x = goblin
            .target
            .filter(|_| goblin.player_detected)
            .and_then(|target| positions.get(target).ok())
            .map(|target| target.pos.x);

        match target_x {
            Some(target_x) => {
                let sign = Goblin::chase_sign(position.pos.x, target_x);
                body.set_horizontal(sign * goblin.move_speed);
                goblin.facing_right = sign > 0.0;
            }
            None => {
                if goblin.state == GoblinState::Chase {
                    goblin.lose_target();
                }
                patrol(entity, &mut goblin, position.pos, &mut body, &sensors);
            }
        }
    }
}

fn patrol(
    entity: Entity,
    goblin: &mut Goblin,
    position: Vec2,
    body: &mut RigidBody,
    sensors: &Sensors,
) {
    let ground_ahead = sensors
        .raycast(
            goblin.ground_probe_origin(position),
            Vec2::NEG_Y,
            GROUND_PROBE_LENGTH,
            goblin.ground_mask,
            Some(entity),
        )
        .is_some();
    let wall_ahead = sensors
        .raycast(
            position,
            goblin.facing_dir(),
            WALL_PROBE_LENGTH,
            goblin.wall_mask,
            Some(entity),
        )
        .is_some();

    if goblin.should_turn(position.x, ground_ahead, wall_ahead) {
        goblin.turn_around();
    }
    body.set_horizontal(goblin.facing_sign() * goblin.move_speed);

    if goblin.within_patrol_band(position.x) {
        goblin.patrol_clamp = Some(goblin.patrol_bounds());
    }
}

/// Pull a patrolling goblin back onto the band edge it just stepped over.
///
/// The next motion tick sees `x` on the edge and turns around.
pub fn goblin_patrol_clamp_system(mut goblins: Query<(&mut Goblin, &mut MapPosition)>) {
    for (mut goblin, mut position) in goblins.iter_mut() {
        let Some((left, right)) = goblin.patrol_clamp.take() else {
            continue;
        };
        let clamped = position.pos.x.clamp(left, right);
        if clamped != position.pos.x {
            position.pos.x = clamped;
        }
    }
}

pub fn goblin_facing_sync_system(
    mut goblins: Query<(&Goblin, &mut Sprite), Without<Disabled>>,
) {
    for (goblin, mut sprite) in goblins.iter_mut() {
        if !goblin.initialized {
            continue;
        }
        let flip = !goblin.facing_right;
        if sprite.flip_h != flip {
            sprite.flip_h = flip;
        }
    }
}
