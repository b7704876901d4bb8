//! Level spawning.
//!
//! [`spawn_level`] turns a [`LevelLayout`] grid into entities, one per
//! defined cell. Sizes are expressed in cells so a level authored with a
//! larger `cell_size` scales uniformly.
//!
//! | Cell | Components |
//! |---|---|
//! | ground / wall | `MapPosition`, `BoxCollider`, `Layer`, `Sprite` |
//! | coin / key / trap | `MapPosition`, `BoxCollider`, `Tag`, `Sprite` |
//! | goblin | the above plus `RigidBody`, `Goblin` |
//! | player | the above plus `Layer::Player`, `Player`, `Signals`, animation |

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, warn};

use crate::components::animation::{Animation, AnimationController};
use crate::components::boxcollider::BoxCollider;
use crate::components::goblin::Goblin;
use crate::components::mapposition::MapPosition;
use crate::components::player::{JUMPING_FLAG, Player, RUNNING_FLAG};
use crate::components::rigidbody::RigidBody;
use crate::components::signals::Signals;
use crate::components::sprite::Sprite;
use crate::components::tag::{Layer, Tag};
use crate::resources::gameconfig::GameConfig;
use crate::resources::level::{CellKind, LevelLayout};

/// Spawn every cell of `level`. Returns the number of entities spawned.
pub fn spawn_level(commands: &mut Commands, level: &LevelLayout, config: &GameConfig) -> usize {
    let cell = level.cell_size;
    let mut spawned = 0;
    let mut players = 0;

    for (x, y, kind) in level.iter_cells() {
        let position = MapPosition::new(x, y);
        match kind {
            CellKind::Ground => {
                commands.spawn((
                    position,
                    BoxCollider::centered(cell, cell),
                    Layer::Ground,
                    Sprite::new("ground", cell, cell),
                ));
            }
            CellKind::Wall => {
                commands.spawn((
                    position,
                    BoxCollider::centered(cell, cell),
                    Layer::Wall,
                    Sprite::new("wall", cell, cell),
                ));
            }
            CellKind::Coin => {
                commands.spawn((
                    position,
                    BoxCollider::centered(cell * 0.5, cell * 0.5),
                    Tag::Coin,
                    Sprite::new("coin", cell * 0.5, cell * 0.5),
                ));
            }
            CellKind::Key => {
                commands.spawn((
                    position,
                    BoxCollider::centered(cell * 0.5, cell * 0.5),
                    Tag::Key,
                    Sprite::new("key", cell * 0.5, cell * 0.5),
                ));
            }
            CellKind::Trap => {
                // spikes sit on the floor of their cell
                commands.spawn((
                    position,
                    BoxCollider::new(cell * 0.8, cell * 0.4)
                        .with_offset(Vec2::new(-cell * 0.4, -cell * 0.5)),
                    Tag::Trap,
                    Sprite::new("trap", cell * 0.8, cell * 0.4),
                ));
            }
            CellKind::Goblin => {
                commands.spawn(goblin_bundle(position, cell, config));
            }
            CellKind::Player => {
                players += 1;
                commands.spawn(player_bundle(position, cell, config));
            }
        }
        spawned += 1;
    }

    if players == 0 {
        warn!("Level has no player cell");
    } else if players > 1 {
        warn!("Level has {} player cells", players);
    }
    debug!("Spawned {} level entities", spawned);
    spawned
}

pub fn goblin_bundle(
    position: MapPosition,
    cell: f32,
    config: &GameConfig,
) -> impl Bundle {
    (
        position,
        BoxCollider::centered(cell * 0.8, cell),
        Tag::Enemy,
        RigidBody::with_gravity(config.gravity),
        Sprite::new("goblin", cell * 0.8, cell),
        Goblin::new(
            config.goblin_move_speed,
            config.goblin_patrol_distance,
            config.goblin_detection_range,
        ),
    )
}

pub fn player_bundle(
    position: MapPosition,
    cell: f32,
    config: &GameConfig,
) -> impl Bundle {
    (
        position,
        BoxCollider::centered(cell * 0.8, cell),
        Tag::Player,
        Layer::Player,
        RigidBody::with_gravity(config.gravity),
        Sprite::new("player", cell * 0.8, cell),
        Player::new(config.player_move_speed, config.player_jump_force)
            .with_ground_check(Vec2::new(0.0, -cell * 0.5), cell * 0.2),
        Signals::default(),
        Animation::new("player_idle"),
        player_animation_controller(),
    )
}

/// `player_jump` while airborne, `player_run` while moving, else `player_idle`.
pub fn player_animation_controller() -> AnimationController {
    AnimationController::new("player_idle")
        .with_rule(JUMPING_FLAG, "player_jump")
        .with_rule(RUNNING_FLAG, "player_run")
}
