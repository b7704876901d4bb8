//! Player controller systems.
//!
//! - [`player_init_system`] validates new players
//! - [`player_controller`] applies input to the body once per frame

use bevy_ecs::prelude::*;
use log::error;

use crate::components::disabled::Disabled;
use crate::components::player::{JUMPING_FLAG, Player, RUNNING_FLAG};
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::mapposition::MapPosition;
use crate::components::signals::Signals;
use crate::events::audio::{AudioCmd, JUMP_FX};
use crate::resources::gamestate::GameState;
use crate::resources::input::InputState;
use crate::systems::sensors::Sensors;

/// Disable players that lack a body or a sprite.
pub fn player_init_system(
    mut commands: Commands,
    mut players: Query<(Entity, &mut Player, Has<RigidBody>, Has<Sprite>), Without<Disabled>>,
) {
    for (entity, mut player, has_body, has_sprite) in players.iter_mut() {
        if player.initialized {
            continue;
        }
        player.initialized = true;
        if !has_body || !has_sprite {
            let missing = if has_body { "Sprite" } else { "RigidBody" };
            error!("Player {:?} has no {}; disabling it", entity, missing);
            commands
                .entity(entity)
                .insert(Disabled::new(format!("missing {}", missing)));
        }
    }
}

/// Read input, probe the ground, drive the body and publish animation flags.
///
/// Nothing happens once the playthrough is over.
pub fn player_controller(
    state: Res<GameState>,
    input: Res<InputState>,
    sensors: Sensors,
    mut players: Query<
        (
            Entity,
            &mut Player,
            &MapPosition,
            &mut RigidBody,
            &mut Sprite,
            Option<&mut Signals>,
        ),
        Without<Disabled>,
    >,
    mut audio: MessageWriter<AudioCmd>,
) {
    if state.is_terminal() {
        return;
    }
    let axis = input.horizontal.clamp(-1.0, 1.0);

    for (entity, mut player, position, mut body, mut sprite, signals) in players.iter_mut() {
        if !player.initialized {
            continue;
        }
        player.grounded = sensors.overlap_circle(
            position.pos + player.ground_check,
            player.ground_radius,
            player.ground_mask,
            Some(entity),
        );

        body.set_horizontal(axis * player.move_speed);
        if axis > 0.0 {
            sprite.flip_h = false;
        } else if axis < 0.0 {
            sprite.flip_h = true;
        }

        if input.jump.just_pressed && player.grounded {
            body.set_vertical(player.jump_force);
            audio.write(AudioCmd::fx(JUMP_FX));
        }

        if let Some(mut signals) = signals {
            let (running, jumping) = player.animation_flags(body.velocity.x);
            signals.put_flag(RUNNING_FLAG, running);
            signals.put_flag(JUMPING_FLAG, jumping);
        }
    }
}
