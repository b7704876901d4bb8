//! Audio systems.
//!
//! Gameplay writes [`AudioCmd`] messages; these systems advance the message
//! queue and hand each command to the [`AudioBridge`] sink. Playback itself
//! is the sink's business.
//!
//! See also: [`crate::events::audio`] and [`crate::resources::audio`].

use bevy_ecs::prelude::*;

use crate::events::audio::AudioCmd;
use crate::resources::audio::AudioBridge;

/// Advance the ECS message queue for AudioCmd so same-frame readers can observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Forward every unread AudioCmd to the sink.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        match cmd {
            AudioCmd::PlayFx { id } => bridge.sink.play_fx(id),
        }
    }
}
