//! Audio sink resource.
//!
//! Gameplay writes [`AudioCmd`](crate::events::audio::AudioCmd) messages; the
//! [`forward_audio_cmds`](crate::systems::audio::forward_audio_cmds) system
//! hands each one to the [`AudioSink`] held by [`AudioBridge`]. The sink is
//! chosen by whoever builds the world, so tests and frontends inject their
//! own.

use bevy_ecs::prelude::*;
use log::debug;

use crate::events::audio::AudioCmd;

/// Fire-and-forget playback backend.
pub trait AudioSink: Send + Sync {
    fn play_fx(&self, id: &str);
}

/// Default sink: logs the effect name.
#[derive(Debug, Default)]
pub struct LogAudioSink;

impl AudioSink for LogAudioSink {
    fn play_fx(&self, id: &str) {
        debug!("[audio] play fx '{}'", id);
    }
}

/// Bridge between the ECS message queue and the playback backend.
#[derive(Resource)]
pub struct AudioBridge {
    pub sink: Box<dyn AudioSink>,
}

impl AudioBridge {
    pub fn new(sink: impl AudioSink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }
}

/// Register the bridge and the `Messages<AudioCmd>` queue.
pub fn setup_audio(world: &mut World, sink: impl AudioSink + 'static) {
    world.insert_resource(AudioBridge::new(sink));
    world.insert_resource(Messages::<AudioCmd>::default());
}
