use bevy_ecs::message::Message;

/// Effect played when a coin is collected.
pub const COIN_FX: &str = "coin";
/// Effect played when the player jumps.
pub const JUMP_FX: &str = "jump";

/// Commands sent *to* the audio sink.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum AudioCmd {
    PlayFx { id: String },
}

impl AudioCmd {
    pub fn fx(id: impl Into<String>) -> Self {
        AudioCmd::PlayFx { id: id.into() }
    }
}
