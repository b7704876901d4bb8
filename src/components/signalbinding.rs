//! Text bound to a signal.
//!
//! The HUD score is a [`DynamicText`](super::dynamictext::DynamicText)
//! carrying `SignalBinding::new("score").with_format("Score: {}")`;
//! [`update_world_signals_binding_system`](crate::systems::signalbinding::update_world_signals_binding_system)
//! rewrites the text whenever the value changes.

use bevy_ecs::prelude::{Component, Entity};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignalSource {
    /// [`WorldSignals`](crate::resources::worldsignals::WorldSignals).
    World,
    /// The [`Signals`](super::signals::Signals) of one entity.
    Entity(Entity),
}

#[derive(Component, Clone, Debug)]
pub struct SignalBinding {
    pub signal_key: String,
    pub source: SignalSource,
    /// `{}` is replaced with the value; without a format the bare value is shown.
    pub format: Option<String>,
}

impl SignalBinding {
    pub fn new(signal_key: impl Into<String>) -> Self {
        Self {
            signal_key: signal_key.into(),
            source: SignalSource::World,
            format: None,
        }
    }

    pub fn with_source_entity(mut self, entity: Entity) -> Self {
        self.source = SignalSource::Entity(entity);
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}
