//! Disabled agent marker.
//!
//! Inserted on an agent whose required components were missing at
//! initialization. Every agent system filters it out with `Without<Disabled>`,
//! so the entity stays in the world but is never simulated.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
pub struct Disabled {
    pub reason: String,
}

impl Disabled {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
