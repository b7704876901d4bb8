//! Signal binding systems for reactive UI updates.
//!
//! - [`update_world_signals_binding_system`] refreshes [`DynamicText`] content
//!   from the signal named by its [`SignalBinding`]
//! - [`update_panel_visibility_system`] shows a [`Panel`] while its world flag
//!   is set

use bevy_ecs::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::panel::Panel;
use crate::components::signalbinding::{SignalBinding, SignalSource};
use crate::components::signals::Signals;
use crate::resources::worldsignals::WorldSignals;

/// Updates [`DynamicText`] content based on signal bindings.
///
/// Reads the bound value from either `WorldSignals` or an entity's `Signals`.
/// Integers and scalars are printed as numbers, strings as-is and flags as
/// `"true"`. If the binding has a format string, the value replaces `{}`.
/// A missing signal leaves the text untouched.
pub fn update_world_signals_binding_system(
    mut query: Query<(&mut DynamicText, &SignalBinding)>,
    world_signals: Res<WorldSignals>,
    signals_query: Query<&Signals>,
) {
    for (mut dynamic_text, binding) in query.iter_mut() {
        let value = match &binding.source {
            SignalSource::World => world_signal_as_string(&world_signals, &binding.signal_key),
            SignalSource::Entity(entity) => signals_query
                .get(*entity)
                .ok()
                .and_then(|signals| entity_signal_as_string(signals, &binding.signal_key)),
        };
        let Some(value) = value else {
            continue;
        };

        let new_content = match &binding.format {
            Some(format_str) => format_str.replace("{}", &value),
            None => value,
        };
        if dynamic_text.content != new_content {
            dynamic_text.set_content(new_content);
        }
    }
}

/// Show each panel exactly while its flag is set in [`WorldSignals`].
pub fn update_panel_visibility_system(
    mut panels: Query<&mut Panel>,
    world_signals: Res<WorldSignals>,
) {
    for mut panel in panels.iter_mut() {
        let visible = world_signals.has_flag(panel.kind.flag());
        if panel.visible != visible {
            panel.visible = visible;
        }
    }
}

fn world_signal_as_string(world_signals: &WorldSignals, key: &str) -> Option<String> {
    if let Some(value) = world_signals.get_integer(key) {
        return Some(value.to_string());
    }
    if let Some(value) = world_signals.get_scalar(key) {
        return Some(value.to_string());
    }
    if let Some(value) = world_signals.get_string(key) {
        return Some(value.to_string());
    }
    world_signals.has_flag(key).then(|| "true".to_string())
}

fn entity_signal_as_string(signals: &Signals, key: &str) -> Option<String> {
    if let Some(value) = signals.get_integer(key) {
        return Some(value.to_string());
    }
    if let Some(value) = signals.get_scalar(key) {
        return Some(value.to_string());
    }
    signals.has_flag(key).then(|| "true".to_string())
}
