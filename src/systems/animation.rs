//! Animation selection.
//!
//! [`animation_controller`] picks the active track for every entity with an
//! [`AnimationController`] from the flags in the entity's [`Signals`]. The
//! player publishes `running` / `jumping` there, which maps to the
//! `player_run`, `player_jump` and `player_idle` tracks.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::animation::{Animation, AnimationController};
use crate::components::signals::Signals;

/// Select the active animation track according to controller rules.
///
/// The first matching rule wins, otherwise the fallback key.
pub fn animation_controller(
    mut query: Query<(Entity, &mut AnimationController, &mut Animation, &Signals)>,
) {
    for (entity, mut controller, mut animation, signals) in query.iter_mut() {
        let target_key = controller.select(signals).to_string();

        if animation.switch_to(&target_key) {
            trace!("{:?} animation -> {}", entity, target_key);
            controller.current_key = target_key;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_rules() -> AnimationController {
        AnimationController::new("idle")
            .with_rule("jumping", "jump")
            .with_rule("running", "run")
    }

    #[test]
    fn fallback_without_flags() {
        assert_eq!(player_rules().select(&Signals::default()), "idle");
    }

    #[test]
    fn earlier_rule_wins() {
        let signals = Signals::default().with_flag("running").with_flag("jumping");
        assert_eq!(player_rules().select(&signals), "jump");
        let signals = Signals::default().with_flag("running");
        assert_eq!(player_rules().select(&signals), "run");
    }
}
