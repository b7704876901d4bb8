use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};
use rustc_hash::FxHashSet;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::tag::Tag;
use crate::events::audio::{AudioCmd, COIN_FX};
use crate::events::collision::CollisionEvent;
use crate::systems::gamestate::GameFlow;

/// Emit a [`CollisionEvent`] for every tagged pair that starts overlapping.
///
/// Pairs that stay in contact are remembered and do not fire again until they
/// separate.
pub fn collision_detector(
    mut commands: Commands,
    query: Query<(Entity, &MapPosition, &BoxCollider), With<Tag>>,
    mut contacts: Local<FxHashSet<(Entity, Entity)>>,
) {
    let mut current: FxHashSet<(Entity, Entity)> = FxHashSet::default();

    for [(entity_a, position_a, collider_a), (entity_b, position_b, collider_b)] in
        query.iter_combinations()
    {
        if !collider_a.overlaps(position_a.pos, collider_b, position_b.pos) {
            continue;
        }
        let pair = if entity_a < entity_b {
            (entity_a, entity_b)
        } else {
            (entity_b, entity_a)
        };
        current.insert(pair);
        if !contacts.contains(&pair) {
            commands.trigger(CollisionEvent {
                a: pair.0,
                b: pair.1,
            });
        }
    }

    *contacts = current;
}

/// Route player contacts by the other entity's tag.
///
/// Coins and keys are consumed on touch. Events that do not involve the
/// player are ignored.
pub fn player_collision_observer(
    trigger: On<CollisionEvent>,
    mut commands: Commands,
    tags: Query<&Tag>,
    mut flow: GameFlow,
    mut audio: MessageWriter<AudioCmd>,
) {
    let event = trigger.event();
    let Some(other) = player_contact(event, &tags) else {
        return;
    };
    let Ok(tag) = tags.get(other) else {
        return;
    };
    debug!("Player touched {} {:?}", tag.name(), other);

    match tag {
        Tag::Coin => {
            commands.entity(other).try_despawn();
            flow.add_score(1);
            audio.write(AudioCmd::fx(COIN_FX));
        }
        Tag::Trap | Tag::Enemy => {
            info!("Player hit a {}", tag.name());
            flow.game_over();
        }
        Tag::Key => {
            commands.entity(other).try_despawn();
            flow.game_win();
        }
        Tag::Player => {}
    }
}

/// The non-player participant of an event involving the player.
fn player_contact(event: &CollisionEvent, tags: &Query<&Tag>) -> Option<Entity> {
    [event.a, event.b]
        .into_iter()
        .find(|e| matches!(tags.get(*e), Ok(Tag::Player)))
        .and_then(|player| event.other(player))
}
