//! Collision rules.
//!
//! Fired after a move has been committed, so every effect sees the mover on its new cell.

use log::{debug, info};

use crate::game::entities::{CollisionEffect, EntityId};
use crate::game::state::{CollisionEvent, GameState};
use crate::game::types::Position;

/// Run the enter handlers of every other transparent entity sharing `pos` with `mover`.
///
/// Occupants are visited in insertion order, handlers in registration order.
/// Returns the number of handlers fired.
pub fn apply_collision_handlers(game_state: &mut GameState, mover: EntityId, pos: Position) -> usize {
    let triggered: Vec<(EntityId, CollisionEffect)> = game_state
        .entities_at(pos.x, pos.y)
        .filter(|e| e.id() != mover && e.transparent)
        .flat_map(|e| e.enter_handlers().map(move |h| (e.id(), h.effect.clone())))
        .collect();

    let fired = triggered.len();
    for (target, effect) in triggered {
        apply_effect(game_state, mover, target, &effect);
        game_state.collisions.push(CollisionEvent { mover, target, effect });
    }
    fired
}

fn apply_effect(game_state: &mut GameState, mover: EntityId, target: EntityId, effect: &CollisionEffect) {
    match effect {
        CollisionEffect::SetFlag(flag) => {
            debug!("[Rules] {} entered {}: flag '{}' raised", mover, target, flag);
            game_state.flags.insert(flag.clone());
        }
        CollisionEffect::Consume => {
            if game_state.remove_entity(target).is_some() {
                info!("[Rules] {} consumed by {}", target, mover);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::{CollisionHandler, Entity, GenerationModifier};
    use crate::game::types::{Bounds, EntityKind};

    fn buff(pos: Position, effects: &[CollisionEffect]) -> Entity {
        let mut modifiers = vec![GenerationModifier::MakeTransparent];
        modifiers.extend(
            effects
                .iter()
                .cloned()
                .map(|e| GenerationModifier::AttachHandler(CollisionHandler::on_enter(e))),
        );
        Entity::new(EntityKind::CommonEntity, pos).apply_modifiers(&modifiers)
    }

    #[test]
    fn test_handlers_fire_in_registration_order() {
        let mut game = GameState::seeded(Bounds::new(4, 4).unwrap(), 0, 1);
        let pos = Position::new(1, 1);
        let target = game.add_entity(buff(pos, &[CollisionEffect::SetFlag("first".into()), CollisionEffect::Consume]));
        let mover = game.add_entity(Entity::new(EntityKind::Player, pos));

        assert_eq!(apply_collision_handlers(&mut game, mover, pos), 2);
        assert!(game.flags.contains("first"));
        assert!(game.index_of(target).is_none());
        assert_eq!(game.collisions.len(), 2);
        assert_eq!(game.collisions[0].effect, CollisionEffect::SetFlag("first".into()));
        assert_eq!(game.collisions[1].effect, CollisionEffect::Consume);
    }

    #[test]
    fn test_solid_and_empty_cells_fire_nothing() {
        let mut game = GameState::seeded(Bounds::new(4, 4).unwrap(), 0, 1);
        let pos = Position::new(2, 2);
        let mut solid = buff(pos, &[CollisionEffect::SetFlag("never".into())]);
        solid.transparent = false;
        game.add_entity(solid);
        let mover = game.add_entity(Entity::new(EntityKind::Player, Position::new(0, 0)));

        assert_eq!(apply_collision_handlers(&mut game, mover, pos), 0);
        assert_eq!(apply_collision_handlers(&mut game, mover, Position::new(3, 3)), 0);
        assert!(game.flags.is_empty());
        assert!(game.collisions.is_empty());
    }
}
