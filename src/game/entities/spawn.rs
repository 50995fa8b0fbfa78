//! Entity generation.
//!
//! New entities land on a uniformly random cell that holds no entity at all,
//! transparent or not.

use log::{debug, warn};
use rand::Rng;
use rand::seq::IteratorRandom;

use crate::config::game::MAX_PLACEMENT_ATTEMPTS;
use crate::game::entities::{CollisionEffect, CollisionHandler, Entity, EntityId, GenerationModifier};
use crate::game::error::GameError;
use crate::game::state::GameState;
use crate::game::types::{EntityKind, Position};

/// Pick a free cell: a few random probes first, then a uniform choice among all free cells.
fn find_free_cell(game_state: &mut GameState) -> Option<Position> {
    let (width, height) = (game_state.bounds.width(), game_state.bounds.height());

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let x = game_state.rng.random_range(0..width);
        let y = game_state.rng.random_range(0..height);
        if game_state.entity_at(x, y).is_none() {
            return Some(Position::new(x, y));
        }
    }

    let free_positions: Vec<Position> = (0..height)
        .flat_map(|y| (0..width).map(move |x| Position::new(x, y)))
        .filter(|pos| game_state.entity_at(pos.x, pos.y).is_none())
        .collect();

    free_positions.into_iter().choose(&mut game_state.rng)
}

/// Generate a new entity of `kind` on a free cell and apply `modifiers` in order.
pub fn generate_entity(
    game_state: &mut GameState,
    kind: EntityKind,
    modifiers: &[GenerationModifier],
) -> Result<EntityId, GameError> {
    let Some(pos) = find_free_cell(game_state) else {
        warn!("[Spawn] No free cell to place a {:?}", kind);
        return Err(GameError::GridFull {
            width: game_state.bounds.width(),
            height: game_state.bounds.height(),
        });
    };

    let entity = Entity::new(kind, pos).apply_modifiers(modifiers);
    debug!("[Spawn] {:?} {} at ({}, {})", kind, entity.id(), pos.x, pos.y);
    Ok(game_state.add_entity(entity))
}

/// Generate a transparent entity that reacts when something moves onto it.
pub fn generate_buff(
    game_state: &mut GameState,
    kind: EntityKind,
    effects: Vec<CollisionEffect>,
) -> Result<EntityId, GameError> {
    let mut modifiers = vec![GenerationModifier::MakeTransparent];
    modifiers.extend(
        effects
            .into_iter()
            .map(|effect| GenerationModifier::AttachHandler(CollisionHandler::on_enter(effect))),
    );
    generate_entity(game_state, kind, &modifiers)
}
