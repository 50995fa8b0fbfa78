//! Autonomous stepping for common entities.
//!
//! An AI entity tries all four directions in random order and takes every one whose
//! target cell is empty, so it can travel several cells in a single step. Emptiness is
//! checked against any entity, transparent or not: AI entities never walk onto buffs.

use log::debug;

use crate::game::state::GameState;
use crate::game::systems::movement::move_entity;
use crate::game::types::Direction;
use crate::game::utils::shuffle;

/// Step the non-player entity at `index`. Returns how many cells it moved.
pub fn step_ai(game_state: &mut GameState, index: usize) -> usize {
    let Some(entity) = game_state.entities.get(index) else {
        return 0;
    };
    if entity.is_player() {
        return 0;
    }
    let id = entity.id();

    let mut directions = Direction::ALL;
    shuffle(&mut directions, &mut game_state.rng);

    let mut steps = 0;
    for direction in directions {
        let Some(index) = game_state.index_of(id) else {
            break;
        };
        let (dx, dy) = direction.to_vector();
        let target = game_state.entities[index].pos.offset(dx, dy);
        if game_state.entity_at(target.x, target.y).is_none() && move_entity(game_state, index, direction) {
            steps += 1;
        }
    }

    if steps > 0 {
        debug!("[AI] {} moved {} cell(s)", id, steps);
    }
    steps
}
