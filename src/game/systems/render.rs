//! Game rendering system (terminal).

use std::collections::HashMap;

use crate::game::entities::Entity;
use crate::game::state::GameState;
use crate::game::types::EntityKind;
use crate::game::utils::{coords_to_index, is_entity_out_of_bounds};

const PLAYER_MARK: char = 'O';
const COMMON_MARK: char = 'X';
const EMPTY_MARK: char = '#';

/// Render the grid row by row, cells separated by a space.
/// When entities share a cell the one inserted last wins.
pub fn render_grid(game_state: &GameState) -> String {
    let width = game_state.bounds.width();
    let height = game_state.bounds.height();

    let mut table: HashMap<usize, &Entity> = HashMap::new();
    for entity in game_state.entities.iter().filter(|e| !is_entity_out_of_bounds(e, &game_state.bounds)) {
        table.insert(coords_to_index(entity.pos.x, entity.pos.y, width), entity);
    }

    let mut out = String::new();
    for y in 0..height {
        let row: Vec<String> = (0..width)
            .map(|x| {
                let mark = match table.get(&coords_to_index(x, y, width)).map(|e| e.kind) {
                    Some(EntityKind::Player) => PLAYER_MARK,
                    Some(EntityKind::CommonEntity) => COMMON_MARK,
                    None => EMPTY_MARK,
                };
                mark.to_string()
            })
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}
