//! Entity movement system.
//!
//! This module handles moving entities on the grid and probing whether a move exists.

use log::debug;

use crate::game::state::GameState;
use crate::game::systems::rules::apply_collision_handlers;
use crate::game::types::Direction;
use crate::game::utils::shuffle;

/// Move the entity at `index` one cell towards `direction`.
/// Returns false, without touching the state, when the move is not legal.
pub fn move_entity(game_state: &mut GameState, index: usize, direction: Direction) -> bool {
    let Some(entity) = game_state.entities.get(index) else {
        return false;
    };

    let (dx, dy) = direction.to_vector();
    if !game_state.can_move(entity, dx, dy) {
        return false;
    }

    let mover = entity.id();
    let entity = &mut game_state.entities[index];
    entity.pos = entity.pos.offset(dx, dy);
    let pos = entity.pos;
    debug!("[Movement] {} moved {:?} to ({}, {})", mover, direction, pos.x, pos.y);

    // Handlers observe the committed position.
    apply_collision_handlers(game_state, mover, pos);
    true
}

/// Probe the four directions in random order and return the first legal vector.
/// Nothing moves; `None` means the entity is stuck.
pub fn check_can_move(game_state: &mut GameState, index: usize) -> Option<(i32, i32)> {
    let mut directions = Direction::ALL;
    shuffle(&mut directions, &mut game_state.rng);

    let entity = game_state.entities.get(index)?;
    directions
        .iter()
        .map(|d| d.to_vector())
        .find(|&(dx, dy)| game_state.can_move(entity, dx, dy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::Entity;
    use crate::game::types::{Bounds, EntityKind, Position};
    use crate::game::utils::is_entity_out_of_bounds;

    fn state(width: i32, height: i32) -> GameState {
        GameState::seeded(Bounds::new(width, height).unwrap(), 0, 42)
    }

    #[test]
    fn test_move_updates_position() {
        let mut game = state(10, 10);
        game.add_entity(Entity::new(EntityKind::Player, Position::new(5, 5)));

        assert!(move_entity(&mut game, 0, Direction::Up));
        assert_eq!(game.entities[0].pos, Position::new(5, 4));
        assert!(move_entity(&mut game, 0, Direction::Left));
        assert_eq!(game.entities[0].pos, Position::new(4, 4));
    }

    #[test]
    fn test_blocked_move_leaves_state_untouched() {
        let mut game = state(3, 3);
        game.add_entity(Entity::new(EntityKind::Player, Position::new(0, 0)));
        game.add_entity(Entity::new(EntityKind::CommonEntity, Position::new(1, 0)));

        assert!(!move_entity(&mut game, 0, Direction::Right));
        assert!(!move_entity(&mut game, 0, Direction::Up));
        assert!(!move_entity(&mut game, 0, Direction::Left));
        assert_eq!(game.entities[0].pos, Position::new(0, 0));
        assert!(!move_entity(&mut game, 5, Direction::Down));
    }

    #[test]
    fn test_moves_never_leave_the_grid() {
        let mut game = state(3, 2);
        game.add_entity(Entity::new(EntityKind::Player, Position::new(1, 1)));

        for direction in [Direction::Right, Direction::Right, Direction::Down, Direction::Up, Direction::Up,
            Direction::Left, Direction::Left, Direction::Left]
        {
            move_entity(&mut game, 0, direction);
            assert!(!is_entity_out_of_bounds(&game.entities[0], &game.bounds));
        }
        assert_eq!(game.entities[0].pos, Position::new(0, 0));
    }

    #[test]
    fn test_probe_finds_the_only_exit() {
        let mut game = state(3, 3);
        game.add_entity(Entity::new(EntityKind::Player, Position::new(1, 1)));
        game.add_entity(Entity::new(EntityKind::CommonEntity, Position::new(1, 0)));
        game.add_entity(Entity::new(EntityKind::CommonEntity, Position::new(0, 1)));
        game.add_entity(Entity::new(EntityKind::CommonEntity, Position::new(2, 1)));

        for _ in 0..8 {
            assert_eq!(check_can_move(&mut game, 0), Some((0, 1)));
        }
        assert_eq!(game.entities[0].pos, Position::new(1, 1));
    }

    #[test]
    fn test_probe_reports_stuck_entity() {
        let mut game = state(2, 1);
        game.add_entity(Entity::new(EntityKind::Player, Position::new(0, 0)));
        game.add_entity(Entity::new(EntityKind::CommonEntity, Position::new(1, 0)));

        assert_eq!(check_can_move(&mut game, 0), None);
    }
}
