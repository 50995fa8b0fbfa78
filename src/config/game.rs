//! Game configuration constants.
//!
//! This module defines the main gameplay parameters such as grid dimensions,
//! spawning pace and placement limits.

/// Number of columns in the game grid.
pub const GRID_WIDTH: i32 = 10;

/// Number of rows in the game grid.
pub const GRID_HEIGHT: i32 = 10;

/// Common entities spawned after every completed turn.
pub const ENTITY_GEN_PER_TURN: usize = 2;

/// Random probes for a free cell before falling back to scanning the whole grid.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 64;

/// Buffs placed on the grid when the game starts.
pub const START_BUFFS: usize = 0;

/// Runtime game parameters, defaulting to the constants above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub entity_gen_per_turn: usize,
    pub buffs: usize,
    /// Fixed RNG seed for a reproducible game.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            entity_gen_per_turn: ENTITY_GEN_PER_TURN,
            buffs: START_BUFFS,
            seed: None,
        }
    }
}
