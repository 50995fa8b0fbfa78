//! Error types for the game engine.
//!
//! Malformed input and blocked moves are ordinary turn outcomes and never show up here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Grid sizes must be strictly positive.
    #[error("Invalid grid size {width}x{height}")]
    InvalidBounds { width: i32, height: i32 },

    /// No free cell is left to place a new entity.
    #[error("No free cell left on the {width}x{height} grid")]
    GridFull { width: i32, height: i32 },

    /// The game state lost its player entity.
    #[error("No player entity on the grid")]
    PlayerMissing,

    /// Input was submitted after the terminal condition was reached.
    #[error("The game is already over")]
    SessionOver,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
