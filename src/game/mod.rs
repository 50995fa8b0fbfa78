pub mod types;
pub mod utils;
pub mod error;
pub mod state;
pub mod game_loop;

pub mod entities;
pub mod systems;
