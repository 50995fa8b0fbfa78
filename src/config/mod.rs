/// Main configuration module.
///
/// Re-exports the game configuration.
pub mod game;
