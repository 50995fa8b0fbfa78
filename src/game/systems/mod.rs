pub mod ai;
pub mod movement;
pub mod rules;
pub mod render;

pub use ai::*;
pub use movement::*;
pub use rules::*;
pub use render::*;
