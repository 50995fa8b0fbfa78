//! Game entities module.
//!
//! This module organizes the entity model and entity generation.

pub mod entity;
pub mod spawn;

pub use entity::*;
pub use spawn::*;
