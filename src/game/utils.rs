//! Grid geometry helpers shared by the movement, spawning and render systems.

use rand::Rng;
use rand::seq::SliceRandom;

use super::entities::Entity;
use super::types::Bounds;

pub fn is_out_of_bounds(x: i32, y: i32, bounds: &Bounds) -> bool {
    x < 0 || x >= bounds.width() || y < 0 || y >= bounds.height()
}

pub fn is_entity_out_of_bounds(entity: &Entity, bounds: &Bounds) -> bool {
    is_out_of_bounds(entity.pos.x, entity.pos.y, bounds)
}

/// Row-major cell index. Only meaningful for in-bounds coordinates.
pub fn coords_to_index(x: i32, y: i32, width: i32) -> usize {
    x as usize + y as usize * width as usize
}

/// Uniform in-place permutation (Fisher-Yates).
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
