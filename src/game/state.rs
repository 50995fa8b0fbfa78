use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::game::entities::{CollisionEffect, Entity, EntityId};
use crate::game::types::Bounds;
use crate::game::utils::is_out_of_bounds;

/// One collision handler firing, recorded in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionEvent {
    pub mover: EntityId,
    pub target: EntityId,
    pub effect: CollisionEffect,
}

/// Owns every entity on the grid.
///
/// Insertion order of `entities` is the order in which AI entities are stepped.
#[derive(Debug)]
pub struct GameState {
    pub entities: Vec<Entity>,
    pub bounds: Bounds,
    pub entity_gen_per_turn: usize,
    pub flags: BTreeSet<String>,
    pub collisions: Vec<CollisionEvent>,
    pub rng: StdRng,
}

impl GameState {
    // Crée un état vide avec un générateur aléatoire non déterministe
    pub fn new(bounds: Bounds, entity_gen_per_turn: usize) -> Self {
        Self::with_rng(bounds, entity_gen_per_turn, StdRng::from_rng(&mut rand::rng()))
    }

    pub fn seeded(bounds: Bounds, entity_gen_per_turn: usize, seed: u64) -> Self {
        Self::with_rng(bounds, entity_gen_per_turn, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: Bounds, entity_gen_per_turn: usize, rng: StdRng) -> Self {
        GameState {
            entities: Vec::new(),
            bounds,
            entity_gen_per_turn,
            flags: BTreeSet::new(),
            collisions: Vec::new(),
            rng,
        }
    }

    /// Every entity at `(x, y)`, in insertion order.
    pub fn entities_at(&self, x: i32, y: i32) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.pos.x == x && e.pos.y == y)
    }

    /// First entity at `(x, y)` in insertion order.
    pub fn entity_at(&self, x: i32, y: i32) -> Option<&Entity> {
        self.entity_index_at(x, y).map(|index| &self.entities[index])
    }

    pub fn entity_index_at(&self, x: i32, y: i32) -> Option<usize> {
        self.entities.iter().position(|e| e.pos.x == x && e.pos.y == y)
    }

    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        let id = entity.id();
        self.entities.push(entity);
        id
    }

    pub fn remove_entity(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.index_of(id)?;
        Some(self.entities.remove(index))
    }

    pub fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id() == id)
    }

    pub fn get_player(&self) -> Option<(usize, &Entity)> {
        self.entities.iter().enumerate().find(|(_, e)| e.is_player())
    }

    /// True iff `entity + (dx, dy)` is on the grid and free of blocking entities.
    pub fn can_move(&self, entity: &Entity, dx: i32, dy: i32) -> bool {
        let (x, y) = (entity.pos.x + dx, entity.pos.y + dy);
        if is_out_of_bounds(x, y, &self.bounds) {
            return false;
        }
        self.entities_at(x, y).all(|e| e.transparent)
    }
}
