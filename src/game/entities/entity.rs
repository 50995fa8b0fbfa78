//! Entity model.
//!
//! Entities are plain data: generation modifiers and collision handlers are tagged
//! values, so a freshly generated entity can be inspected and serialized as-is.

use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::game::types::{EntityKind, Position};

pub type EntityId = Uuid;

/// When a collision handler fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionTrigger {
    /// Another entity moved onto the owner's cell.
    OnEnter,
}

/// What a collision handler does once triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionEffect {
    /// Raise a named flag on the game state.
    SetFlag(String),
    /// Remove the owner of the handler from the grid.
    Consume,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionHandler {
    pub trigger: CollisionTrigger,
    pub effect: CollisionEffect,
}

impl CollisionHandler {
    pub fn on_enter(effect: CollisionEffect) -> Self {
        Self { trigger: CollisionTrigger::OnEnter, effect }
    }
}

/// Configuration applied to an entity right after construction, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationModifier {
    MakeTransparent,
    AttachHandler(CollisionHandler),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    id: EntityId,
    pub kind: EntityKind,
    pub pos: Position,
    pub transparent: bool,
    // Only consulted while `transparent` is set.
    pub handlers: Vec<CollisionHandler>,
}

impl Entity {
    pub fn new(kind: EntityKind, pos: Position) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            pos,
            transparent: false,
            handlers: Vec::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn is_player(&self) -> bool {
        self.kind == EntityKind::Player
    }

    fn apply_modifier(&mut self, modifier: &GenerationModifier) {
        match modifier {
            GenerationModifier::MakeTransparent => self.transparent = true,
            GenerationModifier::AttachHandler(handler) => self.handlers.push(handler.clone()),
        }
    }

    pub fn apply_modifiers(mut self, modifiers: &[GenerationModifier]) -> Self {
        for modifier in modifiers {
            self.apply_modifier(modifier);
        }
        self
    }

    /// Handlers reacting to another entity entering this cell, in registration order.
    pub fn enter_handlers(&self) -> impl Iterator<Item = &CollisionHandler> {
        self.handlers
            .iter()
            .filter(|h| h.trigger == CollisionTrigger::OnEnter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entities_get_distinct_ids() {
        let a = Entity::new(EntityKind::CommonEntity, Position::new(0, 0));
        let b = Entity::new(EntityKind::CommonEntity, Position::new(0, 0));
        assert_ne!(a.id(), b.id());
        assert!(!a.transparent);
        assert!(a.handlers.is_empty());
    }

    #[test]
    fn test_modifiers_apply_in_order() {
        let entity = Entity::new(EntityKind::CommonEntity, Position::new(1, 2)).apply_modifiers(&[
            GenerationModifier::MakeTransparent,
            GenerationModifier::AttachHandler(CollisionHandler::on_enter(CollisionEffect::SetFlag("a".into()))),
            GenerationModifier::AttachHandler(CollisionHandler::on_enter(CollisionEffect::Consume)),
        ]);

        assert!(entity.transparent);
        let effects: Vec<_> = entity.enter_handlers().map(|h| h.effect.clone()).collect();
        assert_eq!(effects, vec![CollisionEffect::SetFlag("a".into()), CollisionEffect::Consume]);
    }

    #[test]
    fn test_handlers_serialize_as_plain_data() {
        let entity = Entity::new(EntityKind::CommonEntity, Position::new(3, 3)).apply_modifiers(&[
            GenerationModifier::MakeTransparent,
            GenerationModifier::AttachHandler(CollisionHandler::on_enter(CollisionEffect::SetFlag("buff".into()))),
        ]);

        let json = serde_json::to_string(&entity).unwrap();
        assert!(json.contains("OnEnter"));
        assert!(json.contains("buff"));

        let back: Entity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entity);
    }
}
