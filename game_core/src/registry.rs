//! Ordered owner of every [`Rect`] in the simulation.
//!
//! Components live in a `hecs::World`; the spawn order is tracked separately
//! because collision outcomes depend on it and hecs does not promise any
//! particular iteration order.

use hecs::{DynamicBundle, Entity, EntityBuilder, World};

use crate::components::{Ball, Controller, Rect};

#[derive(Default)]
pub struct Registry {
    world: World,
    order: Vec<Entity>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a rect together with its tag components
    pub fn spawn(&mut self, rect: Rect, tags: impl DynamicBundle) -> Entity {
        let mut builder = EntityBuilder::new();
        builder.add_bundle(tags).add(rect);
        let entity = self.world.spawn(builder.build());
        self.order.push(entity);
        entity
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Handle of the rect spawned `index`-th
    pub fn entity_at(&self, index: usize) -> Option<Entity> {
        self.order.get(index).copied()
    }

    /// Handles in spawn order
    pub fn entities(&self) -> &[Entity] {
        &self.order
    }

    pub fn rect(&self, entity: Entity) -> Option<Rect> {
        self.world.get::<&Rect>(entity).ok().map(|rect| *rect)
    }

    pub fn rect_mut(&mut self, entity: Entity) -> Option<&mut Rect> {
        self.world.query_one_mut::<&mut Rect>(entity).ok()
    }

    /// Rects in spawn order, paired with their handles
    pub fn rects(&self) -> impl Iterator<Item = (Entity, Rect)> + '_ {
        self.order
            .iter()
            .filter_map(move |&entity| self.rect(entity).map(|rect| (entity, rect)))
    }

    pub fn controller(&self, entity: Entity) -> Option<Controller> {
        self.world.get::<&Controller>(entity).ok().map(|c| *c)
    }

    /// Paddles driven by the given controller, in spawn order
    pub fn controlled_by(&self, controller: Controller) -> Vec<Entity> {
        self.order
            .iter()
            .copied()
            .filter(|&entity| self.controller(entity) == Some(controller))
            .collect()
    }

    /// First ball in spawn order
    pub fn ball(&self) -> Option<Entity> {
        self.order
            .iter()
            .copied()
            .find(|&entity| self.world.get::<&Ball>(entity).is_ok())
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}
