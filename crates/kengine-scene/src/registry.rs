// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::collections::BTreeMap;

use kengine_core::math::Vec2;
use tracing::debug;

use crate::entity::{Entity, EntityId};
use crate::error::SceneError;

/// Builds a fresh entity of one registered type at a position.
pub type EntityFactory = fn(EntityId, Vec2) -> Entity;

/// Name → factory table for spawnable entity types.
///
/// Types are registered explicitly at startup. Lookup order is
/// alphabetical, which keeps [`EntityRegistry::names`] stable across runs.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    factories: BTreeMap<String, EntityFactory>,
}

impl EntityRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `factory` under `name`.
    ///
    /// Fails if the name is taken; the existing factory is kept.
    pub fn register(&mut self, name: impl Into<String>, factory: EntityFactory) -> Result<(), SceneError> {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(SceneError::DuplicateEntityType(name));
        }
        debug!(%name, "entity type registered");
        self.factories.insert(name, factory);
        Ok(())
    }

    /// Factory registered under `name`.
    pub fn get(&self, name: &str) -> Option<EntityFactory> {
        self.factories.get(name).copied()
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.factories.keys().map(String::as_str)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Instantiates `name` at `position`.
    ///
    /// The returned entity carries `id` and `name` whatever the factory set.
    pub fn create(&self, name: &str, id: EntityId, position: Vec2) -> Result<Entity, SceneError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| SceneError::UnknownEntityType(name.to_owned()))?;
        let mut entity = factory(id, position);
        entity.assign_id(id);
        entity.assign_kind(name);
        Ok(entity)
    }
}
