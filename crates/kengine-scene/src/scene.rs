// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::collections::BTreeMap;

use kengine_core::math::Vec2;
use kengine_core::{Rect, Tick, TickStep};
use kengine_geom::{build_index_with, QuadTreeConfig, QuadTreeError, SpatialIndex};
use tracing::{debug, trace};

use crate::entity::{Entity, EntityId, TickContext};
use crate::error::SceneError;
use crate::input::{Input, InputFrame};
use crate::registry::EntityRegistry;

/// Simulation tuning for a [`Scene`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SceneSettings {
    /// Time scale applied to every motion integration.
    pub step: TickStep,
    /// Tuning for the per-frame spatial index.
    pub quad_tree: QuadTreeConfig,
}

/// A bounded 2D world of entities advanced one tick at a time.
///
/// Entities are kept in id order, so every per-tick pass (and every index
/// built from the scene) visits them in the same order from run to run.
#[derive(Debug)]
pub struct Scene {
    bounds: Rect,
    settings: SceneSettings,
    registry: EntityRegistry,
    entities: BTreeMap<EntityId, Entity>,
    next_id: u64,
    tick: Tick,
    input: Input,
}

impl Scene {
    /// Creates an empty scene covering `bounds`.
    ///
    /// Fails if `bounds` is empty or the index tuning is invalid, so later
    /// collision queries on this scene cannot fail for those reasons.
    pub fn new(bounds: Rect, settings: SceneSettings) -> Result<Self, SceneError> {
        if bounds.is_empty() {
            return Err(QuadTreeError::InvalidBounds(bounds).into());
        }
        settings.quad_tree.validate()?;
        Ok(Self {
            bounds,
            settings,
            registry: EntityRegistry::new(),
            entities: BTreeMap::new(),
            next_id: 0,
            tick: Tick::default(),
            input: Input::default(),
        })
    }

    /// Replaces the entity-type registry.
    pub fn with_registry(mut self, registry: EntityRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Scene bounds; also the root of every spatial index.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Simulation tuning.
    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    /// Entity-type registry.
    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// Mutable entity-type registry.
    pub fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }

    /// Number of ticks simulated so far.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Input as of the last [`Scene::update`].
    pub fn input(&self) -> &Input {
        &self.input
    }

    /// Id the next spawned or added entity will receive.
    fn peek_id(&self) -> EntityId {
        EntityId(self.next_id)
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = self.peek_id();
        self.next_id += 1;
        id
    }

    /// Creates a registered entity type at `position`.
    ///
    /// An unknown `kind` leaves the id counter untouched.
    pub fn spawn(&mut self, kind: &str, position: Vec2) -> Result<EntityId, SceneError> {
        let entity = self.registry.create(kind, self.peek_id(), position)?;
        let id = self.allocate_id();
        debug!(%id, kind, x = position.x(), y = position.y(), "entity spawned");
        self.entities.insert(id, entity);
        Ok(id)
    }

    /// Adds a hand-built entity, assigning it a fresh id.
    pub fn add(&mut self, mut entity: Entity) -> EntityId {
        let id = self.allocate_id();
        entity.assign_id(id);
        debug!(%id, kind = entity.kind(), "entity added");
        self.entities.insert(id, entity);
        id
    }

    /// Removes and returns an entity.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    /// Looks up an entity.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Looks up an entity for modification.
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// All entities in id order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.values()
    }

    /// Entities of one registered type, in id order.
    pub fn find<'s>(&'s self, kind: &'s str) -> impl Iterator<Item = &'s Entity> + 's {
        self.entities.values().filter(move |e| e.kind() == kind)
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the scene holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Advances the scene by one tick.
    ///
    /// Input is applied first. Then, for each entity in id order: its
    /// behavior runs, border containment reflects its velocity if needed,
    /// motion is integrated and its sprite animation advances.
    pub fn update(&mut self, frame: &InputFrame) {
        self.input.update(frame);
        let ctx = TickContext {
            tick: self.tick,
            bounds: self.bounds,
            input: &self.input,
        };
        for entity in self.entities.values_mut() {
            entity.tick(&ctx, self.settings.step, frame.elapsed_ms);
        }
        trace!(tick = self.tick.index(), entities = self.entities.len(), "scene tick");
        self.tick = self.tick.next();
    }

    /// Builds a spatial index over the live entities.
    ///
    /// The index borrows the scene, so it cannot outlive the current tick.
    pub fn index(&self) -> Result<SpatialIndex<'_, Entity>, SceneError> {
        Ok(build_index_with(
            self.bounds,
            self.settings.quad_tree,
            self.entities.values(),
        )?)
    }

    /// Ids of entities whose current (or, with `predictive`, next-tick) box
    /// intersects `rect`.
    pub fn find_collisions(&self, rect: &Rect, predictive: bool) -> Result<Vec<EntityId>, SceneError> {
        let index = self.index()?;
        Ok(index
            .query_collisions(rect, predictive)
            .into_iter()
            .map(Entity::id)
            .collect())
    }

    /// Pairs of entities whose boxes overlap, each pair ordered by id and the
    /// list sorted ascending.
    pub fn collision_pairs(&self, predictive: bool) -> Result<Vec<(EntityId, EntityId)>, SceneError> {
        let index = self.index()?;
        let items = index.items();
        Ok(index
            .candidate_pairs(predictive)
            .into_iter()
            .map(|(a, b)| (items[a].id(), items[b].id()))
            .collect())
    }

    /// Index node bounds with their depths, for debug overlays.
    pub fn index_overlay(&self) -> Result<Vec<(Rect, usize)>, SceneError> {
        let index = self.index()?;
        let mut out = Vec::with_capacity(index.node_count());
        index.visit_bounds(|bounds, depth| out.push((bounds, depth)));
        Ok(out)
    }
}
