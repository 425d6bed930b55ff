//! ECS World implementation
//!
//! The world owns a fixed pool of entity slots and one component table per
//! kind. Slots are recycled through a free list; each slot carries a
//! generation (bumped on destroy), a presence mask and the spawn stamp queries
//! use to hide entities created after they were opened.

use super::component::{Component, ComponentKinds};
use super::error::EcsError;
use super::query::Query;
use super::storage::ComponentStore;
use super::Entity;

/// ECS World containing all entities and components
pub struct World {
    capacity: u32,
    generations: Vec<u32>,
    alive: Vec<bool>,
    masks: Vec<ComponentKinds>,
    spawn_stamps: Vec<u64>,
    next_stamp: u64,
    free_slots: Vec<u32>,
    high_water: usize,
    live_count: usize,
    components: ComponentStore,
}

impl World {
    /// Create a world with `capacity` pre-allocated entity slots
    pub fn new(capacity: u32) -> Self {
        let slots = capacity as usize;
        log::debug!("Creating world with {capacity} entity slots");
        Self {
            capacity,
            generations: vec![0; slots],
            alive: vec![false; slots],
            masks: vec![ComponentKinds::empty(); slots],
            spawn_stamps: vec![0; slots],
            next_stamp: 0,
            // Reversed so the lowest slots are handed out first.
            free_slots: (0..capacity).rev().collect(),
            high_water: 0,
            live_count: 0,
            components: ComponentStore::new(slots),
        }
    }

    /// Create a new entity in the next free slot
    pub fn create_entity(&mut self) -> Result<Entity, EcsError> {
        let Some(index) = self.free_slots.pop() else {
            return Err(EcsError::CapacityExceeded {
                capacity: self.capacity(),
            });
        };

        let slot = index as usize;
        self.alive[slot] = true;
        self.masks[slot] = ComponentKinds::empty();
        self.spawn_stamps[slot] = self.next_stamp;
        self.next_stamp += 1;
        self.high_water = self.high_water.max(slot + 1);
        self.live_count += 1;

        let entity = Entity::new(index, self.generations[slot]);
        log::trace!("Created entity {entity}");
        Ok(entity)
    }

    /// Destroy an entity, clearing every component it owns
    ///
    /// Returns `false` without touching anything when the handle is already
    /// destroyed or stale, so several systems may try to destroy the same
    /// entity within one frame.
    pub fn destroy_entity(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }

        let slot = entity.slot();
        self.components.clear_slot(slot);
        self.masks[slot] = ComponentKinds::empty();
        self.alive[slot] = false;
        self.generations[slot] = self.generations[slot].wrapping_add(1);
        self.free_slots.push(entity.index());
        self.live_count -= 1;

        log::trace!("Destroyed entity {entity}");
        true
    }

    /// Whether `entity` refers to a live entity
    pub fn is_alive(&self, entity: Entity) -> bool {
        let slot = entity.slot();
        slot < self.alive.len() && self.alive[slot] && self.generations[slot] == entity.generation()
    }

    /// Add a component to an entity, replacing any previous value of that kind
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) -> Result<(), EcsError> {
        if !self.is_alive(entity) {
            return Err(EcsError::EntityNotAlive(entity));
        }

        let slot = entity.slot();
        T::table_mut(&mut self.components).insert(slot, component);
        self.masks[slot] |= T::KIND;
        Ok(())
    }

    /// Remove a component from an entity
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        if !self.is_alive(entity) {
            return None;
        }

        let slot = entity.slot();
        self.masks[slot].remove(T::KIND);
        T::table_mut(&mut self.components).remove(slot)
    }

    /// Get a component from an entity
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        if !self.is_alive(entity) {
            return None;
        }
        T::table(&self.components).get(entity.slot())
    }

    /// Get a mutable component from an entity
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        if !self.is_alive(entity) {
            return None;
        }
        T::table_mut(&mut self.components).get_mut(entity.slot())
    }

    /// Whether `entity` is alive and has a `T`
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.kinds_of(entity).is_some_and(|kinds| kinds.contains(T::KIND))
    }

    /// Presence mask of a live entity
    pub fn kinds_of(&self, entity: Entity) -> Option<ComponentKinds> {
        self.is_alive(entity).then(|| self.masks[entity.slot()])
    }

    /// Open a query over every entity that has all of `kinds`
    pub fn query(&self, kinds: ComponentKinds) -> Query {
        Query::new(kinds, self.next_stamp)
    }

    /// Live entity in `slot` when it covers `kinds` and was spawned before `stamp_limit`
    // Slot indices always fit: they come from a u32 range.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn matching_entity(&self, slot: usize, kinds: ComponentKinds, stamp_limit: u64) -> Option<Entity> {
        let matches = slot < self.high_water
            && self.alive[slot]
            && self.spawn_stamps[slot] < stamp_limit
            && self.masks[slot].contains(kinds);
        matches.then(|| Entity::new(slot as u32, self.generations[slot]))
    }

    /// One past the highest slot ever handed out
    pub(crate) const fn high_water(&self) -> usize {
        self.high_water
    }

    /// Iterate over every live entity in slot order
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.query(ComponentKinds::empty()).iter(self)
    }

    /// Destroy every entity
    pub fn clear(&mut self) {
        let live: Vec<Entity> = self.entities().collect();
        for entity in live {
            self.destroy_entity(entity);
        }
        log::debug!("World cleared");
    }

    /// Number of live entities
    pub const fn len(&self) -> usize {
        self.live_count
    }

    /// Whether no entity is alive
    pub const fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// Fixed number of entity slots
    pub const fn capacity(&self) -> usize {
        self.capacity as usize
    }
}
