//! Fixed-capacity component storage
//!
//! Every table is sized to the world's entity capacity when the world is
//! built and never grows afterwards.

use super::components::{
    Collider, Damage, Health, ParticleEmitter, PlayerControlled, Position, Sprite, TimeToLive,
    Velocity,
};

/// One component kind's data, indexed by entity slot
pub struct ComponentTable<T> {
    slots: Vec<Option<T>>,
}

impl<T> ComponentTable<T> {
    /// Create a table with `capacity` empty slots
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots }
    }

    /// Store `value` at `slot`, returning what was there before
    pub fn insert(&mut self, slot: usize, value: T) -> Option<T> {
        self.slots.get_mut(slot).and_then(|entry| entry.replace(value))
    }

    /// Take the value out of `slot`
    pub fn remove(&mut self, slot: usize) -> Option<T> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    /// Borrow the value at `slot`
    pub fn get(&self, slot: usize) -> Option<&T> {
        self.slots.get(slot)?.as_ref()
    }

    /// Mutably borrow the value at `slot`
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.slots.get_mut(slot)?.as_mut()
    }

    /// Number of populated slots
    pub fn populated(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Total number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

/// All component tables owned by a world
pub struct ComponentStore {
    pub(crate) positions: ComponentTable<Position>,
    pub(crate) velocities: ComponentTable<Velocity>,
    pub(crate) sprites: ComponentTable<Sprite>,
    pub(crate) players: ComponentTable<PlayerControlled>,
    pub(crate) colliders: ComponentTable<Collider>,
    pub(crate) emitters: ComponentTable<ParticleEmitter>,
    pub(crate) lifetimes: ComponentTable<TimeToLive>,
    pub(crate) healths: ComponentTable<Health>,
    pub(crate) damages: ComponentTable<Damage>,
}

impl ComponentStore {
    /// Allocate every table at `capacity`
    pub fn new(capacity: usize) -> Self {
        Self {
            positions: ComponentTable::new(capacity),
            velocities: ComponentTable::new(capacity),
            sprites: ComponentTable::new(capacity),
            players: ComponentTable::new(capacity),
            colliders: ComponentTable::new(capacity),
            emitters: ComponentTable::new(capacity),
            lifetimes: ComponentTable::new(capacity),
            healths: ComponentTable::new(capacity),
            damages: ComponentTable::new(capacity),
        }
    }

    /// Empty `slot` in every table
    pub fn clear_slot(&mut self, slot: usize) {
        self.positions.remove(slot);
        self.velocities.remove(slot);
        self.sprites.remove(slot);
        self.players.remove(slot);
        self.colliders.remove(slot);
        self.emitters.remove(slot);
        self.lifetimes.remove(slot);
        self.healths.remove(slot);
        self.damages.remove(slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_insert_replace_remove() {
        let mut table = ComponentTable::new(4);
        assert_eq!(table.insert(2, 10u32), None);
        assert_eq!(table.insert(2, 11u32), Some(10));
        assert_eq!(table.get(2), Some(&11));
        assert_eq!(table.populated(), 1);
        assert_eq!(table.remove(2), Some(11));
        assert_eq!(table.get(2), None);
    }

    #[test]
    fn test_table_out_of_range_is_ignored() {
        let mut table = ComponentTable::new(1);
        assert_eq!(table.insert(5, 1u8), None);
        assert_eq!(table.get(5), None);
        assert_eq!(table.populated(), 0);
        assert_eq!(table.capacity(), 1);
    }

    #[test]
    fn test_clear_slot_empties_every_table() {
        let mut store = ComponentStore::new(2);
        store.positions.insert(1, Position::new(1.0, 2.0));
        store.lifetimes.insert(1, TimeToLive::new(3.0));
        store.healths.insert(0, Health::new(5));
        store.clear_slot(1);
        assert!(store.positions.get(1).is_none());
        assert!(store.lifetimes.get(1).is_none());
        assert!(store.healths.get(0).is_some());
    }
}
