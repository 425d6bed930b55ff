//! Query system for component access
//!
//! A [`Query`] is a cursor over slot indices. It does not borrow the world
//! between steps, so a system can advance it, mutate or destroy the entity it
//! got back, and advance again:
//!
//! ```
//! # use starfighter_engine::ecs::{ComponentKinds, World};
//! # let mut world = World::new(4);
//! let mut query = world.query(ComponentKinds::TIME_TO_LIVE);
//! while let Some(entity) = query.next_entity(&world) {
//!     world.destroy_entity(entity);
//! }
//! ```
//!
//! Entities created after the query was opened are never produced, even when
//! they land in a slot the cursor has not reached yet.

use super::component::ComponentKinds;
use super::{Entity, World};

/// Lazy, destroy-tolerant view over entities that have a set of components
#[derive(Debug, Clone)]
pub struct Query {
    required: ComponentKinds,
    cursor: usize,
    stamp_limit: u64,
}

impl Query {
    pub(crate) const fn new(required: ComponentKinds, stamp_limit: u64) -> Self {
        Self {
            required,
            cursor: 0,
            stamp_limit,
        }
    }

    /// Advance to the next matching entity in ascending slot order
    pub fn next_entity(&mut self, world: &World) -> Option<Entity> {
        while self.cursor < world.high_water() {
            let slot = self.cursor;
            self.cursor += 1;
            if let Some(entity) = world.matching_entity(slot, self.required, self.stamp_limit) {
                return Some(entity);
            }
        }
        None
    }

    /// Borrowing iterator for passes that only read the world
    pub fn iter(self, world: &World) -> QueryIter<'_> {
        QueryIter { query: self, world }
    }

    /// Collect the remaining matches into a snapshot
    pub fn collect(self, world: &World) -> Vec<Entity> {
        self.iter(world).collect()
    }
}

/// Iterator produced by [`Query::iter`]
pub struct QueryIter<'w> {
    query: Query,
    world: &'w World,
}

impl Iterator for QueryIter<'_> {
    type Item = Entity;

    fn next(&mut self) -> Option<Self::Item> {
        self.query.next_entity(self.world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{Position, TimeToLive, Velocity};

    fn moving(world: &mut World, x: f32) -> Entity {
        let e = world.create_entity().unwrap();
        world.add_component(e, Position::new(x, 0.0)).unwrap();
        world.add_component(e, Velocity::new(1.0, 0.0)).unwrap();
        e
    }

    #[test]
    fn test_query_requires_all_kinds() {
        let mut world = World::new(8);
        let a = moving(&mut world, 0.0);
        let only_position = world.create_entity().unwrap();
        world.add_component(only_position, Position::new(5.0, 5.0)).unwrap();
        let b = moving(&mut world, 1.0);

        let found = world
            .query(ComponentKinds::POSITION | ComponentKinds::VELOCITY)
            .collect(&world);
        assert_eq!(found, vec![a, b]);
    }

    #[test]
    fn test_removing_a_kind_excludes_entity() {
        let mut world = World::new(4);
        let e = moving(&mut world, 0.0);
        let kinds = ComponentKinds::POSITION | ComponentKinds::VELOCITY;
        assert_eq!(world.query(kinds).collect(&world), vec![e]);

        world.remove_component::<Velocity>(e);
        assert!(world.query(kinds).collect(&world).is_empty());
        assert_eq!(world.query(ComponentKinds::POSITION).collect(&world), vec![e]);
    }

    #[test]
    fn test_results_are_in_ascending_slot_order() {
        let mut world = World::new(4);
        let a = moving(&mut world, 0.0);
        let b = moving(&mut world, 1.0);
        let c = moving(&mut world, 2.0);
        world.destroy_entity(a);
        let d = moving(&mut world, 3.0);
        assert_eq!(d.index(), 0);

        let found = world.query(ComponentKinds::POSITION).collect(&world);
        assert_eq!(found, vec![d, b, c]);
    }

    #[test]
    fn test_destroying_current_entity_during_iteration() {
        let mut world = World::new(8);
        let entities: Vec<_> = (0..5).map(|i| moving(&mut world, i as f32)).collect();

        let mut visited = Vec::new();
        let mut query = world.query(ComponentKinds::POSITION);
        while let Some(e) = query.next_entity(&world) {
            visited.push(e);
            if e.index() % 2 == 0 {
                world.destroy_entity(e);
            }
        }

        assert_eq!(visited, entities);
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn test_entities_created_mid_iteration_are_not_visited() {
        let mut world = World::new(8);
        let a = moving(&mut world, 0.0);
        let b = moving(&mut world, 1.0);
        world.destroy_entity(a);

        let mut visited = Vec::new();
        let mut query = world.query(ComponentKinds::POSITION);
        while let Some(e) = query.next_entity(&world) {
            visited.push(e);
            // First lands behind the cursor (slot 0), second ahead of it (slot 2).
            let behind = moving(&mut world, 8.0);
            let ahead = moving(&mut world, 9.0);
            assert!(behind.index() < e.index() && ahead.index() > e.index());
        }

        assert_eq!(visited, vec![b]);
        assert_eq!(world.len(), 3);
    }

    #[test]
    fn test_empty_kind_set_matches_every_live_entity() {
        let mut world = World::new(4);
        let bare = world.create_entity().unwrap();
        let timed = world.create_entity().unwrap();
        world.add_component(timed, TimeToLive::new(1.0)).unwrap();
        assert_eq!(world.query(ComponentKinds::empty()).collect(&world), vec![bare, timed]);
    }
}
