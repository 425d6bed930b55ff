//! Lifetime expiry

use crate::ecs::component::ComponentKinds;
use crate::ecs::components::TimeToLive;
use crate::ecs::{EcsError, System, World};

/// Counts down every `TimeToLive` and destroys expired entities
#[derive(Debug, Default)]
pub struct ParticleCleanupSystem {
    expired: u64,
}

impl ParticleCleanupSystem {
    /// Create a new cleanup system
    pub const fn new() -> Self {
        Self { expired: 0 }
    }

    /// Entities destroyed since creation
    pub const fn expired(&self) -> u64 {
        self.expired
    }
}

impl System for ParticleCleanupSystem {
    fn name(&self) -> &'static str {
        "particle_cleanup"
    }

    fn update(&mut self, world: &mut World, delta_time: f32) -> Result<(), EcsError> {
        let mut query = world.query(ComponentKinds::TIME_TO_LIVE);
        while let Some(entity) = query.next_entity(world) {
            let expired = world
                .get_component_mut::<TimeToLive>(entity)
                .is_some_and(|lifetime| lifetime.tick(delta_time));
            if expired && world.destroy_entity(entity) {
                log::trace!("Entity {entity} expired");
                self.expired += 1;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::Position;

    #[test]
    fn test_expires_on_third_step() {
        let mut world = World::new(4);
        let e = world.create_entity().unwrap();
        world.add_component(e, TimeToLive::new(1.0)).unwrap();
        let mut system = ParticleCleanupSystem::new();

        system.update(&mut world, 0.4).unwrap();
        assert!(world.is_alive(e));
        system.update(&mut world, 0.4).unwrap();
        assert!(world.is_alive(e));
        system.update(&mut world, 0.4).unwrap();
        assert!(!world.is_alive(e));
        assert!(world.get_component::<TimeToLive>(e).is_none());
        assert_eq!(system.expired(), 1);
    }

    #[test]
    fn test_entities_without_lifetime_survive() {
        let mut world = World::new(4);
        let e = world.create_entity().unwrap();
        world.add_component(e, Position::new(0.0, 0.0)).unwrap();

        ParticleCleanupSystem::new().update(&mut world, 100.0).unwrap();

        assert!(world.is_alive(e));
    }
}
