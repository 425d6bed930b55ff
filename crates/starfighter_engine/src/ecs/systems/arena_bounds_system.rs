//! Arena bounds culling
//!
//! Projectiles and enemies that leave the arena (plus its cull margin) are
//! destroyed. The player is never culled.

use crate::config::ArenaConfig;
use crate::ecs::component::ComponentKinds;
use crate::ecs::components::{Collider, ColliderTag, Position};
use crate::ecs::{EcsError, System, World};

/// Destroys off-screen projectiles and enemies
#[derive(Debug, Clone)]
pub struct ArenaBoundsSystem {
    arena: ArenaConfig,
}

impl ArenaBoundsSystem {
    /// Create a bounds system for `arena`
    pub const fn new(arena: ArenaConfig) -> Self {
        Self { arena }
    }
}

impl System for ArenaBoundsSystem {
    fn name(&self) -> &'static str {
        "arena_bounds"
    }

    fn update(&mut self, world: &mut World, _delta_time: f32) -> Result<(), EcsError> {
        let mut query = world.query(ComponentKinds::POSITION | ComponentKinds::COLLIDER);
        while let Some(entity) = query.next_entity(world) {
            let cullable = world
                .get_component::<Collider>(entity)
                .is_some_and(|collider| collider.tag != ColliderTag::Player);
            let outside = world
                .get_component::<Position>(entity)
                .is_some_and(|position| !self.arena.contains_with_margin(&position.coords));
            if cullable && outside {
                log::trace!("Entity {entity} left the arena");
                world.destroy_entity(entity);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged_at(world: &mut World, x: f32, tag: ColliderTag) -> crate::ecs::Entity {
        let e = world.create_entity().unwrap();
        world.add_component(e, Position::new(x, 0.0)).unwrap();
        world.add_component(e, Collider::circle(1.0, tag)).unwrap();
        e
    }

    #[test]
    fn test_culls_outside_margin_only() {
        let arena = ArenaConfig {
            width: 100.0,
            height: 100.0,
            cull_margin: 10.0,
        };
        let mut world = World::new(8);
        let inside = tagged_at(&mut world, 55.0, ColliderTag::Enemy);
        let outside = tagged_at(&mut world, 61.0, ColliderTag::Projectile);
        let player = tagged_at(&mut world, 500.0, ColliderTag::Player);

        ArenaBoundsSystem::new(arena).update(&mut world, 0.016).unwrap();

        assert!(world.is_alive(inside));
        assert!(!world.is_alive(outside));
        assert!(world.is_alive(player));
    }
}
