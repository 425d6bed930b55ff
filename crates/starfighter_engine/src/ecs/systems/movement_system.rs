//! Movement system
//!
//! Integrates velocity into position. No clamping; leaving the arena is
//! handled by the arena bounds system.

use crate::ecs::component::ComponentKinds;
use crate::ecs::components::{Position, Velocity};
use crate::ecs::{EcsError, System, World};

/// Applies `Velocity` to `Position` each frame
#[derive(Debug, Default, Clone, Copy)]
pub struct MovementSystem;

impl MovementSystem {
    /// Create a new movement system
    pub const fn new() -> Self {
        Self
    }
}

impl System for MovementSystem {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn update(&mut self, world: &mut World, delta_time: f32) -> Result<(), EcsError> {
        let mut query = world.query(ComponentKinds::POSITION | ComponentKinds::VELOCITY);
        while let Some(entity) = query.next_entity(world) {
            let Some(velocity) = world.get_component::<Velocity>(entity).copied() else {
                continue;
            };
            if let Some(position) = world.get_component_mut::<Position>(entity) {
                position.coords += velocity.linear * delta_time;
                position.rotation += velocity.angular * delta_time;
            }
        }
        Ok(())
    }
}
