//! System trait

use super::error::EcsError;
use super::world::World;

/// A per-frame update pass over the entities holding the components it needs
///
/// Systems keep no entity state between frames; anything that must persist
/// lives in components.
pub trait System {
    /// Name used in logs and errors
    fn name(&self) -> &'static str;

    /// Run the system once for a frame of `delta_time` seconds
    fn update(&mut self, world: &mut World, delta_time: f32) -> Result<(), EcsError>;
}

impl<S: System + ?Sized> System for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn update(&mut self, world: &mut World, delta_time: f32) -> Result<(), EcsError> {
        (**self).update(world, delta_time)
    }
}
