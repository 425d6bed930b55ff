//! ECS Systems module

pub mod arena_bounds_system;
pub mod collision_system;
pub mod movement_system;
pub mod particle_cleanup_system;
pub mod particle_emitter_system;
pub mod player_input_system;
pub mod rendering_system;

pub use arena_bounds_system::ArenaBoundsSystem;
pub use collision_system::{CollisionReport, CollisionSystem};
pub use movement_system::MovementSystem;
pub use particle_cleanup_system::ParticleCleanupSystem;
pub use particle_emitter_system::ParticleEmitterSystem;
pub use player_input_system::PlayerInputSystem;
pub use rendering_system::RenderSystem;

use super::Schedule;
use crate::config::{ArchetypeConfig, EngineConfig};
use crate::input::InputSource;
use crate::render::{SpriteRenderer, TextureHandle};

/// Build the game's frame pipeline
///
/// Render runs first so every entity alive at the end of a frame is drawn
/// once before cleanup can expire it. Cleanup runs before the emitters so a
/// fresh particle survives into the next render.
pub fn standard_schedule<R, I>(
    config: &EngineConfig,
    archetypes: &ArchetypeConfig,
    renderer: R,
    input: I,
    burst_texture: TextureHandle,
) -> Schedule
where
    R: SpriteRenderer + 'static,
    I: InputSource + 'static,
{
    Schedule::new()
        .with_system(RenderSystem::new(renderer))
        .with_system(MovementSystem::new())
        .with_system(PlayerInputSystem::new(input, archetypes.projectile.clone()))
        .with_system(ParticleCleanupSystem::new())
        .with_system(ParticleEmitterSystem::new(config.rng_seed))
        .with_system(CollisionSystem::new(
            archetypes.particle.clone(),
            burst_texture,
            config.rng_seed.wrapping_add(1),
        ))
        .with_system(ArenaBoundsSystem::new(config.arena.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputManager;
    use crate::render::DrawQueue;

    #[test]
    fn test_standard_order() {
        let schedule = standard_schedule(
            &EngineConfig::default(),
            &ArchetypeConfig::default(),
            DrawQueue::new(),
            InputManager::new(),
            TextureHandle::default(),
        );

        assert_eq!(
            schedule.system_names(),
            vec![
                "render",
                "movement",
                "player_input",
                "particle_cleanup",
                "particle_emitter",
                "collision",
                "arena_bounds",
            ]
        );
    }
}
