//! # Starfighter Engine
//!
//! A small 2D entity-component-system engine for a top-down space shooter.
//!
//! ## Features
//!
//! - **Fixed-capacity ECS**: slot arena with generation-checked entity handles
//! - **Ordered Systems**: one declared schedule, run once per frame
//! - **Archetype Factories**: player ship, enemy fighter, projectile and particle recipes
//! - **Pluggable Backends**: rendering and input are injected collaborators
//! - **TOML/RON Configuration**: engine settings and archetype tuning
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use starfighter_engine::prelude::*;
//!
//! struct Frames(u32);
//!
//! impl FrameDriver for Frames {
//!     fn should_close(&self) -> bool {
//!         self.0 == 0
//!     }
//!
//!     fn next_delta_time(&mut self) -> f32 {
//!         self.0 -= 1;
//!         1.0 / 60.0
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default();
//!     let archetypes = ArchetypeConfig::default();
//!     let mut textures = TextureRegistry::new();
//!     let player_textures = PlayerTextures {
//!         ship: textures.load_texture("ship")?,
//!         projectile: textures.load_texture("laser")?,
//!         exhaust: textures.load_texture("exhaust")?,
//!     };
//!     let spark = textures.load_texture("spark")?;
//!
//!     let schedule = standard_schedule(&config, &archetypes, DrawQueue::new(), InputManager::new(), spark);
//!     let mut engine = Engine::new(config, schedule)?;
//!     create_player_spaceship(engine.world_mut(), &archetypes.player, &player_textures, Vec2::zeros())?;
//!     engine.run(&mut Frames(600))?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod ecs;
pub mod foundation;
pub mod input;
pub mod render;

mod engine;

pub use engine::{Engine, EngineError, FrameDriver};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{ArchetypeConfig, ArenaConfig, Config, ConfigError, EngineConfig},
        ecs::{
            components::{
                Collider, ColliderTag, Damage, Health, ParticleEmitter, ParticleTemplate, PlayerControlled, Position,
                Sprite, TimeToLive, Velocity,
            },
            factories::{
                create_enemy_fighter, create_particle, create_player_spaceship, create_projectile,
                spawn_particle_burst,
            },
            systems::standard_schedule,
            Component, ComponentKinds, EcsError, Entity, PlayerTextures, Query, Schedule, System, World,
        },
        foundation::{
            math::{Color, Vec2},
            time::{FixedStep, Timer},
        },
        input::{InputManager, InputSnapshot, InputSource, KeyCode, MouseButton},
        render::{DrawQueue, SpriteDraw, SpriteRenderer, TextureHandle, TextureLoader, TextureRegistry},
        Engine, EngineError, FrameDriver,
    };
}
