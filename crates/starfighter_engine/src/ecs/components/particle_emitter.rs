//! Particle emitter component for exhaust plumes and similar effects

use crate::config::EmitterArchetype;
use crate::foundation::math::{Color, Vec2};
use crate::render::TextureHandle;

/// Recipe for the particles an emitter spawns
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleTemplate {
    /// Particle texture
    pub texture: TextureHandle,
    /// Particle size in world units
    pub size: Vec2,
    /// Particle tint
    pub tint: Color,
    /// Seconds each particle lives
    pub lifetime: f32,
    /// Lower bound of the initial speed
    pub speed_min: f32,
    /// Upper bound of the initial speed
    pub speed_max: f32,
}

/// Component for entities that periodically spawn particles
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleEmitter {
    /// Seconds between spawns; non-positive disables spawning
    pub interval: f32,
    /// Seconds until the next spawn, may go negative inside a frame
    pub countdown: f32,
    /// What gets spawned
    pub template: ParticleTemplate,
    /// Cone center in radians, relative to the entity's rotation
    pub direction: f32,
    /// Cone half-angle in radians
    pub spread: f32,
    /// Cap on spawns in a single frame
    ///
    /// Below the cap the countdown carries its negative remainder into the
    /// next frame. Once the cap is hit the remaining backlog is dropped and the
    /// countdown restarts at `interval`.
    pub max_per_frame: u32,
    /// Whether the emitter is active
    pub enabled: bool,
}

impl ParticleEmitter {
    /// Create an emitter that spawns its first particle after one interval
    pub fn new(interval: f32, template: ParticleTemplate) -> Self {
        Self {
            interval,
            countdown: interval,
            template,
            direction: 0.0,
            spread: 0.0,
            max_per_frame: 8,
            enabled: true,
        }
    }

    /// Build from archetype tuning
    pub fn from_archetype(archetype: &EmitterArchetype, texture: TextureHandle) -> Self {
        let template = ParticleTemplate {
            texture,
            size: archetype.size,
            tint: archetype.tint,
            lifetime: archetype.lifetime,
            speed_min: archetype.speed_min,
            speed_max: archetype.speed_max,
        };
        Self::new(archetype.interval, template)
            .with_cone(archetype.direction, archetype.spread)
            .with_max_per_frame(archetype.max_per_frame)
    }

    /// Set the emission cone
    pub fn with_cone(mut self, direction: f32, spread: f32) -> Self {
        self.direction = direction;
        self.spread = spread.abs();
        self
    }

    /// Set the per-frame spawn cap
    pub fn with_max_per_frame(mut self, max_per_frame: u32) -> Self {
        self.max_per_frame = max_per_frame;
        self
    }

    /// Whether this emitter can spawn at all
    pub fn is_active(&self) -> bool {
        self.enabled && self.interval > 0.0
    }
}
