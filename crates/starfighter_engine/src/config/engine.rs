//! # Engine Configuration
//!
//! Core engine behavior: logging, world capacity, frame stepping and the
//! playfield rectangle.

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};
use crate::foundation::math::Vec2;

/// Playfield rectangle, centered on the origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Arena width in world units
    pub width: f32,
    /// Arena height in world units
    pub height: f32,
    /// Extra distance past the edge before enemies and projectiles are culled
    pub cull_margin: f32,
}

impl ArenaConfig {
    /// Create an arena of the given size with the default margin
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Half extents of the arena
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Whether `point` lies inside the arena expanded by the cull margin
    pub fn contains_with_margin(&self, point: &Vec2) -> bool {
        let half = self.half_extents();
        point.x.abs() <= half.x + self.cull_margin && point.y.abs() <= half.y + self.cull_margin
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            cull_margin: 64.0,
        }
    }
}

/// Core engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
    /// Number of entity slots pre-allocated by the world
    pub entity_capacity: u32,
    /// Frame step used by fixed-step drivers, in seconds
    pub fixed_delta_time: f32,
    /// Upper bound on a single variable frame step, in seconds
    pub max_delta_time: f32,
    /// Seed for particle and burst randomness
    pub rng_seed: u64,
    /// Playfield bounds
    pub arena: ArenaConfig,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            entity_capacity: 10_000,
            fixed_delta_time: 1.0 / 60.0,
            max_delta_time: 0.25,
            rng_seed: 0x5EED,
            arena: ArenaConfig::default(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the world's entity capacity
    pub fn with_entity_capacity(mut self, capacity: u32) -> Self {
        self.entity_capacity = capacity;
        self
    }

    /// Set the fixed frame step
    pub fn with_fixed_delta_time(mut self, seconds: f32) -> Self {
        self.fixed_delta_time = seconds;
        self
    }

    /// Set the randomness seed
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Set the arena rectangle
    pub fn with_arena(mut self, arena: ArenaConfig) -> Self {
        self.arena = arena;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entity_capacity == 0 {
            return Err(ConfigError::Invalid("entity_capacity must be at least 1".to_string()));
        }
        if !(self.fixed_delta_time.is_finite() && self.fixed_delta_time >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "fixed_delta_time must be finite and >= 0, got {}",
                self.fixed_delta_time
            )));
        }
        if !(self.max_delta_time.is_finite() && self.max_delta_time > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "max_delta_time must be finite and > 0, got {}",
                self.max_delta_time
            )));
        }
        if self.arena.width <= 0.0 || self.arena.height <= 0.0 || self.arena.cull_margin < 0.0 {
            return Err(ConfigError::Invalid(format!("degenerate arena {:?}", self.arena)));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for EngineConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = EngineConfig::new().with_entity_capacity(0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_negative_step_rejected() {
        let config = EngineConfig::new().with_fixed_delta_time(-0.1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_arena_margin() {
        let arena = ArenaConfig {
            width: 100.0,
            height: 50.0,
            cull_margin: 10.0,
        };
        assert!(arena.contains_with_margin(&Vec2::new(59.0, 0.0)));
        assert!(!arena.contains_with_margin(&Vec2::new(61.0, 0.0)));
        assert!(!arena.contains_with_margin(&Vec2::new(0.0, -36.0)));
    }
}
