//! Per-archetype default parameters used by the entity factories.

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};
use crate::foundation::math::{colors, Color, Vec2};

/// Player spaceship tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerArchetype {
    /// Sprite size in world units
    pub size: Vec2,
    /// Sprite tint
    pub tint: Color,
    /// Speed along each input axis, units per second
    pub move_speed: f32,
    /// Turn rate while a turn key is held, radians per second
    pub turn_speed: f32,
    /// Seconds between shots
    pub fire_cooldown: f32,
    /// Collision circle radius
    pub collider_radius: f32,
    /// Starting health
    pub health: u32,
    /// Damage dealt to an enemy on ramming
    pub damage: u32,
    /// Engine exhaust emitter
    pub exhaust: EmitterArchetype,
}

impl Default for PlayerArchetype {
    fn default() -> Self {
        Self {
            size: Vec2::new(64.0, 64.0),
            tint: colors::white(),
            move_speed: 240.0,
            turn_speed: 3.0,
            fire_cooldown: 0.2,
            collider_radius: 24.0,
            health: 3,
            damage: 1,
            exhaust: EmitterArchetype::default(),
        }
    }
}

/// Enemy fighter tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyArchetype {
    /// Sprite size in world units
    pub size: Vec2,
    /// Sprite tint
    pub tint: Color,
    /// Descent speed, units per second
    pub speed: f32,
    /// Collision circle radius
    pub collider_radius: f32,
    /// Starting health
    pub health: u32,
    /// Damage dealt to the player on contact
    pub damage: u32,
}

impl Default for EnemyArchetype {
    fn default() -> Self {
        Self {
            size: Vec2::new(48.0, 48.0),
            tint: colors::white(),
            speed: 90.0,
            collider_radius: 20.0,
            health: 2,
            damage: 1,
        }
    }
}

/// Projectile tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileArchetype {
    /// Sprite size in world units
    pub size: Vec2,
    /// Sprite tint
    pub tint: Color,
    /// Muzzle speed, units per second
    pub speed: f32,
    /// Seconds before the projectile expires
    pub lifetime: f32,
    /// Collision circle radius
    pub collider_radius: f32,
    /// Damage dealt on impact
    pub damage: u32,
}

impl Default for ProjectileArchetype {
    fn default() -> Self {
        Self {
            size: Vec2::new(4.0, 16.0),
            tint: colors::rgba8(255, 64, 64, 255),
            speed: 600.0,
            lifetime: 1.5,
            collider_radius: 4.0,
            damage: 1,
        }
    }
}

/// Particle tuning for death bursts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleArchetype {
    /// Sprite size in world units
    pub size: Vec2,
    /// Sprite tint
    pub tint: Color,
    /// Seconds a particle lives
    pub lifetime: f32,
    /// Slowest burst particle, units per second
    pub speed_min: f32,
    /// Fastest burst particle, units per second
    pub speed_max: f32,
    /// Particles spawned when something is destroyed
    pub burst_count: u32,
}

impl Default for ParticleArchetype {
    fn default() -> Self {
        Self {
            size: Vec2::new(6.0, 6.0),
            tint: colors::rgba8(255, 180, 64, 255),
            lifetime: 0.6,
            speed_min: 40.0,
            speed_max: 160.0,
            burst_count: 12,
        }
    }
}

/// Continuous emitter tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterArchetype {
    /// Seconds between spawns
    pub interval: f32,
    /// Cone axis relative to the owner's facing, radians
    pub direction: f32,
    /// Cone half-angle, radians
    pub spread: f32,
    /// Slowest particle, units per second
    pub speed_min: f32,
    /// Fastest particle, units per second
    pub speed_max: f32,
    /// Particle lifetime, seconds
    pub lifetime: f32,
    /// Particle sprite size
    pub size: Vec2,
    /// Particle tint
    pub tint: Color,
    /// Cap on particles spawned by one emitter in a single frame; a backlog
    /// beyond it is dropped
    pub max_per_frame: u32,
}

impl Default for EmitterArchetype {
    fn default() -> Self {
        Self {
            interval: 0.05,
            direction: std::f32::consts::PI,
            spread: 0.3,
            speed_min: 60.0,
            speed_max: 120.0,
            lifetime: 0.35,
            size: Vec2::new(4.0, 4.0),
            tint: colors::rgba8(120, 180, 255, 200),
            max_per_frame: 8,
        }
    }
}

/// Defaults for every archetype the factories build
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchetypeConfig {
    /// Player spaceship
    pub player: PlayerArchetype,
    /// Enemy fighter
    pub enemy: EnemyArchetype,
    /// Player projectile
    pub projectile: ProjectileArchetype,
    /// Explosion particles
    pub particle: ParticleArchetype,
}

impl ArchetypeConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |what: &str| -> Result<(), ConfigError> { Err(ConfigError::Invalid(what.to_string())) };

        if self.player.collider_radius <= 0.0
            || self.enemy.collider_radius <= 0.0
            || self.projectile.collider_radius <= 0.0
        {
            return invalid("collider radii must be positive");
        }
        if self.player.health == 0 || self.enemy.health == 0 {
            return invalid("starting health must be at least 1");
        }
        if self.player.move_speed < 0.0 || self.enemy.speed < 0.0 || self.projectile.speed < 0.0 {
            return invalid("speeds must not be negative");
        }
        if self.player.fire_cooldown < 0.0 {
            return invalid("fire_cooldown must not be negative");
        }
        if self.projectile.lifetime <= 0.0 || self.particle.lifetime <= 0.0 {
            return invalid("lifetimes must be positive");
        }
        if self.particle.speed_min > self.particle.speed_max {
            return invalid("particle speed_min exceeds speed_max");
        }
        self.player.exhaust.validate()
    }
}

impl EmitterArchetype {
    /// Validate the emitter parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval <= 0.0 {
            return Err(ConfigError::Invalid("emitter interval must be positive".to_string()));
        }
        if self.lifetime <= 0.0 {
            return Err(ConfigError::Invalid("emitter particle lifetime must be positive".to_string()));
        }
        if self.speed_min > self.speed_max || self.spread < 0.0 {
            return Err(ConfigError::Invalid("emitter cone is malformed".to_string()));
        }
        if self.max_per_frame == 0 {
            return Err(ConfigError::Invalid("emitter max_per_frame must be at least 1".to_string()));
        }
        Ok(())
    }
}

impl Config for ArchetypeConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ArchetypeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_radius_rejected() {
        let mut config = ArchetypeConfig::default();
        config.enemy.collider_radius = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_particle_speeds_rejected() {
        let mut config = ArchetypeConfig::default();
        config.particle.speed_min = 10.0;
        config.particle.speed_max = 5.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_interval_exhaust_rejected() {
        let mut config = ArchetypeConfig::default();
        config.player.exhaust.interval = 0.0;
        assert!(config.validate().is_err());
    }
}
