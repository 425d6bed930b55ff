//! Game configuration
//!
//! One file holds the engine settings, the archetype tuning and the demo
//! script parameters. Any section or field left out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use starfighter_engine::config::{ArchetypeConfig, Config, ConfigError, EngineConfig};

use crate::assets::TextureManifest;

/// Default config file looked up next to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "starfighter.toml";

/// How the driver produces frame delta times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pacing {
    /// Every frame is exactly `fixed_delta_time`, as fast as possible
    Fixed,
    /// Frames are paced to wall-clock time
    RealTime,
}

/// Parameters of the scripted headless run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Frames to run before closing
    pub frames: u64,
    /// Frame pacing
    pub pacing: Pacing,
    /// Enemies per wave
    pub wave_size: u32,
    /// Frames between waves
    pub wave_interval: u64,
    /// Frames the scripted pilot holds each strafe direction
    pub strafe_frames: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            pacing: Pacing::Fixed,
            wave_size: 5,
            wave_interval: 120,
            strafe_frames: 45,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Engine settings
    pub engine: EngineConfig,
    /// Archetype tuning
    pub archetypes: ArchetypeConfig,
    /// Texture names
    pub textures: TextureManifest,
    /// Demo script
    pub demo: DemoConfig,
}

impl Config for GameConfig {}

impl GameConfig {
    /// Load `path` when it exists, otherwise fall back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = if path.exists() {
            Self::load_from_file(path)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.archetypes.validate()?;
        if self.demo.wave_interval == 0 {
            return Err(ConfigError::Invalid("demo.wave_interval must be at least 1".to_string()));
        }
        if self.demo.strafe_frames == 0 {
            return Err(ConfigError::Invalid("demo.strafe_frames must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let text = r#"
            [engine]
            entity_capacity = 256

            [archetypes.enemy]
            speed = 45.0

            [demo]
            frames = 30
            pacing = "real_time"
        "#;

        let config = GameConfig::parse(Path::new("starfighter.toml"), text).unwrap();

        assert_eq!(config.engine.entity_capacity, 256);
        assert!((config.archetypes.enemy.speed - 45.0).abs() < f32::EPSILON);
        assert_eq!(config.demo.frames, 30);
        assert_eq!(config.demo.pacing, Pacing::RealTime);
        assert_eq!(config.demo.wave_size, DemoConfig::default().wave_size);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = GameConfig::load_or_default("does/not/exist/starfighter.toml").unwrap();
        assert_eq!(config.demo.frames, DemoConfig::default().frames);
    }

    #[test]
    fn test_zero_wave_interval_rejected() {
        let mut config = GameConfig::default();
        config.demo.wave_interval = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
