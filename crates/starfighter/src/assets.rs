//! Game asset definitions

use serde::{Deserialize, Serialize};
use starfighter_engine::ecs::PlayerTextures;
use starfighter_engine::render::{AssetError, TextureHandle, TextureLoader};

/// Texture names, resolved through a [`TextureLoader`] at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureManifest {
    /// Player ship
    pub spaceship: String,
    /// Player projectiles
    pub laser: String,
    /// Engine exhaust particles
    pub exhaust: String,
    /// Enemy fighters
    pub enemy_fighter: String,
    /// Death burst particles
    pub spark: String,
}

impl Default for TextureManifest {
    fn default() -> Self {
        Self {
            spaceship: "res/textures/spaceship.png".to_string(),
            laser: "res/textures/red.png".to_string(),
            exhaust: "res/textures/exhaust.png".to_string(),
            enemy_fighter: "res/textures/enemy_fighter.png".to_string(),
            spark: "res/textures/spark.png".to_string(),
        }
    }
}

/// Handles for every texture the game uses
#[derive(Debug, Clone, Copy)]
pub struct GameTextures {
    /// Textures the player archetype needs
    pub player: PlayerTextures,
    /// Enemy fighter sprite
    pub enemy: TextureHandle,
    /// Death burst sprite
    pub spark: TextureHandle,
}

impl GameTextures {
    /// Resolve every texture in `manifest`
    pub fn load(manifest: &TextureManifest, loader: &mut impl TextureLoader) -> Result<Self, AssetError> {
        let textures = Self {
            player: PlayerTextures {
                ship: loader.load_texture(&manifest.spaceship)?,
                projectile: loader.load_texture(&manifest.laser)?,
                exhaust: loader.load_texture(&manifest.exhaust)?,
            },
            enemy: loader.load_texture(&manifest.enemy_fighter)?,
            spark: loader.load_texture(&manifest.spark)?,
        };
        log::info!("Loaded textures");
        Ok(textures)
    }
}
