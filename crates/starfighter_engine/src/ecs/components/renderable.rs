//! Sprite component for entities that can be rendered
//!
//! This component marks entities as renderable and contains everything the
//! render system needs besides the entity's [`Position`](super::Position).

use crate::foundation::math::{colors, Color, Vec2};
use crate::render::TextureHandle;

/// Textured quad drawn at the entity's position
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Texture supplied by the asset loader
    pub texture: TextureHandle,
    /// Width and height in world units
    pub size: Vec2,
    /// Color multiplier
    pub tint: Color,
}

impl Sprite {
    /// Create an untinted sprite
    pub fn new(texture: TextureHandle, size: Vec2) -> Self {
        Self {
            texture,
            size,
            tint: colors::white(),
        }
    }

    /// Set the tint
    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }
}
