//! Position component

use crate::foundation::math::{heading, Vec2};

/// World-space placement of an entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Center in world units
    pub coords: Vec2,
    /// Rotation in radians, zero facing +Y
    pub rotation: f32,
}

impl Position {
    /// Create a position with no rotation
    pub fn new(x: f32, y: f32) -> Self {
        Self::at(Vec2::new(x, y))
    }

    /// Create a position from a vector
    pub fn at(coords: Vec2) -> Self {
        Self {
            coords,
            rotation: 0.0,
        }
    }

    /// Set the rotation
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Unit vector the entity faces
    pub fn forward(&self) -> Vec2 {
        heading(self.rotation)
    }

    /// Squared distance to another position
    pub fn distance_squared(&self, other: &Self) -> f32 {
        (self.coords - other.coords).norm_squared()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::at(Vec2::zeros())
    }
}
