//! Velocity component for entities that move in the plane

use crate::foundation::math::Vec2;

/// Linear and angular velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    /// Linear velocity in units per second
    pub linear: Vec2,
    /// Angular velocity in radians per second
    pub angular: f32,
}

impl Velocity {
    /// Create a velocity with no spin
    pub fn new(dx: f32, dy: f32) -> Self {
        Self::from_linear(Vec2::new(dx, dy))
    }

    /// Create a velocity from a vector
    pub fn from_linear(linear: Vec2) -> Self {
        Self { linear, angular: 0.0 }
    }

    /// At rest
    pub fn zero() -> Self {
        Self::from_linear(Vec2::zeros())
    }

    /// Set the angular velocity
    pub fn with_angular(mut self, angular: f32) -> Self {
        self.angular = angular;
        self
    }

    /// Current speed
    pub fn speed(&self) -> f32 {
        self.linear.norm()
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Self::zero()
    }
}
